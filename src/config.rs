//! Planner configuration file
//!
//! JSON file read once at startup. Every field is optional; anything left
//! out takes its default. Unknown keys are rejected so a misspelled field
//! does not silently fall back to its default.
//!
//! ```json
//! {
//!   "settings": { "vehicle_class": "vtol", "takeoff_altitude": 40.0 },
//!   "creator": "A to B to A",
//!   "map_center": { "latitude": 47.0, "longitude": 8.0 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use plan_creator_core::{GeoCoordinate, PlanSettings};
use serde::{Deserialize, Serialize};

/// Default creator when the file names none
pub const DEFAULT_CREATOR: &str = "A to B to A";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level planner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Mission controller settings
    pub settings: PlanSettings,
    /// Name of the plan creator to run
    pub creator: String,
    /// Map center used when none is given on the command line
    pub map_center: Option<GeoCoordinate>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            settings: PlanSettings::default(),
            creator: DEFAULT_CREATOR.to_string(),
            map_center: None,
        }
    }
}

impl PlannerConfig {
    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot be clamped into something sensible.
    ///
    /// Out-of-range settings are only warned about; the controller clamps
    /// them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.creator.trim().is_empty() {
            return Err(ConfigError::Invalid("creator name is empty".to_string()));
        }

        if let Some(center) = &self.map_center {
            if !center.is_valid() {
                return Err(ConfigError::Invalid(format!(
                    "map_center {} is out of range",
                    center
                )));
            }
        }

        if !self.settings.is_valid() {
            log::warn!("Plan settings out of range, clamping: {:?}", self.settings);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_creator_core::VehicleClass;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = PlannerConfig::from_json("{}").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.creator, DEFAULT_CREATOR);
    }

    #[test]
    fn test_partial_settings() {
        let config = PlannerConfig::from_json(
            r#"{ "settings": { "vehicle_class": "fixed_wing", "takeoff_altitude": 40.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.settings.vehicle_class, VehicleClass::FixedWing);
        assert_eq!(config.settings.takeoff_altitude, 40.0);
        assert_eq!(config.settings.max_items, 50);
        assert!(config.map_center.is_none());
    }

    #[test]
    fn test_map_center_without_altitude() {
        let config =
            PlannerConfig::from_json(r#"{ "map_center": { "latitude": 47.0, "longitude": 8.0 } }"#)
                .unwrap();
        assert_eq!(config.map_center, Some(GeoCoordinate::new(47.0, 8.0)));
    }

    #[test]
    fn test_invalid_map_center() {
        let result = PlannerConfig::from_json(
            r#"{ "map_center": { "latitude": 123.0, "longitude": 8.0 } }"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_creator_rejected() {
        let result = PlannerConfig::from_json(r#"{ "creator": "  " }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = PlannerConfig::from_json("{ settings: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_misspelled_setting_rejected() {
        let result = PlannerConfig::from_json(r#"{ "settings": { "takeof_altitude": 40.0 } }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let result = PlannerConfig::from_json(r#"{ "creatr": "Blank" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_map_center_key_rejected() {
        let result = PlannerConfig::from_json(
            r#"{ "map_center": { "latitude": 47.0, "longitude": 8.0, "alt": 10.0 } }"#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_vehicle_class() {
        let result = PlannerConfig::from_json(r#"{ "settings": { "vehicle_class": "blimp" } }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
