//! plan_creator - Mission plan creators for ground-control stations
//!
//! Host-side wrapper around [`plan_creator_core`]: configuration loading,
//! logging setup, and a helper that runs a named creator against a fresh
//! mission controller.

pub mod config;
pub mod logging;

pub use plan_creator_core::{
    creator, mission, AbaPlanCreator, BlankPlanCreator, GeoCoordinate, InsertAt, ItemId,
    ItemKind, MissionController, MissionEditor, MissionError, MissionItem, PlanCreator,
    PlanCreatorRegistry, PlanSettings, VehicleClass,
};

pub use config::{ConfigError, PlannerConfig};

/// Errors from running a plan creator by name.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Unknown plan creator: {0} (available: {1})")]
    UnknownCreator(String, String),

    #[error("No map center: pass --lat/--lon or set map_center in the config")]
    NoMapCenter,

    #[error(transparent)]
    Mission(#[from] MissionError),
}

/// Pick the map center: command-line lat/lon first, then the config file.
///
/// `alt` overrides the altitude of whichever center is chosen.
pub fn resolve_map_center(
    lat: Option<f64>,
    lon: Option<f64>,
    alt: Option<f64>,
    config: &PlannerConfig,
) -> Result<GeoCoordinate, PlanError> {
    let center = match (lat, lon) {
        (Some(latitude), Some(longitude)) => GeoCoordinate {
            latitude,
            longitude,
            altitude: None,
        },
        _ => config.map_center.ok_or(PlanError::NoMapCenter)?,
    };

    Ok(match alt {
        Some(altitude) => center.at_altitude(altitude),
        None => center,
    })
}

/// Run the creator called `name` from `registry` on a new controller.
pub fn build_plan(
    registry: &PlanCreatorRegistry,
    name: &str,
    settings: PlanSettings,
    map_center: GeoCoordinate,
) -> Result<MissionController, PlanError> {
    let creator = registry
        .get(name)
        .ok_or_else(|| PlanError::UnknownCreator(name.to_string(), registry.names().join(", ")))?;

    let mut controller = MissionController::new(settings);
    creator.create_plan(&mut controller, map_center)?;
    log::info!(
        "{} produced {} mission items",
        creator.name(),
        controller.len()
    );
    Ok(controller)
}
