//! Plan Editing Settings
//!
//! Values the mission controller uses when it resolves new items: which
//! takeoff/land commands the vehicle flies, and the altitudes assigned to
//! items inserted from a bare map click.
//!
//! Out-of-range values are clamped rather than rejected, the same way
//! parameter groups treat values loaded from storage.

use serde::{Deserialize, Serialize};

/// Default takeoff altitude in meters (relative to home)
const DEFAULT_TAKEOFF_ALTITUDE: f64 = 50.0;

/// Default altitude for new waypoints in meters (relative to home)
const DEFAULT_ALTITUDE: f64 = 50.0;

/// Minimum altitude accepted for takeoff/waypoint defaults
const MIN_ALTITUDE: f64 = 1.0;

/// Maximum altitude accepted for takeoff/waypoint defaults
const MAX_ALTITUDE: f64 = 1000.0;

/// Default mission item limit
const DEFAULT_MAX_ITEMS: usize = 50;

/// Hard upper bound on the mission item limit
const MAX_MAX_ITEMS: usize = 500;

/// Airframe family, which selects takeoff/land command variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    #[default]
    Multirotor,
    FixedWing,
    Vtol,
}

impl VehicleClass {
    /// Whether the launch point and the takeoff point start out identical.
    ///
    /// Fixed-wing takeoffs need a climb-out leg, so the wizard asks the
    /// user to place them separately.
    pub fn launch_takeoff_at_same_location(&self) -> bool {
        !matches!(self, VehicleClass::FixedWing)
    }
}

/// Settings consulted by [`MissionController`](super::MissionController)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanSettings {
    /// Airframe family
    pub vehicle_class: VehicleClass,
    /// Altitude assigned to new takeoff items in meters
    pub takeoff_altitude: f64,
    /// Altitude for new items with no preceding altitude in meters
    pub default_altitude: f64,
    /// Maximum number of mission items
    pub max_items: usize,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            vehicle_class: VehicleClass::default(),
            takeoff_altitude: DEFAULT_TAKEOFF_ALTITUDE,
            default_altitude: DEFAULT_ALTITUDE,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl PlanSettings {
    /// Return a copy with every field forced into its valid range.
    ///
    /// Non-finite altitudes fall back to their defaults.
    pub fn clamped(&self) -> Self {
        Self {
            vehicle_class: self.vehicle_class,
            takeoff_altitude: clamp_altitude(self.takeoff_altitude, DEFAULT_TAKEOFF_ALTITUDE),
            default_altitude: clamp_altitude(self.default_altitude, DEFAULT_ALTITUDE),
            max_items: self.max_items.clamp(1, MAX_MAX_ITEMS),
        }
    }

    /// Validate settings
    ///
    /// # Returns
    ///
    /// true if every field is within range
    pub fn is_valid(&self) -> bool {
        let alt_ok = |alt: f64| alt.is_finite() && (MIN_ALTITUDE..=MAX_ALTITUDE).contains(&alt);

        alt_ok(self.takeoff_altitude)
            && alt_ok(self.default_altitude)
            && (1..=MAX_MAX_ITEMS).contains(&self.max_items)
    }
}

fn clamp_altitude(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_ALTITUDE, MAX_ALTITUDE)
    } else {
        default
    }
}
