//! Geographic coordinate type
//!
//! Degrees for latitude/longitude, meters for altitude. Altitude is
//! optional: a map click carries no height until the plan editor assigns
//! one.

use serde::{Deserialize, Serialize};

/// Scale factor for MAVLink `*_INT` coordinates (degrees * 1e7)
const INT_SCALE: f64 = 1e7;

/// Geographic position
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoCoordinate {
    /// Latitude in degrees (-90 to +90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to +180)
    pub longitude: f64,
    /// Altitude in meters, if known
    #[serde(default)]
    pub altitude: Option<f64>,
}

impl GeoCoordinate {
    /// Create a coordinate without altitude
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
        }
    }

    /// Create a coordinate with altitude
    pub fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: Some(altitude),
        }
    }

    /// Same horizontal position at a different altitude
    pub fn at_altitude(&self, altitude: f64) -> Self {
        Self {
            altitude: Some(altitude),
            ..*self
        }
    }

    /// Check latitude/longitude are finite and in range
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
            && self.altitude.map_or(true, f64::is_finite)
    }

    /// Latitude as MAVLink scaled integer (degrees * 1e7)
    pub fn latitude_e7(&self) -> i32 {
        (self.latitude * INT_SCALE).round() as i32
    }

    /// Longitude as MAVLink scaled integer (degrees * 1e7)
    pub fn longitude_e7(&self) -> i32 {
        (self.longitude * INT_SCALE).round() as i32
    }

    /// Compare horizontal position only
    pub fn same_position(&self, other: &GeoCoordinate) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

impl core::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.altitude {
            Some(alt) => write!(
                f,
                "({:.7}, {:.7}, {:.1}m)",
                self.latitude, self.longitude, alt
            ),
            None => write!(f, "({:.7}, {:.7})", self.latitude, self.longitude),
        }
    }
}
