//! Mission Editing Types
//!
//! Data structures and the controller used while a plan is being built in
//! the plan view.
//!
//! # Mission Storage
//!
//! - Ordered item list owned by [`MissionController`]
//! - In-memory only (no persistence)
//! - Planned home is sequence 0 and lives outside the item list
//!
//! # Item Format
//!
//! - MAVLink MISSION_ITEM_INT style command/frame/params
//! - Floating point [`GeoCoordinate`] with resolved altitude
//! - Stable [`ItemId`] independent of sequence number

pub mod command;
pub mod controller;
pub mod coordinate;
pub mod error;
pub mod item;
pub mod settings;

pub use command::{
    cmd_has_location, command_name, is_nav_command, ItemKind, MAV_CMD_NAV_LAND,
    MAV_CMD_NAV_TAKEOFF, MAV_CMD_NAV_VTOL_LAND, MAV_CMD_NAV_VTOL_TAKEOFF, MAV_CMD_NAV_WAYPOINT,
};
pub use controller::{MissionController, MissionEditor};
pub use coordinate::GeoCoordinate;
pub use error::MissionError;
pub use item::{ItemId, MissionItem};
pub use settings::{PlanSettings, VehicleClass};

/// Where a new item goes in the plan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertAt {
    /// Append after the last item
    End,
    /// Insert before the item currently at this position (0-indexed)
    Index(usize),
}
