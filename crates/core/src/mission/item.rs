//! Mission Item
//!
//! One editable step of a plan. Field layout follows MAVLink
//! MISSION_ITEM_INT (command, frame, param1..param4, autocontinue), with a
//! floating point coordinate and the editor-only state the plan view needs
//! (stable identity, launch point, wizard mode).

use super::command::{ItemKind, MAV_CMD_NAV_WAYPOINT};
use super::coordinate::GeoCoordinate;

/// MAV_FRAME_GLOBAL_RELATIVE_ALT
pub const MAV_FRAME_GLOBAL_RELATIVE_ALT: u8 = 3;

/// Default waypoint acceptance radius in meters (param2)
const DEFAULT_ACCEPTANCE_RADIUS: f32 = 5.0;

/// Stable identity of a mission item.
///
/// Assigned once by the controller and never reused, so it survives
/// renumbering when items are inserted ahead of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mission item
#[derive(Debug, Clone, PartialEq)]
pub struct MissionItem {
    id: ItemId,
    /// Sequence number (home is 0, so items start at 1)
    pub seq: u16,
    /// Command ID (MAV_CMD_NAV_TAKEOFF, MAV_CMD_NAV_WAYPOINT, etc.)
    pub command: u16,
    /// Frame of reference
    pub frame: u8,
    /// Autocontinue to next item
    pub autocontinue: bool,
    /// PARAM1 (command-specific, e.g., hold time)
    pub param1: f32,
    /// PARAM2 (command-specific, e.g., acceptance radius)
    pub param2: f32,
    /// PARAM3 (command-specific)
    pub param3: f32,
    /// PARAM4 (command-specific, e.g., yaw)
    pub param4: f32,
    /// Resolved position, altitude always set
    pub coordinate: GeoCoordinate,
    /// Launch point for takeoff items (where the insertion was requested)
    pub launch_coordinate: Option<GeoCoordinate>,
    /// Takeoff only: launch and takeoff share a position
    pub launch_takeoff_at_same_location: bool,
    wizard_mode: bool,
}

impl MissionItem {
    /// Create an item for `command` at a resolved coordinate.
    pub fn new(id: ItemId, command: u16, coordinate: GeoCoordinate) -> Self {
        let param2 = if command == MAV_CMD_NAV_WAYPOINT {
            DEFAULT_ACCEPTANCE_RADIUS
        } else {
            0.0
        };

        Self {
            id,
            seq: 0,
            command,
            frame: MAV_FRAME_GLOBAL_RELATIVE_ALT,
            autocontinue: true,
            param1: 0.0,
            param2,
            param3: 0.0,
            param4: 0.0,
            coordinate,
            launch_coordinate: None,
            launch_takeoff_at_same_location: true,
            wizard_mode: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> ItemKind {
        ItemKind::from_command(self.command)
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    /// Resolved altitude in meters
    pub fn altitude(&self) -> f64 {
        self.coordinate.altitude.unwrap_or_default()
    }

    /// Whether the guided editing flow is still active for this item
    pub fn wizard_mode(&self) -> bool {
        self.wizard_mode
    }

    pub fn set_wizard_mode(&mut self, wizard_mode: bool) {
        self.wizard_mode = wizard_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::command::{MAV_CMD_NAV_LAND, MAV_CMD_NAV_TAKEOFF};

    #[test]
    fn test_item_creation() {
        let coord = GeoCoordinate::with_altitude(47.0, 8.0, 50.0);
        let item = MissionItem::new(ItemId(7), MAV_CMD_NAV_WAYPOINT, coord);
        assert_eq!(item.id(), ItemId(7));
        assert_eq!(item.kind(), ItemKind::Waypoint);
        assert_eq!(item.frame, MAV_FRAME_GLOBAL_RELATIVE_ALT);
        assert_eq!(item.param2, 5.0);
        assert!(item.autocontinue);
        assert!(!item.wizard_mode());
        assert_eq!(item.altitude(), 50.0);
    }

    #[test]
    fn test_non_waypoint_has_no_acceptance_radius() {
        let coord = GeoCoordinate::with_altitude(47.0, 8.0, 0.0);
        let land = MissionItem::new(ItemId(1), MAV_CMD_NAV_LAND, coord);
        assert_eq!(land.param2, 0.0);
        assert_eq!(land.kind(), ItemKind::Land);
    }

    #[test]
    fn test_wizard_mode_toggle() {
        let coord = GeoCoordinate::with_altitude(47.0, 8.0, 50.0);
        let mut item = MissionItem::new(ItemId(1), MAV_CMD_NAV_TAKEOFF, coord);
        item.set_wizard_mode(true);
        assert!(item.wizard_mode());
        item.set_wizard_mode(false);
        assert!(!item.wizard_mode());
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId(42).to_string(), "#42");
    }
}
