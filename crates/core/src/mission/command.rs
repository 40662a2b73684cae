//! Mission Command Identifiers
//!
//! MAV_CMD ids used by the plan editor, plus helpers for classifying them
//! following the MAVLink convention where command IDs <= MAV_CMD_NAV_LAST
//! (95) are NAV commands.

/// MAV_CMD_NAV_WAYPOINT: fly to a position.
pub const MAV_CMD_NAV_WAYPOINT: u16 = 16;

/// MAV_CMD_NAV_LAND: land at a position.
pub const MAV_CMD_NAV_LAND: u16 = 21;

/// MAV_CMD_NAV_TAKEOFF: take off and climb to altitude.
pub const MAV_CMD_NAV_TAKEOFF: u16 = 22;

/// MAV_CMD_NAV_VTOL_TAKEOFF: VTOL takeoff and transition.
pub const MAV_CMD_NAV_VTOL_TAKEOFF: u16 = 84;

/// MAV_CMD_NAV_VTOL_LAND: VTOL transition and land.
pub const MAV_CMD_NAV_VTOL_LAND: u16 = 85;

/// MAV_CMD_NAV_LAST: command IDs at or below this value are NAV commands.
pub const MAV_CMD_NAV_LAST: u16 = 95;

/// MAV_CMD_DO_CHANGE_SPEED command ID.
pub const MAV_CMD_DO_CHANGE_SPEED: u16 = 178;

/// Coarse role of a mission item inside a plan.
///
/// VTOL variants collapse onto their base kind so plan shape checks hold
/// regardless of vehicle class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Takeoff,
    Waypoint,
    Land,
    Other,
}

impl ItemKind {
    /// Classify a MAV_CMD id.
    pub fn from_command(command_id: u16) -> Self {
        match command_id {
            MAV_CMD_NAV_TAKEOFF | MAV_CMD_NAV_VTOL_TAKEOFF => ItemKind::Takeoff,
            MAV_CMD_NAV_WAYPOINT => ItemKind::Waypoint,
            MAV_CMD_NAV_LAND | MAV_CMD_NAV_VTOL_LAND => ItemKind::Land,
            _ => ItemKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Takeoff => "TAKEOFF",
            ItemKind::Waypoint => "WAYPOINT",
            ItemKind::Land => "LAND",
            ItemKind::Other => "OTHER",
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short display name for a MAV_CMD id, as shown in plan listings.
pub fn command_name(command_id: u16) -> &'static str {
    match command_id {
        MAV_CMD_NAV_WAYPOINT => "NAV_WAYPOINT",
        MAV_CMD_NAV_LAND => "NAV_LAND",
        MAV_CMD_NAV_TAKEOFF => "NAV_TAKEOFF",
        MAV_CMD_NAV_VTOL_TAKEOFF => "NAV_VTOL_TAKEOFF",
        MAV_CMD_NAV_VTOL_LAND => "NAV_VTOL_LAND",
        MAV_CMD_DO_CHANGE_SPEED => "DO_CHANGE_SPEED",
        _ => "UNKNOWN",
    }
}

/// Classify a command as NAV (drives navigation) or DO (immediate action).
pub fn is_nav_command(command_id: u16) -> bool {
    command_id <= MAV_CMD_NAV_LAST
}

/// Check if a command carries a geographic location (lat/lon).
///
/// Currently equivalent to `is_nav_command`: all NAV commands carry
/// location data while DO commands do not.
pub fn cmd_has_location(command_id: u16) -> bool {
    is_nav_command(command_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_is_nav_command_at_boundary() {
        assert!(is_nav_command(MAV_CMD_NAV_WAYPOINT));
        assert!(is_nav_command(MAV_CMD_NAV_LAST));
        assert!(!is_nav_command(96));
    }

    #[test]
    fn test_cmd_has_location_do() {
        assert!(cmd_has_location(MAV_CMD_NAV_LAND));
        assert!(!cmd_has_location(MAV_CMD_DO_CHANGE_SPEED));
    }

    #[rstest]
    #[case(MAV_CMD_NAV_TAKEOFF, ItemKind::Takeoff)]
    #[case(MAV_CMD_NAV_VTOL_TAKEOFF, ItemKind::Takeoff)]
    #[case(MAV_CMD_NAV_WAYPOINT, ItemKind::Waypoint)]
    #[case(MAV_CMD_NAV_LAND, ItemKind::Land)]
    #[case(MAV_CMD_NAV_VTOL_LAND, ItemKind::Land)]
    #[case(MAV_CMD_DO_CHANGE_SPEED, ItemKind::Other)]
    fn test_kind_collapses_vtol_variants(#[case] command_id: u16, #[case] expected: ItemKind) {
        assert_eq!(ItemKind::from_command(command_id), expected);
    }

    #[test]
    fn test_command_name() {
        assert_eq!(command_name(MAV_CMD_NAV_TAKEOFF), "NAV_TAKEOFF");
        assert_eq!(command_name(1000), "UNKNOWN");
        assert_eq!(ItemKind::Land.to_string(), "LAND");
    }
}
