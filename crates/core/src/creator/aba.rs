//! "A to B to A" plan creator
//!
//! Round trip with a landing at the far end:
//!
//! ```text
//! 1 TAKEOFF  @ A
//! 2 WAYPOINT @ B   (made current in the plan view)
//! 3 LAND     @ B
//! 4 TAKEOFF  @ land point of 3
//! 5 WAYPOINT @ A
//! 6 LAND     @ A
//! ```
//!
//! Every item is requested at the map center; the editor decides where
//! each one actually ends up. The return takeoff is the exception: it
//! launches from the resolved coordinate of the B landing so the second
//! leg starts where the vehicle actually touched down.

use super::PlanCreator;
use crate::mission::{
    GeoCoordinate, InsertAt, MissionEditor, MissionError, MAV_CMD_NAV_LAND, MAV_CMD_NAV_WAYPOINT,
};

/// Builds a takeoff/waypoint/land round trip between two points.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbaPlanCreator;

impl AbaPlanCreator {
    pub fn new() -> Self {
        Self
    }
}

impl PlanCreator for AbaPlanCreator {
    fn name(&self) -> &str {
        "A to B to A"
    }

    fn image_resource(&self) -> &str {
        "/qmlimages/PlanCreator/ABPlanCreator.png"
    }

    fn create_plan(
        &self,
        editor: &mut dyn MissionEditor,
        map_center: GeoCoordinate,
    ) -> Result<(), MissionError> {
        log::info!("Creating A to B to A plan at {}", map_center);

        editor.remove_all();

        let takeoff_a = editor.insert_takeoff_item(map_center, InsertAt::End, false)?;
        editor.insert_preset_item(map_center, MAV_CMD_NAV_WAYPOINT, InsertAt::End, true)?;
        let land_b = editor.insert_preset_item(map_center, MAV_CMD_NAV_LAND, InsertAt::End, false)?;

        let touchdown_b = editor.item_coordinate(land_b)?;
        let takeoff_b = editor.insert_takeoff_item(touchdown_b, InsertAt::End, false)?;
        editor.insert_preset_item(map_center, MAV_CMD_NAV_WAYPOINT, InsertAt::End, false)?;
        editor.insert_preset_item(map_center, MAV_CMD_NAV_LAND, InsertAt::End, false)?;

        editor.set_wizard_mode(takeoff_a, false)?;
        editor.set_wizard_mode(takeoff_b, false)?;

        log::info!("A to B to A plan created");
        Ok(())
    }
}
