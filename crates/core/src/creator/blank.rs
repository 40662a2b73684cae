use super::PlanCreator;
use crate::mission::{GeoCoordinate, MissionEditor, MissionError};

/// Starts from an empty plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankPlanCreator;

impl BlankPlanCreator {
    pub fn new() -> Self {
        Self
    }
}

impl PlanCreator for BlankPlanCreator {
    fn name(&self) -> &str {
        "Blank"
    }

    fn image_resource(&self) -> &str {
        "/qmlimages/PlanCreator/BlankPlanCreator.png"
    }

    fn create_plan(
        &self,
        editor: &mut dyn MissionEditor,
        _map_center: GeoCoordinate,
    ) -> Result<(), MissionError> {
        log::info!("Creating blank plan");
        editor.remove_all();
        Ok(())
    }
}
