//! Plan Creators
//!
//! A plan creator builds a complete mission from a single map coordinate.
//! The plan view lists the registered creators by name and icon; picking
//! one runs [`PlanCreator::create_plan`] against the active editor.
//!
//! Creators hold no reference to the editor. It is handed in per call.

pub mod aba;
pub mod blank;

pub use aba::AbaPlanCreator;
pub use blank::BlankPlanCreator;

use crate::mission::{GeoCoordinate, MissionEditor, MissionError};

/// Named strategy that synthesizes a mission plan.
pub trait PlanCreator {
    /// Display name shown in the creator menu
    fn name(&self) -> &str;

    /// Icon resource path shown next to the name
    fn image_resource(&self) -> &str;

    /// Replace the editor's plan with this creator's template.
    ///
    /// Editor errors abort the template where it stands; items already
    /// inserted stay in the plan.
    fn create_plan(
        &self,
        editor: &mut dyn MissionEditor,
        map_center: GeoCoordinate,
    ) -> Result<(), MissionError>;
}

/// Ordered menu of plan creators.
pub struct PlanCreatorRegistry {
    creators: Vec<Box<dyn PlanCreator>>,
}

impl PlanCreatorRegistry {
    pub fn new() -> Self {
        Self {
            creators: Vec::new(),
        }
    }

    /// Registry with the built-in creators in menu order.
    pub fn with_defaults() -> Self {
        Self {
            creators: vec![
                Box::new(BlankPlanCreator::new()),
                Box::new(AbaPlanCreator::new()),
            ],
        }
    }

    /// Register a new creator. Returns error if the name is already taken.
    pub fn register(&mut self, creator: Box<dyn PlanCreator>) -> Result<(), MissionError> {
        if self.get(creator.name()).is_some() {
            return Err(MissionError::CreatorAlreadyRegistered(
                creator.name().to_string(),
            ));
        }
        self.creators.push(creator);
        Ok(())
    }

    /// Get a creator by display name.
    pub fn get(&self, name: &str) -> Option<&dyn PlanCreator> {
        self.creators
            .iter()
            .find(|creator| creator.name() == name)
            .map(|creator| creator.as_ref())
    }

    /// Creator names in menu order.
    pub fn names(&self) -> Vec<&str> {
        self.creators.iter().map(|creator| creator.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PlanCreator> {
        self.creators.iter().map(|creator| creator.as_ref())
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}

impl Default for PlanCreatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
