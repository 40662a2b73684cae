//! plan_creator_core - Pure mission-editing logic for ground-control planning
//!
//! This crate contains the plan editor data model and the plan creators
//! that build whole missions from a single map click. Everything here is
//! synchronous and free of I/O so it can be tested on host without setup.
//!
//! # Modules
//!
//! - [`mission`]: Coordinates, mission items, command ids, settings and the
//!   [`MissionEditor`](mission::MissionEditor) contract with its in-memory
//!   [`MissionController`](mission::MissionController)
//! - [`creator`]: The [`PlanCreator`](creator::PlanCreator) strategy trait,
//!   the built-in creators and the creator menu registry

pub mod creator;
pub mod mission;

pub use creator::{AbaPlanCreator, BlankPlanCreator, PlanCreator, PlanCreatorRegistry};
pub use mission::{
    GeoCoordinate, InsertAt, ItemId, ItemKind, MissionController, MissionEditor, MissionError,
    MissionItem, PlanSettings, VehicleClass,
};
