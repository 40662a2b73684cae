//! Mission editing error types

use super::ItemId;

/// Errors returned by mission editors and the creator registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MissionError {
    #[error("Insert index {index} out of range (plan has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Mission full (max {0} items)")]
    MissionFull(usize),

    #[error("Mission item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Command {0} has no location and cannot be inserted as a preset item")]
    UnsupportedCommand(u16),

    #[error("Plan creator already registered: {0}")]
    CreatorAlreadyRegistered(String),
}
