//! Error types for soulplan

use thiserror::Error;

/// Main error type for soulplan operations
#[derive(Debug, Error)]
pub enum PlanError {
    /// Shikigami name not found in the catalog or alias table
    #[error("Unknown shikigami {0}")]
    UnknownShikigami(String),

    /// Soul type name not found in the soul-type catalog
    #[error("Unknown soul type {0}")]
    UnknownSoulType(String),

    /// Primary/secondary set requirement that no six-soul set can meet
    #[error("Invalid set requirement: {0}")]
    InvalidRequirement(String),

    /// A soul claimed by a chosen set is not in the inventory.
    ///
    /// The inventory and the candidate drawn from it are out of sync; nothing
    /// was removed.
    #[error("Slot {slot} has no {kind} soul matching the chosen set")]
    MissingSoul { slot: usize, kind: String },
}

/// Result type alias for soulplan operations
pub type Result<T> = std::result::Result<T, PlanError>;
