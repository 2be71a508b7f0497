//! Error types.
//!
//! Only resource initialization can fail. Stale ids and rejected state
//! transitions are silent no-ops and never produce an error.

use thiserror::Error;

/// Failure to bring up the physics world.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("gravity must be finite, got {0:?}")]
    InvalidGravity([f32; 3]),

    #[error("sub-step limit must be at least 1, got {0}")]
    InvalidSubsteps(u32),
}

/// Failure to initialize the simulation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("physics initialization failed: {0}")]
    Physics(#[from] PhysicsError),

    #[error("invalid tuning: {field} must be {requirement}")]
    InvalidTuning {
        field: &'static str,
        requirement: &'static str,
    },
}
