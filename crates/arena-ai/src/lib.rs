//! Enemy AI for the arena shooter.
//!
//! Implements enemy stat templates, the enemy registry, steering toward
//! the player, and difficulty-weighted spawn selection. Operates on plain
//! data with no physics dependency; the simulation feeds it positions.

pub mod behavior;
pub mod profiles;
pub mod registry;
pub mod spawn;

pub use arena_core as core;
pub use registry::{Enemy, EnemyEvent, EnemyRegistry};
