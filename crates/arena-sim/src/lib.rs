//! Simulation engine for the arena shooter.
//!
//! Owns the physics world, the enemy and power-up registries, the armory,
//! and session progress. Runs one ordered update per frame and produces
//! `GameStateSnapshot`s for presentation.

pub mod clock;
pub mod combat;
pub mod effects;
pub mod engine;
pub mod level;
pub mod player;
pub mod powerups;
pub mod systems;
pub mod weapons;
pub mod world_setup;

pub use arena_core as core;
pub use engine::{SimConfig, SimulationEngine, Tuning};
