//! Per-frame systems run by the simulation engine.
//!
//! Systems are free functions over the pieces of state they touch. They do
//! not own state; the engine owns everything and calls them in a fixed order.

pub mod enemy_ai;
pub mod pickups;
pub mod player_control;
pub mod snapshot;
pub mod spawner;
