//! Headless host for the arena shooter simulation.
//!
//! Wires the simulation crates to a game loop thread and exposes a small
//! command/poll API, plus a scripted autopilot for unattended runs.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod host;
pub mod state;

pub use arena_core as core;
