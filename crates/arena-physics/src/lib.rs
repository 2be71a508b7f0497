//! Physics for the arena shooter.
//!
//! `PhysicsAdapter` is the contract the simulation consumes. `ArenaPhysics`
//! implements it with a small kinematic rigid-body world stored in hecs:
//! gravity, impulses, and push-out of dynamic bodies against static boxes.

pub mod adapter;
pub mod world;

pub use adapter::{BodyFilter, PhysicsAdapter, RayHit};
pub use arena_core as core;
pub use world::{ArenaPhysics, PhysicsConfig};
