//! The physics capability the simulation depends on.

use glam::Vec3;

use arena_core::error::PhysicsError;
use arena_core::types::{BodyId, BodyShape};

/// Which bodies a raycast may report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyFilter {
    #[default]
    All,
    StaticOnly,
    DynamicOnly,
}

/// Result of `raycast_nearest`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub body: BodyId,
    /// Closest point on the ray to the body center.
    pub point: Vec3,
    /// Distance along the ray to `point`.
    pub distance: f32,
}

/// Rigid-body capability consumed by the simulation.
///
/// Every operation that names a body tolerates ids that no longer exist:
/// queries return `None`, mutations do nothing.
pub trait PhysicsAdapter {
    /// Bring up the physics world. Must succeed before any body is created.
    fn initialize(&mut self) -> Result<(), PhysicsError>;

    fn create_body(&mut self, shape: BodyShape, position: Vec3, is_static: bool) -> BodyId;

    fn position(&self, body: BodyId) -> Option<Vec3>;
    fn set_position(&mut self, body: BodyId, position: Vec3);

    fn velocity(&self, body: BodyId) -> Option<Vec3>;
    /// Ignored for static bodies.
    fn set_velocity(&mut self, body: BodyId, velocity: Vec3);

    /// Instantaneous change of momentum. Ignored for static bodies.
    fn apply_impulse(&mut self, body: BodyId, impulse: Vec3);

    /// Advance the world by `dt` seconds, sub-stepping long frames.
    fn step(&mut self, dt: f32);

    /// Nearest body whose center lies within a fixed perpendicular tolerance
    /// of the ray, in front of `origin` and closer than `max_distance`.
    fn raycast_nearest(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: BodyFilter,
    ) -> Option<RayHit>;

    /// Destroy a body. Removing an unknown or already-removed body is a no-op.
    fn remove_body(&mut self, body: BodyId);

    /// Destroy every body.
    fn clear(&mut self);

    fn body_count(&self) -> usize;
}
