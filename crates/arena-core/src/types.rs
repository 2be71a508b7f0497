//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

pub use glam::Vec3;

/// Opaque handle to a rigid body owned by a physics adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u64);

/// Unique enemy identity. Never reused within an engine's lifetime.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EnemyId(pub u32);

/// Unique power-up identity. Never reused within an engine's lifetime.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PowerUpId(pub u32);

/// Collision shape descriptor passed to `create_body`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BodyShape {
    Box { half_extents: Vec3 },
    Sphere { radius: f32 },
    /// Vertical capsule. `half_height` excludes the hemispherical caps.
    Capsule { half_height: f32, radius: f32 },
}

impl BodyShape {
    /// Axis-aligned half extents that bound the shape.
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            BodyShape::Box { half_extents } => half_extents,
            BodyShape::Sphere { radius } => Vec3::splat(radius),
            BodyShape::Capsule {
                half_height,
                radius,
            } => Vec3::new(radius, half_height + radius, radius),
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulation updates run this session.
    pub tick: u64,
    /// Elapsed simulation time in seconds. Does not advance while paused.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one update of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Clamp a raw frame delta to the range the simulation accepts.
///
/// Negative or NaN deltas collapse to zero; anything above
/// `MAX_FRAME_DT` becomes exactly `MAX_FRAME_DT`.
pub fn clamp_frame_dt(raw: f64) -> f64 {
    if raw.is_nan() || raw <= 0.0 {
        0.0
    } else {
        raw.min(crate::constants::MAX_FRAME_DT)
    }
}

/// Distance between two points ignoring the vertical axis.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    (dx * dx + dz * dz).sqrt()
}

/// Yaw (radians) that faces from `from` toward `to` on the ground plane.
pub fn yaw_toward(from: Vec3, to: Vec3) -> f32 {
    (to.x - from.x).atan2(to.z - from.z)
}
