//! Enemy steering toward the player.
//!
//! Pure functions over plain data, in the same shape as a state machine
//! evaluation: a context in, an update out.

use glam::Vec3;

use arena_core::constants::{ENEMY_MELEE_RANGE, ENEMY_STEER_MIN_DISTANCE};
use arena_core::types::horizontal_distance;

/// Input to steering for a single enemy.
pub struct SteeringContext {
    pub position: Vec3,
    pub velocity: Vec3,
    pub target: Vec3,
    pub speed: f32,
}

/// Output from steering.
pub struct SteeringUpdate {
    /// New body velocity, or `None` to leave it untouched.
    pub new_velocity: Option<Vec3>,
    /// Horizontal distance to the target.
    pub distance: f32,
    pub in_melee_range: bool,
}

/// Chase the target on the ground plane at a fixed speed.
///
/// Vertical velocity is left to gravity. Inside the stop distance the
/// body keeps whatever velocity it has.
pub fn steer(ctx: &SteeringContext) -> SteeringUpdate {
    let distance = horizontal_distance(ctx.position, ctx.target);

    let new_velocity = if distance > ENEMY_STEER_MIN_DISTANCE {
        let dx = (ctx.target.x - ctx.position.x) / distance;
        let dz = (ctx.target.z - ctx.position.z) / distance;
        Some(Vec3::new(dx * ctx.speed, ctx.velocity.y, dz * ctx.speed))
    } else {
        None
    };

    SteeringUpdate {
        new_velocity,
        distance,
        in_melee_range: distance < ENEMY_MELEE_RANGE,
    }
}
