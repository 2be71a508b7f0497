//! Player look, movement and jump.

use glam::Vec3;

use arena_core::commands::InputState;
use arena_core::constants::{JUMP_MAX_HEIGHT, JUMP_MAX_VERTICAL_SPEED};
use arena_physics::PhysicsAdapter;

use crate::engine::Tuning;
use crate::player::Player;

/// Turn the camera by a raw look delta.
pub fn apply_look(player: &mut Player, dx: f32, dy: f32, tuning: &Tuning) {
    player.look(dx * tuning.mouse_sensitivity, dy * tuning.mouse_sensitivity);
}

/// Set the body's horizontal velocity from held keys.
///
/// Velocity is set directly, with no acceleration model. With no input the
/// existing horizontal velocity is damped instead of zeroed.
pub fn apply_movement(
    physics: &mut impl PhysicsAdapter,
    player: &mut Player,
    input: &InputState,
    speed_boost: bool,
    tuning: &Tuning,
) {
    let Some(body) = player.body else {
        return;
    };
    let Some(velocity) = physics.velocity(body) else {
        return;
    };

    let (forward, right) = player.movement_basis();
    let mut direction = Vec3::ZERO;
    if input.forward {
        direction += forward;
    }
    if input.backward {
        direction -= forward;
    }
    if input.right {
        direction += right;
    }
    if input.left {
        direction -= right;
    }

    match direction.try_normalize() {
        Some(direction) => {
            let mut speed = tuning.move_speed;
            if input.sprint {
                speed *= tuning.sprint_multiplier;
            }
            if speed_boost {
                speed *= tuning.speed_powerup_multiplier;
            }
            physics.set_velocity(
                body,
                Vec3::new(direction.x * speed, velocity.y, direction.z * speed),
            );
            player.movement_speed = speed;
        }
        None => {
            let damping = tuning.ground_damping;
            physics.set_velocity(
                body,
                Vec3::new(velocity.x * damping, velocity.y, velocity.z * damping),
            );
            player.movement_speed = 0.0;
        }
    }
}

/// Jump if requested and the body is near the ground and not already rising.
/// Returns whether the impulse was applied.
pub fn apply_jump(
    physics: &mut impl PhysicsAdapter,
    player: &Player,
    input: &InputState,
    tuning: &Tuning,
) -> bool {
    if !input.jump {
        return false;
    }
    let Some(body) = player.body else {
        return false;
    };
    let (Some(position), Some(velocity)) = (physics.position(body), physics.velocity(body)) else {
        return false;
    };
    if position.y < JUMP_MAX_HEIGHT && velocity.y < JUMP_MAX_VERTICAL_SPEED {
        physics.apply_impulse(body, Vec3::new(0.0, tuning.jump_impulse, 0.0));
        true
    } else {
        false
    }
}
