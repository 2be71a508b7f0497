//! Enemy AI system: sync positions, face and chase the player, melee.

use glam::Vec3;

use arena_ai::behavior::{steer, SteeringContext};
use arena_ai::registry::EnemyRegistry;
use arena_physics::PhysicsAdapter;

/// Advance every live enemy in spawn order. Returns the melee damage dealt
/// this frame, one entry per attack, for the caller to apply to the player.
pub fn run(
    physics: &mut impl PhysicsAdapter,
    enemies: &mut EnemyRegistry,
    player_position: Vec3,
    dt: f32,
    now: f64,
) -> Vec<f32> {
    let mut attacks = Vec::new();

    for id in enemies.ids() {
        let Some(enemy) = enemies.get(id) else {
            continue;
        };
        let body = enemy.body;
        let speed = enemy.profile().speed;
        let Some(position) = physics.position(body) else {
            continue;
        };
        let velocity = physics.velocity(body).unwrap_or(Vec3::ZERO);

        enemies.sync_position(id, position);
        enemies.update_ai(id, dt, player_position);

        let update = steer(&SteeringContext {
            position,
            velocity,
            target: player_position,
            speed,
        });
        if let Some(new_velocity) = update.new_velocity {
            physics.set_velocity(body, new_velocity);
        }

        if update.in_melee_range && enemies.can_attack(id, now) {
            if let Some(damage) = enemies.attack(id, now) {
                attacks.push(damage);
            }
        }
    }

    attacks
}
