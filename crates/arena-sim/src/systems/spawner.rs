//! Timed enemy and power-up spawning.

use glam::Vec3;
use rand_chacha::ChaCha8Rng;

use arena_ai::registry::EnemyRegistry;
use arena_ai::spawn::edge_spawn_point;
use arena_core::constants::POWERUP_CENTER_EXCLUSION;
use arena_core::types::{EnemyId, PowerUpId};
use arena_physics::PhysicsAdapter;

use crate::level::{LevelConfig, Progress};
use crate::powerups::PowerUpRegistry;
use crate::world_setup;

/// Advance the enemy spawn timer and spawn one enemy when it is due and the
/// level cap allows. The timer only resets when an enemy actually spawns.
pub fn run_enemies(
    physics: &mut impl PhysicsAdapter,
    enemies: &mut EnemyRegistry,
    config: &LevelConfig,
    progress: &Progress,
    timer: &mut f64,
    dt: f64,
    rng: &mut ChaCha8Rng,
) -> Option<EnemyId> {
    *timer += dt;
    if *timer < config.spawn_interval || enemies.len() >= config.max_enemies {
        return None;
    }

    let kind = enemies.pick_spawn_kind(progress.difficulty(), rng);
    let position = edge_spawn_point(config.arena_size, kind, rng);
    let id = world_setup::spawn_enemy(physics, enemies, kind, position, rng);
    *timer = 0.0;
    Some(id)
}

/// Advance the power-up timer and drop one random pickup in the interior
/// every `interval` seconds.
pub fn run_powerups(
    powerups: &mut PowerUpRegistry,
    arena_size: f32,
    timer: &mut f64,
    interval: f64,
    dt: f64,
    now: f64,
    rng: &mut ChaCha8Rng,
) -> Option<PowerUpId> {
    *timer += dt;
    if *timer < interval {
        return None;
    }
    *timer = 0.0;

    let (x, z) = world_setup::random_interior_xz(arena_size, POWERUP_CENTER_EXCLUSION, rng);
    let kind = PowerUpRegistry::pick_kind(rng);
    Some(powerups.spawn(kind, Vec3::new(x, 0.0, z), now, rng).id)
}
