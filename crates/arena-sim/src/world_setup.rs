//! Body factories for setting up the arena.
//!
//! Creates the floor, walls, obstacles, player and enemy bodies through the
//! physics adapter.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_ai::registry::EnemyRegistry;
use arena_core::constants::*;
use arena_core::enums::EnemyKind;
use arena_core::types::{BodyId, BodyShape, EnemyId};
use arena_physics::PhysicsAdapter;

use crate::level::{level_config, LevelConfig};

/// The static geometry of the current level.
#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    pub level: u32,
    pub config: LevelConfig,
    bodies: Vec<BodyId>,
}

impl Arena {
    /// Placeholder before any geometry exists.
    pub fn empty(level: u32) -> Self {
        Self {
            level,
            config: level_config(level),
            bodies: Vec::new(),
        }
    }

    /// Bound on |x| and |z| for dynamic bodies after a rebuild.
    pub fn inner_limit(&self) -> f32 {
        self.config.arena_size - WALL_THICKNESS - 1.0
    }
}

/// Build floor, four walls and the level's obstacles.
pub fn build_arena(physics: &mut impl PhysicsAdapter, level: u32, rng: &mut ChaCha8Rng) -> Arena {
    let config = level_config(level);
    let size = config.arena_size;
    let half_wall = WALL_HEIGHT / 2.0;
    let mut bodies = Vec::with_capacity(5 + config.obstacle_count);

    // Floor: top face at y = 0.
    bodies.push(physics.create_body(
        BodyShape::Box {
            half_extents: Vec3::new(size, 0.5, size),
        },
        Vec3::new(0.0, -0.5, 0.0),
        true,
    ));

    // Walls
    let walls = [
        (Vec3::new(0.0, half_wall, -size), Vec3::new(size, half_wall, WALL_THICKNESS)),
        (Vec3::new(0.0, half_wall, size), Vec3::new(size, half_wall, WALL_THICKNESS)),
        (Vec3::new(size, half_wall, 0.0), Vec3::new(WALL_THICKNESS, half_wall, size)),
        (Vec3::new(-size, half_wall, 0.0), Vec3::new(WALL_THICKNESS, half_wall, size)),
    ];
    for (center, half_extents) in walls {
        bodies.push(physics.create_body(BodyShape::Box { half_extents }, center, true));
    }

    for _ in 0..config.obstacle_count {
        let (x, z) = random_interior_xz(size, OBSTACLE_CENTER_EXCLUSION, rng);
        let height = 1.0 + rng.gen::<f32>() * 2.0;
        let width = 1.0 + rng.gen::<f32>() * 1.5;
        bodies.push(physics.create_body(
            BodyShape::Box {
                half_extents: Vec3::new(width, height, width),
            },
            Vec3::new(x, height, z),
            true,
        ));
    }

    log::info!(
        "Arena built for level {} ({:?}, size {}, {} obstacles)",
        level,
        config.theme,
        size,
        config.obstacle_count
    );

    Arena {
        level,
        config,
        bodies,
    }
}

/// Remove every static body of an arena.
pub fn teardown_arena(physics: &mut impl PhysicsAdapter, arena: &mut Arena) {
    for body in arena.bodies.drain(..) {
        physics.remove_body(body);
    }
}

/// Random ground-plane point, uniform over ±(size - 5) × 0.75, redrawn while
/// closer than `exclusion` to the center.
pub fn random_interior_xz(size: f32, exclusion: f32, rng: &mut ChaCha8Rng) -> (f32, f32) {
    let span = (size - 5.0) * 1.5;
    loop {
        let x = (rng.gen::<f32>() - 0.5) * span;
        let z = (rng.gen::<f32>() - 0.5) * span;
        if (x * x + z * z).sqrt() >= exclusion {
            return (x, z);
        }
    }
}

/// Create the player capsule at the spawn point.
pub fn spawn_player_body(physics: &mut impl PhysicsAdapter) -> BodyId {
    physics.create_body(
        BodyShape::Capsule {
            half_height: PLAYER_CAPSULE_HALF_HEIGHT,
            radius: PLAYER_CAPSULE_RADIUS,
        },
        PLAYER_SPAWN,
        false,
    )
}

/// Put the player body back at the spawn point, at rest.
pub fn reset_player_body(physics: &mut impl PhysicsAdapter, body: BodyId) {
    physics.set_position(body, PLAYER_SPAWN);
    physics.set_velocity(body, Vec3::ZERO);
}

/// Create an enemy body and register the enemy.
pub fn spawn_enemy(
    physics: &mut impl PhysicsAdapter,
    registry: &mut EnemyRegistry,
    kind: EnemyKind,
    position: Vec3,
    rng: &mut ChaCha8Rng,
) -> EnemyId {
    let body = physics.create_body(
        BodyShape::Box {
            half_extents: ENEMY_BODY_HALF_EXTENTS,
        },
        position,
        false,
    );
    registry.spawn(kind, position, body, rng).id
}

/// Pull a dynamic body back inside `limit` on x and z.
pub fn clamp_inside(physics: &mut impl PhysicsAdapter, body: BodyId, limit: f32) {
    if let Some(pos) = physics.position(body) {
        let clamped = Vec3::new(pos.x.clamp(-limit, limit), pos.y, pos.z.clamp(-limit, limit));
        if clamped != pos {
            physics.set_position(body, clamped);
        }
    }
}
