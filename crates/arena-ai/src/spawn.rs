//! Difficulty-weighted enemy type selection and spawn placement.

use glam::Vec3;
use rand::Rng;

use arena_core::constants::{ENEMY_SPAWN_INSET, KILLS_PER_DIFFICULTY_STEP};
use arena_core::enums::EnemyKind;

/// Spawn difficulty for the current progress.
pub fn difficulty(level: u32, kills: u32) -> u32 {
    level + kills / KILLS_PER_DIFFICULTY_STEP
}

/// Map a uniform roll in [0, 1) to an enemy kind for the given difficulty.
///
/// Three tiers of cumulative bands. Below 3 only basics and scouts appear;
/// from 6 upward the bands tilt toward drones and tanks.
pub fn kind_for_roll(difficulty: u32, roll: f64) -> EnemyKind {
    if difficulty < 3 {
        if roll < 0.7 {
            EnemyKind::Basic
        } else {
            EnemyKind::Scout
        }
    } else if difficulty < 6 {
        if roll < 0.3 {
            EnemyKind::Basic
        } else if roll < 0.55 {
            EnemyKind::Scout
        } else if roll < 0.8 {
            EnemyKind::Drone
        } else {
            EnemyKind::Tank
        }
    } else if roll < 0.2 {
        EnemyKind::Basic
    } else if roll < 0.4 {
        EnemyKind::Scout
    } else if roll < 0.7 {
        EnemyKind::Drone
    } else {
        EnemyKind::Tank
    }
}

/// Weighted random enemy kind for the given difficulty.
pub fn pick_spawn_kind(difficulty: u32, rng: &mut impl Rng) -> EnemyKind {
    kind_for_roll(difficulty, rng.gen::<f64>())
}

/// Random point on one of the four arena edges, inset from the walls.
///
/// Drones spawn at ground height, everything else slightly above it.
pub fn edge_spawn_point(arena_size: f32, kind: EnemyKind, rng: &mut impl Rng) -> Vec3 {
    let side = rng.gen_range(0..4);
    let offset = (rng.gen::<f32>() - 0.5) * (arena_size - 5.0) * 2.0;
    let edge = arena_size - ENEMY_SPAWN_INSET;
    let y = if kind == EnemyKind::Drone { 0.0 } else { 1.0 };

    match side {
        0 => Vec3::new(offset, y, -edge),
        1 => Vec3::new(offset, y, edge),
        2 => Vec3::new(-edge, y, offset),
        _ => Vec3::new(edge, y, offset),
    }
}
