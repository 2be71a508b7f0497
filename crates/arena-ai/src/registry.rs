//! Enemy registry: the simulation state of every live enemy.
//!
//! Stored in the simulation engine, NOT in the physics world. Bodies are
//! referenced by handle; the registry never touches physics itself.

use std::collections::BTreeMap;
use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use arena_core::constants::ENEMY_HIT_FLASH_CHANCE;
use arena_core::enums::EnemyKind;
use arena_core::types::{yaw_toward, BodyId, EnemyId};

use crate::profiles::{get_profile, EnemyProfile};
use crate::spawn;

/// A live enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub body: BodyId,
    pub health: f32,
    /// Sim time of the last attack. `None` until the first one.
    pub last_attack: Option<f64>,
    /// Free-running angle for presentational sway.
    pub animation_phase: f32,
    /// Position as of the last sync from physics.
    pub position: Vec3,
    /// Facing (radians, 0 = +z).
    pub yaw: f32,
}

impl Enemy {
    pub fn profile(&self) -> EnemyProfile {
        get_profile(self.kind)
    }

    pub fn health_fraction(&self) -> f32 {
        (self.health / self.profile().max_health).clamp(0.0, 1.0)
    }
}

/// Notifications produced by registry operations, drained by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EnemyEvent {
    Spawned {
        id: EnemyId,
        kind: EnemyKind,
        position: Vec3,
    },
    /// Non-lethal hit.
    Damaged { id: EnemyId, amount: f32, flash: bool },
    /// Lethal hit. Carries the removed enemy.
    Killed(Enemy),
}

/// Owns every live enemy, keyed by id in spawn order.
#[derive(Debug, Default)]
pub struct EnemyRegistry {
    enemies: BTreeMap<EnemyId, Enemy>,
    next_id: u32,
    events: Vec<EnemyEvent>,
}

impl EnemyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new enemy at full health.
    pub fn spawn(
        &mut self,
        kind: EnemyKind,
        position: Vec3,
        body: BodyId,
        rng: &mut impl Rng,
    ) -> &Enemy {
        self.next_id += 1;
        let id = EnemyId(self.next_id);
        let enemy = Enemy {
            id,
            kind,
            body,
            health: get_profile(kind).max_health,
            last_attack: None,
            animation_phase: rng.gen_range(0.0..TAU),
            position,
            yaw: 0.0,
        };
        log::debug!("Enemy {:?} spawned ({:?}) at {:?}", id, kind, position);
        self.events.push(EnemyEvent::Spawned { id, kind, position });
        self.enemies.entry(id).or_insert(enemy)
    }

    /// Subtract `amount` from health. Returns `true` if the enemy died, in
    /// which case it is already gone from the registry.
    pub fn apply_damage(&mut self, id: EnemyId, amount: f32, rng: &mut impl Rng) -> bool {
        let Some(enemy) = self.enemies.get_mut(&id) else {
            return false;
        };
        enemy.health -= amount;

        if enemy.health <= 0.0 {
            if let Some(dead) = self.enemies.remove(&id) {
                log::debug!("Enemy {:?} killed ({:?})", id, dead.kind);
                self.events.push(EnemyEvent::Killed(dead));
            }
            return true;
        }

        let flash = rng.gen::<f64>() < ENEMY_HIT_FLASH_CHANCE;
        self.events.push(EnemyEvent::Damaged { id, amount, flash });
        false
    }

    /// Advance animation and turn to face `target`.
    pub fn update_ai(&mut self, id: EnemyId, dt: f32, target: Vec3) {
        if let Some(enemy) = self.enemies.get_mut(&id) {
            let speed = get_profile(enemy.kind).speed;
            enemy.animation_phase = (enemy.animation_phase + dt * speed) % TAU;
            enemy.yaw = yaw_toward(enemy.position, target);
        }
    }

    /// Whether the attack cooldown has elapsed.
    pub fn can_attack(&self, id: EnemyId, now: f64) -> bool {
        match self.enemies.get(&id) {
            Some(enemy) => match enemy.last_attack {
                None => true,
                Some(last) => now - last >= enemy.profile().attack_interval(),
            },
            None => false,
        }
    }

    /// Stamp the cooldown and return the damage to deal. The caller applies it.
    pub fn attack(&mut self, id: EnemyId, now: f64) -> Option<f32> {
        let enemy = self.enemies.get_mut(&id)?;
        enemy.last_attack = Some(now);
        Some(get_profile(enemy.kind).damage)
    }

    /// Weighted random kind for the given difficulty.
    pub fn pick_spawn_kind(&self, difficulty: u32, rng: &mut impl Rng) -> EnemyKind {
        spawn::pick_spawn_kind(difficulty, rng)
    }

    /// Record the latest physics position.
    pub fn sync_position(&mut self, id: EnemyId, position: Vec3) {
        if let Some(enemy) = self.enemies.get_mut(&id) {
            enemy.position = position;
        }
    }

    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(&id)
    }

    /// Live enemies in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.values()
    }

    /// Ids of live enemies in spawn order.
    pub fn ids(&self) -> Vec<EnemyId> {
        self.enemies.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Drop an enemy without a kill event.
    pub fn remove(&mut self, id: EnemyId) -> Option<Enemy> {
        self.enemies.remove(&id)
    }

    /// Drop every enemy and pending event. Returns the removed enemies so
    /// the caller can release their bodies.
    pub fn clear(&mut self) -> Vec<Enemy> {
        self.events.clear();
        std::mem::take(&mut self.enemies).into_values().collect()
    }

    /// Drain pending notifications.
    pub fn take_events(&mut self) -> Vec<EnemyEvent> {
        std::mem::take(&mut self.events)
    }
}
