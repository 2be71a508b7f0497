//! Power-up registry: spawned pickups plus the timed effects they grant.

use std::collections::BTreeMap;
use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use arena_core::constants::{POWERUP_BOB_RATE, POWERUP_LIFETIME};
use arena_core::enums::PowerUpKind;
use arena_core::types::PowerUpId;

/// What a pickup grants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUpConfig {
    /// Magnitude (health restored, shield set, ammo granted).
    pub value: Option<f32>,
    /// Seconds the effect stays active, for timed kinds.
    pub duration: Option<f64>,
}

pub fn get_config(kind: PowerUpKind) -> PowerUpConfig {
    match kind {
        PowerUpKind::Health => PowerUpConfig {
            value: Some(50.0),
            duration: None,
        },
        PowerUpKind::Ammo => PowerUpConfig {
            value: Some(30.0),
            duration: None,
        },
        PowerUpKind::Speed => PowerUpConfig {
            value: None,
            duration: Some(10.0),
        },
        PowerUpKind::Shield => PowerUpConfig {
            value: Some(50.0),
            duration: Some(8.0),
        },
        PowerUpKind::WeaponRifle | PowerUpKind::WeaponShotgun | PowerUpKind::WeaponSniper => {
            PowerUpConfig {
                value: None,
                duration: None,
            }
        }
    }
}

/// Spawn weights, in cumulative-scan order.
pub const SPAWN_WEIGHTS: [(PowerUpKind, f64); 7] = [
    (PowerUpKind::Health, 0.25),
    (PowerUpKind::Ammo, 0.25),
    (PowerUpKind::Speed, 0.15),
    (PowerUpKind::Shield, 0.10),
    (PowerUpKind::WeaponRifle, 0.10),
    (PowerUpKind::WeaponShotgun, 0.10),
    (PowerUpKind::WeaponSniper, 0.05),
];

/// First bucket whose cumulative weight exceeds `roll`. Falls back to health
/// if rounding leaves the roll past the last bucket.
pub fn kind_for_roll(roll: f64) -> PowerUpKind {
    let mut cumulative = 0.0;
    for (kind, weight) in SPAWN_WEIGHTS {
        cumulative += weight;
        if roll < cumulative {
            return kind;
        }
    }
    PowerUpKind::Health
}

/// An uncollected pickup.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerUp {
    pub id: PowerUpId,
    pub kind: PowerUpKind,
    pub position: Vec3,
    pub created_at: f64,
    pub bob_phase: f32,
}

#[derive(Debug, Default)]
pub struct PowerUpRegistry {
    /// Insertion order is the collection tie-break.
    items: Vec<PowerUp>,
    /// Timed effect kind -> expiry (sim seconds).
    effects: BTreeMap<PowerUpKind, f64>,
    next_id: u32,
}

impl PowerUpRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(
        &mut self,
        kind: PowerUpKind,
        position: Vec3,
        now: f64,
        rng: &mut impl Rng,
    ) -> &PowerUp {
        self.next_id += 1;
        let powerup = PowerUp {
            id: PowerUpId(self.next_id),
            kind,
            position,
            created_at: now,
            bob_phase: rng.gen_range(0.0..TAU),
        };
        log::debug!("Power-up {:?} spawned ({:?}) at {:?}", powerup.id, kind, position);
        self.items.push(powerup);
        &self.items[self.items.len() - 1]
    }

    /// Advance bob phases, expire stale pickups, and prune lapsed effects.
    /// Returns the ids that expired.
    pub fn update(&mut self, dt: f32, now: f64) -> Vec<PowerUpId> {
        let mut expired = Vec::new();
        self.items.retain_mut(|p| {
            if now - p.created_at > POWERUP_LIFETIME {
                expired.push(p.id);
                return false;
            }
            p.bob_phase = (p.bob_phase + dt * POWERUP_BOB_RATE) % TAU;
            true
        });
        for id in &expired {
            log::debug!("Power-up {:?} expired", id);
        }
        self.effects.retain(|_, &mut until| until > now);
        expired
    }

    /// Collect the first pickup (in spawn order) within `radius` of the
    /// player. Timed kinds (re)start their effect, replacing any prior expiry.
    pub fn check_collection(
        &mut self,
        player_position: Vec3,
        radius: f32,
        now: f64,
    ) -> Option<PowerUp> {
        let index = self
            .items
            .iter()
            .position(|p| p.position.distance(player_position) < radius)?;
        let powerup = self.items.remove(index);
        if let Some(duration) = get_config(powerup.kind).duration {
            self.effects.insert(powerup.kind, now + duration);
        }
        log::debug!("Power-up {:?} collected ({:?})", powerup.id, powerup.kind);
        Some(powerup)
    }

    pub fn is_effect_active(&self, kind: PowerUpKind, now: f64) -> bool {
        self.effects.get(&kind).is_some_and(|&until| until > now)
    }

    /// Seconds left on a timed effect, 0 if inactive.
    pub fn effect_time_remaining(&self, kind: PowerUpKind, now: f64) -> f64 {
        self.effects
            .get(&kind)
            .map_or(0.0, |&until| (until - now).max(0.0))
    }

    /// Every running effect with its remaining time.
    pub fn active_effects(&self, now: f64) -> Vec<(PowerUpKind, f64)> {
        self.effects
            .iter()
            .filter(|(_, &until)| until > now)
            .map(|(&kind, &until)| (kind, until - now))
            .collect()
    }

    /// Weighted random kind.
    pub fn pick_kind(rng: &mut impl Rng) -> PowerUpKind {
        kind_for_roll(rng.gen::<f64>())
    }

    pub fn get(&self, id: PowerUpId) -> Option<&PowerUp> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PowerUp> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pull pickups back inside `limit` on x and z after the arena shrinks.
    pub fn clamp_positions(&mut self, limit: f32) {
        for p in &mut self.items {
            p.position.x = p.position.x.clamp(-limit, limit);
            p.position.z = p.position.z.clamp(-limit, limit);
        }
    }

    /// Drop every pickup and effect.
    pub fn clear(&mut self) {
        self.items.clear();
        self.effects.clear();
    }
}
