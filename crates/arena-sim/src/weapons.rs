//! Weapons: immutable stat table, per-weapon ammo/reload state, and the
//! armory that gates firing.
//!
//! Each weapon keeps its own magazine and reload timer whether or not it is
//! equipped. Switching weapons never resets or pauses either.

use glam::Vec3;
use rand::Rng;

use arena_core::constants::{
    BOB_RATE, RECOIL_DECAY, RECOIL_EPSILON, RECOIL_KICK, SWAY_DECAY, SWAY_GAIN,
};
use arena_core::enums::WeaponKind;

/// Immutable weapon stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStats {
    pub name: &'static str,
    /// Damage per pellet.
    pub damage: f32,
    /// Shots per second.
    pub fire_rate: f32,
    pub capacity: u32,
    /// Seconds to refill the magazine.
    pub reload_time: f32,
    /// Per-axis perturbation range applied to each pellet.
    pub spread: f32,
    pub pellets: u32,
    /// Keeps firing while the trigger is held.
    pub automatic: bool,
}

impl WeaponStats {
    /// Minimum seconds between shots.
    pub fn fire_interval(&self) -> f64 {
        1.0 / self.fire_rate as f64
    }
}

/// Get the stats for a given weapon.
pub fn get_stats(kind: WeaponKind) -> WeaponStats {
    match kind {
        WeaponKind::Pistol => WeaponStats {
            name: "Plasma Pistol",
            damage: 15.0,
            fire_rate: 4.0,
            capacity: 12,
            reload_time: 1.2,
            spread: 0.02,
            pellets: 1,
            automatic: false,
        },
        WeaponKind::Rifle => WeaponStats {
            name: "Assault Rifle",
            damage: 10.0,
            fire_rate: 10.0,
            capacity: 30,
            reload_time: 2.0,
            spread: 0.05,
            pellets: 1,
            automatic: true,
        },
        WeaponKind::Shotgun => WeaponStats {
            name: "Scatter Gun",
            damage: 8.0,
            fire_rate: 1.2,
            capacity: 6,
            reload_time: 2.5,
            spread: 0.15,
            pellets: 8,
            automatic: false,
        },
        WeaponKind::Sniper => WeaponStats {
            name: "Rail Gun",
            damage: 100.0,
            fire_rate: 0.5,
            capacity: 5,
            reload_time: 3.0,
            spread: 0.0,
            pellets: 1,
            automatic: false,
        },
    }
}

/// Mutable state of one weapon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponState {
    pub ammo: u32,
    pub reloading: bool,
    /// 0.0 - 1.0 while reloading.
    pub reload_progress: f32,
}

impl WeaponState {
    fn full(kind: WeaponKind) -> Self {
        Self {
            ammo: get_stats(kind).capacity,
            reloading: false,
            reload_progress: 0.0,
        }
    }
}

/// One ray produced by a successful shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pellet {
    pub direction: Vec3,
    pub damage: f32,
}

/// Perturb `aim` by up to ±spread/2 on each axis, then renormalize.
pub fn spread_direction(aim: Vec3, spread: f32, rng: &mut impl Rng) -> Vec3 {
    if spread <= 0.0 {
        return aim.normalize_or_zero();
    }
    let jitter = Vec3::new(
        (rng.gen::<f32>() - 0.5) * spread,
        (rng.gen::<f32>() - 0.5) * spread,
        (rng.gen::<f32>() - 0.5) * spread,
    );
    (aim + jitter).normalize_or_zero()
}

/// All four weapons plus the shared fire cooldown and view-model pose.
#[derive(Debug, Clone, PartialEq)]
pub struct Armory {
    current: WeaponKind,
    states: [WeaponState; 4],
    /// Sim time of the last successful shot, shared by all weapons.
    last_fire: Option<f64>,
    recoil: f32,
    bob_phase: f32,
    sway: (f32, f32),
}

impl Default for Armory {
    fn default() -> Self {
        Self {
            current: WeaponKind::Pistol,
            states: WeaponKind::ALL.map(WeaponState::full),
            last_fire: None,
            recoil: 0.0,
            bob_phase: 0.0,
            sway: (0.0, 0.0),
        }
    }
}

impl Armory {
    /// Full magazines, pistol equipped.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> WeaponKind {
        self.current
    }

    pub fn stats(&self) -> WeaponStats {
        get_stats(self.current)
    }

    pub fn state(&self, kind: WeaponKind) -> &WeaponState {
        &self.states[kind.index()]
    }

    pub fn current_state(&self) -> &WeaponState {
        self.state(self.current)
    }

    pub fn recoil(&self) -> f32 {
        self.recoil
    }

    pub fn bob_phase(&self) -> f32 {
        self.bob_phase
    }

    pub fn sway(&self) -> (f32, f32) {
        self.sway
    }

    /// Switch weapons. Allowed at any time, including mid-reload.
    pub fn equip(&mut self, kind: WeaponKind) {
        self.current = kind;
    }

    /// Equip by 1-based slot. Slots outside 1..=4 are ignored.
    pub fn select_slot(&mut self, slot: u8) {
        if let Some(kind) = WeaponKind::from_slot(slot) {
            self.equip(kind);
        }
    }

    pub fn next_weapon(&mut self) {
        self.equip(self.current.next());
    }

    pub fn previous_weapon(&mut self) {
        self.equip(self.current.previous());
    }

    pub fn can_fire(&self, now: f64) -> bool {
        let state = self.current_state();
        if state.reloading || state.ammo == 0 {
            return false;
        }
        match self.last_fire {
            Some(last) => now - last >= self.stats().fire_interval(),
            None => true,
        }
    }

    /// Attempt a shot along `aim`. Returns the pellets to resolve, or `None`
    /// if the shot was gated.
    pub fn fire(&mut self, aim: Vec3, now: f64, rng: &mut impl Rng) -> Option<Vec<Pellet>> {
        if !self.can_fire(now) {
            return None;
        }
        let stats = self.stats();
        let state = &mut self.states[self.current.index()];
        state.ammo -= 1;
        let empty = state.ammo == 0;
        self.last_fire = Some(now);
        self.recoil = RECOIL_KICK;

        let pellets = (0..stats.pellets)
            .map(|_| Pellet {
                direction: spread_direction(aim, stats.spread, rng),
                damage: stats.damage,
            })
            .collect();

        if empty {
            self.start_reload();
        }
        Some(pellets)
    }

    /// Begin reloading the equipped weapon. Ignored while already reloading
    /// or with a full magazine.
    pub fn start_reload(&mut self) -> bool {
        let capacity = self.stats().capacity;
        let state = &mut self.states[self.current.index()];
        if state.reloading || state.ammo >= capacity {
            return false;
        }
        state.reloading = true;
        state.reload_progress = 0.0;
        true
    }

    /// Advance reload timers on every weapon and decay the view-model pose.
    /// Returns the weapons whose reload completed this frame.
    pub fn update(&mut self, dt: f32, movement_speed: f32) -> Vec<WeaponKind> {
        let mut completed = Vec::new();
        for kind in WeaponKind::ALL {
            let stats = get_stats(kind);
            let state = &mut self.states[kind.index()];
            if !state.reloading {
                continue;
            }
            state.reload_progress += dt / stats.reload_time;
            if state.reload_progress >= 1.0 {
                state.ammo = stats.capacity;
                state.reloading = false;
                state.reload_progress = 0.0;
                completed.push(kind);
            }
        }

        self.recoil *= RECOIL_DECAY;
        if self.recoil < RECOIL_EPSILON {
            self.recoil = 0.0;
        }
        self.bob_phase += dt * movement_speed * BOB_RATE;
        self.sway.0 *= SWAY_DECAY;
        self.sway.1 *= SWAY_DECAY;

        completed
    }

    /// Nudge the view model by a raw look delta.
    pub fn add_sway(&mut self, dx: f32, dy: f32) {
        self.sway.0 += dx * SWAY_GAIN;
        self.sway.1 += dy * SWAY_GAIN;
    }

    /// Ammo of every weapon in slot order.
    pub fn ammo_by_slot(&self) -> Vec<u32> {
        self.states.iter().map(|s| s.ammo).collect()
    }
}
