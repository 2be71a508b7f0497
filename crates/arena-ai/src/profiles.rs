//! Per-kind enemy stat templates.

use arena_core::enums::EnemyKind;

/// Immutable stats shared by every enemy of one kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub max_health: f32,
    /// Ground speed (m/s).
    pub speed: f32,
    /// Damage per melee attack.
    pub damage: f32,
    /// Attacks per second.
    pub attack_rate: f32,
    /// Score awarded on kill.
    pub points: u32,
    /// Visual and hit-box scale.
    pub scale: f32,
}

impl EnemyProfile {
    /// Minimum seconds between attacks.
    pub fn attack_interval(&self) -> f64 {
        1.0 / self.attack_rate as f64
    }
}

/// Get the stat template for a given kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Basic => EnemyProfile {
            max_health: 30.0,
            speed: 3.0,
            damage: 10.0,
            attack_rate: 1.0,
            points: 100,
            scale: 1.0,
        },
        EnemyKind::Scout => EnemyProfile {
            max_health: 15.0,
            speed: 7.0,
            damage: 5.0,
            attack_rate: 2.0,
            points: 75,
            scale: 0.7,
        },
        EnemyKind::Tank => EnemyProfile {
            max_health: 100.0,
            speed: 1.5,
            damage: 25.0,
            attack_rate: 0.5,
            points: 250,
            scale: 1.5,
        },
        EnemyKind::Drone => EnemyProfile {
            max_health: 20.0,
            speed: 4.0,
            damage: 8.0,
            attack_rate: 1.5,
            points: 150,
            scale: 0.6,
        },
    }
}
