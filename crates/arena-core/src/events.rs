//! Events emitted by the simulation for presentation and audio feedback.
//!
//! Both queues are drained into the snapshot once per frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EnemyId, PowerUpId, Vec3};

/// Discrete gameplay notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Session state changed.
    StateChanged { from: GameState, to: GameState },
    EnemySpawned {
        enemy_id: EnemyId,
        kind: EnemyKind,
        position: Vec3,
    },
    /// Non-lethal hit. `flash` tells presentation whether to flash the mesh.
    EnemyDamaged {
        enemy_id: EnemyId,
        amount: f32,
        flash: bool,
    },
    /// An enemy died. `position` is where to play death effects.
    EnemyKilled {
        enemy_id: EnemyId,
        kind: EnemyKind,
        position: Vec3,
    },
    /// The player lost health (after shield absorption).
    PlayerHit { damage: f32 },
    LevelUp { level: u32 },
    PowerUpSpawned {
        powerup_id: PowerUpId,
        kind: PowerUpKind,
        position: Vec3,
    },
    PowerUpCollected { powerup_id: PowerUpId, kind: PowerUpKind },
    /// Where a pellet struck. `enemy_id` is `None` for environment impacts.
    ShotImpact {
        point: Vec3,
        enemy_id: Option<EnemyId>,
    },
}

/// Sound cues for the audio collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioCue {
    GameStart,
    WeaponFired { weapon: WeaponKind },
    /// Trigger pulled on an empty magazine.
    EmptyClick,
    ReloadComplete { weapon: WeaponKind },
    EnemyHit,
    EnemyDeath,
    PlayerDamage,
    PickupHealth,
    PickupAmmo,
    /// Speed or shield.
    PickupPowerUp,
    PickupWeapon,
    GameOver,
}

impl AudioCue {
    /// Cue played when a power-up of `kind` is collected.
    pub fn for_pickup(kind: PowerUpKind) -> AudioCue {
        match kind {
            PowerUpKind::Health => AudioCue::PickupHealth,
            PowerUpKind::Ammo => AudioCue::PickupAmmo,
            PowerUpKind::Speed | PowerUpKind::Shield => AudioCue::PickupPowerUp,
            PowerUpKind::WeaponRifle | PowerUpKind::WeaponShotgun | PowerUpKind::WeaponSniper => {
                AudioCue::PickupWeapon
            }
        }
    }
}
