//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::EnemyId;

/// Top-level session state. Governs which systems may run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Enemy archetype. Each has a fixed stat template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// Baseline melee grunt.
    #[default]
    Basic,
    /// Fast and fragile.
    Scout,
    /// Slow, heavy hitter.
    Tank,
    /// Low-flying, spawns at ground height.
    Drone,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Basic,
        EnemyKind::Scout,
        EnemyKind::Tank,
        EnemyKind::Drone,
    ];
}

/// Collectible power-up type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    #[default]
    Health,
    Ammo,
    Speed,
    Shield,
    WeaponRifle,
    WeaponShotgun,
    WeaponSniper,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 7] = [
        PowerUpKind::Health,
        PowerUpKind::Ammo,
        PowerUpKind::Speed,
        PowerUpKind::Shield,
        PowerUpKind::WeaponRifle,
        PowerUpKind::WeaponShotgun,
        PowerUpKind::WeaponSniper,
    ];

    /// The weapon granted by a weapon pickup, if this is one.
    pub fn granted_weapon(self) -> Option<WeaponKind> {
        match self {
            PowerUpKind::WeaponRifle => Some(WeaponKind::Rifle),
            PowerUpKind::WeaponShotgun => Some(WeaponKind::Shotgun),
            PowerUpKind::WeaponSniper => Some(WeaponKind::Sniper),
            _ => None,
        }
    }
}

/// Player weapon. Declaration order is the cycling order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    #[default]
    Pistol,
    Rifle,
    Shotgun,
    Sniper,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 4] = [
        WeaponKind::Pistol,
        WeaponKind::Rifle,
        WeaponKind::Shotgun,
        WeaponKind::Sniper,
    ];

    /// Position in the cycling order (0-based).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Weapon bound to a 1-based number-key slot.
    pub fn from_slot(slot: u8) -> Option<WeaponKind> {
        match slot {
            1..=4 => Some(Self::ALL[(slot - 1) as usize]),
            _ => None,
        }
    }

    pub fn next(self) -> WeaponKind {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> WeaponKind {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Visual theme of an arena level. Cycles as the player levels up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelTheme {
    #[default]
    Neon,
    Industrial,
    Cyber,
}

/// Short-lived presentational flash scheduled by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FlashKind {
    /// An enemy was struck.
    EnemyHit { enemy_id: EnemyId },
    /// The equipped weapon fired.
    Muzzle,
    /// The player lost health.
    PlayerHurt,
}
