//! Game state snapshot: the complete visible state handed to presentation each frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioCue, GameEvent};
use crate::types::{EnemyId, PowerUpId, SimTime, Vec3};

/// Complete game state published after each frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub state: GameState,
    pub score: u32,
    pub health: f32,
    pub max_health: f32,
    pub shield: f32,
    pub kills: u32,
    pub level: u32,
    /// Kills counted toward the next level-up.
    pub level_kills: u32,
    pub theme: LevelTheme,
    pub arena_size: f32,
    pub player: PlayerView,
    pub weapon: WeaponView,
    /// Ammo of every weapon in slot order.
    pub ammo_by_slot: Vec<u32>,
    pub enemies: Vec<EnemyView>,
    pub powerups: Vec<PowerUpView>,
    pub effects: Vec<EffectView>,
    pub flashes: Vec<FlashKind>,
    pub events: Vec<GameEvent>,
    pub audio_cues: Vec<AudioCue>,
}

/// Camera-relevant player state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Eye position (body center).
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Horizontal speed commanded this frame (0 when idle).
    pub movement_speed: f32,
}

/// Equipped weapon, including its presentational pose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponView {
    pub kind: WeaponKind,
    pub ammo: u32,
    pub max_ammo: u32,
    pub reloading: bool,
    /// Reload progress 0.0 - 1.0.
    pub reload_progress: f32,
    pub recoil: f32,
    pub bob_phase: f32,
    pub sway_x: f32,
    pub sway_y: f32,
}

/// A live enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub position: Vec3,
    pub yaw: f32,
    /// Current health as a fraction of max (0.0 - 1.0).
    pub health_fraction: f32,
    pub scale: f32,
    pub animation_phase: f32,
}

/// An uncollected power-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUpView {
    pub id: PowerUpId,
    pub kind: PowerUpKind,
    pub position: Vec3,
    pub bob_phase: f32,
    /// Seconds since it spawned.
    pub age_secs: f64,
}

/// A timed power-up effect still running.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: PowerUpKind,
    pub remaining_secs: f64,
}
