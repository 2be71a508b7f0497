//! Snapshot system: gathers engine state into a `GameStateSnapshot`.
//!
//! This system is read-only; it never modifies simulation state. Event
//! queues are drained by the caller and handed in by value.

use arena_ai::registry::EnemyRegistry;
use arena_core::enums::GameState;
use arena_core::events::{AudioCue, GameEvent};
use arena_core::state::*;
use arena_core::types::SimTime;

use crate::effects::ScheduledEffects;
use crate::level::Progress;
use crate::player::Player;
use crate::powerups::PowerUpRegistry;
use crate::weapons::Armory;
use crate::world_setup::Arena;

/// Build a complete snapshot from the current engine state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: &SimTime,
    state: GameState,
    progress: &Progress,
    arena: &Arena,
    player: &Player,
    armory: &Armory,
    enemies: &EnemyRegistry,
    powerups: &PowerUpRegistry,
    flashes: &ScheduledEffects,
    events: Vec<GameEvent>,
    audio_cues: Vec<AudioCue>,
) -> GameStateSnapshot {
    let now = time.elapsed_secs;

    GameStateSnapshot {
        time: *time,
        state,
        score: progress.score,
        health: player.health,
        max_health: player.max_health,
        shield: player.shield,
        kills: progress.kills,
        level: progress.level,
        level_kills: progress.level_kills,
        theme: arena.config.theme,
        arena_size: arena.config.arena_size,
        player: PlayerView {
            position: player.position,
            yaw: player.yaw,
            pitch: player.pitch,
            movement_speed: player.movement_speed,
        },
        weapon: build_weapon(armory),
        ammo_by_slot: armory.ammo_by_slot(),
        enemies: build_enemies(enemies),
        powerups: build_powerups(powerups, now),
        effects: powerups
            .active_effects(now)
            .into_iter()
            .map(|(kind, remaining_secs)| EffectView {
                kind,
                remaining_secs,
            })
            .collect(),
        flashes: flashes.active(),
        events,
        audio_cues,
    }
}

fn build_weapon(armory: &Armory) -> WeaponView {
    let stats = armory.stats();
    let state = armory.current_state();
    let (sway_x, sway_y) = armory.sway();
    WeaponView {
        kind: armory.current(),
        ammo: state.ammo,
        max_ammo: stats.capacity,
        reloading: state.reloading,
        reload_progress: state.reload_progress,
        recoil: armory.recoil(),
        bob_phase: armory.bob_phase(),
        sway_x,
        sway_y,
    }
}

fn build_enemies(enemies: &EnemyRegistry) -> Vec<EnemyView> {
    enemies
        .iter()
        .map(|enemy| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            position: enemy.position,
            yaw: enemy.yaw,
            health_fraction: enemy.health_fraction(),
            scale: enemy.profile().scale,
            animation_phase: enemy.animation_phase,
        })
        .collect()
}

fn build_powerups(powerups: &PowerUpRegistry, now: f64) -> Vec<PowerUpView> {
    powerups
        .iter()
        .map(|p| PowerUpView {
            id: p.id,
            kind: p.kind,
            position: p.position,
            bob_phase: p.bob_phase,
            age_secs: now - p.created_at,
        })
        .collect()
}
