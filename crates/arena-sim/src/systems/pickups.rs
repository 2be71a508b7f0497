//! Power-up timers, collection, and effects.

use glam::Vec3;

use arena_core::constants::{PLAYER_MAX_SHIELD, POWERUP_COLLECT_RADIUS};
use arena_core::enums::PowerUpKind;

use crate::player::Player;
use crate::powerups::{get_config, PowerUp, PowerUpRegistry};
use crate::weapons::Armory;

/// Advance pickup timers, then collect at most one pickup at the player's
/// position.
pub fn run(
    powerups: &mut PowerUpRegistry,
    player_position: Vec3,
    dt: f32,
    now: f64,
) -> Option<PowerUp> {
    powerups.update(dt, now);
    powerups.check_collection(player_position, POWERUP_COLLECT_RADIUS, now)
}

/// Apply the immediate part of a collected pickup. Timed effects are
/// already recorded by the registry.
pub fn apply_effect(kind: PowerUpKind, player: &mut Player, armory: &mut Armory) {
    let config = get_config(kind);
    match kind {
        PowerUpKind::Health => player.heal(config.value.unwrap_or(0.0)),
        PowerUpKind::Ammo => {
            armory.start_reload();
        }
        PowerUpKind::Speed => {}
        PowerUpKind::Shield => player.set_shield(config.value.unwrap_or(PLAYER_MAX_SHIELD)),
        PowerUpKind::WeaponRifle | PowerUpKind::WeaponShotgun | PowerUpKind::WeaponSniper => {
            if let Some(weapon) = kind.granted_weapon() {
                armory.equip(weapon);
            }
        }
    }
}
