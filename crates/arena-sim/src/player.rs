//! The player: orientation, vitals, and the shield-first damage rule.

use glam::Vec3;

use arena_core::constants::{PITCH_MARGIN, PLAYER_MAX_HEALTH, PLAYER_MAX_SHIELD, PLAYER_SPAWN};
use arena_core::types::BodyId;

/// Outcome of applying one hit to shield and health.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Absorption {
    pub shield: f32,
    pub health: f32,
    /// Health actually lost.
    pub health_lost: f32,
}

/// Shield absorbs first; whatever it cannot cover comes off health.
///
/// Health is clamped to `[0, max_health]`.
pub fn absorb_damage(shield: f32, health: f32, max_health: f32, damage: f32) -> Absorption {
    let damage = damage.max(0.0);
    let (shield, new_health) = if shield >= damage {
        (shield - damage, health)
    } else {
        (0.0, health - (damage - shield))
    };
    let new_health = new_health.clamp(0.0, max_health);
    Absorption {
        shield,
        health: new_health,
        health_lost: (health - new_health).max(0.0),
    }
}

/// Singleton player state. The body is owned by the physics adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// `None` until the engine is initialized.
    pub body: Option<BodyId>,
    /// Last position read back from physics (eye position).
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
    pub max_health: f32,
    pub shield: f32,
    /// Horizontal speed commanded this frame.
    pub movement_speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            body: None,
            position: PLAYER_SPAWN,
            yaw: 0.0,
            pitch: 0.0,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            shield: 0.0,
            movement_speed: 0.0,
        }
    }
}

impl Player {
    /// Restore session-start vitals and orientation. Keeps the body handle.
    pub fn reset(&mut self) {
        *self = Self {
            body: self.body,
            ..Self::default()
        };
    }

    /// Rotate by a look delta already scaled to radians.
    pub fn look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        let limit = std::f32::consts::FRAC_PI_2 - PITCH_MARGIN;
        self.yaw -= yaw_delta;
        self.pitch = (self.pitch - pitch_delta).clamp(-limit, limit);
    }

    /// Apply a hit. Returns the health lost after shield absorption.
    pub fn take_damage(&mut self, damage: f32) -> f32 {
        let result = absorb_damage(self.shield, self.health, self.max_health, damage);
        self.shield = result.shield;
        self.health = result.health;
        result.health_lost
    }

    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).clamp(0.0, self.max_health);
    }

    pub fn set_shield(&mut self, value: f32) {
        self.shield = value.clamp(0.0, PLAYER_MAX_SHIELD);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Unit vector the camera looks along.
    pub fn aim_direction(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    /// Ground-plane forward and right vectors for the current yaw.
    pub fn movement_basis(&self) -> (Vec3, Vec3) {
        let (sy, cy) = self.yaw.sin_cos();
        (Vec3::new(-sy, 0.0, -cy), Vec3::new(cy, 0.0, -sy))
    }
}
