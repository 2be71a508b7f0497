//! Scripted input source for headless runs.
//!
//! Turns toward the nearest enemy, keeps its distance, strafes, and fires
//! once the aim is close enough. Reads only the published snapshot, and
//! remembers whether it held the trigger last frame so semi-automatic
//! weapons get a fresh press per shot.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use arena_core::commands::{InputState, PlayerCommand};
use arena_core::enums::GameState;
use arena_core::state::GameStateSnapshot;
use arena_sim::weapons::get_stats;

/// Largest turn per frame (radians).
const MAX_TURN: f32 = 0.15;
/// Fire when the aim is within this many radians of the target.
const FIRE_CONE: f32 = 0.05;
const FIRE_RANGE: f32 = 40.0;
const KEEP_AWAY: f32 = 4.0;
const CLOSE_IN: f32 = 8.0;
/// Seconds per strafe direction.
const STRAFE_PERIOD: f64 = 2.0;

/// What the autopilot wants to do this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Steering {
    pub input: InputState,
    pub command: Option<PlayerCommand>,
}

pub struct Autopilot {
    /// Must match the engine's look sensitivity.
    sensitivity: f32,
    trigger_held: bool,
}

/// Yaw whose aim direction points from `from` to `to` on the ground plane.
fn aim_yaw(from: Vec3, to: Vec3) -> f32 {
    (-(to.x - from.x)).atan2(-(to.z - from.z))
}

/// Wrap an angle into (-π, π].
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

impl Autopilot {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            trigger_held: false,
        }
    }

    pub fn drive(&mut self, snapshot: &GameStateSnapshot) -> Steering {
        let was_held = std::mem::take(&mut self.trigger_held);
        let command = match snapshot.state {
            GameState::Menu => Some(PlayerCommand::Start),
            GameState::GameOver => Some(PlayerCommand::Restart),
            GameState::Paused => Some(PlayerCommand::Resume),
            GameState::Playing => None,
        };
        if command.is_some() || self.sensitivity <= 0.0 {
            return Steering {
                input: InputState::default(),
                command,
            };
        }

        let player = &snapshot.player;
        let mut input = InputState {
            look_dy: player.pitch / self.sensitivity,
            ..Default::default()
        };

        let weapon = &snapshot.weapon;
        let command = (weapon.ammo == 0 && !weapon.reloading).then_some(PlayerCommand::Reload);

        let nearest = snapshot.enemies.iter().min_by(|a, b| {
            let da = a.position.distance_squared(player.position);
            let db = b.position.distance_squared(player.position);
            da.total_cmp(&db)
        });
        let Some(target) = nearest else {
            return Steering { input, command };
        };

        let error = wrap_angle(aim_yaw(player.position, target.position) - player.yaw);
        let turn = error.clamp(-MAX_TURN, MAX_TURN);
        // The engine subtracts look deltas from yaw.
        input.look_dx = -turn / self.sensitivity;

        let distance = player.position.distance(target.position);
        input.forward = distance > CLOSE_IN;
        input.backward = distance < KEEP_AWAY;
        let strafe_left = (snapshot.time.elapsed_secs / STRAFE_PERIOD) as u64 % 2 == 0;
        input.left = strafe_left;
        input.right = !strafe_left;
        let on_target = error.abs() < FIRE_CONE && distance < FIRE_RANGE;
        let release = was_held && !get_stats(weapon.kind).automatic;
        input.fire = on_target && !release;
        self.trigger_held = input.fire;

        Steering { input, command }
    }
}
