//! Player intents sent from the host to the simulation.
//!
//! Discrete actions are queued as `PlayerCommand`s and processed at the next
//! tick boundary. Continuous intents (held keys, look delta) travel in
//! `InputState`, which the host overwrites whenever input changes.

use serde::{Deserialize, Serialize};

/// All discrete player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Begin a session from the menu or after game over.
    Start,
    /// Reset and begin again from game over, playing or paused.
    Restart,
    /// Leave the pause screen.
    Resume,
    /// Pause while playing, resume while paused.
    TogglePause,
    /// Abandon the session.
    ReturnToMenu,

    // --- Weapons ---
    /// Equip the weapon bound to a 1-based number key.
    SelectWeapon { slot: u8 },
    NextWeapon,
    PreviousWeapon,
    /// Reload the equipped weapon.
    Reload,
}

/// Continuous input intents for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub sprint: bool,
    /// Trigger held.
    pub fire: bool,
    /// Accumulated look delta since the last frame (pointer units).
    pub look_dx: f32,
    pub look_dy: f32,
}

impl InputState {
    /// Take the accumulated look delta, leaving zero behind.
    pub fn take_look_delta(&mut self) -> (f32, f32) {
        let delta = (self.look_dx, self.look_dy);
        self.look_dx = 0.0;
        self.look_dy = 0.0;
        delta
    }
}
