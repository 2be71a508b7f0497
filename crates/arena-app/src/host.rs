//! Host-facing handlers.
//!
//! These bridge caller requests to the game loop thread via channels, the
//! way a presentation layer drives the simulation.

use thiserror::Error;

use arena_core::commands::{InputState, PlayerCommand};
use arena_core::error::EngineError;
use arena_core::state::GameStateSnapshot;
use arena_sim::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop has stopped")]
    LoopStopped,
    #[error("shared state lock poisoned")]
    Poisoned,
    #[error("simulation failed to initialize: {0}")]
    Init(#[from] EngineError),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Start the simulation. Spawns the game loop thread if not already running
/// and returns once the engine has initialized, or with its error.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), HostError> {
    let mut tx_lock = state.command_tx.lock().map_err(|_| HostError::Poisoned)?;
    if tx_lock.is_some() {
        return Err(HostError::AlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;
    *tx_lock = Some(cmd_tx);
    if let Ok(mut thread) = state.loop_thread.lock() {
        *thread = Some(handle);
    }
    log::info!("Game loop started");
    Ok(())
}

fn send(state: &AppState, message: GameLoopCommand) -> Result<(), HostError> {
    let tx_lock = state.command_tx.lock().map_err(|_| HostError::Poisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx.send(message).map_err(|_| HostError::LoopStopped),
        None => Err(HostError::NotStarted),
    }
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), HostError> {
    send(state, GameLoopCommand::PlayerCommand(command))
}

/// Replace the held-input state.
pub fn send_input(state: &AppState, input: InputState) -> Result<(), HostError> {
    send(state, GameLoopCommand::Input(input))
}

/// Get the latest snapshot (for polling).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, HostError> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| HostError::Poisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), HostError> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|_| HostError::Poisoned)?
        .take()
        .ok_or(HostError::NotStarted)?;
    // A loop that already exited has dropped its receiver.
    let _ = tx.send(GameLoopCommand::Shutdown);

    let handle = state
        .loop_thread
        .lock()
        .map_err(|_| HostError::Poisoned)?
        .take();
    if let Some(handle) = handle {
        if handle.join().is_err() {
            log::error!("Game loop thread panicked");
        }
    }
    log::info!("Game loop stopped");
    Ok(())
}
