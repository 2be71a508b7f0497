//! Game loop thread: runs the simulation engine at 60Hz and publishes
//! snapshots.
//!
//! The engine is created and initialized inside this thread so it never
//! crosses a thread boundary. The initialization result is reported back
//! before the first frame. Commands arrive via `mpsc` channel. Snapshots
//! are stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use arena_core::constants::TICK_RATE;
use arena_core::error::EngineError;
use arena_core::events::GameEvent;
use arena_core::state::GameStateSnapshot;
use arena_sim::{SimConfig, SimulationEngine};

use crate::host::HostError;
use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread and waits for the engine to
/// initialize.
///
/// Returns the command sender and the thread handle. If initialization
/// fails the thread has already exited and the engine error is returned.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), HostError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (ready_tx, ready_rx) = mpsc::sync_channel::<Result<(), EngineError>>(1);

    let handle = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, ready_tx, &latest_snapshot);
        })?;

    match ready_rx.recv() {
        Ok(Ok(())) => Ok((cmd_tx, handle)),
        Ok(Err(err)) => {
            let _ = handle.join();
            Err(HostError::Init(err))
        }
        // The thread died before reporting.
        Err(_) => {
            let _ = handle.join();
            Err(HostError::LoopStopped)
        }
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    ready_tx: mpsc::SyncSender<Result<(), EngineError>>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let init = engine.initialize();
    if let Err(err) = &init {
        log::error!("Game loop not started: {}", err);
    }
    let ready = init.is_ok();
    if ready_tx.send(init).is_err() || !ready {
        return;
    }
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Input(input)) => engine.set_input(input),
                Ok(GameLoopCommand::Shutdown) => {
                    engine.destroy();
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    engine.destroy();
                    return;
                }
            }
        }

        // 2. Advance one frame by wall-clock time (engine handles pause)
        let snapshot = engine.frame(Instant::now());
        log_events(&snapshot.events);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next frame
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::LevelUp { .. } | GameEvent::StateChanged { .. } => {
                log::info!("{:?}", event)
            }
            GameEvent::PlayerHit { damage } => log::debug!("Player hit for {}", damage),
            _ => log::trace!("{:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::commands::{InputState, PlayerCommand};
    use arena_core::enums::GameState;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
            .unwrap();
        tx.send(GameLoopCommand::Input(InputState {
            fire: true,
            ..Default::default()
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Start)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Input(input) if input.fire));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.initialize().unwrap();
        engine.queue_command(PlayerCommand::Start);

        // Long enough for a few enemies to spawn
        for _ in 0..600 {
            engine.tick(1.0 / 60.0);
        }

        let snapshot = engine.tick(1.0 / 60.0);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_runs_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone()).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        let mut playing = false;
        while Instant::now() < deadline {
            if let Some(snap) = latest.lock().unwrap().as_ref() {
                if snap.state == GameState::Playing {
                    playing = true;
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(playing, "loop never reached Playing");

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_init_failure_reported_before_loop() {
        let latest = Arc::new(Mutex::new(None));
        let mut config = SimConfig::default();
        config.tuning.kills_per_level = 0;

        let result = spawn_game_loop(config, latest.clone());
        assert!(matches!(
            result,
            Err(HostError::Init(EngineError::InvalidTuning { .. }))
        ));
        assert!(latest.lock().unwrap().is_none());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
