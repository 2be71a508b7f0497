//! arena: run the simulation headless with a scripted player.
//!
//! Usage:
//!   arena [--config arena.json] [--seed N] [--seconds S]

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use arena_app::autopilot::Autopilot;
use arena_app::config::load_config;
use arena_app::host;
use arena_app::state::AppState;
use arena_sim::SimConfig;

const DEFAULT_SECONDS: f64 = 30.0;
const POLL_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut config = match parse_flag(&args, "--config").map(PathBuf::from) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    if let Some(seed) = parse_number::<u64>(&args, "--seed") {
        config.seed = seed;
    }
    let seconds = parse_number::<f64>(&args, "--seconds").unwrap_or(DEFAULT_SECONDS);

    if let Err(e) = run(config, Duration::from_secs_f64(seconds.max(0.0))) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(config: SimConfig, duration: Duration) -> Result<(), host::HostError> {
    let mut pilot = Autopilot::new(config.tuning.mouse_sensitivity);
    let state = AppState::new();
    host::start_simulation(&state, config)?;

    let deadline = Instant::now() + duration;
    let mut last_state = None;
    while Instant::now() < deadline {
        if let Some(snapshot) = host::get_snapshot(&state)? {
            let steering = pilot.drive(&snapshot);
            if let Some(command) = steering.command {
                host::send_command(&state, command)?;
            }
            host::send_input(&state, steering.input)?;
            last_state = Some(snapshot);
        }
        std::thread::sleep(POLL_INTERVAL);
    }

    host::stop_simulation(&state)?;
    match last_state {
        Some(s) => log::info!(
            "Finished: state {:?}, level {}, score {}, kills {}, health {:.0}",
            s.state,
            s.level,
            s.score,
            s.kills,
            s.health
        ),
        None => log::warn!("No snapshot produced"),
    }
    Ok(())
}

fn print_usage() {
    eprintln!(
        "arena: headless arena shooter simulation\n\
         \n\
           --config <path>  JSON config file (seed and tuning)\n\
           --seed <n>       RNG seed, overrides the config file\n\
           --seconds <n>    Wall-clock run length (default: 30)\n\
         \n\
         RUST_LOG controls log output (default: info).\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].as_str());
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let raw = parse_flag(args, flag)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("Ignoring invalid {flag} value: {raw}");
            None
        }
    }
}
