//! Headless GRAVEWARD runner.
//!
//! Plays the demo yard on the game loop thread and logs the HUD once per
//! second. Usage: `graveward-app [tuning.json]`.
//!
//! Environment:
//! - `GRAVEWARD_SEED`: RNG seed (default 42)
//! - `GRAVEWARD_TICKS`: stop after this many ticks (default two minutes)
//! - `GRAVEWARD_AUTOFIRE`: when set, press the primary action twice a second
//! - `RUST_LOG`: tracing filter (default `info`)

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use graveward_app::control;
use graveward_app::demo::demo_scene;
use graveward_app::game_loop::LoopSettings;
use graveward_app::state::AppState;
use graveward_core::commands::PlayerCommand;
use graveward_core::constants::TICK_RATE;
use graveward_sim::{SimConfig, Tuning};

const SEED_ENV_VAR: &str = "GRAVEWARD_SEED";
const TICKS_ENV_VAR: &str = "GRAVEWARD_TICKS";
const AUTOFIRE_ENV_VAR: &str = "GRAVEWARD_AUTOFIRE";

const DEFAULT_RUN_SECS: u64 = 120;
const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() {
    init_tracing();
    info!("=== GRAVEWARD ===");

    if let Err(err) = run() {
        error!(error = %format!("{err:#}"), "run_failed");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = load_config()?;
    let max_ticks = parse_env::<u64>(TICKS_ENV_VAR)?
        .unwrap_or(DEFAULT_RUN_SECS * TICK_RATE as u64);
    let autofire = std::env::var_os(AUTOFIRE_ENV_VAR).is_some();
    info!(seed = config.seed, max_ticks, autofire, "configured");

    let state = AppState::new();
    let settings = LoopSettings {
        max_ticks: Some(max_ticks),
        ..LoopSettings::new(config, demo_scene())
    };
    control::start_simulation(&state, settings)?;
    control::send_command(&state, PlayerCommand::StartSession)?;

    let mut held = false;
    let mut polls: u64 = 0;
    while control::is_running(&state)? {
        std::thread::sleep(POLL_INTERVAL);
        polls += 1;

        if autofire {
            held = !held;
            // The loop may stop between the check and the send.
            if control::set_primary_held(&state, held).is_err() {
                break;
            }
        }

        if polls % 4 == 0 {
            if let Some(snap) = control::get_snapshot(&state)? {
                info!(
                    tick = snap.time.tick,
                    wave = snap.hud.wave_number,
                    countdown = snap.hud.countdown_secs,
                    score = snap.hud.score,
                    hostiles = snap.hostiles.len(),
                    "hud"
                );
            }
        }
    }

    if let Some(snap) = control::get_snapshot(&state)? {
        info!(
            wave = snap.hud.wave_number,
            score = snap.hud.score,
            "session_over"
        );
    }
    control::shutdown(&state)?;
    Ok(())
}

/// Seed from the environment, tuning from the optional first argument.
fn load_config() -> Result<SimConfig> {
    let mut config = SimConfig::default();

    if let Some(seed) = parse_env::<u64>(SEED_ENV_VAR)? {
        config.seed = seed;
    }

    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        config.tuning = Tuning::from_path(&path)
            .with_context(|| format!("loading tuning from {}", path.display()))?;
        info!(path = %path.display(), "tuning_loaded");
    }

    Ok(config)
}

fn parse_env<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("invalid {name}: {raw:?}"))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
