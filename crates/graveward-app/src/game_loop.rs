//! Game loop thread: runs the simulation engine at the fixed tick rate and
//! publishes snapshots.
//!
//! The engine and the host scene are created inside this thread and never
//! leave it. Commands arrive via `mpsc` channel. Snapshots are stored in
//! shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use graveward_core::constants::TICK_RATE;
use graveward_core::state::GameStateSnapshot;
use graveward_sim::host::{apply_player_events, StaticScene};
use graveward_sim::input::TickInput;
use graveward_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Everything the loop thread needs to build its engine.
pub struct LoopSettings {
    pub config: SimConfig,
    /// Host scene: read at setup, then receives player teleports.
    pub scene: StaticScene,
    /// Sleep between ticks to hold the tick rate. Off runs as fast as possible.
    pub realtime: bool,
    /// Stop by itself after this many ticks.
    pub max_ticks: Option<u64>,
}

impl LoopSettings {
    pub fn new(config: SimConfig, scene: StaticScene) -> Self {
        Self {
            config,
            scene,
            realtime: true,
            max_ticks: None,
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the control layer and the thread handle.
pub fn spawn_game_loop(
    settings: LoopSettings,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("graveward-game-loop".into())
        .spawn(move || {
            run_game_loop(settings, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect or the tick limit.
fn run_game_loop(
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let LoopSettings {
        config,
        mut scene,
        realtime,
        max_ticks,
    } = settings;

    let mut engine = SimulationEngine::new(config);
    engine.setup_scene(&mut scene);

    let mut input = TickInput::default();
    let mut last_wave = engine.hud().wave_number;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::SetPrimaryHeld(held)) => {
                    input.primary_action = held;
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!(tick = engine.time().tick, "game loop shut down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel closed");
                    return;
                }
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick(&input);

        // 3. Hand player-facing events to the host scene
        apply_player_events(&snapshot.scene_events, &mut scene);

        if snapshot.hud.wave_number != last_wave {
            last_wave = snapshot.hud.wave_number;
            info!(
                wave = last_wave,
                score = snapshot.hud.score,
                "wave_changed"
            );
        }
        let tick = snapshot.time.tick;

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if max_ticks.is_some_and(|limit| tick >= limit) {
            info!(tick, "tick limit reached");
            return;
        }

        // 5. Sleep until next tick
        if realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind: reset instead of catching up
                next_tick_time = now;
            }
        }
    }
}
