//! Control surface over the game loop thread.
//!
//! These functions are what a front end calls. They bridge requests to the
//! loop thread via its command channel and read back the latest snapshot.

use std::sync::PoisonError;

use thiserror::Error;
use tracing::info;

use graveward_core::commands::PlayerCommand;
use graveward_core::state::GameStateSnapshot;

use crate::game_loop::{self, LoopSettings};
use crate::state::{AppState, GameLoopCommand};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop is no longer receiving commands")]
    LoopStopped,
    #[error("game loop thread panicked")]
    LoopPanicked,
    #[error("shared state lock poisoned")]
    Poisoned,
    #[error("failed to spawn game loop thread")]
    Spawn(#[from] std::io::Error),
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(_: PoisonError<T>) -> Self {
        AppError::Poisoned
    }
}

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, settings: LoopSettings) -> Result<(), AppError> {
    let mut running = state.running.lock()?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(settings, state.latest_snapshot.clone())?;

    *state.command_tx.lock()? = Some(cmd_tx);
    *state.loop_handle.lock()? = Some(handle);
    *running = true;

    info!("simulation started");
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    send(state, GameLoopCommand::PlayerCommand(command))
}

/// Report the primary action button level.
pub fn set_primary_held(state: &AppState, held: bool) -> Result<(), AppError> {
    send(state, GameLoopCommand::SetPrimaryHeld(held))
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock()?;
    Ok(lock.clone())
}

/// True while the loop thread exists and has not finished.
pub fn is_running(state: &AppState) -> Result<bool, AppError> {
    let running = *state.running.lock()?;
    let finished = state
        .loop_handle
        .lock()?
        .as_ref()
        .is_none_or(|handle| handle.is_finished());
    Ok(running && !finished)
}

/// Stop the loop thread and wait for it to exit. A loop that already
/// stopped by itself is joined without error.
pub fn shutdown(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock()?;
    if !*running {
        return Err(AppError::NotStarted);
    }

    if let Some(tx) = state.command_tx.lock()?.take() {
        // The loop may already have exited on its own.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    let handle = state.loop_handle.lock()?.take();
    *running = false;

    match handle {
        Some(handle) => handle.join().map_err(|_| AppError::LoopPanicked),
        None => Ok(()),
    }
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock()?;

    match tx_lock.as_ref() {
        Some(tx) => tx.send(command).map_err(|_| AppError::LoopStopped),
        None => Err(AppError::NotStarted),
    }
}
