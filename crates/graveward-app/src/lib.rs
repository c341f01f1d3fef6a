//! GRAVEWARD application shell.
//!
//! Runs the simulation on its own thread and exposes a small control
//! surface (start, send commands, poll snapshots, shut down) to a front end.

pub mod control;
pub mod demo;
pub mod game_loop;
pub mod state;

pub use graveward_core as core;
