//! Simulation engine for GRAVEWARD.
//!
//! Owns the hecs ECS world through the `ActorStore`, runs the wave, combat,
//! effects and ambient systems at a fixed tick rate, and produces
//! `GameStateSnapshot`s for the presentation layer.

pub mod actor_store;
pub mod config;
pub mod engine;
pub mod host;
pub mod input;
pub mod scene;
pub mod scoreboard;
pub mod spawn_registry;
pub mod systems;

pub use graveward_core as core;
pub use config::{ConfigError, SimConfig, Tuning};
pub use engine::SimulationEngine;
