//! Systems that operate on the simulation each tick.
//!
//! Systems are plain functions over the `ActorStore` and whatever session
//! state they touch. They do not own state; wave timing lives in
//! `WaveDirector`, everything else in components.

pub mod ambient;
pub mod combat;
pub mod effects;
pub mod movement;
pub mod snapshot;
pub mod wave_director;
