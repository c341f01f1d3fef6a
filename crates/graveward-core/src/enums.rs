//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Where the current wave is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Counting down the pre-wave delay.
    #[default]
    Idle,
    /// Spawning hostiles on the cadence until the quota is met.
    Spawning,
    /// Quota met, waiting for the last hostile to be removed.
    AwaitingClear,
}

/// Moth behavior, fixed at creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MothMode {
    /// Circles its fixture for the whole session.
    #[default]
    Orbit,
    /// Flies off in a straight line and is removed past the cleanup distance.
    Flee,
}

/// Cat patrol cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatPhase {
    #[default]
    Idle,
    Moving,
}

/// Hit-effect particle flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Static flash at the hit point.
    Flash,
    /// Moving debris that shrinks as it expires.
    Scatter,
}

/// Visual representation the host should create for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualKind {
    Hostile,
    Moth,
    Cat,
    Flash,
    Scatter,
}

impl From<ParticleKind> for VisualKind {
    fn from(kind: ParticleKind) -> Self {
        match kind {
            ParticleKind::Flash => VisualKind::Flash,
            ParticleKind::Scatter => VisualKind::Scatter,
        }
    }
}
