//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Marks an entity as a hostile actor walking toward the defended line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile {
    /// Cleared the moment the actor is killed or reaches the line.
    /// The entity itself is swept at the end of the tick.
    pub alive: bool,
}

/// Ambient moth with randomized flight parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Moth {
    pub mode: MothMode,
    /// Orbit rate (radians per tick) or flee speed (units per tick).
    pub fly_speed: f64,
    /// Bobbing amplitude.
    pub vertical_speed: f64,
    /// Fixture position: orbit centre, and origin of the flee distance.
    pub start: Position,
}

/// Ambient cat that idles and patrols around its start.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cat {
    pub start: Position,
    pub patrol_radius: f64,
    /// Patrol direction as a yaw (radians).
    pub direction: f64,
    pub phase: CatPhase,
    /// Ticks spent in the current phase.
    pub timer: u32,
}

/// Short-lived hit-effect particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub kind: ParticleKind,
    /// Remaining ticks.
    pub lifetime: u32,
    pub initial_lifetime: u32,
    pub base_scale: f64,
    /// Current visual scale.
    pub scale: f64,
}

/// Visual representation requested from the host for this entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Visual {
    pub kind: VisualKind,
}

// Position, Velocity and Heading (types.rs) are also used as ECS components.
