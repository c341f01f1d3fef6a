//! Events emitted by the simulation for the host's scene representation.
//!
//! The simulation never touches models or lights directly. It reports what
//! should exist and the host applies it.

use glam::DQuat;
use serde::{Deserialize, Serialize};

use crate::enums::VisualKind;
use crate::types::Position;

/// Scene changes produced during a tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// Create a visual representation for a new entity.
    EntitySpawned {
        entity: u64,
        kind: VisualKind,
        position: Position,
    },
    /// Remove the visual representation of an entity.
    EntityDespawned { entity: u64, kind: VisualKind },
    /// A placement fixture should no longer be rendered.
    FixtureHidden { fixture: u64 },
    /// Create a spotlight.
    SpotlightCreated { spotlight: SpotlightSpec },
    /// Move the player to the start position.
    PlayerTeleportRequested { position: Position },
}

/// A spotlight built from a `Light` fixture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotlightSpec {
    pub position: Position,
    pub rotation: DQuat,
    pub inner_angle_deg: f64,
    pub outer_angle_deg: f64,
    pub intensity: f64,
    pub range: f64,
    pub shadow: bool,
}
