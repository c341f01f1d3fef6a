//! Game state snapshot: the visible state handed to the presentation layer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SceneEvent;
use crate::types::{Position, SimTime};

/// Complete state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub hud: HudSnapshot,
    pub wave: WaveView,
    pub hostiles: Vec<HostileView>,
    pub creatures: Vec<CreatureView>,
    pub particles: Vec<ParticleView>,
    pub scene_events: Vec<SceneEvent>,
}

/// The values the HUD reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub wave_number: u32,
    pub countdown_secs: u32,
    pub score: u32,
    pub started: bool,
    pub show_start_menu: bool,
}

impl Default for HudSnapshot {
    fn default() -> Self {
        Self {
            wave_number: 1,
            countdown_secs: crate::constants::COUNTDOWN_START_SECS,
            score: 0,
            started: false,
            show_start_menu: true,
        }
    }
}

/// Wave progress for debug overlays.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub phase: WavePhase,
    pub quota: u32,
    pub spawned: u32,
    pub live_hostiles: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub entity: u64,
    pub position: Position,
    /// Yaw in radians.
    pub heading: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureView {
    pub entity: u64,
    pub kind: VisualKind,
    pub position: Position,
    pub heading: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub entity: u64,
    pub kind: ParticleKind,
    pub position: Position,
    pub scale: f64,
    pub lifetime: u32,
}
