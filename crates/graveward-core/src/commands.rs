//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the start menu and begin the first wave. Ignored once started.
    StartSession,
    /// A discrete press of the primary action, for hosts that deliver press
    /// events instead of a sampled button level. At most one press is
    /// consumed per tick.
    PrimaryAction,
}
