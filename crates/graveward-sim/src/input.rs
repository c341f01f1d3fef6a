//! Primary-action sampling.
//!
//! The host reports the button level once per tick; combat must only react
//! to the tick on which the button goes down.

/// Input sampled by the host for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Whether the primary action button is currently held.
    pub primary_action: bool,
}

/// Turns a sampled level into a rising-edge signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    held: bool,
}

impl EdgeTrigger {
    /// Feed this tick's level. True only when the level rose since the last call.
    pub fn pressed(&mut self, level: bool) -> bool {
        let edge = level && !self.held;
        self.held = level;
        edge
    }
}
