//! Capabilities the simulation consumes from its host environment.
//!
//! The host owns the real scene graph. The simulation only needs to look up
//! tagged fixtures at setup, hide them, and move the player once per session.
//! `StaticScene` is an in-memory host used by the headless app and tests.

use std::collections::HashSet;

use tracing::info;

use graveward_core::events::SceneEvent;
use graveward_core::types::Position;

/// A pre-placed scene entity found by tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixture {
    pub id: u64,
    pub position: Position,
}

/// Read access to tagged scene fixtures. Only used during scene setup.
pub trait EntityDirectory {
    /// All fixtures carrying `tag`, in scene order.
    fn find_by_tag(&self, tag: &str) -> Vec<Fixture>;

    fn set_visible(&mut self, fixture: u64, visible: bool);
}

/// Access to the player avatar.
pub trait PlayerHost {
    /// Move the player. Returns false when no player entity exists.
    fn teleport_player(&mut self, position: Position) -> bool;
}

/// Apply the player-facing scene events of one tick.
pub fn apply_player_events(events: &[SceneEvent], player: &mut dyn PlayerHost) {
    for event in events {
        if let SceneEvent::PlayerTeleportRequested { position } = event {
            if player.teleport_player(*position) {
                info!(x = position.x, y = position.y, z = position.z, "player_teleported");
            } else {
                info!("player entity not found, teleport skipped");
            }
        }
    }
}

/// In-memory scene of tagged fixtures.
#[derive(Debug, Default)]
pub struct StaticScene {
    fixtures: Vec<(String, Fixture)>,
    hidden: HashSet<u64>,
    next_id: u64,
    player: Option<Position>,
}

impl StaticScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `add_fixture`.
    pub fn with_fixture(mut self, tag: &str, position: Position) -> Self {
        self.add_fixture(tag, position);
        self
    }

    /// Give the scene a player avatar at `position`.
    pub fn with_player(mut self, position: Position) -> Self {
        self.player = Some(position);
        self
    }

    pub fn add_fixture(&mut self, tag: &str, position: Position) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.fixtures.push((tag.to_string(), Fixture { id, position }));
        id
    }

    pub fn is_hidden(&self, fixture: u64) -> bool {
        self.hidden.contains(&fixture)
    }

    pub fn player_position(&self) -> Option<Position> {
        self.player
    }
}

impl EntityDirectory for StaticScene {
    fn find_by_tag(&self, tag: &str) -> Vec<Fixture> {
        self.fixtures
            .iter()
            .filter(|(t, _)| t == tag)
            .map(|(_, fixture)| *fixture)
            .collect()
    }

    fn set_visible(&mut self, fixture: u64, visible: bool) {
        if visible {
            self.hidden.remove(&fixture);
        } else {
            self.hidden.insert(fixture);
        }
    }
}

impl PlayerHost for StaticScene {
    fn teleport_player(&mut self, position: Position) -> bool {
        match self.player.as_mut() {
            Some(player) => {
                *player = position;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_tag_preserves_order() {
        let scene = StaticScene::new()
            .with_fixture("a", Position::new(1.0, 0.0, 0.0))
            .with_fixture("b", Position::new(2.0, 0.0, 0.0))
            .with_fixture("a", Position::new(3.0, 0.0, 0.0));

        let found = scene.find_by_tag("a");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].position.x, 1.0);
        assert_eq!(found[1].position.x, 3.0);
        assert!(scene.find_by_tag("missing").is_empty());
    }

    #[test]
    fn test_visibility_toggle() {
        let mut scene = StaticScene::new();
        let id = scene.add_fixture("a", Position::default());
        assert!(!scene.is_hidden(id));
        scene.set_visible(id, false);
        assert!(scene.is_hidden(id));
        scene.set_visible(id, true);
        assert!(!scene.is_hidden(id));
    }

    #[test]
    fn test_teleport_requires_player() {
        let target = Position::new(8.0, 0.0, 2.0);
        let events = vec![SceneEvent::PlayerTeleportRequested { position: target }];

        let mut without_player = StaticScene::new();
        apply_player_events(&events, &mut without_player);
        assert!(without_player.player_position().is_none());

        let mut with_player = StaticScene::new().with_player(Position::default());
        apply_player_events(&events, &mut with_player);
        assert_eq!(with_player.player_position(), Some(target));
    }
}
