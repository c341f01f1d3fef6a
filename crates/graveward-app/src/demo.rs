//! Built-in graveyard layout used when the binary runs without a host scene.
//!
//! One 16 x 32 yard: the defended fence at z = 8, three gates at the far
//! end, moths around the two lamp posts and a pair of cats near the fence.

use graveward_core::constants::*;
use graveward_core::types::Position;
use graveward_sim::host::StaticScene;

pub fn demo_scene() -> StaticScene {
    StaticScene::new()
        // Gates
        .with_fixture(TAG_HOSTILE_SPAWN, Position::new(3.0, 0.0, 30.0))
        .with_fixture(TAG_HOSTILE_SPAWN, Position::new(8.0, 0.0, 31.0))
        .with_fixture(TAG_HOSTILE_SPAWN, Position::new(13.0, 0.0, 30.0))
        // Lamp posts and their moths
        .with_fixture(TAG_LIGHT, Position::new(2.0, 4.5, 16.0))
        .with_fixture(TAG_LIGHT, Position::new(14.0, 4.5, 16.0))
        .with_fixture(TAG_SPOTLIGHT_TARGET, Position::new(8.0, 0.0, 20.0))
        .with_fixture(TAG_MOTH, Position::new(2.0, 4.0, 16.0))
        .with_fixture(TAG_MOTH, Position::new(2.5, 3.6, 15.5))
        .with_fixture(TAG_MOTH, Position::new(14.0, 4.0, 16.0))
        .with_fixture(TAG_MOTH, Position::new(13.5, 3.8, 16.4))
        // Cats by the fence
        .with_fixture(TAG_CAT, Position::new(4.0, 0.0, 6.0))
        .with_fixture(TAG_CAT, Position::new(12.0, 0.0, 5.0))
        .with_fixture(TAG_PLAYER_SPAWN, Position::new(8.0, 0.0, 4.0))
        .with_player(Position::new(8.0, 0.0, 0.0))
}
