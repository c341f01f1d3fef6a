//! Scene setup: turns the host's tagged fixtures into simulation state.
//!
//! Runs once before the first tick. Spawn markers fill the `SpawnRegistry`,
//! creature markers become moths and cats, `Light` fixtures are replaced by
//! spotlights aimed at the `spotlightlook` target, and the first
//! `playerspawn` fixture is remembered for session start. Every consumed
//! marker is hidden. Missing fixtures are an expected empty case.

use glam::{DMat3, DQuat, DVec3};
use rand::Rng;
use tracing::{debug, info};

use graveward_core::constants::*;
use graveward_core::events::{SceneEvent, SpotlightSpec};
use graveward_core::types::Position;

use crate::actor_store::ActorStore;
use crate::config::Tuning;
use crate::host::{EntityDirectory, Fixture};
use crate::spawn_registry::SpawnRegistry;
use crate::systems::ambient;

/// What scene setup found and created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneSetup {
    pub spawn_points: usize,
    pub moths: usize,
    pub cats: usize,
    pub spotlights: usize,
    /// Where the player is moved when the session starts.
    pub player_spawn: Option<Position>,
}

/// Read every fixture the simulation needs and populate its state.
pub fn setup_scene<R: Rng + ?Sized>(
    directory: &mut dyn EntityDirectory,
    store: &mut ActorStore,
    registry: &mut SpawnRegistry,
    rng: &mut R,
    tuning: &Tuning,
) -> SceneSetup {
    let mut setup = SceneSetup::default();

    for fixture in directory.find_by_tag(TAG_HOSTILE_SPAWN) {
        registry.register(fixture.position);
        hide(directory, store, fixture);
        setup.spawn_points += 1;
    }

    for fixture in directory.find_by_tag(TAG_MOTH) {
        store.spawn_moth(ambient::roll_moth(rng, fixture.position, tuning.moth_flee_chance));
        hide(directory, store, fixture);
        setup.moths += 1;
    }

    for fixture in directory.find_by_tag(TAG_CAT) {
        store.spawn_cat(ambient::roll_cat(rng, fixture.position));
        hide(directory, store, fixture);
        setup.cats += 1;
    }

    setup.spotlights = build_spotlight_rig(directory, store);
    setup.player_spawn = find_player_spawn(directory, store);

    info!(
        spawn_points = setup.spawn_points,
        moths = setup.moths,
        cats = setup.cats,
        spotlights = setup.spotlights,
        player_spawn = setup.player_spawn.is_some(),
        "scene_ready"
    );
    setup
}

/// Replace every `Light` fixture with a spotlight aimed at the look target.
/// Returns the number of spotlights created. Without a target nothing is built.
pub fn build_spotlight_rig(directory: &mut dyn EntityDirectory, store: &mut ActorStore) -> usize {
    let Some(target) = directory.find_by_tag(TAG_SPOTLIGHT_TARGET).first().copied() else {
        info!("no spotlight target fixture found, spotlight rig skipped");
        return 0;
    };
    hide(directory, store, target);

    let lights = directory.find_by_tag(TAG_LIGHT);
    for light in &lights {
        hide(directory, store, *light);
        let spotlight = SpotlightSpec {
            position: light.position,
            rotation: spotlight_rotation(&light.position, &target.position),
            inner_angle_deg: SPOTLIGHT_INNER_ANGLE_DEG,
            outer_angle_deg: SPOTLIGHT_OUTER_ANGLE_DEG,
            intensity: SPOTLIGHT_INTENSITY,
            range: SPOTLIGHT_RANGE,
            shadow: true,
        };
        store.push_event(SceneEvent::SpotlightCreated { spotlight });
        debug!(
            x = light.position.x,
            y = light.position.y,
            z = light.position.z,
            "spotlight_created"
        );
    }
    lights.len()
}

/// Orientation that points local +z from `from` toward `target`, then
/// pitches it down by the rig tilt.
pub fn spotlight_rotation(from: &Position, target: &Position) -> DQuat {
    let forward = to_vec(target) - to_vec(from);
    let look = look_rotation(forward);
    look * DQuat::from_rotation_x(SPOTLIGHT_DOWN_TILT_DEG.to_radians())
}

fn look_rotation(direction: DVec3) -> DQuat {
    let Some(forward) = direction.try_normalize() else {
        return DQuat::IDENTITY;
    };
    let right = DVec3::Y.cross(forward);
    let Some(right) = right.try_normalize() else {
        // Looking straight up or down: no horizontal reference.
        return DQuat::from_rotation_arc(DVec3::Z, forward);
    };
    let up = forward.cross(right);
    DQuat::from_mat3(&DMat3::from_cols(right, up, forward))
}

/// First `playerspawn` fixture, hidden once found.
fn find_player_spawn(directory: &mut dyn EntityDirectory, store: &mut ActorStore) -> Option<Position> {
    let Some(fixture) = directory.find_by_tag(TAG_PLAYER_SPAWN).first().copied() else {
        info!("no player spawn fixture found");
        return None;
    };
    hide(directory, store, fixture);
    info!(
        x = fixture.position.x,
        y = fixture.position.y,
        z = fixture.position.z,
        "player_spawn_found"
    );
    Some(fixture.position)
}

fn hide(directory: &mut dyn EntityDirectory, store: &mut ActorStore, fixture: Fixture) {
    directory.set_visible(fixture.id, false);
    store.push_event(SceneEvent::FixtureHidden {
        fixture: fixture.id,
    });
}

fn to_vec(p: &Position) -> DVec3 {
    DVec3::new(p.x, p.y, p.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use graveward_core::enums::VisualKind;

    use crate::host::StaticScene;

    fn yard() -> StaticScene {
        StaticScene::new()
            .with_fixture(TAG_HOSTILE_SPAWN, Position::new(2.0, 0.0, 20.0))
            .with_fixture(TAG_HOSTILE_SPAWN, Position::new(14.0, 0.0, 20.0))
            .with_fixture(TAG_MOTH, Position::new(4.0, 2.5, 6.0))
            .with_fixture(TAG_MOTH, Position::new(12.0, 2.5, 6.0))
            .with_fixture(TAG_MOTH, Position::new(8.0, 3.0, 12.0))
            .with_fixture(TAG_CAT, Position::new(10.0, 0.0, 3.0))
            .with_fixture(TAG_SPOTLIGHT_TARGET, Position::new(8.0, 0.0, 14.0))
            .with_fixture(TAG_LIGHT, Position::new(0.0, 5.0, 14.0))
            .with_fixture(TAG_LIGHT, Position::new(16.0, 5.0, 14.0))
            .with_fixture(TAG_PLAYER_SPAWN, Position::new(8.0, 0.0, 2.0))
    }

    fn run_setup(scene: &mut StaticScene) -> (SceneSetup, ActorStore, SpawnRegistry) {
        let mut store = ActorStore::new();
        let mut registry = SpawnRegistry::new();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let setup = setup_scene(scene, &mut store, &mut registry, &mut rng, &Tuning::default());
        (setup, store, registry)
    }

    fn forward(rotation: DQuat) -> DVec3 {
        rotation * DVec3::Z
    }

    #[test]
    fn test_setup_consumes_every_fixture() {
        let mut scene = yard();
        let (setup, mut store, registry) = run_setup(&mut scene);

        assert_eq!(setup.spawn_points, 2);
        assert_eq!(registry.len(), 2);
        assert_eq!(setup.moths, 3);
        assert_eq!(setup.cats, 1);
        assert_eq!(setup.spotlights, 2);
        assert_eq!(setup.player_spawn, Some(Position::new(8.0, 0.0, 2.0)));

        for tag in [
            TAG_HOSTILE_SPAWN,
            TAG_MOTH,
            TAG_CAT,
            TAG_SPOTLIGHT_TARGET,
            TAG_LIGHT,
            TAG_PLAYER_SPAWN,
        ] {
            for fixture in scene.find_by_tag(tag) {
                assert!(scene.is_hidden(fixture.id), "{tag} fixture left visible");
            }
        }

        let events = store.drain_events();
        let spawned_creatures = events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    SceneEvent::EntitySpawned {
                        kind: VisualKind::Moth | VisualKind::Cat,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(spawned_creatures, 4);
        let hidden = events
            .iter()
            .filter(|e| matches!(e, SceneEvent::FixtureHidden { .. }))
            .count();
        assert_eq!(hidden, 10);
    }

    #[test]
    fn test_empty_scene_is_valid() {
        let mut scene = StaticScene::new();
        let (setup, store, registry) = run_setup(&mut scene);
        assert_eq!(setup, SceneSetup::default());
        assert!(registry.is_empty());
        assert_eq!(store.world().len(), 0);
    }

    #[test]
    fn test_lights_without_target_are_left_alone() {
        let mut scene = StaticScene::new().with_fixture(TAG_LIGHT, Position::new(0.0, 5.0, 0.0));
        let (setup, mut store, _) = run_setup(&mut scene);
        assert_eq!(setup.spotlights, 0);
        let light = scene.find_by_tag(TAG_LIGHT)[0];
        assert!(!scene.is_hidden(light.id));
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn test_spotlight_properties() {
        let mut scene = yard();
        let (_, mut store, _) = run_setup(&mut scene);
        let spots: Vec<SpotlightSpec> = store
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                SceneEvent::SpotlightCreated { spotlight } => Some(spotlight),
                _ => None,
            })
            .collect();
        assert_eq!(spots.len(), 2);
        for spot in spots {
            assert_eq!(spot.inner_angle_deg, 25.0);
            assert_eq!(spot.outer_angle_deg, 45.0);
            assert_eq!(spot.intensity, 10_000.0);
            assert_eq!(spot.range, 30.0);
            assert!(spot.shadow);
            assert!(spot.rotation.is_normalized());
        }
    }

    #[test]
    fn test_spotlight_aims_at_target_and_tilts_down() {
        let from = Position::new(0.0, 0.0, 0.0);
        let target = Position::new(10.0, 0.0, 0.0);
        let f = forward(spotlight_rotation(&from, &target));

        let tilt = SPOTLIGHT_DOWN_TILT_DEG.to_radians();
        assert!((f.x - tilt.cos()).abs() < 1e-9, "forward {f:?}");
        assert!((f.y + tilt.sin()).abs() < 1e-9, "forward {f:?}");
        assert!(f.z.abs() < 1e-9, "forward {f:?}");
    }

    #[test]
    fn test_look_rotation_points_forward() {
        let dir = DVec3::new(-3.0, 2.0, 5.0);
        let f = forward(look_rotation(dir));
        assert!((f - dir.normalize()).length() < 1e-9);

        let up = look_rotation(DVec3::Y) * DVec3::Z;
        assert!((up - DVec3::Y).length() < 1e-9);

        assert_eq!(look_rotation(DVec3::ZERO), DQuat::IDENTITY);
    }

    #[test]
    fn test_player_spawn_uses_first_fixture() {
        let mut scene = StaticScene::new()
            .with_fixture(TAG_PLAYER_SPAWN, Position::new(1.0, 0.0, 1.0))
            .with_fixture(TAG_PLAYER_SPAWN, Position::new(9.0, 0.0, 9.0));
        let (setup, _, _) = run_setup(&mut scene);
        assert_eq!(setup.player_spawn, Some(Position::new(1.0, 0.0, 1.0)));
        let second = scene.find_by_tag(TAG_PLAYER_SPAWN)[1];
        assert!(!scene.is_hidden(second.id));
    }
}
