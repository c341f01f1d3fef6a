//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only. Views are sorted by entity id so two runs with the same seed
//! serialize identically.

use hecs::World;

use graveward_core::components::{Hostile, Particle, Visual};
use graveward_core::enums::VisualKind;
use graveward_core::events::SceneEvent;
use graveward_core::state::*;
use graveward_core::types::{Heading, Position, SimTime};

use crate::actor_store::{entity_id, ActorStore};
use crate::scoreboard::Scoreboard;
use crate::systems::wave_director::WaveDirector;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    store: &ActorStore,
    time: &SimTime,
    director: &WaveDirector,
    scoreboard: &Scoreboard,
    scene_events: Vec<SceneEvent>,
) -> GameStateSnapshot {
    let world = store.world();
    let hostiles = build_hostiles(world);

    GameStateSnapshot {
        time: *time,
        hud: scoreboard.hud(),
        wave: WaveView {
            phase: director.phase(),
            quota: director.quota(),
            spawned: director.spawned_this_wave(),
            live_hostiles: hostiles.len() as u32,
        },
        hostiles,
        creatures: build_creatures(world),
        particles: build_particles(world),
        scene_events,
    }
}

/// Live hostiles only; killed ones are waiting for the sweep.
fn build_hostiles(world: &World) -> Vec<HostileView> {
    let mut views: Vec<HostileView> = world
        .query::<(&Position, &Heading, &Hostile)>()
        .iter()
        .filter(|(_, (_, _, hostile))| hostile.alive)
        .map(|(entity, (pos, heading, _))| HostileView {
            entity: entity_id(entity),
            position: *pos,
            heading: heading.yaw,
        })
        .collect();

    views.sort_by_key(|v| v.entity);
    views
}

fn build_creatures(world: &World) -> Vec<CreatureView> {
    let mut views: Vec<CreatureView> = world
        .query::<(&Position, &Heading, &Visual)>()
        .iter()
        .filter(|(_, (_, _, visual))| matches!(visual.kind, VisualKind::Moth | VisualKind::Cat))
        .map(|(entity, (pos, heading, visual))| CreatureView {
            entity: entity_id(entity),
            kind: visual.kind,
            position: *pos,
            heading: heading.yaw,
        })
        .collect();

    views.sort_by_key(|v| v.entity);
    views
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    let mut views: Vec<ParticleView> = world
        .query::<(&Position, &Particle)>()
        .iter()
        .map(|(entity, (pos, particle))| ParticleView {
            entity: entity_id(entity),
            kind: particle.kind,
            position: *pos,
            scale: particle.scale,
            lifetime: particle.lifetime,
        })
        .collect();

    views.sort_by_key(|v| v.entity);
    views
}
