//! Owner of every simulated entity.
//!
//! All creation and destruction goes through `ActorStore` so the host
//! receives a matching `SceneEvent` for each. Destruction is deferred:
//! systems mark entities while iterating and `sweep` removes them once the
//! tick's systems have run.

use hecs::{Entity, World};

use graveward_core::components::{Cat, Hostile, Moth, Particle, Visual};
use graveward_core::enums::VisualKind;
use graveward_core::events::SceneEvent;
use graveward_core::types::{Heading, Position, Velocity};

/// Stable numeric id handed to the host for an entity.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

#[derive(Default)]
pub struct ActorStore {
    world: World,
    despawn_buffer: Vec<Entity>,
    events: Vec<SceneEvent>,
}

impl ActorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access for queries and snapshots.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access for systems that update components in place.
    /// Structural changes must go through the store's own methods.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn spawn_hostile(&mut self, position: Position, yaw: f64) -> Entity {
        let entity = self.world.spawn((
            Hostile { alive: true },
            position,
            Heading::new(yaw),
            Visual {
                kind: VisualKind::Hostile,
            },
        ));
        self.announce(entity, VisualKind::Hostile, position);
        entity
    }

    pub fn spawn_moth(&mut self, moth: Moth) -> Entity {
        let entity = self.world.spawn((
            moth,
            moth.start,
            Heading::default(),
            Visual {
                kind: VisualKind::Moth,
            },
        ));
        self.announce(entity, VisualKind::Moth, moth.start);
        entity
    }

    pub fn spawn_cat(&mut self, cat: Cat) -> Entity {
        let entity = self.world.spawn((
            cat,
            cat.start,
            Heading::new(cat.direction),
            Visual {
                kind: VisualKind::Cat,
            },
        ));
        self.announce(entity, VisualKind::Cat, cat.start);
        entity
    }

    pub fn spawn_particle(
        &mut self,
        position: Position,
        velocity: Velocity,
        particle: Particle,
    ) -> Entity {
        let kind = VisualKind::from(particle.kind);
        let entity = self
            .world
            .spawn((particle, position, velocity, Visual { kind }));
        self.announce(entity, kind, position);
        entity
    }

    /// Mark a live hostile as dead and queue it for removal.
    /// Returns its last position, or `None` if it was already dead or gone,
    /// so a hostile can only ever be removed once.
    pub fn kill_hostile(&mut self, entity: Entity) -> Option<Position> {
        {
            let mut hostile = self.world.get::<&mut Hostile>(entity).ok()?;
            if !hostile.alive {
                return None;
            }
            hostile.alive = false;
        }
        let position = self.world.get::<&Position>(entity).ok().map(|p| *p)?;
        self.despawn_buffer.push(entity);
        Some(position)
    }

    /// Queue any entity for removal at the next sweep.
    pub fn mark_for_despawn(&mut self, entity: Entity) {
        self.despawn_buffer.push(entity);
    }

    /// Hostiles that have not been killed or reached the line.
    pub fn live_hostile_count(&self) -> usize {
        self.world
            .query::<&Hostile>()
            .iter()
            .filter(|(_, hostile)| hostile.alive)
            .count()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Remove every marked entity. Duplicate marks are harmless.
    pub fn sweep(&mut self) {
        for entity in self.despawn_buffer.drain(..) {
            let kind = self.world.get::<&Visual>(entity).ok().map(|v| v.kind);
            if self.world.despawn(entity).is_ok() {
                if let Some(kind) = kind {
                    self.events.push(SceneEvent::EntityDespawned {
                        entity: entity_id(entity),
                        kind,
                    });
                }
            }
        }
    }

    /// Queue a scene event not tied to entity creation (fixtures, lights).
    pub fn push_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    /// Take the scene events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    fn announce(&mut self, entity: Entity, kind: VisualKind, position: Position) {
        self.events.push(SceneEvent::EntitySpawned {
            entity: entity_id(entity),
            kind,
            position,
        });
    }
}
