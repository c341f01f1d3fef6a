//! Combat resolution for a primary-action press.
//!
//! Picks the live hostile closest to the fixed reference point, within the
//! engagement distance, removes it, awards score and spawns a hit effect.
//! Candidates are visited in hecs query order (archetype, then slot); a
//! strict `<` keeps the first hostile found at the minimum distance.
//!
//! The reference point is a fixed nominal player position, not the live
//! avatar position.

use hecs::Entity;
use rand::Rng;
use tracing::debug;

use graveward_core::components::Hostile;
use graveward_core::types::Position;

use crate::actor_store::ActorStore;
use crate::config::Tuning;
use crate::scoreboard::Scoreboard;
use crate::systems::effects;

/// A resolved hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub entity: Entity,
    pub position: Position,
    pub distance: f64,
}

/// Nearest live hostile within `max_distance` of `reference`.
pub fn find_target(store: &ActorStore, reference: &Position, max_distance: f64) -> Option<Hit> {
    let mut best: Option<Hit> = None;

    for (entity, (pos, hostile)) in store.world().query::<(&Position, &Hostile)>().iter() {
        if !hostile.alive {
            continue;
        }
        let distance = reference.distance_to(pos);
        if distance > max_distance {
            continue;
        }
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Hit {
                entity,
                position: *pos,
                distance,
            });
        }
    }

    best
}

/// Resolve one press. Returns the hit, or `None` when nothing was in range.
pub fn run<R: Rng + ?Sized>(
    store: &mut ActorStore,
    scoreboard: &mut Scoreboard,
    rng: &mut R,
    tuning: &Tuning,
) -> Option<Hit> {
    let hit = find_target(
        store,
        &tuning.combat_reference_point,
        tuning.max_engagement_distance,
    )?;

    let position = store.kill_hostile(hit.entity)?;
    scoreboard.award(tuning.kill_bonus);
    effects::spawn_hit_effect(store, rng, position);

    debug!(
        distance = hit.distance,
        score = scoreboard.score(),
        "hostile_killed"
    );
    Some(hit)
}
