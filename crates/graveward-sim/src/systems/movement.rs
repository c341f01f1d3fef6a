//! Hostile advance toward the defended line.
//!
//! Every live hostile loses a fixed amount of depth per tick. Reaching the
//! line removes it and costs score.

use hecs::Entity;
use tracing::debug;

use graveward_core::components::Hostile;
use graveward_core::constants::ARRIVAL_EPSILON;
use graveward_core::types::Position;

use crate::actor_store::ActorStore;
use crate::config::Tuning;
use crate::scoreboard::Scoreboard;

/// Advance all live hostiles. Returns how many reached the line this tick.
pub fn run(store: &mut ActorStore, scoreboard: &mut Scoreboard, tuning: &Tuning) -> u32 {
    let mut arrived: Vec<Entity> = Vec::new();

    for (entity, (pos, hostile)) in store
        .world_mut()
        .query_mut::<(&mut Position, &Hostile)>()
    {
        if !hostile.alive {
            continue;
        }
        pos.z -= tuning.hostile_speed_per_tick;
        if has_arrived(pos, tuning) {
            arrived.push(entity);
        }
    }

    let mut count = 0;
    for entity in arrived {
        if store.kill_hostile(entity).is_some() {
            scoreboard.penalize(tuning.arrival_penalty);
            count += 1;
            debug!(score = scoreboard.score(), "hostile_reached_line");
        }
    }
    count
}

fn has_arrived(pos: &Position, tuning: &Tuning) -> bool {
    pos.z <= tuning.defended_line_z + ARRIVAL_EPSILON
}
