//! Ambient creature motion: moths orbit or flee, cats idle and patrol.
//!
//! None of this interacts with combat. Per-instance parameters are rolled
//! once from the simulation RNG when the creature is created.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use hecs::Entity;
use rand::Rng;

use graveward_core::components::{Cat, Moth};
use graveward_core::constants::*;
use graveward_core::enums::{CatPhase, MothMode};
use graveward_core::types::{Heading, Position};

use crate::actor_store::ActorStore;

/// Roll a moth for the fixture at `start`.
pub fn roll_moth<R: Rng + ?Sized>(rng: &mut R, start: Position, flee_chance: f64) -> Moth {
    let mode = if rng.gen_bool(flee_chance.clamp(0.0, 1.0)) {
        MothMode::Flee
    } else {
        MothMode::Orbit
    };
    Moth {
        mode,
        fly_speed: rng.gen_range(MOTH_FLY_SPEED_MIN..MOTH_FLY_SPEED_MAX),
        vertical_speed: rng.gen_range(MOTH_VERTICAL_SPEED_MIN..MOTH_VERTICAL_SPEED_MAX),
        start,
    }
}

/// Roll a cat for the fixture at `marker`.
pub fn roll_cat<R: Rng + ?Sized>(rng: &mut R, marker: Position) -> Cat {
    let start = Position::new(
        marker.x + rng.gen_range(-CAT_START_JITTER..CAT_START_JITTER),
        marker.y,
        marker.z + rng.gen_range(-CAT_START_JITTER..CAT_START_JITTER),
    );
    Cat {
        start,
        patrol_radius: rng.gen_range(CAT_PATROL_RADIUS_MIN..CAT_PATROL_RADIUS_MAX),
        direction: rng.gen_range(0.0..TAU),
        phase: CatPhase::Idle,
        timer: 0,
    }
}

/// Update every ambient creature. `anim_time` is the session frame count.
pub fn run(store: &mut ActorStore, anim_time: f64) {
    let mut gone: Vec<Entity> = Vec::new();

    for (entity, (pos, heading, moth)) in store
        .world_mut()
        .query_mut::<(&mut Position, &mut Heading, &Moth)>()
    {
        if update_moth(moth, pos, heading, anim_time) {
            gone.push(entity);
        }
    }

    for (_entity, (pos, heading, cat)) in store
        .world_mut()
        .query_mut::<(&mut Position, &mut Heading, &mut Cat)>()
    {
        update_cat(cat, pos, heading);
    }

    for entity in gone {
        store.mark_for_despawn(entity);
    }
}

/// Returns true once a fleeing moth is past the cleanup distance.
fn update_moth(moth: &Moth, pos: &mut Position, heading: &mut Heading, anim_time: f64) -> bool {
    let bob = (anim_time * MOTH_BOB_FREQUENCY).sin() * moth.vertical_speed;
    pos.y = moth.start.y + bob;

    match moth.mode {
        MothMode::Orbit => {
            let angle = anim_time * moth.fly_speed;
            pos.x = moth.start.x + angle.cos() * MOTH_ORBIT_RADIUS;
            pos.z = moth.start.z + angle.sin() * MOTH_ORBIT_RADIUS;
            // Tangent of the circle at `angle`.
            *heading = Heading::new((-angle.sin()).atan2(angle.cos()));
            false
        }
        MothMode::Flee => {
            pos.z += moth.fly_speed;
            *heading = Heading::new(0.0);
            pos.z - moth.start.z > MOTH_FLEE_CLEANUP_DISTANCE
        }
    }
}

fn update_cat(cat: &mut Cat, pos: &mut Position, heading: &mut Heading) {
    cat.timer += 1;
    pos.y = cat.start.y;

    match cat.phase {
        CatPhase::Idle => {
            let sway = (cat.timer as f64 * CAT_SWAY_RATE).sin() * CAT_SWAY_AMPLITUDE;
            *heading = Heading::new(cat.direction + sway);
            if cat.timer >= CAT_IDLE_TICKS {
                cat.phase = CatPhase::Moving;
                cat.timer = 0;
            }
        }
        CatPhase::Moving => {
            pos.x += cat.direction.sin() * CAT_SPEED_PER_TICK;
            pos.z += cat.direction.cos() * CAT_SPEED_PER_TICK;

            let dx = pos.x - cat.start.x;
            let dz = pos.z - cat.start.z;
            let outward = dx * cat.direction.sin() + dz * cat.direction.cos() > 0.0;
            if (dx * dx + dz * dz).sqrt() > cat.patrol_radius && outward {
                cat.direction = (cat.direction + PI).rem_euclid(TAU);
            }

            if cat.timer >= CAT_MOVE_TICKS {
                cat.phase = CatPhase::Idle;
                cat.timer = 0;
                cat.direction = (cat.direction + FRAC_PI_2).rem_euclid(TAU);
            }
            *heading = Heading::new(cat.direction);
        }
    }
}
