//! Hit-effect particles: one static flash plus a burst of shrinking scatter.
//!
//! Lifetimes are whole ticks. A particle is removed by the update that takes
//! its lifetime to zero, so a flash created during tick N is gone after the
//! update of tick N + 5 (its sixth update).

use hecs::Entity;
use rand::Rng;

use graveward_core::components::Particle;
use graveward_core::constants::*;
use graveward_core::enums::ParticleKind;
use graveward_core::types::{Position, Velocity};

use crate::actor_store::ActorStore;

/// Spawn the flash and scatter burst at `position`.
pub fn spawn_hit_effect<R: Rng + ?Sized>(store: &mut ActorStore, rng: &mut R, position: Position) {
    store.spawn_particle(
        position,
        Velocity::ZERO,
        Particle {
            kind: ParticleKind::Flash,
            lifetime: FLASH_LIFETIME_TICKS,
            initial_lifetime: FLASH_LIFETIME_TICKS,
            base_scale: FLASH_SCALE,
            scale: FLASH_SCALE,
        },
    );

    for _ in 0..SCATTER_COUNT {
        let start = Position::new(
            position.x + rng.gen_range(-SCATTER_OFFSET..SCATTER_OFFSET),
            position.y + rng.gen_range(-SCATTER_OFFSET..SCATTER_OFFSET),
            position.z + rng.gen_range(-SCATTER_OFFSET..SCATTER_OFFSET),
        );
        let velocity = Velocity::new(
            rng.gen_range(-SCATTER_HORIZONTAL_SPEED..SCATTER_HORIZONTAL_SPEED),
            rng.gen_range(SCATTER_VERTICAL_SPEED_MIN..SCATTER_VERTICAL_SPEED_MAX),
            rng.gen_range(-SCATTER_HORIZONTAL_SPEED..SCATTER_HORIZONTAL_SPEED),
        );
        store.spawn_particle(
            start,
            velocity,
            Particle {
                kind: ParticleKind::Scatter,
                lifetime: SCATTER_LIFETIME_TICKS,
                initial_lifetime: SCATTER_LIFETIME_TICKS,
                base_scale: SCATTER_BASE_SCALE,
                scale: SCATTER_BASE_SCALE,
            },
        );
    }
}

/// Scale of a moving particle with `lifetime` ticks left.
pub fn scale_for(lifetime: u32, initial_lifetime: u32, base_scale: f64) -> f64 {
    if initial_lifetime == 0 {
        return 0.0;
    }
    lifetime as f64 / initial_lifetime as f64 * base_scale
}

/// Age every particle by one tick and mark expired ones for removal.
pub fn run(store: &mut ActorStore) {
    let mut expired: Vec<Entity> = Vec::new();

    for (entity, (pos, velocity, particle)) in store
        .world_mut()
        .query_mut::<(&mut Position, &Velocity, &mut Particle)>()
    {
        particle.lifetime = particle.lifetime.saturating_sub(1);

        // The flash stays put at full size until it disappears.
        if !velocity.is_zero() {
            *pos = pos.offset(velocity);
            particle.scale =
                scale_for(particle.lifetime, particle.initial_lifetime, particle.base_scale);
        }

        if particle.lifetime == 0 {
            expired.push(entity);
        }
    }

    for entity in expired {
        store.mark_for_despawn(entity);
    }
}
