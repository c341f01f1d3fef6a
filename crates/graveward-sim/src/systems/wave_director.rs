//! Wave director: spawns hostiles on a timer and advances waves once cleared.
//!
//! Per wave: `Idle` (pre-delay) → `Spawning` (cadence until quota) →
//! `AwaitingClear` → `Idle` of the next wave.

use rand::Rng;
use tracing::{debug, info, warn};

use graveward_core::constants::{HOSTILE_FACING_TARGET, SPAWN_HEIGHT_OFFSET};
use graveward_core::enums::WavePhase;
use graveward_core::types::Position;

use crate::actor_store::ActorStore;
use crate::config::Tuning;
use crate::scoreboard::Scoreboard;
use crate::spawn_registry::SpawnRegistry;

/// Wave timing state.
#[derive(Debug, Clone)]
pub struct WaveDirector {
    wave_number: u32,
    quota: u32,
    spawned_this_wave: u32,
    active: bool,
    spawn_timer: u32,
    pre_delay_timer: u32,
}

impl WaveDirector {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            wave_number: 1,
            quota: tuning.quota_for_wave(1),
            spawned_this_wave: 0,
            active: false,
            spawn_timer: 0,
            pre_delay_timer: 0,
        }
    }

    /// Reset to the beginning of wave 1.
    pub fn start_session(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    pub fn wave_number(&self) -> u32 {
        self.wave_number
    }

    pub fn quota(&self) -> u32 {
        self.quota
    }

    pub fn spawned_this_wave(&self) -> u32 {
        self.spawned_this_wave
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> WavePhase {
        if !self.active {
            WavePhase::Idle
        } else if self.spawned_this_wave < self.quota {
            WavePhase::Spawning
        } else {
            WavePhase::AwaitingClear
        }
    }
}

/// Advance wave timers, spawn when due, and check for wave completion.
pub fn run<R: Rng + ?Sized>(
    director: &mut WaveDirector,
    store: &mut ActorStore,
    registry: &SpawnRegistry,
    scoreboard: &mut Scoreboard,
    rng: &mut R,
    tuning: &Tuning,
) {
    if !director.active {
        director.pre_delay_timer += 1;
        if director.pre_delay_timer >= tuning.pre_delay_ticks() {
            director.active = true;
            director.pre_delay_timer = 0;
            info!(
                wave = director.wave_number,
                quota = director.quota,
                "wave_started"
            );
            spawn_hostile(director, store, registry, rng);
            director.spawn_timer = 0;
        }
    } else {
        director.spawn_timer += 1;
        if director.spawn_timer >= tuning.spawn_cadence_ticks()
            && director.spawned_this_wave < director.quota
        {
            spawn_hostile(director, store, registry, rng);
            director.spawn_timer = 0;
        }
    }

    // Checked regardless of `active`: a wave whose quota is met clears on the
    // first tick with no live hostile.
    if director.spawned_this_wave >= director.quota && store.live_hostile_count() == 0 {
        director.active = false;
        director.wave_number += 1;
        director.quota = tuning.quota_for_wave(director.wave_number);
        director.spawned_this_wave = 0;
        director.spawn_timer = 0;
        director.pre_delay_timer = 0;

        scoreboard.set_wave(director.wave_number);
        if director.wave_number >= 2 {
            scoreboard.reset_countdown();
        }
        info!(
            wave = director.wave_number,
            quota = director.quota,
            score = scoreboard.score(),
            "wave_cleared"
        );
    }
}

/// Spawn one hostile at a random registered point. No-op on an empty registry.
fn spawn_hostile<R: Rng + ?Sized>(
    director: &mut WaveDirector,
    store: &mut ActorStore,
    registry: &SpawnRegistry,
    rng: &mut R,
) -> bool {
    if director.spawned_this_wave >= director.quota {
        return false;
    }
    let Some(point) = registry.choose(rng) else {
        warn!(
            wave = director.wave_number,
            "no hostile spawn points registered, spawn skipped"
        );
        return false;
    };

    let position = Position::new(point.x, point.y + SPAWN_HEIGHT_OFFSET, point.z);
    let yaw = position.yaw_to(&HOSTILE_FACING_TARGET);
    store.spawn_hostile(position, yaw);
    director.spawned_this_wave += 1;

    debug!(
        wave = director.wave_number,
        spawned = director.spawned_this_wave,
        quota = director.quota,
        x = position.x,
        z = position.z,
        "hostile_spawned"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use graveward_core::components::Hostile;
    use graveward_core::constants::COUNTDOWN_START_SECS;
    use graveward_core::types::Heading;

    struct Fixture {
        director: WaveDirector,
        store: ActorStore,
        registry: SpawnRegistry,
        scoreboard: Scoreboard,
        rng: ChaCha8Rng,
        tuning: Tuning,
    }

    impl Fixture {
        fn new(registry: SpawnRegistry) -> Self {
            let tuning = Tuning::default();
            let mut scoreboard = Scoreboard::new(tuning.countdown_start_secs);
            scoreboard.start();
            Self {
                director: WaveDirector::new(&tuning),
                store: ActorStore::new(),
                registry,
                scoreboard,
                rng: ChaCha8Rng::seed_from_u64(5),
                tuning,
            }
        }

        fn tick(&mut self) {
            run(
                &mut self.director,
                &mut self.store,
                &self.registry,
                &mut self.scoreboard,
                &mut self.rng,
                &self.tuning,
            );
            self.store.sweep();
        }

        fn kill_all(&mut self) {
            let hostiles: Vec<hecs::Entity> = self
                .store
                .world()
                .query::<&Hostile>()
                .iter()
                .map(|(e, _)| e)
                .collect();
            for e in hostiles {
                self.store.kill_hostile(e);
            }
            self.store.sweep();
        }
    }

    fn three_points() -> SpawnRegistry {
        SpawnRegistry::from_points([
            Position::new(2.0, 0.0, 20.0),
            Position::new(8.0, 0.0, 20.0),
            Position::new(14.0, 0.0, 20.0),
        ])
    }

    #[test]
    fn test_first_spawn_after_pre_delay_then_cadence() {
        let mut f = Fixture::new(three_points());

        for _ in 0..179 {
            f.tick();
        }
        assert_eq!(f.store.live_hostile_count(), 0);
        assert_eq!(f.director.phase(), WavePhase::Idle);

        f.tick();
        assert_eq!(f.store.live_hostile_count(), 1, "spawn immediately at pre-delay");
        assert_eq!(f.director.phase(), WavePhase::Spawning);

        for _ in 0..119 {
            f.tick();
            assert_eq!(f.store.live_hostile_count(), 1, "no spawn before cadence");
        }
        f.tick();
        assert_eq!(f.store.live_hostile_count(), 2);
    }

    #[test]
    fn test_spawned_never_exceeds_quota() {
        let mut f = Fixture::new(three_points());
        for _ in 0..5_000 {
            f.tick();
            assert!(f.director.spawned_this_wave() <= f.director.quota());
        }
        assert_eq!(f.director.spawned_this_wave(), 5);
        assert_eq!(f.director.phase(), WavePhase::AwaitingClear);
        assert_eq!(f.director.wave_number(), 1, "live hostiles block the advance");
    }

    #[test]
    fn test_wave_advances_only_when_clear() {
        let mut f = Fixture::new(three_points());
        while f.director.spawned_this_wave() < f.director.quota() {
            f.tick();
        }

        // Kill all but one: still wave 1.
        let hostiles: Vec<hecs::Entity> = f
            .store
            .world()
            .query::<&Hostile>()
            .iter()
            .map(|(e, _)| e)
            .collect();
        for e in &hostiles[1..] {
            f.store.kill_hostile(*e);
        }
        f.store.sweep();
        f.tick();
        assert_eq!(f.director.wave_number(), 1);

        f.kill_all();
        f.scoreboard.tick_countdown();
        f.tick();
        assert_eq!(f.director.wave_number(), 2);
        assert_eq!(f.director.quota(), 7);
        assert_eq!(f.director.spawned_this_wave(), 0);
        assert!(!f.director.is_active());
        assert_eq!(f.scoreboard.wave_number(), 2);
        assert_eq!(f.scoreboard.countdown_secs(), COUNTDOWN_START_SECS);
    }

    #[test]
    fn test_next_wave_waits_for_pre_delay_again() {
        let mut f = Fixture::new(three_points());
        while f.director.spawned_this_wave() < f.director.quota() {
            f.tick();
        }
        f.kill_all();
        f.tick();
        assert_eq!(f.director.wave_number(), 2);

        for _ in 0..179 {
            f.tick();
        }
        assert_eq!(f.store.live_hostile_count(), 0);
        f.tick();
        assert_eq!(f.store.live_hostile_count(), 1);
    }

    #[test]
    fn test_empty_registry_stalls_without_spawning() {
        let mut f = Fixture::new(SpawnRegistry::new());
        for _ in 0..2_000 {
            f.tick();
        }
        assert_eq!(f.store.live_hostile_count(), 0);
        assert_eq!(f.director.spawned_this_wave(), 0);
        assert_eq!(f.director.wave_number(), 1);
    }

    #[test]
    fn test_spawn_lifted_and_facing_target() {
        let mut f = Fixture::new(SpawnRegistry::from_points([Position::new(
            14.0, 0.5, 20.0,
        )]));
        for _ in 0..180 {
            f.tick();
        }
        let (pos, heading) = f
            .store
            .world()
            .query::<(&Position, &Heading, &Hostile)>()
            .iter()
            .map(|(_, (p, h, _))| (*p, *h))
            .next()
            .unwrap();
        assert_eq!(pos, Position::new(14.0, 1.5, 20.0));
        let expected = Heading::new(pos.yaw_to(&HOSTILE_FACING_TARGET));
        assert!((heading.yaw - expected.yaw).abs() < 1e-12);
    }
}
