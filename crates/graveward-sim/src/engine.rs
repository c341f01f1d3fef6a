//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world (through `ActorStore`), the
//! session state and the seeded RNG. It processes player commands, runs all
//! systems once per tick and produces `GameStateSnapshot`s. Completely
//! headless, which keeps whole sessions deterministic and testable.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use graveward_core::commands::PlayerCommand;
use graveward_core::events::SceneEvent;
use graveward_core::state::{GameStateSnapshot, HudSnapshot};
use graveward_core::types::{Position, SimTime};

use crate::actor_store::ActorStore;
use crate::config::{SimConfig, Tuning};
use crate::host::EntityDirectory;
use crate::input::{EdgeTrigger, TickInput};
use crate::scene::{self, SceneSetup};
use crate::scoreboard::Scoreboard;
use crate::spawn_registry::SpawnRegistry;
use crate::systems;
use crate::systems::wave_director::WaveDirector;

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    store: ActorStore,
    registry: SpawnRegistry,
    director: WaveDirector,
    scoreboard: Scoreboard,
    time: SimTime,
    tuning: Tuning,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    trigger: EdgeTrigger,
    /// Set by a queued `PrimaryAction`, consumed by the next tick.
    queued_press: bool,
    player_spawn: Option<Position>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let SimConfig { seed, tuning } = config;
        Self {
            store: ActorStore::new(),
            registry: SpawnRegistry::new(),
            director: WaveDirector::new(&tuning),
            scoreboard: Scoreboard::new(tuning.countdown_start_secs),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            command_queue: VecDeque::new(),
            trigger: EdgeTrigger::default(),
            queued_press: false,
            player_spawn: None,
            tuning,
        }
    }

    /// Read the host's fixtures and build the initial scene. Call once,
    /// before the first tick.
    pub fn setup_scene(&mut self, directory: &mut dyn EntityDirectory) -> SceneSetup {
        let setup = scene::setup_scene(
            directory,
            &mut self.store,
            &mut self.registry,
            &mut self.rng,
            &self.tuning,
        );
        self.player_spawn = setup.player_spawn;
        setup
    }

    /// Begin the session. A second call has no effect.
    pub fn start_session(&mut self) {
        if !self.scoreboard.start() {
            debug!("session already started");
            return;
        }
        self.director.start_session(&self.tuning);

        match self.player_spawn {
            Some(position) => self
                .store
                .push_event(SceneEvent::PlayerTeleportRequested { position }),
            None => info!("no player spawn recorded, teleport skipped"),
        }
        info!(tick = self.time.tick, "session_started");
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &TickInput) -> GameStateSnapshot {
        self.process_commands();

        // Sampled every tick so a button held through session start does
        // not count as a fresh press afterwards.
        let edge = self.trigger.pressed(input.primary_action);
        let pressed = edge || std::mem::take(&mut self.queued_press);

        self.time.advance();
        self.run_systems(pressed);

        let events = self.store.drain_events();
        systems::snapshot::build_snapshot(
            &self.store,
            &self.time,
            &self.director,
            &self.scoreboard,
            events,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn hud(&self) -> HudSnapshot {
        self.scoreboard.hud()
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    pub fn registry(&self) -> &SpawnRegistry {
        &self.registry
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Get a read-only reference to the actor store.
    pub fn store(&self) -> &ActorStore {
        &self.store
    }

    /// Spawn a hostile directly, bypassing the wave director (for testing).
    #[cfg(test)]
    pub fn spawn_test_hostile(&mut self, position: Position) -> hecs::Entity {
        self.store.spawn_hostile(position, 0.0)
    }

    /// Register a spawn point without a scene (for testing).
    #[cfg(test)]
    pub fn register_test_spawn(&mut self, position: Position) {
        self.registry.register(position);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => self.start_session(),
            PlayerCommand::PrimaryAction => self.queued_press = true,
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, pressed: bool) {
        if self.scoreboard.started() {
            // 1. Session clock and countdown
            self.scoreboard.advance_session();
            // 2. Wave timing and spawning
            systems::wave_director::run(
                &mut self.director,
                &mut self.store,
                &self.registry,
                &mut self.scoreboard,
                &mut self.rng,
                &self.tuning,
            );
            // 3. Hostile advance, arrival penalty
            systems::movement::run(&mut self.store, &mut self.scoreboard, &self.tuning);
            // 4. Combat, only on a press
            if pressed {
                systems::combat::run(
                    &mut self.store,
                    &mut self.scoreboard,
                    &mut self.rng,
                    &self.tuning,
                );
            }
        }
        // 5. Particles
        systems::effects::run(&mut self.store);
        // 6. Moths and cats, animated on session time
        if self.scoreboard.started() {
            systems::ambient::run(&mut self.store, self.scoreboard.session_ticks() as f64);
        }
        // 7. Remove everything marked this tick
        self.store.sweep();
    }
}
