//! Simulation constants and reference tuning.

use crate::types::Position;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Scene fixture tags ---

/// Fixtures marking hostile spawn locations.
pub const TAG_HOSTILE_SPAWN: &str = "enemyspawn";

/// Fixtures marking where moths are placed.
pub const TAG_MOTH: &str = "moth";

/// Fixtures marking where cats are placed.
pub const TAG_CAT: &str = "cat";

/// Fixture marking the player's start position.
pub const TAG_PLAYER_SPAWN: &str = "playerspawn";

/// Fixture every spotlight is aimed at.
pub const TAG_SPOTLIGHT_TARGET: &str = "spotlightlook";

/// Fixtures replaced by spotlights.
pub const TAG_LIGHT: &str = "Light";

// --- Waves ---

/// Hostiles in wave 1.
pub const WAVE_BASE_COUNT: u32 = 5;

/// Additional hostiles per wave after the first.
pub const WAVE_COUNT_INCREMENT: u32 = 2;

/// Delay before a wave starts spawning (seconds).
pub const WAVE_PRE_DELAY_SECS: f64 = 3.0;

/// Time between spawns inside a wave (seconds).
pub const WAVE_SPAWN_CADENCE_SECS: f64 = 2.0;

/// Countdown shown at session start and reset at the start of each later wave.
pub const COUNTDOWN_START_SECS: u32 = 30;

/// Hostiles appear this far above their spawn fixture.
pub const SPAWN_HEIGHT_OFFSET: f64 = 1.0;

/// Point every freshly spawned hostile turns to face.
pub const HOSTILE_FACING_TARGET: Position = Position::new(8.0, 0.0, 0.0);

// --- Movement ---

/// Depth lost per tick by every live hostile.
pub const HOSTILE_SPEED_PER_TICK: f64 = 0.02;

/// Depth of the defended line.
pub const DEFENDED_LINE_Z: f64 = 8.0;

/// Tolerance for the arrival comparison, absorbs accumulated subtraction error.
pub const ARRIVAL_EPSILON: f64 = 1e-9;

/// Score lost when a hostile reaches the defended line.
pub const ARRIVAL_PENALTY: u32 = 20;

// --- Combat ---

/// Score gained per kill.
pub const KILL_BONUS: u32 = 10;

/// Nominal player position used for target selection.
pub const COMBAT_REFERENCE_POINT: Position = Position::new(8.0, 1.0, 4.0);

/// Hostiles further than this from the reference point cannot be targeted.
pub const MAX_ENGAGEMENT_DISTANCE: f64 = 50.0;

// --- Hit effects ---

/// Lifetime of the static flash (ticks).
pub const FLASH_LIFETIME_TICKS: u32 = 6;

/// Visual scale of the flash.
pub const FLASH_SCALE: f64 = 0.4;

/// Lifetime of each scatter particle (ticks).
pub const SCATTER_LIFETIME_TICKS: u32 = 18;

/// Scatter particles per hit.
pub const SCATTER_COUNT: usize = 5;

/// Visual scale of a fresh scatter particle.
pub const SCATTER_BASE_SCALE: f64 = 0.12;

/// Max spawn offset per axis around the hit point.
pub const SCATTER_OFFSET: f64 = 0.15;

/// Max horizontal scatter speed per axis (units per tick).
pub const SCATTER_HORIZONTAL_SPEED: f64 = 0.075;

/// Upward scatter speed range (units per tick).
pub const SCATTER_VERTICAL_SPEED_MIN: f64 = 0.02;
pub const SCATTER_VERTICAL_SPEED_MAX: f64 = 0.17;

// --- Moths ---

/// Orbit radius around the moth's fixture.
pub const MOTH_ORBIT_RADIUS: f64 = 0.5;

/// Bobbing frequency applied to animation time.
pub const MOTH_BOB_FREQUENCY: f64 = 0.1;

/// Fleeing moths are removed once this far past their start depth.
pub const MOTH_FLEE_CLEANUP_DISTANCE: f64 = 30.0;

pub const MOTH_FLY_SPEED_MIN: f64 = 0.05;
pub const MOTH_FLY_SPEED_MAX: f64 = 0.15;
pub const MOTH_VERTICAL_SPEED_MIN: f64 = 0.1;
pub const MOTH_VERTICAL_SPEED_MAX: f64 = 0.3;

/// Probability that a moth flees instead of orbiting.
pub const MOTH_FLEE_CHANCE: f64 = 0.5;

// --- Cats ---

/// Ticks a cat idles before patrolling.
pub const CAT_IDLE_TICKS: u32 = 120;

/// Ticks a cat patrols before idling again.
pub const CAT_MOVE_TICKS: u32 = 300;

/// Patrol speed (units per tick).
pub const CAT_SPEED_PER_TICK: f64 = 0.01;

pub const CAT_PATROL_RADIUS_MIN: f64 = 1.0;
pub const CAT_PATROL_RADIUS_MAX: f64 = 3.0;

/// Max random offset of the cat's start from its fixture (x and z).
pub const CAT_START_JITTER: f64 = 0.5;

/// Idle sway amplitude (radians) and rate (radians per tick).
pub const CAT_SWAY_AMPLITUDE: f64 = 0.2;
pub const CAT_SWAY_RATE: f64 = 0.05;

// --- Spotlight rig ---

pub const SPOTLIGHT_DOWN_TILT_DEG: f64 = 30.0;
pub const SPOTLIGHT_INNER_ANGLE_DEG: f64 = 25.0;
pub const SPOTLIGHT_OUTER_ANGLE_DEG: f64 = 45.0;
pub const SPOTLIGHT_INTENSITY: f64 = 10_000.0;
pub const SPOTLIGHT_RANGE: f64 = 30.0;
