//! Simulation configuration: RNG seed plus gameplay tuning.
//!
//! `Tuning` defaults to the reference values in `graveward_core::constants`
//! and can be overridden from JSON. Missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use graveward_core::constants::*;
use graveward_core::types::{secs_to_ticks, Position};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay tuning values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub wave_base_count: u32,
    pub wave_count_increment: u32,
    pub wave_pre_delay_secs: f64,
    pub wave_spawn_cadence_secs: f64,
    pub countdown_start_secs: u32,
    pub hostile_speed_per_tick: f64,
    pub defended_line_z: f64,
    pub arrival_penalty: u32,
    pub kill_bonus: u32,
    pub combat_reference_point: Position,
    pub max_engagement_distance: f64,
    pub moth_flee_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            wave_base_count: WAVE_BASE_COUNT,
            wave_count_increment: WAVE_COUNT_INCREMENT,
            wave_pre_delay_secs: WAVE_PRE_DELAY_SECS,
            wave_spawn_cadence_secs: WAVE_SPAWN_CADENCE_SECS,
            countdown_start_secs: COUNTDOWN_START_SECS,
            hostile_speed_per_tick: HOSTILE_SPEED_PER_TICK,
            defended_line_z: DEFENDED_LINE_Z,
            arrival_penalty: ARRIVAL_PENALTY,
            kill_bonus: KILL_BONUS,
            combat_reference_point: COMBAT_REFERENCE_POINT,
            max_engagement_distance: MAX_ENGAGEMENT_DISTANCE,
            moth_flee_chance: MOTH_FLEE_CHANCE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wave_base_count == 0 {
            return Err(ConfigError::Invalid {
                field: "wave_base_count",
                reason: "must be at least 1",
            });
        }
        if !(self.wave_pre_delay_secs >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "wave_pre_delay_secs",
                reason: "must be non-negative",
            });
        }
        if !(self.wave_spawn_cadence_secs > 0.0) {
            return Err(ConfigError::Invalid {
                field: "wave_spawn_cadence_secs",
                reason: "must be positive",
            });
        }
        if !(self.hostile_speed_per_tick > 0.0) {
            return Err(ConfigError::Invalid {
                field: "hostile_speed_per_tick",
                reason: "must be positive",
            });
        }
        if !self.defended_line_z.is_finite() {
            return Err(ConfigError::Invalid {
                field: "defended_line_z",
                reason: "must be finite",
            });
        }
        if !(self.max_engagement_distance >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "max_engagement_distance",
                reason: "must be non-negative",
            });
        }
        if !(0.0..=1.0).contains(&self.moth_flee_chance) {
            return Err(ConfigError::Invalid {
                field: "moth_flee_chance",
                reason: "must be within 0..=1",
            });
        }
        Ok(())
    }

    /// Hostiles required in `wave` (1-based).
    pub fn quota_for_wave(&self, wave: u32) -> u32 {
        wave.saturating_sub(1)
            .saturating_mul(self.wave_count_increment)
            .saturating_add(self.wave_base_count)
    }

    pub fn pre_delay_ticks(&self) -> u32 {
        secs_to_ticks(self.wave_pre_delay_secs)
    }

    /// Never zero, so the cadence always advances.
    pub fn spawn_cadence_ticks(&self) -> u32 {
        secs_to_ticks(self.wave_spawn_cadence_secs).max(1)
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_saturates_on_huge_increment() {
        let tuning = Tuning::from_json_str(r#"{ "wave_count_increment": 4000000000 }"#).unwrap();
        assert_eq!(tuning.quota_for_wave(1), tuning.wave_base_count);
        assert_eq!(tuning.quota_for_wave(3), u32::MAX);
        assert_eq!(tuning.quota_for_wave(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_quota_formula() {
        let tuning = Tuning::default();
        for wave in 1..50 {
            assert_eq!(tuning.quota_for_wave(wave), 5 + 2 * (wave - 1));
            assert!(tuning.quota_for_wave(wave + 1) > tuning.quota_for_wave(wave));
        }
    }

    #[test]
    fn test_reference_timings() {
        let tuning = Tuning::default();
        assert_eq!(tuning.pre_delay_ticks(), 180);
        assert_eq!(tuning.spawn_cadence_ticks(), 120);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "wave_base_count": 3, "kill_bonus": 25 }"#).unwrap();
        assert_eq!(tuning.wave_base_count, 3);
        assert_eq!(tuning.kill_bonus, 25);
        assert_eq!(tuning.wave_count_increment, WAVE_COUNT_INCREMENT);
        assert_eq!(tuning.combat_reference_point, COMBAT_REFERENCE_POINT);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(Tuning::from_json_str(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json_str(r#"{ "wave_base_count": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "wave_base_count",
                ..
            }
        ));

        let err = Tuning::from_json_str(r#"{ "wave_spawn_cadence_secs": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "wave_spawn_cadence_secs",
                ..
            }
        ));

        let err = Tuning::from_json_str(r#"{ "moth_flee_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Tuning::from_path(Path::new("/nonexistent/graveward-tuning.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("graveward-tuning.json"));
    }
}
