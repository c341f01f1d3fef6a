#[cfg(test)]
mod tests {
    use glam::DQuat;

    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{SceneEvent, SpotlightSpec};
    use crate::state::{GameStateSnapshot, HudSnapshot};
    use crate::types::{secs_to_ticks, Heading, Position, SimTime, Velocity};

    #[test]
    fn test_wave_phase_serde() {
        let variants = vec![
            WavePhase::Idle,
            WavePhase::Spawning,
            WavePhase::AwaitingClear,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: WavePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand uses the tagged representation hosts send.
    #[test]
    fn test_player_command_serde() {
        let json = serde_json::to_string(&PlayerCommand::StartSession).unwrap();
        assert_eq!(json, r#"{"type":"StartSession"}"#);

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"PrimaryAction"}"#).unwrap();
        assert!(matches!(back, PlayerCommand::PrimaryAction));
    }

    #[test]
    fn test_scene_event_serde() {
        let events = vec![
            SceneEvent::EntitySpawned {
                entity: 7,
                kind: VisualKind::Hostile,
                position: Position::new(1.0, 2.0, 20.0),
            },
            SceneEvent::EntityDespawned {
                entity: 7,
                kind: VisualKind::Hostile,
            },
            SceneEvent::FixtureHidden { fixture: 3 },
            SceneEvent::SpotlightCreated {
                spotlight: SpotlightSpec {
                    position: Position::new(0.0, 4.0, 0.0),
                    rotation: DQuat::IDENTITY,
                    inner_angle_deg: SPOTLIGHT_INNER_ANGLE_DEG,
                    outer_angle_deg: SPOTLIGHT_OUTER_ANGLE_DEG,
                    intensity: SPOTLIGHT_INTENSITY,
                    range: SPOTLIGHT_RANGE,
                    shadow: true,
                },
            },
            SceneEvent::PlayerTeleportRequested {
                position: Position::new(8.0, 0.0, 2.0),
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SceneEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// The default HUD is what the start menu shows.
    #[test]
    fn test_default_hud() {
        let hud = HudSnapshot::default();
        assert_eq!(hud.wave_number, 1);
        assert_eq!(hud.countdown_secs, 30);
        assert_eq!(hud.score, 0);
        assert!(!hud.started);
        assert!(hud.show_start_menu);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.hud, back.hud);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 0.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.horizontal_distance_to(&b) - 5.0).abs() < 1e-10);

        let above = Position::new(3.0, 12.0, 4.0);
        assert!((a.distance_to(&above) - 13.0).abs() < 1e-10);
        assert!((a.horizontal_distance_to(&above) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_yaw() {
        let origin = Position::new(0.0, 0.0, 0.0);

        let ahead = Position::new(0.0, 5.0, 10.0);
        assert!(origin.yaw_to(&ahead).abs() < 1e-10);

        let right = Position::new(10.0, 0.0, 0.0);
        assert!((origin.yaw_to(&right) - std::f64::consts::FRAC_PI_2).abs() < 1e-10);

        let behind = Position::new(0.0, 0.0, -10.0);
        assert!((origin.yaw_to(&behind).abs() - std::f64::consts::PI).abs() < 1e-10);
    }

    #[test]
    fn test_heading_normalized() {
        let h = Heading::new(-std::f64::consts::FRAC_PI_2);
        assert!((h.yaw - 3.0 * std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    }

    #[test]
    fn test_velocity() {
        assert!(Velocity::ZERO.is_zero());
        let v = Velocity::new(3.0, 0.0, 4.0);
        assert!(!v.is_zero());
        assert!((v.speed() - 5.0).abs() < 1e-10);

        let moved = Position::new(1.0, 1.0, 1.0).offset(&v);
        assert_eq!(moved, Position::new(4.0, 1.0, 5.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
        assert_eq!(time.dt(), DT);
    }

    #[test]
    fn test_secs_to_ticks() {
        assert_eq!(secs_to_ticks(WAVE_PRE_DELAY_SECS), 180);
        assert_eq!(secs_to_ticks(WAVE_SPAWN_CADENCE_SECS), 120);
        assert_eq!(secs_to_ticks(0.0), 0);
        assert_eq!(secs_to_ticks(-1.0), 0);
    }

    #[test]
    fn test_particle_kind_maps_to_visual() {
        assert_eq!(VisualKind::from(ParticleKind::Flash), VisualKind::Flash);
        assert_eq!(VisualKind::from(ParticleKind::Scatter), VisualKind::Scatter);
    }
}
