#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::SessionSnapshot;
    use crate::types::{ticks_from_ms, ticks_from_secs, Position, SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_session_phase_serde() {
        let variants = vec![
            SessionPhase::Menu,
            SessionPhase::Playing,
            SessionPhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SessionPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_buff_kind_serde() {
        for v in BuffKind::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: BuffKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_buff_kind_indices_are_distinct() {
        let mut seen = [false; 4];
        for kind in BuffKind::ALL {
            let idx = kind.index();
            assert!(idx < 4);
            assert!(!seen[idx], "duplicate buff index {idx}");
            seen[idx] = true;
        }
    }

    #[test]
    fn test_buff_durations() {
        assert_eq!(BuffKind::Instakill.duration_secs(), 8.0);
        assert_eq!(BuffKind::MaxAmmo.duration_secs(), 6.0);
        assert_eq!(BuffKind::Shield.duration_secs(), 10.0);
        assert_eq!(BuffKind::Speed.duration_secs(), 12.0);
    }

    #[test]
    fn test_difficulty_multipliers() {
        assert_eq!(Difficulty::Easy.damage_multiplier(), 0.7);
        assert_eq!(Difficulty::Normal.damage_multiplier(), 1.0);
        assert_eq!(Difficulty::Hard.damage_multiplier(), 1.3);
        assert_eq!(Difficulty::Nightmare.damage_multiplier(), 1.6);

        // Spawn delay is never scaled, so there is no delay multiplier;
        // the other three axes scale count/speed/hp.
        assert_eq!(Difficulty::Nightmare.count_multiplier(), 1.6);
        assert_eq!(Difficulty::Nightmare.speed_multiplier(), 1.4);
        assert_eq!(Difficulty::Nightmare.hp_multiplier(), 1.5);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SetDifficulty {
                difficulty: Difficulty::Nightmare,
            },
            PlayerCommand::Start,
            PlayerCommand::Restart,
            PlayerCommand::SetPlayerTransform {
                position: Position::new(1.0, 2.0, 0.0),
            },
            PlayerCommand::FireHitscan {
                origin: Position::new(0.0, 0.0, 1.6),
                direction: glam::DVec3::new(0.0, 1.0, 0.0),
            },
            PlayerCommand::MeleeStrike {
                origin: Position::new(0.0, 0.0, 1.6),
                direction: glam::DVec3::new(1.0, 0.0, 0.0),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::WaveStarted { wave: 1, count: 6 },
            GameEvent::HitMarker {
                position: Position::new(1.0, 2.0, 1.85),
                headshot: true,
            },
            GameEvent::AgentKilled {
                id: 7,
                position: Position::new(3.0, 4.0, 0.0),
            },
            GameEvent::BuffActivated {
                kind: BuffKind::Shield,
                duration_secs: 10.0,
            },
            GameEvent::GameOver { score: 450, wave: 3 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify SessionSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = SessionSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 12.0);
        assert!((a.range_to(&b) - 13.0).abs() < 1e-10);
        assert!((a.horizontal_range_to(&b) - 5.0).abs() < 1e-10);
    }

    /// Verify Velocity calculations.
    #[test]
    fn test_velocity_speed_and_heading() {
        let v = Velocity::new(3.0, 4.0, 0.0);
        assert!((v.speed() - 5.0).abs() < 1e-10);

        // Heading east (positive X) is PI/2.
        let east = Velocity::new(10.0, 0.0, 0.0);
        assert!((east.heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-10);

        // Heading north (positive Y) is 0.
        let north = Velocity::new(0.0, 10.0, 0.0);
        assert!(north.heading().abs() < 1e-10);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        // 30 ticks at 30Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    /// Tick conversion rounds up so deadlines never fire early.
    #[test]
    fn test_ticks_from_durations() {
        // 775ms at 30Hz = 23.25 ticks -> 24.
        assert_eq!(ticks_from_ms(775), 24);
        // Exact multiples stay exact.
        assert_eq!(ticks_from_ms(1000), 30);
        assert_eq!(ticks_from_secs(1.5), 45);
        assert_eq!(ticks_from_secs(2.0), 60);
    }
}
