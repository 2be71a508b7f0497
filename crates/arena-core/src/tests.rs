#[cfg(test)]
mod tests {
    use crate::commands::{InputState, PlayerCommand};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{AudioCue, GameEvent};
    use crate::state::GameStateSnapshot;
    use crate::types::*;

    #[test]
    fn test_game_state_serde() {
        for v in [
            GameState::Menu,
            GameState::Playing,
            GameState::Paused,
            GameState::GameOver,
        ] {
            let json = serde_json::to_string(&v).unwrap();
            let back: GameState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_powerup_kind_snake_case() {
        let json = serde_json::to_string(&PowerUpKind::WeaponShotgun).unwrap();
        assert_eq!(json, "\"weapon_shotgun\"");
    }

    #[test]
    fn test_player_command_tagged() {
        let json = serde_json::to_string(&PlayerCommand::SelectWeapon { slot: 3 }).unwrap();
        assert!(json.contains("\"type\":\"SelectWeapon\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlayerCommand::SelectWeapon { slot: 3 });

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"TogglePause"}"#).unwrap();
        assert_eq!(back, PlayerCommand::TogglePause);
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::EnemyKilled {
            enemy_id: EnemyId(7),
            kind: EnemyKind::Tank,
            position: Vec3::new(1.0, 0.9, -3.0),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.state, GameState::Menu);
        assert!(back.enemies.is_empty());
    }

    #[test]
    fn test_weapon_slots() {
        assert_eq!(WeaponKind::from_slot(1), Some(WeaponKind::Pistol));
        assert_eq!(WeaponKind::from_slot(4), Some(WeaponKind::Sniper));
        assert_eq!(WeaponKind::from_slot(0), None);
        assert_eq!(WeaponKind::from_slot(5), None);
    }

    #[test]
    fn test_weapon_cycle_wraps() {
        assert_eq!(WeaponKind::Sniper.next(), WeaponKind::Pistol);
        assert_eq!(WeaponKind::Pistol.previous(), WeaponKind::Sniper);
        assert_eq!(WeaponKind::Rifle.next(), WeaponKind::Shotgun);
    }

    #[test]
    fn test_granted_weapon() {
        assert_eq!(
            PowerUpKind::WeaponSniper.granted_weapon(),
            Some(WeaponKind::Sniper)
        );
        assert_eq!(PowerUpKind::Ammo.granted_weapon(), None);
    }

    #[test]
    fn test_pickup_cues() {
        assert_eq!(AudioCue::for_pickup(PowerUpKind::Health), AudioCue::PickupHealth);
        assert_eq!(AudioCue::for_pickup(PowerUpKind::Shield), AudioCue::PickupPowerUp);
        assert_eq!(
            AudioCue::for_pickup(PowerUpKind::WeaponRifle),
            AudioCue::PickupWeapon
        );
    }

    #[test]
    fn test_clamp_frame_dt() {
        assert_eq!(clamp_frame_dt(0.5), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(0.016), 0.016);
        assert_eq!(clamp_frame_dt(-1.0), 0.0);
        assert_eq!(clamp_frame_dt(f64::NAN), 0.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance(0.05);
        t.advance(0.05);
        assert_eq!(t.tick, 2);
        assert!((t.elapsed_secs - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_capsule_half_extents() {
        let shape = BodyShape::Capsule {
            half_height: PLAYER_CAPSULE_HALF_HEIGHT,
            radius: PLAYER_CAPSULE_RADIUS,
        };
        let h = shape.half_extents();
        assert!((h.y - 0.9).abs() < 1e-6);
        assert!((h.x - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_horizontal_helpers() {
        let a = Vec3::new(0.0, 5.0, 0.0);
        let b = Vec3::new(3.0, -2.0, 4.0);
        assert!((horizontal_distance(a, b) - 5.0).abs() < 1e-6);
        // Facing straight down +z is yaw 0.
        assert!(yaw_toward(a, Vec3::new(0.0, 0.0, 10.0)).abs() < 1e-6);
    }

    #[test]
    fn test_take_look_delta_consumes() {
        let mut input = InputState {
            look_dx: 4.0,
            look_dy: -2.0,
            ..Default::default()
        };
        assert_eq!(input.take_look_delta(), (4.0, -2.0));
        assert_eq!(input.take_look_delta(), (0.0, 0.0));
    }

    proptest::proptest! {
        #[test]
        fn prop_frame_dt_never_exceeds_cap(raw in 0.1f64..1.0e6) {
            proptest::prop_assert_eq!(clamp_frame_dt(raw), MAX_FRAME_DT);
        }

        #[test]
        fn prop_small_frame_dt_passes_through(raw in 0.0f64..0.1) {
            proptest::prop_assert_eq!(clamp_frame_dt(raw), raw);
        }
    }
}
