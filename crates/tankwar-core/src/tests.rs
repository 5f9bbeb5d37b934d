//! Tests for the shared types: geometry, tanks, input state, and the
//! snapshot model.

use crate::commands::{InputIntent, InputState, MatchCommand};
use crate::components::{Breakable, Tank};
use crate::constants::*;
use crate::enums::*;
use crate::events::GameEvent;
use crate::state::{MatchSnapshot, MatchState};
use crate::types::{Position, Rect, SimTime, Size};

#[test]
fn test_direction_rotations() {
    for d in Direction::ALL {
        assert_eq!(d.clockwise().counter_clockwise(), d);
        assert_eq!(d.opposite().opposite(), d);
        assert_eq!(d.clockwise().clockwise(), d.opposite());
    }
    assert_eq!(Direction::Up.clockwise(), Direction::Right);
    assert_eq!(Direction::Up.counter_clockwise(), Direction::Left);
}

#[test]
fn test_direction_deltas_are_unit() {
    for d in Direction::ALL {
        let (dx, dy) = d.delta();
        assert_eq!(dx.abs() + dy.abs(), 1.0);
    }
    assert_eq!(Direction::Up.delta(), (0.0, -1.0));
    assert_eq!(Direction::Down.delta(), (0.0, 1.0));
}

#[test]
fn test_rect_intersects() {
    let a = Rect::new(0.0, 0.0, 40.0, 40.0);
    let b = Rect::new(39.0, 39.0, 40.0, 40.0);
    let c = Rect::new(40.0, 0.0, 40.0, 40.0);
    assert!(a.intersects(&b));
    // Touching edges do not overlap.
    assert!(!a.intersects(&c));
}

#[test]
fn test_rect_shrunk_permits_corner_slide() {
    // Two rects overlapping by less than twice the buffer pass the
    // shrunk test even though the raw rects collide.
    let a = Rect::new(0.0, 0.0, 40.0, 40.0);
    let b = Rect::new(37.0, 37.0, 40.0, 40.0);
    assert!(a.intersects(&b));
    assert!(!a.shrunk().intersects(&b.shrunk()));
}

#[test]
fn test_rect_contains_point() {
    let r = Rect::new(10.0, 10.0, 40.0, 40.0);
    assert!(r.contains_point(10.0, 10.0));
    assert!(r.contains_point(50.0, 50.0));
    assert!(!r.contains_point(50.1, 10.0));
}

#[test]
fn test_tank_damage_clamps_and_kills() {
    let mut tank = Tank {
        direction: Direction::Up,
        health: 30,
        max_health: ENEMY_MAX_HEALTH,
        speed: ENEMY_TANK_SPEED,
        last_shot_tick: None,
        cooldown_ticks: ENEMY_SHOT_COOLDOWN_TICKS,
        is_player: false,
    };
    assert!(!tank.take_damage(15));
    assert_eq!(tank.health, 15);
    assert!(tank.take_damage(100));
    assert_eq!(tank.health, 0, "health clamps at zero");
}

#[test]
fn test_tank_heal_clamps_and_never_revives() {
    let mut tank = Tank {
        direction: Direction::Up,
        health: 90,
        max_health: PLAYER_MAX_HEALTH,
        speed: PLAYER_TANK_SPEED,
        last_shot_tick: None,
        cooldown_ticks: PLAYER_SHOT_COOLDOWN_TICKS,
        is_player: true,
    };
    tank.heal(50);
    assert_eq!(tank.health, PLAYER_MAX_HEALTH);

    tank.take_damage(PLAYER_MAX_HEALTH);
    tank.heal(50);
    assert_eq!(tank.health, 0, "healing after death is impossible");
}

#[test]
fn test_tank_fire_cooldown() {
    let mut tank = Tank {
        direction: Direction::Up,
        health: PLAYER_MAX_HEALTH,
        max_health: PLAYER_MAX_HEALTH,
        speed: PLAYER_TANK_SPEED,
        last_shot_tick: None,
        cooldown_ticks: PLAYER_SHOT_COOLDOWN_TICKS,
        is_player: true,
    };
    assert!(tank.can_fire(0));
    tank.last_shot_tick = Some(0);
    assert!(!tank.can_fire(PLAYER_SHOT_COOLDOWN_TICKS - 1));
    assert!(tank.can_fire(PLAYER_SHOT_COOLDOWN_TICKS));
}

#[test]
fn test_breakable_damage_clamps() {
    let mut wall = Breakable::new(BREAKABLE_WALL_HEALTH);
    assert!(!wall.take_damage(25));
    assert_eq!(wall.health, 25);
    assert!(wall.take_damage(25));
    assert_eq!(wall.health, 0);
    // Further damage stays clamped.
    assert!(wall.take_damage(25));
    assert_eq!(wall.health, 0);
}

#[test]
fn test_input_state_held_and_released() {
    let mut input = InputState::new();
    assert!(!input.is_held(InputIntent::Fire));
    input.press(InputIntent::Fire);
    input.press(InputIntent::MoveLeft);
    assert!(input.is_held(InputIntent::Fire));
    input.release(InputIntent::Fire);
    assert!(!input.is_held(InputIntent::Fire));
    assert!(input.is_held(InputIntent::MoveLeft));
}

#[test]
fn test_match_state_reset() {
    let mut state = MatchState::default();
    state.add_score(135);
    state.lives = 1;
    state.level = 3;
    state.reset();
    assert_eq!(state.score, 0);
    assert_eq!(state.lives, INITIAL_LIVES);
    assert_eq!(state.level, 1);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..TICK_RATE {
        time.advance();
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
}

// ---- Serde round trips ----

#[test]
fn test_enums_serde() {
    for d in Direction::ALL {
        let json = serde_json::to_string(&d).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }
    for s in [
        AiState::Patrolling,
        AiState::Approaching,
        AiState::Flanking,
        AiState::Attacking,
    ] {
        let json = serde_json::to_string(&s).unwrap();
        let back: AiState = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
    for r in [CombatRole::Direct, CombatRole::FlankLeft, CombatRole::FlankRight] {
        let json = serde_json::to_string(&r).unwrap();
        let back: CombatRole = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}

#[test]
fn test_game_event_serde() {
    let events = vec![
        GameEvent::MissileHit {
            target: EntityKind::BreakableWall,
            position: Position::new(120.0, 80.0),
        },
        GameEvent::TankDestroyed {
            kind: EntityKind::EnemyTank,
            position: Position::new(400.0, 300.0),
        },
        GameEvent::MatchEnded { player_won: true },
    ];
    for event in &events {
        let json = serde_json::to_string(event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }
}

#[test]
fn test_match_command_serde() {
    for cmd in [MatchCommand::StartMatch, MatchCommand::Reset] {
        let json = serde_json::to_string(&cmd).unwrap();
        let back: MatchCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }
}

#[test]
fn test_snapshot_serde() {
    let snapshot = MatchSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: MatchSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.time.tick, back.time.tick);
    assert_eq!(snapshot.phase, back.phase);
    assert!(
        json.len() < 1024,
        "Empty snapshot should be <1KB, was {} bytes",
        json.len()
    );
}

#[test]
fn test_explosion_size_tables() {
    assert_eq!(ExplosionSize::Small.pixel_size(), EXPLOSION_SIZE_SMALL);
    assert_eq!(ExplosionSize::Large.pixel_size(), EXPLOSION_SIZE_LARGE);
    assert!(ExplosionSize::Small.frame_delay_ticks() < ExplosionSize::Large.frame_delay_ticks());
}

#[test]
fn test_sprite_table_covers_frames() {
    use crate::sprites;
    for size in [
        ExplosionSize::Small,
        ExplosionSize::Medium,
        ExplosionSize::Large,
    ] {
        for frame in 0..EXPLOSION_FRAME_COUNT {
            assert!(sprites::explosion_sprite(size, frame).is_some());
        }
        assert!(sprites::explosion_sprite(size, EXPLOSION_FRAME_COUNT).is_none());
    }
    assert_eq!(sprites::static_sprite(EntityKind::PlayerTank), None);
    assert!(sprites::static_sprite(EntityKind::Barrier).is_some());
}

#[test]
fn test_size_square() {
    let s = Size::square(TANK_SIZE);
    assert_eq!(s.width, TANK_SIZE);
    assert_eq!(s.height, TANK_SIZE);
}
