//! Tests for the agent decision engine: state selection, role
//! coordination, the chaser pool, and movement behaviors.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tankwar_core::components::AgentState;
use tankwar_core::constants::*;
use tankwar_core::enums::{AiState, CombatRole, Direction};
use tankwar_core::types::{Position, Rect};
use tankwar_field::obstacles::{ObstacleKind, ObstacleSet};

use crate::fsm::{evaluate, AgentContext};
use crate::registry::ChaserRegistry;

fn tank_rect(x: f64, y: f64) -> Rect {
    Rect::new(x, y, TANK_SIZE as f64, TANK_SIZE as f64)
}

fn make_agent(id: u32, x: f64, y: f64) -> AgentState {
    AgentState::new(id, Direction::Down, Position::new(x, y))
}

fn make_context<'a>(
    rect: Rect,
    target: Rect,
    neighbor_distances: &'a [f64],
    obstacles: &'a ObstacleSet,
    tick: u64,
) -> AgentContext<'a> {
    AgentContext {
        self_id: 999,
        rect,
        speed: ENEMY_TANK_SPEED,
        target,
        target_active: true,
        neighbor_distances,
        obstacles,
        tick,
    }
}

#[test]
fn test_far_target_patrols() {
    // Beyond engagement range the agent wanders instead of chasing
    let mut agent = make_agent(0, 400.0, 100.0);
    let obstacles = ObstacleSet::new();
    let ctx = make_context(
        tank_rect(400.0, 100.0),
        tank_rect(400.0, 500.0),
        &[400.0],
        &obstacles,
        1,
    );
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    assert_eq!(agent.state, AiState::Patrolling);
    assert!(chasers.is_empty());
}

#[test]
fn test_mid_range_approaches() {
    let mut agent = make_agent(0, 400.0, 300.0);
    let obstacles = ObstacleSet::new();
    let ctx = make_context(
        tank_rect(400.0, 300.0),
        tank_rect(400.0, 500.0),
        &[200.0],
        &obstacles,
        1,
    );
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let decision = evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    assert_eq!(agent.state, AiState::Approaching);
    assert!(chasers.contains(0));
    // Open field: moves straight down toward the target and faces it
    let (dir, pos) = decision.move_to.expect("should move");
    assert_eq!(dir, Direction::Down);
    assert!((pos.y - (300.0 + ENEMY_TANK_SPEED)).abs() < 1e-9);
    assert_eq!(decision.facing, Some(Direction::Down));
}

#[test]
fn test_close_range_attacks() {
    let mut agent = make_agent(0, 400.0, 420.0);
    let obstacles = ObstacleSet::new();
    let ctx = make_context(
        tank_rect(400.0, 420.0),
        tank_rect(400.0, 500.0),
        &[80.0],
        &obstacles,
        1,
    );
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let decision = evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    assert_eq!(agent.state, AiState::Attacking);
    // Laterally aligned already, so no strafe; fires down the clear lane
    assert!(decision.move_to.is_none());
    assert_eq!(decision.facing, Some(Direction::Down));
    assert!(decision.fire);
    assert!(agent.wants_fire);
}

#[test]
fn test_wall_blocks_fire() {
    let mut agent = make_agent(0, 400.0, 420.0);
    let mut obstacles = ObstacleSet::new();
    obstacles.push(
        50,
        ObstacleKind::Barrier,
        Rect::new(400.0, 460.0, 40.0, 40.0),
    );
    let ctx = make_context(
        tank_rect(400.0, 420.0),
        tank_rect(400.0, 500.0),
        &[80.0],
        &obstacles,
        1,
    );
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let decision = evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    assert_eq!(agent.state, AiState::Attacking);
    assert!(!decision.fire, "occluded shot must be held");
}

#[test]
fn test_misaligned_agent_holds_fire() {
    // In attack range but 60 units off-axis: strafe, don't shoot
    let mut agent = make_agent(0, 340.0, 420.0);
    let obstacles = ObstacleSet::new();
    let ctx = make_context(
        tank_rect(340.0, 420.0),
        tank_rect(400.0, 500.0),
        &[100.0],
        &obstacles,
        1,
    );
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let decision = evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    assert_eq!(agent.state, AiState::Attacking);
    let (dir, _) = decision.move_to.expect("should strafe toward the axis");
    assert_eq!(dir, Direction::Right);
    assert!(!decision.fire);
}

#[test]
fn test_role_assignment_by_id() {
    // Two coordinating agents in range: roles come from id mod 3
    let obstacles = ObstacleSet::new();
    let neighbors = [200.0, 200.0];
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for (id, expected_role, expected_state) in [
        (1u32, CombatRole::FlankLeft, AiState::Flanking),
        (2, CombatRole::FlankRight, AiState::Flanking),
        (3, CombatRole::Direct, AiState::Approaching),
    ] {
        let mut agent = make_agent(id, 400.0, 300.0);
        let ctx = make_context(
            tank_rect(400.0, 300.0),
            tank_rect(400.0, 500.0),
            &neighbors,
            &obstacles,
            1,
        );
        evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
        assert_eq!(agent.role, expected_role, "agent {}", id);
        assert_eq!(agent.state, expected_state, "agent {}", id);
        chasers.clear();
    }
}

#[test]
fn test_solo_agent_is_direct() {
    // No coordination partner nearby: always the direct role
    let mut agent = make_agent(1, 400.0, 300.0);
    let obstacles = ObstacleSet::new();
    let ctx = make_context(
        tank_rect(400.0, 300.0),
        tank_rect(400.0, 500.0),
        &[200.0],
        &obstacles,
        1,
    );
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    assert_eq!(agent.role, CombatRole::Direct);
    assert_eq!(agent.state, AiState::Approaching);
}

#[test]
fn test_chaser_pool_caps_at_three() {
    // Six agents inside engagement range, empty pool: exactly three chase
    let obstacles = ObstacleSet::new();
    let neighbors = [200.0; 6];
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let mut agents: Vec<AgentState> =
        (0..6).map(|id| make_agent(id, 400.0, 300.0)).collect();
    for agent in agents.iter_mut() {
        let ctx = make_context(
            tank_rect(400.0, 300.0),
            tank_rect(400.0, 500.0),
            &neighbors,
            &obstacles,
            1,
        );
        evaluate(agent, &ctx, &mut chasers, &mut rng);
        assert!(chasers.len() <= MAX_CHASERS);
    }

    let chasing = agents.iter().filter(|a| a.state.is_chasing()).count();
    let patrolling = agents
        .iter()
        .filter(|a| a.state == AiState::Patrolling)
        .count();
    assert_eq!(chasing, MAX_CHASERS);
    assert_eq!(patrolling, 3);
    assert_eq!(chasers.len(), MAX_CHASERS);
}

#[test]
fn test_existing_chaser_keeps_slot_when_full() {
    let mut agent = make_agent(0, 400.0, 300.0);
    agent.state = AiState::Approaching;
    let mut chasers = ChaserRegistry::new();
    chasers.update(0, false, true);
    chasers.update(10, false, true);
    chasers.update(11, false, true);
    assert!(!chasers.has_capacity());

    let obstacles = ObstacleSet::new();
    let ctx = make_context(
        tank_rect(400.0, 300.0),
        tank_rect(400.0, 500.0),
        &[200.0],
        &obstacles,
        1,
    );
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    assert!(agent.state.is_chasing());
    assert!(chasers.contains(0));
    assert_eq!(chasers.len(), MAX_CHASERS);
}

#[test]
fn test_leaving_range_releases_slot() {
    let mut agent = make_agent(0, 400.0, 100.0);
    agent.state = AiState::Approaching;
    let mut chasers = ChaserRegistry::new();
    chasers.update(0, false, true);

    let obstacles = ObstacleSet::new();
    let ctx = make_context(
        tank_rect(400.0, 100.0),
        tank_rect(400.0, 500.0),
        &[400.0],
        &obstacles,
        1,
    );
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    assert_eq!(agent.state, AiState::Patrolling);
    assert!(chasers.is_empty());
}

#[test]
fn test_inactive_target_is_noop() {
    let mut agent = make_agent(0, 400.0, 300.0);
    let obstacles = ObstacleSet::new();
    let mut ctx = make_context(
        tank_rect(400.0, 300.0),
        tank_rect(400.0, 500.0),
        &[200.0],
        &obstacles,
        1,
    );
    ctx.target_active = false;
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let decision = evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    assert!(decision.move_to.is_none());
    assert!(!decision.fire);
    assert_eq!(agent.state, AiState::Patrolling);
    assert!(chasers.is_empty());
}

#[test]
fn test_one_evaluation_per_tick() {
    let mut agent = make_agent(0, 400.0, 300.0);
    let obstacles = ObstacleSet::new();
    let ctx = make_context(
        tank_rect(400.0, 300.0),
        tank_rect(400.0, 500.0),
        &[200.0],
        &obstacles,
        5,
    );
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let first = evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    assert!(first.move_to.is_some());
    let second = evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    assert!(second.move_to.is_none());
    assert!(!second.fire);
}

#[test]
fn test_stuck_approach_flips_preference() {
    let mut agent = make_agent(2, 400.0, 300.0);
    assert!(agent.clockwise_pref);
    agent.stuck_ticks = STUCK_THRESHOLD;

    let obstacles = ObstacleSet::new();
    // Same rect as last_pos: displacement zero, counter crosses the
    // threshold this evaluation
    let ctx = make_context(
        tank_rect(400.0, 300.0),
        tank_rect(400.0, 500.0),
        &[200.0],
        &obstacles,
        1,
    );
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    assert!(!agent.clockwise_pref);
    assert_eq!(agent.stuck_ticks, 0);
}

#[test]
fn test_approach_routes_around_wall() {
    // Wall pressed up against the agent's underside: the agent
    // sidesteps instead of freezing
    let mut agent = make_agent(0, 400.0, 300.0);
    let mut obstacles = ObstacleSet::new();
    obstacles.push(
        50,
        ObstacleKind::Barrier,
        Rect::new(400.0, 337.0, 40.0, 40.0),
    );
    let ctx = make_context(
        tank_rect(400.0, 300.0),
        tank_rect(400.0, 500.0),
        &[200.0],
        &obstacles,
        1,
    );
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let decision = evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    let (dir, _) = decision.move_to.expect("should sidestep");
    assert_ne!(dir, Direction::Down);
    // Facing still tracks the target for the shot lane
    assert_eq!(decision.facing, Some(Direction::Down));
}

#[test]
fn test_patrol_moves_along_heading() {
    let mut agent = make_agent(0, 400.0, 100.0);
    let obstacles = ObstacleSet::new();
    let ctx = make_context(
        tank_rect(400.0, 100.0),
        tank_rect(400.0, 500.0),
        &[400.0],
        &obstacles,
        1,
    );
    let mut chasers = ChaserRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let decision = evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
    let (dir, pos) = decision.move_to.expect("open field patrol moves");
    assert_eq!(dir, Direction::Down);
    assert!((pos.y - (100.0 + ENEMY_TANK_SPEED)).abs() < 1e-9);
    assert_eq!(decision.facing, Some(Direction::Down));
}

#[test]
fn test_blocked_patrol_turns_clockwise_first() {
    // Heading blocked: recovery tries 90° clockwise first regardless of
    // the agent's navigation preference
    for id in [0u32, 1] {
        let mut agent = make_agent(id, 400.0, 100.0);
        let mut obstacles = ObstacleSet::new();
        obstacles.push(
            50,
            ObstacleKind::Barrier,
            Rect::new(400.0, 137.0, 40.0, 40.0),
        );
        let ctx = make_context(
            tank_rect(400.0, 100.0),
            tank_rect(400.0, 500.0),
            &[400.0],
            &obstacles,
            1,
        );
        let mut chasers = ChaserRegistry::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let decision = evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
        assert_eq!(agent.state, AiState::Patrolling);
        let (dir, _) = decision.move_to.expect("recovery should find an exit");
        assert_eq!(dir, Direction::Left, "agent {}", id);
        assert_eq!(agent.heading, Direction::Left);
    }
}

#[test]
fn test_patrol_is_deterministic_per_seed() {
    let obstacles = ObstacleSet::new();
    let run = || {
        let mut agent = make_agent(0, 400.0, 100.0);
        let mut chasers = ChaserRegistry::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut trail = Vec::new();
        let mut rect = tank_rect(400.0, 100.0);
        for tick in 0..200u64 {
            let ctx = make_context(
                rect,
                tank_rect(400.0, 500.0),
                &[400.0],
                &obstacles,
                tick,
            );
            let decision = evaluate(&mut agent, &ctx, &mut chasers, &mut rng);
            if let Some((_, pos)) = decision.move_to {
                rect.x = pos.x;
                rect.y = pos.y;
            }
            trail.push((rect.x, rect.y));
        }
        trail
    };
    assert_eq!(run(), run());
}
