//! The per-agent behavior state machine.
//!
//! `evaluate` runs once per agent per tick: it updates stuck tracking,
//! recomputes the combat role, selects the behavior state (arbitrating the
//! chaser pool), and produces a movement/facing/fire decision. Movement is
//! validated here through the movement resolver; the sim applies the
//! returned destination.

use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tankwar_core::components::AgentState;
use tankwar_core::constants::*;
use tankwar_core::enums::{AiState, CombatRole, Direction};
use tankwar_core::types::{Position, Rect};
use tankwar_field::los::has_line_of_sight;
use tankwar_field::movement;
use tankwar_field::obstacles::ObstacleSet;

use crate::registry::ChaserRegistry;
use crate::steering;

/// Input to one agent evaluation.
pub struct AgentContext<'a> {
    /// Entity bits of this agent, for self-exclusion in collision checks.
    pub self_id: u64,
    /// This agent's current rect.
    pub rect: Rect,
    /// Movement speed in units per tick.
    pub speed: f64,
    /// The target (player) rect.
    pub target: Rect,
    /// Whether the target is present and active. When false the
    /// evaluation is a no-op.
    pub target_active: bool,
    /// Corner distances from every active agent (self included) to the
    /// target, for the coordination count.
    pub neighbor_distances: &'a [f64],
    /// The current tick's obstacle registry.
    pub obstacles: &'a ObstacleSet,
    pub tick: u64,
}

/// Output of one agent evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentDecision {
    /// Validated destination for this tick, if the agent moves.
    pub move_to: Option<(Direction, Position)>,
    /// New facing, if it changes. Turning is always allowed.
    pub facing: Option<Direction>,
    /// Fire request (already gated on alignment and line of sight;
    /// the sim still applies the cooldown).
    pub fire: bool,
}

/// Evaluate the state machine for one agent.
pub fn evaluate(
    agent: &mut AgentState,
    ctx: &AgentContext,
    chasers: &mut ChaserRegistry,
    rng: &mut ChaCha8Rng,
) -> AgentDecision {
    agent.wants_fire = false;

    // Target absent or dead: do nothing, corrupt nothing.
    if !ctx.target_active {
        return AgentDecision::default();
    }

    // At most one evaluation per tick.
    if agent.last_eval_tick == Some(ctx.tick) {
        return AgentDecision::default();
    }
    agent.last_eval_tick = Some(ctx.tick);

    let dist_to_target = corner_distance(&ctx.rect, &ctx.target);

    // Stuck tracking: net displacement since the previous evaluation.
    let moved = (ctx.rect.x - agent.last_pos.x).abs() + (ctx.rect.y - agent.last_pos.y).abs();
    agent.stuck_ticks = if moved < STUCK_EPSILON {
        agent.stuck_ticks + 1
    } else {
        0
    };
    agent.last_pos = Position::new(ctx.rect.x, ctx.rect.y);

    assign_combat_role(agent, dist_to_target, ctx.neighbor_distances);
    select_state(agent, dist_to_target, chasers);

    let mut decision = match agent.state {
        AiState::Patrolling => patrol(agent, ctx, rng),
        AiState::Approaching => approach(agent, ctx),
        AiState::Flanking => flank(agent, ctx),
        AiState::Attacking => attack(agent, ctx),
    };

    // Shooting gate runs on the post-behavior facing.
    let facing = decision.facing.unwrap_or(agent.heading);
    if aligned_for_shot(&ctx.rect, &ctx.target, facing)
        && has_line_of_sight(&ctx.rect, &ctx.target, ctx.obstacles)
    {
        agent.wants_fire = true;
        decision.fire = true;
    }

    decision
}

/// Corner-to-corner distance, matching how the engagement radii are tuned.
fn corner_distance(a: &Rect, b: &Rect) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Recompute the combat role. A pure function of the agent identifier
/// (mod 3) whenever two or more agents are inside the coordination radius
/// and this agent is among them; `Direct` otherwise.
fn assign_combat_role(agent: &mut AgentState, self_dist: f64, neighbor_distances: &[f64]) {
    if neighbor_distances.is_empty() {
        agent.role = CombatRole::Direct;
        return;
    }

    let nearby = neighbor_distances
        .iter()
        .filter(|d| **d < COORDINATION_RANGE)
        .count();
    let self_near = self_dist < COORDINATION_RANGE;

    if !self_near || nearby <= 1 {
        agent.role = CombatRole::Direct;
        return;
    }

    agent.role = match agent.id % 3 {
        0 => CombatRole::Direct,
        1 => CombatRole::FlankLeft,
        _ => CombatRole::FlankRight,
    };
}

/// Select the behavior state, arbitrating the capped chaser pool.
/// Registry membership is updated transactionally on every flip of the
/// chase classification.
fn select_state(agent: &mut AgentState, dist: f64, chasers: &mut ChaserRegistry) {
    let was_chasing = agent.state.is_chasing();
    let previous = agent.state;

    if dist > ENGAGEMENT_RANGE {
        agent.state = AiState::Patrolling;
    } else {
        let can_chase = was_chasing || chasers.has_capacity();
        if can_chase {
            agent.state = if dist > ATTACK_RANGE {
                if agent.role != CombatRole::Direct {
                    AiState::Flanking
                } else {
                    AiState::Approaching
                }
            } else {
                AiState::Attacking
            };
        } else {
            // Pool full and we were not in it: keep patrolling.
            agent.state = AiState::Patrolling;
        }
    }

    chasers.update(agent.id, was_chasing, agent.state.is_chasing());
    if agent.state != previous {
        debug!(
            "agent {} {:?} -> {:?} (dist {:.0}, role {:?})",
            agent.id, previous, agent.state, dist, agent.role
        );
    }
}

/// Wander in a held direction, occasionally drifting toward the target or
/// picking an arbitrary new heading; recover when blocked or stuck.
fn patrol(agent: &mut AgentState, ctx: &AgentContext, rng: &mut ChaCha8Rng) -> AgentDecision {
    agent.direction_ticks += 1;

    // Occasional drift toward the target.
    if agent.direction_ticks > 60 && rng.gen::<f64>() < 0.1 {
        let to_target = steering::direction_to(&ctx.rect, &ctx.target);
        if can_move(ctx, to_target) {
            agent.heading = to_target;
            agent.direction_ticks = 0;
        }
    }

    // Occasional arbitrary turn for natural wandering.
    if agent.direction_ticks > 40 && rng.gen::<f64>() < 0.05 {
        let new_dir = Direction::ALL[rng.gen_range(0..4)];
        if can_move(ctx, new_dir) {
            agent.heading = new_dir;
            agent.direction_ticks = 0;
        }
    }

    // Blocked or stuck: reverse the navigation preference and take the
    // first open recovery direction.
    if agent.stuck_ticks > STUCK_THRESHOLD / 2 || !can_move(ctx, agent.heading) {
        agent.clockwise_pref = !agent.clockwise_pref;
        for dir in steering::recovery_candidates(agent.heading) {
            if can_move(ctx, dir) {
                agent.heading = dir;
                break;
            }
        }
        agent.stuck_ticks = 0;
        agent.direction_ticks = 0;
    }

    if let Some(pos) = resolve(ctx, agent.heading) {
        AgentDecision {
            move_to: Some((agent.heading, pos)),
            facing: Some(agent.heading),
            fire: false,
        }
    } else {
        AgentDecision::default()
    }
}

/// Move toward the target, cycling through candidate directions when
/// blocked; always face the target afterward so shots can line up.
fn approach(agent: &mut AgentState, ctx: &AgentContext) -> AgentDecision {
    let to_target = steering::direction_to(&ctx.rect, &ctx.target);
    let secondary = steering::secondary_direction(&ctx.rect, &ctx.target);
    let candidates = steering::approach_candidates(to_target, secondary, agent.clockwise_pref);

    // The preference flip takes effect on the next evaluation.
    if agent.stuck_ticks > STUCK_THRESHOLD {
        agent.clockwise_pref = !agent.clockwise_pref;
        agent.stuck_ticks = 0;
    }

    let mut decision = try_candidates(agent, ctx, &candidates);
    decision.facing = Some(to_target);
    decision
}

/// Circle toward the assigned flank, falling back to a direct approach,
/// the opposite perpendicular, then retreat; always face the target.
fn flank(agent: &mut AgentState, ctx: &AgentContext) -> AgentDecision {
    let to_target = steering::direction_to(&ctx.rect, &ctx.target);
    let flank_clockwise = agent.role == CombatRole::FlankRight;
    let candidates = steering::flank_candidates(to_target, flank_clockwise);

    if agent.stuck_ticks > STUCK_THRESHOLD {
        agent.clockwise_pref = !agent.clockwise_pref;
        agent.stuck_ticks = 0;
    }

    let mut decision = try_candidates(agent, ctx, &candidates);
    decision.facing = Some(to_target);
    decision
}

/// In range: face the target and make small strafing adjustments to line
/// up the shot along the facing axis.
fn attack(agent: &mut AgentState, ctx: &AgentContext) -> AgentDecision {
    let to_target = steering::direction_to(&ctx.rect, &ctx.target);
    let dx = ctx.target.x - ctx.rect.x;
    let dy = ctx.target.y - ctx.rect.y;

    let strafe = if to_target.is_vertical() {
        (dx.abs() > STRAFE_TOLERANCE).then(|| {
            if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        })
    } else {
        (dy.abs() > STRAFE_TOLERANCE).then(|| {
            if dy > 0.0 {
                Direction::Down
            } else {
                Direction::Up
            }
        })
    };

    if let Some(dir) = strafe {
        if let Some(pos) = resolve(ctx, dir) {
            agent.heading = dir;
            // Moving turns the tank; the strafe direction becomes the facing.
            return AgentDecision {
                move_to: Some((dir, pos)),
                facing: Some(dir),
                fire: false,
            };
        }
    }

    AgentDecision {
        move_to: None,
        facing: Some(to_target),
        fire: false,
    }
}

/// Try candidate directions in order; fall back to any open cardinal.
fn try_candidates(
    agent: &mut AgentState,
    ctx: &AgentContext,
    candidates: &[Direction],
) -> AgentDecision {
    for &dir in candidates {
        if let Some(pos) = resolve(ctx, dir) {
            agent.heading = dir;
            return AgentDecision {
                move_to: Some((dir, pos)),
                facing: None,
                fire: false,
            };
        }
    }
    for dir in Direction::ALL {
        if let Some(pos) = resolve(ctx, dir) {
            agent.heading = dir;
            return AgentDecision {
                move_to: Some((dir, pos)),
                facing: None,
                fire: false,
            };
        }
    }
    AgentDecision::default()
}

/// Alignment gate for shooting: sign-correct along the facing axis and
/// within the lateral tolerance on the perpendicular axis.
fn aligned_for_shot(rect: &Rect, target: &Rect, facing: Direction) -> bool {
    let dx = target.x - rect.x;
    let dy = target.y - rect.y;
    match facing {
        Direction::Up => dy < 0.0 && dx.abs() < AIM_TOLERANCE,
        Direction::Down => dy > 0.0 && dx.abs() < AIM_TOLERANCE,
        Direction::Left => dx < 0.0 && dy.abs() < AIM_TOLERANCE,
        Direction::Right => dx > 0.0 && dy.abs() < AIM_TOLERANCE,
    }
}

fn can_move(ctx: &AgentContext, dir: Direction) -> bool {
    movement::can_move(ctx.self_id, &ctx.rect, dir, ctx.speed, ctx.obstacles)
}

fn resolve(ctx: &AgentContext, dir: Direction) -> Option<Position> {
    movement::resolve(ctx.self_id, &ctx.rect, dir, ctx.speed, ctx.obstacles)
}
