//! Enemy control: run the AI decision engine for each active enemy tank
//! and apply the resulting movement, facing, and fire requests.
//!
//! Every agent sees the same per-tick picture: the obstacle set built at
//! the top of the tick and the player's position after this tick's player
//! movement has been applied.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use tankwar_core::components::{Active, AgentState, Enemy, Player, Tank};
use tankwar_core::enums::Direction;
use tankwar_core::types::{Position, Rect, Size};
use tankwar_enemy_ai::fsm::{evaluate, AgentContext};
use tankwar_enemy_ai::registry::ChaserRegistry;
use tankwar_field::obstacles::ObstacleSet;

use crate::world_setup;

struct PendingAgent {
    entity: Entity,
    self_id: u64,
    rect: Rect,
    speed: f64,
}

pub fn run(
    world: &mut World,
    obstacles: &ObstacleSet,
    chasers: &mut ChaserRegistry,
    rng: &mut ChaCha8Rng,
    tick: u64,
) {
    let target = world
        .query::<(&Player, &Position, &Size, &Active)>()
        .iter()
        .next()
        .map(|(_, (_, pos, size, active))| (Rect::from_parts(*pos, *size), active.0));
    let Some((target_rect, target_active)) = target else {
        return;
    };

    let agents: Vec<PendingAgent> = world
        .query::<(&Enemy, &Tank, &Position, &Size, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, _, active))| active.0)
        .map(|(entity, (_, tank, pos, size, _))| PendingAgent {
            entity,
            self_id: entity.to_bits().get(),
            rect: Rect::from_parts(*pos, *size),
            speed: tank.speed,
        })
        .collect();

    let neighbor_distances: Vec<f64> = agents
        .iter()
        .map(|a| corner_distance(&a.rect, &target_rect))
        .collect();

    let mut shots: Vec<(u64, Direction, Rect)> = Vec::new();

    for agent in &agents {
        let decision = {
            let Ok(mut state) = world.get::<&mut AgentState>(agent.entity) else {
                continue;
            };
            let ctx = AgentContext {
                self_id: agent.self_id,
                rect: agent.rect,
                speed: agent.speed,
                target: target_rect,
                target_active,
                neighbor_distances: &neighbor_distances,
                obstacles,
                tick,
            };
            evaluate(&mut state, &ctx, chasers, rng)
        };

        let mut rect = agent.rect;
        if let Some((direction, next)) = decision.move_to {
            rect.x = next.x;
            rect.y = next.y;
            if let Ok(mut pos) = world.get::<&mut Position>(agent.entity) {
                pos.x = next.x;
                pos.y = next.y;
            }
            if let Ok(mut tank) = world.get::<&mut Tank>(agent.entity) {
                tank.direction = direction;
            }
        }
        if let Some(facing) = decision.facing {
            if let Ok(mut tank) = world.get::<&mut Tank>(agent.entity) {
                tank.direction = facing;
            }
        }
        if decision.fire {
            if let Ok(mut tank) = world.get::<&mut Tank>(agent.entity) {
                if tank.can_fire(tick) {
                    tank.last_shot_tick = Some(tick);
                    shots.push((agent.self_id, tank.direction, rect));
                }
            }
        }
    }

    for (firer, direction, rect) in shots {
        world_setup::spawn_missile(world, firer, false, direction, &rect);
    }
}

fn corner_distance(a: &Rect, b: &Rect) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}
