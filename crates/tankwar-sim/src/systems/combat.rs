//! Combat resolver: missile collision checks in strict priority order.
//!
//! Per missile: indestructible walls, then breakable walls, then the
//! player, then enemy tanks. The first hit consumes the missile and stops
//! the scan. Enemy-fired missiles pass through enemy tanks entirely, and a
//! missile never hits its own firer.

use hecs::{Entity, World};

use tankwar_core::components::{Active, Barrier, Breakable, Enemy, Missile, Player, Tank};
use tankwar_core::constants::{SCORE_ENEMY_DESTROYED, SCORE_WALL_DESTROYED};
use tankwar_core::enums::{EntityKind, ExplosionSize};
use tankwar_core::events::GameEvent;
use tankwar_core::state::MatchState;
use tankwar_core::types::{Position, Rect, Size};

use crate::world_setup;

struct Shot {
    entity: Entity,
    rect: Rect,
    damage: i32,
    firer: u64,
    by_player: bool,
}

pub fn resolve(world: &mut World, state: &mut MatchState, events: &mut Vec<GameEvent>, tick: u64) {
    let shots: Vec<Shot> = world
        .query::<(&Missile, &Position, &Size, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (missile, pos, size, _))| Shot {
            entity,
            rect: Rect::from_parts(*pos, *size),
            damage: missile.damage,
            firer: missile.firer,
            by_player: missile.fired_by_player,
        })
        .collect();
    if shots.is_empty() {
        return;
    }

    let barriers: Vec<Rect> = world
        .query::<(&Barrier, &Position, &Size, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(_, (_, pos, size, _))| Rect::from_parts(*pos, *size))
        .collect();

    let breakables: Vec<(Entity, Rect)> = world
        .query::<(&Breakable, &Position, &Size, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (_, pos, size, _))| (entity, Rect::from_parts(*pos, *size)))
        .collect();

    let player: Option<(Entity, u64, Rect)> = world
        .query::<(&Player, &Position, &Size, &Active)>()
        .iter()
        .find(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (_, pos, size, _))| {
            (entity, entity.to_bits().get(), Rect::from_parts(*pos, *size))
        });

    let enemies: Vec<(Entity, u64, Rect)> = world
        .query::<(&Enemy, &Position, &Size, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (_, pos, size, _))| {
            (entity, entity.to_bits().get(), Rect::from_parts(*pos, *size))
        })
        .collect();

    // Deferred explosion spawns: the world is still being queried above.
    let mut impacts: Vec<(ExplosionSize, f64, f64)> = Vec::new();

    'shots: for shot in &shots {
        // Indestructible walls stop the missile cold. No event, no damage.
        if barriers.iter().any(|rect| shot.rect.intersects(rect)) {
            deactivate(world, shot.entity);
            impacts.push((
                ExplosionSize::Small,
                shot.rect.center_x(),
                shot.rect.center_y(),
            ));
            continue;
        }

        for (wall, wall_rect) in &breakables {
            if !shot.rect.intersects(wall_rect) || !is_active(world, *wall) {
                continue;
            }
            let destroyed = world
                .get::<&mut Breakable>(*wall)
                .map(|mut b| b.take_damage(shot.damage))
                .unwrap_or(false);
            let center = Position::new(wall_rect.center_x(), wall_rect.center_y());
            events.push(GameEvent::MissileHit {
                target: EntityKind::BreakableWall,
                position: center,
            });
            if destroyed {
                deactivate(world, *wall);
                impacts.push((ExplosionSize::Medium, center.x, center.y));
                events.push(GameEvent::WallDestroyed { position: center });
                if shot.by_player {
                    state.add_score(SCORE_WALL_DESTROYED);
                }
            } else {
                impacts.push((ExplosionSize::Small, center.x, center.y));
            }
            deactivate(world, shot.entity);
            continue 'shots;
        }

        if let Some((player_entity, player_bits, player_rect)) = &player {
            if shot.firer != *player_bits
                && shot.rect.intersects(player_rect)
                && is_active(world, *player_entity)
            {
                let died = world
                    .get::<&mut Tank>(*player_entity)
                    .map(|mut t| t.take_damage(shot.damage))
                    .unwrap_or(false);
                let center = Position::new(player_rect.center_x(), player_rect.center_y());
                events.push(GameEvent::MissileHit {
                    target: EntityKind::PlayerTank,
                    position: center,
                });
                if died {
                    deactivate(world, *player_entity);
                    impacts.push((ExplosionSize::Large, center.x, center.y));
                    events.push(GameEvent::TankDestroyed {
                        kind: EntityKind::PlayerTank,
                        position: center,
                    });
                } else {
                    impacts.push((ExplosionSize::Small, center.x, center.y));
                }
                deactivate(world, shot.entity);
                continue 'shots;
            }
        }

        // Enemy tanks are transparent to enemy fire.
        if !shot.by_player {
            continue;
        }
        for (enemy_entity, enemy_bits, enemy_rect) in &enemies {
            if shot.firer == *enemy_bits
                || !shot.rect.intersects(enemy_rect)
                || !is_active(world, *enemy_entity)
            {
                continue;
            }
            let died = world
                .get::<&mut Tank>(*enemy_entity)
                .map(|mut t| t.take_damage(shot.damage))
                .unwrap_or(false);
            let center = Position::new(enemy_rect.center_x(), enemy_rect.center_y());
            events.push(GameEvent::MissileHit {
                target: EntityKind::EnemyTank,
                position: center,
            });
            if died {
                deactivate(world, *enemy_entity);
                impacts.push((ExplosionSize::Large, center.x, center.y));
                events.push(GameEvent::TankDestroyed {
                    kind: EntityKind::EnemyTank,
                    position: center,
                });
                state.add_score(SCORE_ENEMY_DESTROYED);
            } else {
                impacts.push((ExplosionSize::Small, center.x, center.y));
            }
            deactivate(world, shot.entity);
            continue 'shots;
        }
    }

    for (size, cx, cy) in impacts {
        world_setup::spawn_explosion(world, size, cx, cy, tick);
    }
}

fn is_active(world: &World, entity: Entity) -> bool {
    world.get::<&Active>(entity).map(|a| a.0).unwrap_or(false)
}

fn deactivate(world: &mut World, entity: Entity) {
    if let Ok(mut active) = world.get::<&mut Active>(entity) {
        active.0 = false;
    }
}
