//! Snapshot system: queries the ECS world and builds a complete
//! `MatchSnapshot`. Read-only — never modifies the world.
//!
//! Entities are emitted in draw order (walls, pickups, tanks, missiles,
//! effects), which also keeps snapshot serialization stable for a given
//! world layout.

use hecs::World;
use log::warn;

use tankwar_core::components::*;
use tankwar_core::enums::{EntityKind, MatchPhase};
use tankwar_core::events::GameEvent;
use tankwar_core::sprites;
use tankwar_core::state::{EntityView, HudView, MatchSnapshot, MatchState};
use tankwar_core::types::{Position, SimTime, Size};

#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: MatchPhase,
    state: &MatchState,
    game_over: bool,
    player_won: bool,
    objective_collected: bool,
    events: Vec<GameEvent>,
) -> MatchSnapshot {
    MatchSnapshot {
        time: *time,
        phase,
        entities: build_entities(world),
        hud: build_hud(world, state, game_over, player_won, objective_collected),
        events,
    }
}

fn build_entities(world: &World) -> Vec<EntityView> {
    let mut entities = Vec::new();

    for (_e, (pos, size, active, _)) in world
        .query::<(&Position, &Size, &Active, &Barrier)>()
        .iter()
    {
        if active.0 {
            entities.push(EntityView {
                kind: EntityKind::Barrier,
                position: *pos,
                size: *size,
                sprite: sprites::static_sprite(EntityKind::Barrier).map(str::to_owned),
            });
        }
    }

    for (_e, (pos, size, active, wall)) in world
        .query::<(&Position, &Size, &Active, &Breakable)>()
        .iter()
    {
        if active.0 {
            let sprite = if wall.damaged {
                Some(sprites::damaged_wall_sprite())
            } else {
                sprites::static_sprite(EntityKind::BreakableWall)
            }
            .map(str::to_owned);
            entities.push(EntityView {
                kind: EntityKind::BreakableWall,
                position: *pos,
                size: *size,
                sprite,
            });
        }
    }

    for (_e, (pos, size, active, _)) in world
        .query::<(&Position, &Size, &Active, &Objective)>()
        .iter()
    {
        if active.0 {
            entities.push(EntityView {
                kind: EntityKind::Objective,
                position: *pos,
                size: *size,
                sprite: sprites::static_sprite(EntityKind::Objective).map(str::to_owned),
            });
        }
    }

    for (_e, (pos, size, active, _)) in
        world.query::<(&Position, &Size, &Active, &MedKit)>().iter()
    {
        if active.0 {
            entities.push(EntityView {
                kind: EntityKind::MedKit,
                position: *pos,
                size: *size,
                sprite: sprites::static_sprite(EntityKind::MedKit).map(str::to_owned),
            });
        }
    }

    for (_e, (pos, size, active, tank, _)) in world
        .query::<(&Position, &Size, &Active, &Tank, &Player)>()
        .iter()
    {
        if active.0 {
            entities.push(EntityView {
                kind: EntityKind::PlayerTank,
                position: *pos,
                size: *size,
                sprite: Some(sprites::tank_sprite(tank.direction).to_owned()),
            });
        }
    }

    for (_e, (pos, size, active, tank, _)) in world
        .query::<(&Position, &Size, &Active, &Tank, &Enemy)>()
        .iter()
    {
        if active.0 {
            entities.push(EntityView {
                kind: EntityKind::EnemyTank,
                position: *pos,
                size: *size,
                sprite: Some(sprites::tank_sprite(tank.direction).to_owned()),
            });
        }
    }

    for (_e, (pos, size, active, missile)) in world
        .query::<(&Position, &Size, &Active, &Missile)>()
        .iter()
    {
        if active.0 {
            entities.push(EntityView {
                kind: EntityKind::Missile,
                position: *pos,
                size: *size,
                sprite: Some(sprites::missile_sprite(missile.direction).to_owned()),
            });
        }
    }

    for (_e, (pos, size, active, explosion)) in world
        .query::<(&Position, &Size, &Active, &Explosion)>()
        .iter()
    {
        if active.0 {
            let sprite = sprites::explosion_sprite(explosion.size, explosion.frame);
            if sprite.is_none() {
                warn!(
                    "no sprite for {:?} explosion frame {}",
                    explosion.size, explosion.frame
                );
            }
            entities.push(EntityView {
                kind: EntityKind::Explosion,
                position: *pos,
                size: *size,
                sprite: sprite.map(str::to_owned),
            });
        }
    }

    entities
}

fn build_hud(
    world: &World,
    state: &MatchState,
    game_over: bool,
    player_won: bool,
    objective_collected: bool,
) -> HudView {
    let (player_health, player_max_health) = world
        .query::<(&Player, &Tank)>()
        .iter()
        .next()
        .map(|(_, (_, tank))| (tank.health, tank.max_health))
        .unwrap_or((0, 0));

    let enemies_remaining = world
        .query::<(&Enemy, &Active)>()
        .iter()
        .filter(|(_, (_, active))| active.0)
        .count() as u32;

    HudView {
        player_health,
        player_max_health,
        enemies_remaining,
        score: state.score,
        lives: state.lives,
        game_over,
        player_won,
        objective_collected,
    }
}
