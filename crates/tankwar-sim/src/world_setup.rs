//! Entity spawn factories for setting up the match world.
//!
//! Creates tanks, walls, pickups, and projectiles with their component
//! bundles. Spawn order is fixed so a given seed always produces the same
//! world.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tankwar_core::components::*;
use tankwar_core::constants::*;
use tankwar_core::enums::{Direction, EntityKind, ExplosionSize};
use tankwar_core::error::SpawnError;
use tankwar_core::types::{Position, Rect, Size};

/// The six fixed enemy spawn points, top corners and mid-height flanks.
const ENEMY_SPAWNS: [(f64, f64); 6] = [
    (80.0, 120.0),
    (680.0, 120.0),
    (80.0, 240.0),
    (80.0, 340.0),
    (680.0, 240.0),
    (680.0, 340.0),
];

/// Player spawn: bottom center, snapped to the tile grid.
const PLAYER_SPAWN: (f64, f64) = (360.0, 520.0);

/// Set up a complete match world: arena, objective, tanks, medkits.
pub fn setup_match(world: &mut World, rng: &mut ChaCha8Rng, next_agent_id: &mut u32) {
    crate::map::generate(world);
    spawn_objective(world, objective_position());
    spawn_player(world, Position::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1));
    for (x, y) in ENEMY_SPAWNS.iter().take(ENEMY_TANK_COUNT) {
        let id = *next_agent_id;
        *next_agent_id += 1;
        spawn_enemy(world, Position::new(*x, *y), id);
    }
    spawn_medkits(world, rng);
}

/// The objective sits on the tile containing the arena center.
fn objective_position() -> Position {
    let tile = TILE_SIZE as f64;
    let x = ((ARENA_WIDTH / 2.0) / tile).floor() * tile;
    let y = ((ARENA_HEIGHT / 2.0) / tile).floor() * tile;
    Position::new(x, y)
}

/// General actor factory keyed by entity kind. Projectiles and effects
/// carry parameters this signature cannot express and are rejected.
pub fn spawn_actor(
    world: &mut World,
    kind: EntityKind,
    pos: Position,
    next_agent_id: &mut u32,
) -> Result<Entity, SpawnError> {
    match kind {
        EntityKind::PlayerTank => Ok(spawn_player(world, pos)),
        EntityKind::EnemyTank => {
            let id = *next_agent_id;
            *next_agent_id += 1;
            Ok(spawn_enemy(world, pos, id))
        }
        EntityKind::Barrier => Ok(spawn_barrier(world, pos)),
        EntityKind::BreakableWall => Ok(spawn_breakable(world, pos, BREAKABLE_WALL_HEALTH)),
        EntityKind::MedKit => Ok(spawn_medkit(world, pos)),
        EntityKind::Objective => Ok(spawn_objective(world, pos)),
        EntityKind::Missile | EntityKind::Explosion => {
            Err(SpawnError::UnrecognizedActorKind(kind))
        }
    }
}

pub fn spawn_player(world: &mut World, pos: Position) -> Entity {
    world.spawn((
        Player,
        Tank {
            direction: Direction::Up,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            speed: PLAYER_TANK_SPEED,
            last_shot_tick: None,
            cooldown_ticks: PLAYER_SHOT_COOLDOWN_TICKS,
            is_player: true,
        },
        pos,
        Size::square(TANK_SIZE),
        Active(true),
    ))
}

pub fn spawn_enemy(world: &mut World, pos: Position, agent_id: u32) -> Entity {
    world.spawn((
        Enemy,
        Tank {
            direction: Direction::Down,
            health: ENEMY_MAX_HEALTH,
            max_health: ENEMY_MAX_HEALTH,
            speed: ENEMY_TANK_SPEED,
            last_shot_tick: None,
            cooldown_ticks: ENEMY_SHOT_COOLDOWN_TICKS,
            is_player: false,
        },
        AgentState::new(agent_id, Direction::Down, pos),
        pos,
        Size::square(TANK_SIZE),
        Active(true),
    ))
}

pub fn spawn_barrier(world: &mut World, pos: Position) -> Entity {
    world.spawn((Barrier, pos, Size::square(TILE_SIZE), Active(true)))
}

pub fn spawn_breakable(world: &mut World, pos: Position, health: i32) -> Entity {
    world.spawn((
        Breakable::new(health),
        pos,
        Size::square(TILE_SIZE),
        Active(true),
    ))
}

pub fn spawn_medkit(world: &mut World, pos: Position) -> Entity {
    world.spawn((MedKit, pos, Size::square(MEDKIT_SIZE), Active(true)))
}

pub fn spawn_objective(world: &mut World, pos: Position) -> Entity {
    world.spawn((
        Objective::default(),
        pos,
        Size::square(OBJECTIVE_SIZE),
        Active(true),
    ))
}

/// Spawn a missile from the center of the firing tank's rect.
pub fn spawn_missile(
    world: &mut World,
    firer: u64,
    fired_by_player: bool,
    direction: Direction,
    from: &Rect,
) -> Entity {
    let half = MISSILE_SIZE as f64 / 2.0;
    let pos = Position::new(from.center_x() - half, from.center_y() - half);
    let damage = if fired_by_player {
        PLAYER_MISSILE_DAMAGE
    } else {
        ENEMY_MISSILE_DAMAGE
    };
    world.spawn((
        Missile {
            direction,
            speed: MISSILE_SPEED,
            damage,
            firer,
            fired_by_player,
        },
        pos,
        Size::square(MISSILE_SIZE),
        Active(true),
    ))
}

/// Spawn an explosion centered on the impact point.
pub fn spawn_explosion(
    world: &mut World,
    size: ExplosionSize,
    center_x: f64,
    center_y: f64,
    tick: u64,
) -> Entity {
    let side = size.pixel_size();
    let half = side as f64 / 2.0;
    world.spawn((
        Explosion {
            size,
            frame: 0,
            frame_started: tick,
        },
        Position::new(center_x - half, center_y - half),
        Size::square(side),
        Active(true),
    ))
}

/// Scatter medkits on random unoccupied interior tiles. Placement gives up
/// on a kit after 50 attempts rather than looping forever on a crowded map.
fn spawn_medkits(world: &mut World, rng: &mut ChaCha8Rng) {
    let tile = TILE_SIZE as f64;
    let cols = (ARENA_WIDTH as i64 / TILE_SIZE as i64) as i32;
    let rows = (ARENA_HEIGHT as i64 / TILE_SIZE as i64) as i32;

    let occupied: Vec<Position> = occupied_positions(world);

    for _ in 0..MEDKIT_COUNT {
        let mut attempts = 0;
        let mut pos;
        loop {
            let col = rng.gen_range(0..cols - 4) + 2;
            let row = rng.gen_range(0..rows - 4) + 2;
            pos = Position::new(col as f64 * tile, row as f64 * tile);
            attempts += 1;
            if attempts >= MEDKIT_PLACEMENT_ATTEMPTS || !is_tile_occupied(&occupied, &pos) {
                break;
            }
        }
        if attempts < MEDKIT_PLACEMENT_ATTEMPTS {
            spawn_medkit(world, pos);
        }
    }
}

/// Top-left corners of everything a medkit must not land on.
fn occupied_positions(world: &World) -> Vec<Position> {
    let mut positions = Vec::new();
    for (_e, (pos, _)) in world.query::<(&Position, &Barrier)>().iter() {
        positions.push(*pos);
    }
    for (_e, (pos, _)) in world.query::<(&Position, &Breakable)>().iter() {
        positions.push(*pos);
    }
    for (_e, (pos, _)) in world.query::<(&Position, &Tank)>().iter() {
        positions.push(*pos);
    }
    for (_e, (pos, _)) in world.query::<(&Position, &Objective)>().iter() {
        positions.push(*pos);
    }
    positions
}

fn is_tile_occupied(occupied: &[Position], pos: &Position) -> bool {
    let tile = TILE_SIZE as f64;
    occupied
        .iter()
        .any(|p| (p.x - pos.x).abs() < tile && (p.y - pos.y).abs() < tile)
}
