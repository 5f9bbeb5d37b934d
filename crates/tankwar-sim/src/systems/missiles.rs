//! Missile flight: advance each active missile along its direction and
//! retire it when it leaves the arena.

use hecs::World;

use tankwar_core::components::{Active, Missile};
use tankwar_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use tankwar_core::types::Position;

pub fn advance(world: &mut World) {
    for (_entity, (missile, pos, active)) in
        world.query_mut::<(&Missile, &mut Position, &mut Active)>()
    {
        if !active.0 {
            continue;
        }
        let (dx, dy) = missile.direction.delta();
        pos.x += dx * missile.speed;
        pos.y += dy * missile.speed;

        if pos.x < 0.0 || pos.y < 0.0 || pos.x > ARENA_WIDTH || pos.y > ARENA_HEIGHT {
            active.0 = false;
        }
    }
}
