//! Breakable wall upkeep: refresh the derived "visibly damaged" flag.

use hecs::World;

use tankwar_core::components::Breakable;

pub fn update_damage_flags(world: &mut World) {
    for (_entity, wall) in world.query_mut::<&mut Breakable>() {
        wall.damaged = wall.health * 2 < wall.max_health;
    }
}
