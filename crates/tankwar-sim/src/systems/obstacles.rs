//! Obstacle registry rebuild: gather every active collidable entity into
//! the per-tick `ObstacleSet` consumed by movement and line-of-sight.

use hecs::World;

use tankwar_core::components::{Active, Barrier, Breakable, Objective, Tank};
use tankwar_core::types::{Position, Rect, Size};
use tankwar_field::obstacles::{ObstacleKind, ObstacleSet};

pub fn rebuild(world: &World, set: &mut ObstacleSet) {
    set.clear();

    for (entity, (pos, size, active, _)) in world
        .query::<(&Position, &Size, &Active, &Barrier)>()
        .iter()
    {
        if active.0 {
            set.push(
                entity.to_bits().get(),
                ObstacleKind::Barrier,
                Rect::from_parts(*pos, *size),
            );
        }
    }

    for (entity, (pos, size, active, _)) in world
        .query::<(&Position, &Size, &Active, &Breakable)>()
        .iter()
    {
        if active.0 {
            set.push(
                entity.to_bits().get(),
                ObstacleKind::BreakableWall,
                Rect::from_parts(*pos, *size),
            );
        }
    }

    for (entity, (pos, size, active, _)) in
        world.query::<(&Position, &Size, &Active, &Tank)>().iter()
    {
        if active.0 {
            set.push(
                entity.to_bits().get(),
                ObstacleKind::Tank,
                Rect::from_parts(*pos, *size),
            );
        }
    }

    for (entity, (pos, size, active, _)) in world
        .query::<(&Position, &Size, &Active, &Objective)>()
        .iter()
    {
        if active.0 {
            set.push(
                entity.to_bits().get(),
                ObstacleKind::Objective,
                Rect::from_parts(*pos, *size),
            );
        }
    }
}
