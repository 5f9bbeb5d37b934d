//! Player control: apply held movement intents through the collision
//! resolver and spawn a missile on a fire intent, subject to the cooldown.
//!
//! Each held direction is applied in a fixed order, one step per tick per
//! direction; the last direction applied becomes the facing. Turning
//! succeeds even when the step is blocked.

use hecs::World;

use tankwar_core::commands::{InputIntent, InputState};
use tankwar_core::components::{Active, Player, Tank};
use tankwar_core::enums::Direction;
use tankwar_core::types::{Position, Rect, Size};
use tankwar_field::movement;
use tankwar_field::obstacles::ObstacleSet;

use crate::world_setup;

const MOVE_ORDER: [(InputIntent, Direction); 4] = [
    (InputIntent::MoveUp, Direction::Up),
    (InputIntent::MoveDown, Direction::Down),
    (InputIntent::MoveLeft, Direction::Left),
    (InputIntent::MoveRight, Direction::Right),
];

pub fn run(world: &mut World, input: &InputState, obstacles: &ObstacleSet, tick: u64) {
    let mut fire: Option<(u64, Direction, Rect)> = None;

    for (entity, (_player, tank, pos, size, active)) in
        world.query_mut::<(&Player, &mut Tank, &mut Position, &Size, &Active)>()
    {
        if !active.0 {
            continue;
        }
        let self_id = entity.to_bits().get();
        let mut rect = Rect::from_parts(*pos, *size);

        for (intent, direction) in MOVE_ORDER {
            if !input.is_held(intent) {
                continue;
            }
            tank.direction = direction;
            if let Some(next) = movement::resolve(self_id, &rect, direction, tank.speed, obstacles)
            {
                rect.x = next.x;
                rect.y = next.y;
            }
        }
        pos.x = rect.x;
        pos.y = rect.y;

        if input.is_held(InputIntent::Fire) && tank.can_fire(tick) {
            tank.last_shot_tick = Some(tick);
            fire = Some((self_id, tank.direction, rect));
        }
    }

    if let Some((firer, direction, rect)) = fire {
        world_setup::spawn_missile(world, firer, true, direction, &rect);
    }
}
