//! Explosion animation: step frames on each size's cadence and retire the
//! effect after the last frame.

use hecs::World;

use tankwar_core::components::{Active, Explosion};
use tankwar_core::constants::EXPLOSION_FRAME_COUNT;

pub fn advance(world: &mut World, tick: u64) {
    for (_entity, (explosion, active)) in world.query_mut::<(&mut Explosion, &mut Active)>() {
        if !active.0 {
            continue;
        }
        if tick.saturating_sub(explosion.frame_started) >= explosion.size.frame_delay_ticks() {
            explosion.frame += 1;
            explosion.frame_started = tick;
            if explosion.frame >= EXPLOSION_FRAME_COUNT {
                active.0 = false;
            }
        }
    }
}
