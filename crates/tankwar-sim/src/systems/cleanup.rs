//! Cleanup: despawn transient entities that have been deactivated.
//!
//! Tanks and the objective stay in the world while inactive (the HUD and
//! victory evaluation still read them); missiles, explosions, medkits, and
//! destroyed breakable walls are removed. Uses a pre-allocated buffer to
//! avoid per-tick allocation.

use hecs::{Entity, World};

use tankwar_core::components::{Active, Breakable, Explosion, MedKit, Missile};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (active, _)) in world.query_mut::<(&Active, &Missile)>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }
    for (entity, (active, _)) in world.query_mut::<(&Active, &Explosion)>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }
    for (entity, (active, _)) in world.query_mut::<(&Active, &MedKit)>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }
    for (entity, (active, _)) in world.query_mut::<(&Active, &Breakable)>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
