//! Objective threat tracking: flag the objective while an enemy tank is
//! inside the danger radius, and clear the flag after the cooldown once
//! the radius is empty again.

use hecs::World;

use tankwar_core::components::{Active, Enemy, Objective};
use tankwar_core::constants::{OBJECTIVE_DANGER_RADIUS, OBJECTIVE_THREAT_COOLDOWN_TICKS};
use tankwar_core::types::Position;

pub fn run(world: &mut World, tick: u64) {
    let enemy_positions: Vec<Position> = world
        .query::<(&Enemy, &Position, &Active)>()
        .iter()
        .filter(|(_, (_, _, active))| active.0)
        .map(|(_, (_, pos, _))| *pos)
        .collect();

    for (_entity, (objective, pos, active)) in
        world.query_mut::<(&mut Objective, &Position, &Active)>()
    {
        if !active.0 {
            continue;
        }
        let threatened = enemy_positions
            .iter()
            .any(|enemy| pos.distance_to(enemy) < OBJECTIVE_DANGER_RADIUS);

        if threatened {
            objective.under_threat = true;
            objective.threat_since_tick = tick;
        } else if objective.under_threat
            && tick.saturating_sub(objective.threat_since_tick) > OBJECTIVE_THREAT_COOLDOWN_TICKS
        {
            objective.under_threat = false;
        }
    }
}
