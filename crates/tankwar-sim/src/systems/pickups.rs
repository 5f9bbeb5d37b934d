//! Pickup resolution: medkit collection (player first, then enemies) and
//! objective collection by the player.

use hecs::{Entity, World};

use tankwar_core::components::{Active, Enemy, MedKit, Objective, Player, Tank};
use tankwar_core::constants::SCORE_OBJECTIVE_COLLECTED;
use tankwar_core::events::GameEvent;
use tankwar_core::state::MatchState;
use tankwar_core::types::{Position, Rect, Size};

pub fn run(
    world: &mut World,
    state: &mut MatchState,
    events: &mut Vec<GameEvent>,
    objective_collected: &mut bool,
) {
    let player: Option<(Entity, Rect)> = world
        .query::<(&Player, &Position, &Size, &Active)>()
        .iter()
        .find(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (_, pos, size, _))| (entity, Rect::from_parts(*pos, *size)));

    let enemies: Vec<(Entity, Rect)> = world
        .query::<(&Enemy, &Position, &Size, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (_, pos, size, _))| (entity, Rect::from_parts(*pos, *size)))
        .collect();

    let medkits: Vec<(Entity, Rect)> = world
        .query::<(&MedKit, &Position, &Size, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (_, pos, size, _))| (entity, Rect::from_parts(*pos, *size)))
        .collect();

    for (kit, kit_rect) in &medkits {
        let mut collector: Option<(Entity, bool)> = None;
        if let Some((player_entity, player_rect)) = &player {
            if kit_rect.intersects(player_rect) {
                collector = Some((*player_entity, true));
            }
        }
        if collector.is_none() {
            for (enemy_entity, enemy_rect) in &enemies {
                if kit_rect.intersects(enemy_rect) {
                    collector = Some((*enemy_entity, false));
                    break;
                }
            }
        }

        if let Some((tank_entity, by_player)) = collector {
            if let Ok(mut tank) = world.get::<&mut Tank>(tank_entity) {
                // Full restore; heal clamps at max and skips dead tanks.
                let max = tank.max_health;
                tank.heal(max);
            }
            if let Ok(mut active) = world.get::<&mut Active>(*kit) {
                active.0 = false;
            }
            events.push(GameEvent::MedKitCollected { by_player });
        }
    }

    // Objective pickup is player-only and a pure score bonus.
    if let Some((_, player_rect)) = &player {
        let objective: Option<(Entity, Rect)> = world
            .query::<(&Objective, &Position, &Size, &Active)>()
            .iter()
            .find(|(_, (_, _, _, active))| active.0)
            .map(|(entity, (_, pos, size, _))| (entity, Rect::from_parts(*pos, *size)));

        if let Some((objective_entity, objective_rect)) = objective {
            if objective_rect.intersects(player_rect) {
                if let Ok(mut active) = world.get::<&mut Active>(objective_entity) {
                    active.0 = false;
                }
                state.add_score(SCORE_OBJECTIVE_COLLECTED);
                *objective_collected = true;
                events.push(GameEvent::ObjectiveCollected);
            }
        }
    }
}
