//! Match snapshot — the complete visible state handed to the presentation
//! layer each tick. Read-only from the consumer's point of view.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, MatchPhase};
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Size};

/// Complete per-tick snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    /// Every currently active entity, for drawing.
    pub entities: Vec<EntityView>,
    pub hud: HudView,
    /// Events produced during this tick, in publication order.
    pub events: Vec<GameEvent>,
}

/// One drawable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub position: Position,
    pub size: Size,
    /// Sprite asset name, if one is known for this entity's current state.
    pub sprite: Option<String>,
}

/// Scalar values for the status display and menu flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub player_health: i32,
    pub player_max_health: i32,
    pub enemies_remaining: u32,
    pub score: u32,
    pub lives: u32,
    pub game_over: bool,
    pub player_won: bool,
    /// Selects the victory message variant.
    pub objective_collected: bool,
}

/// Explicit match-level counters, owned by the engine and passed by
/// reference to the systems that need them. Replaces any notion of a
/// process-wide mutable singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            score: 0,
            lives: crate::constants::INITIAL_LIVES,
            level: 1,
        }
    }
}

impl MatchState {
    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Explicit reset entry point, invoked at match (re)start.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
