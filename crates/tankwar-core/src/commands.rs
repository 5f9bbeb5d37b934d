//! Input intents and match commands sent from the presentation layer.
//!
//! Intents represent currently-held controls, re-asserted every tick.
//! Commands are queued and applied at the next tick boundary.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A discrete control the player is holding this tick (level-triggered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputIntent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Fire,
}

/// The set of intents asserted for one tick. An absent intent simply
/// skips that action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    intents: HashSet<InputIntent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, intent: InputIntent) {
        self.intents.insert(intent);
    }

    pub fn release(&mut self, intent: InputIntent) {
        self.intents.remove(&intent);
    }

    pub fn is_held(&self, intent: InputIntent) -> bool {
        self.intents.contains(&intent)
    }
}

impl FromIterator<InputIntent> for InputState {
    fn from_iter<T: IntoIterator<Item = InputIntent>>(iter: T) -> Self {
        Self {
            intents: iter.into_iter().collect(),
        }
    }
}

/// Match-flow commands, processed at the tick boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    /// Start (or restart) a match, rebuilding the world.
    StartMatch,
    /// Reset to the idle phase, clearing all match state.
    Reset,
}
