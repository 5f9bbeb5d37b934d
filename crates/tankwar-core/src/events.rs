//! Events emitted by the simulation for subscribers and the frontend.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::types::Position;

/// A notification produced by the resolvers and delivered synchronously
/// within the tick that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A missile struck something (wall, breakable, or tank).
    MissileHit {
        target: EntityKind,
        position: Position,
    },
    /// A tank's health reached zero.
    TankDestroyed {
        kind: EntityKind,
        position: Position,
    },
    /// A breakable wall was destroyed.
    WallDestroyed { position: Position },
    /// A tank restored itself at a medkit.
    MedKitCollected { by_player: bool },
    /// The player picked up the protected objective.
    ObjectiveCollected,
    /// The match ended. Published exactly once per match.
    MatchEnded { player_won: bool },
}
