//! Error types for construction-time failures.
//!
//! Per-tick simulation paths are total and never return errors; the only
//! fallible surface is actor construction.

use thiserror::Error;

use crate::enums::EntityKind;

/// Failure to construct an actor. Fatal to the construction call only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    /// The requested kind is not an actor kind (e.g. an explosion cannot
    /// be spawned through the actor factory).
    #[error("cannot spawn actor of kind {0:?}")]
    UnrecognizedActorKind(EntityKind),
}
