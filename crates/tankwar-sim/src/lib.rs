//! Match engine for the tank arena.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces MatchSnapshots for the frontend.

pub mod bus;
pub mod engine;
pub mod map;
pub mod systems;
pub mod world_setup;

pub use engine::{MatchEngine, SimConfig};
pub use tankwar_core as core;
