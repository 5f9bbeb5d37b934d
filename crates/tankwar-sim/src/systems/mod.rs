//! ECS systems that operate on the match world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` when
//! read-only). They do not own state; per-match state lives in components
//! or is passed in from the engine.

pub mod cleanup;
pub mod combat;
pub mod effects;
pub mod enemy_ai;
pub mod missiles;
pub mod objective;
pub mod obstacles;
pub mod pickups;
pub mod player;
pub mod snapshot;
pub mod walls;
