//! Enemy AI decision engine.
//!
//! A per-agent behavior state machine with a coordination layer that
//! assigns attack roles and arbitrates a capped pool of active chasers.
//! Pure over plain data — no ECS dependency; the sim crate feeds it the
//! obstacle registry and applies the returned movement decision.

pub mod fsm;
pub mod registry;
pub mod steering;

#[cfg(test)]
mod tests;
