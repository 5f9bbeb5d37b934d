//! Core types and definitions for the TANKWAR simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input intents, commands, state snapshots, events, and
//! constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod sprites;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
