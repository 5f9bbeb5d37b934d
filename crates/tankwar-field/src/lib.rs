//! Spatial layer for the TANKWAR simulation.
//!
//! Pure geometry over plain data: the per-tick obstacle registry, the
//! movement & collision resolver, and the line-of-sight raymarch.
//! No ECS dependency — the sim crate feeds it rects and ids.

pub mod los;
pub mod movement;
pub mod obstacles;
