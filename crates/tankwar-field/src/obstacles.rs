//! Obstacle registry — the collidable world as seen by one tick.
//!
//! Rebuilt from the ECS world every tick; only active entities are
//! admitted, so collision queries never need to re-check liveness.

use tankwar_core::types::Rect;

/// What kind of thing an obstacle is. Movement blocks on all of them;
/// line-of-sight cares only about walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Barrier,
    BreakableWall,
    Tank,
    Objective,
}

impl ObstacleKind {
    /// Whether this obstacle blocks line-of-sight.
    pub fn blocks_sight(&self) -> bool {
        matches!(self, ObstacleKind::Barrier | ObstacleKind::BreakableWall)
    }
}

/// One collidable entity. `id` is the owning entity's bit representation,
/// used only to exclude an actor from colliding with itself.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub id: u64,
    pub kind: ObstacleKind,
    pub rect: Rect,
}

/// The set of active collidable entities for the current tick.
#[derive(Debug, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear for the per-tick rebuild, keeping the allocation.
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn push(&mut self, id: u64, kind: ObstacleKind, rect: Rect) {
        self.obstacles.push(Obstacle { id, kind, rect });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Only the obstacles that occlude line-of-sight.
    pub fn walls(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter().filter(|o| o.kind.blocks_sight())
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
