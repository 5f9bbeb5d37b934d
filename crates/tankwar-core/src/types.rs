//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::COLLISION_BUFFER;

/// 2D position in arena space (units, screen convention: y grows downward).
/// Refers to an entity's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Entity footprint in arena units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// Axis-aligned bounding box used for every collision test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance between two top-left corners.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Square footprint, the common case for tiles and tanks.
    pub fn square(side: i32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect from a position and footprint.
    pub fn from_parts(pos: Position, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width as f64,
            height: size.height as f64,
        }
    }

    /// Strict AABB overlap test.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// The rect shrunk by the collision buffer on every side.
    /// Used by the movement resolver so tanks can slide past near-miss corners.
    pub fn shrunk(&self) -> Rect {
        let b = COLLISION_BUFFER;
        Rect {
            x: self.x + b,
            y: self.y + b,
            width: (self.width - 2.0 * b).max(0.0),
            height: (self.height - 2.0 * b).max(0.0),
        }
    }

    /// Whether a point falls inside this rect (edges inclusive).
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
