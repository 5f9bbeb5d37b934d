//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Cardinal facing/movement direction with its unit movement vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit movement vector (screen convention: Up is -y).
    pub fn delta(&self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }

    pub fn clockwise(&self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub fn counter_clockwise(&self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Whether this direction moves along the vertical axis.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Entity kind tag carried by snapshot views and the spawn factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    PlayerTank,
    EnemyTank,
    Missile,
    Barrier,
    BreakableWall,
    MedKit,
    Objective,
    Explosion,
}

/// AI behavior state for one enemy agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    /// Wandering; target is out of range or the chaser pool is full.
    #[default]
    Patrolling,
    /// Moving toward the target, navigating around obstacles.
    Approaching,
    /// Circling to attack from an assigned side.
    Flanking,
    /// In range; aiming, strafing, and shooting.
    Attacking,
}

impl AiState {
    /// Whether this state counts as actively pursuing the target.
    pub fn is_chasing(&self) -> bool {
        matches!(
            self,
            AiState::Approaching | AiState::Flanking | AiState::Attacking
        )
    }
}

/// Combat role assigned by the coordination layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatRole {
    /// Attack head-on.
    #[default]
    Direct,
    /// Circle counter-clockwise of the target direction.
    FlankLeft,
    /// Circle clockwise of the target direction.
    FlankRight,
}

/// Explosion visual size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionSize {
    /// Missile impact.
    Small,
    /// Wall destruction.
    Medium,
    /// Tank destruction.
    Large,
}

impl ExplosionSize {
    /// Footprint side length in units.
    pub fn pixel_size(&self) -> i32 {
        match self {
            ExplosionSize::Small => crate::constants::EXPLOSION_SIZE_SMALL,
            ExplosionSize::Medium => crate::constants::EXPLOSION_SIZE_MEDIUM,
            ExplosionSize::Large => crate::constants::EXPLOSION_SIZE_LARGE,
        }
    }

    /// Ticks between animation frames.
    pub fn frame_delay_ticks(&self) -> u64 {
        match self {
            ExplosionSize::Small => 4,
            ExplosionSize::Medium => 5,
            ExplosionSize::Large => 6,
        }
    }
}

/// Match phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Idle,
    Active,
    Complete,
}
