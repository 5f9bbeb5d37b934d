//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{AiState, CombatRole, Direction, ExplosionSize};
use crate::types::{Position, Size};

/// Whether an entity participates in the simulation.
/// For tanks and walls this is monotonic within a match: once false,
/// only a full match reset can produce an active instance again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Active(pub bool);

/// Tank state shared by the player and enemies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub direction: Direction,
    pub health: i32,
    pub max_health: i32,
    /// Movement speed in units per tick.
    pub speed: f64,
    /// Tick of the most recent shot (for cooldown gating).
    pub last_shot_tick: Option<u64>,
    /// Minimum ticks between shots.
    pub cooldown_ticks: u64,
    pub is_player: bool,
}

impl Tank {
    /// Apply damage, clamping health at zero. Returns true if this hit
    /// reduced health to zero (the caller deactivates the entity).
    pub fn take_damage(&mut self, damage: i32) -> bool {
        self.health = (self.health - damage).max(0);
        self.health == 0
    }

    /// Heal up to max health. Healing a destroyed tank is a no-op.
    pub fn heal(&mut self, amount: i32) {
        if self.health > 0 {
            self.health = (self.health + amount).min(self.max_health);
        }
    }

    /// Whether the cooldown permits firing at the given tick.
    pub fn can_fire(&self, tick: u64) -> bool {
        match self.last_shot_tick {
            Some(last) => tick.saturating_sub(last) >= self.cooldown_ticks,
            None => true,
        }
    }
}

/// Marks the player-controlled tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an AI-controlled tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Projectile state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub direction: Direction,
    /// Units per tick.
    pub speed: f64,
    pub damage: i32,
    /// Non-owning back-reference to the firing tank, encoded as entity bits.
    /// Used only for self-hit and friendly-fire checks, never for lifecycle.
    pub firer: u64,
    /// Cached ownership flag so combat checks survive the firer's demise.
    pub fired_by_player: bool,
}

/// Marks an indestructible wall tile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Barrier;

/// Destructible wall state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breakable {
    pub health: i32,
    pub max_health: i32,
    /// Derived visual flag (health below half of max). Informational only.
    pub damaged: bool,
}

impl Breakable {
    pub fn new(health: i32) -> Self {
        Self {
            health,
            max_health: health,
            damaged: false,
        }
    }

    /// Apply damage, clamping at zero. Returns true when this hit destroyed
    /// the wall.
    pub fn take_damage(&mut self, damage: i32) -> bool {
        self.health = (self.health - damage).max(0);
        self.health == 0
    }
}

/// The protected collectible at the arena center.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Objective {
    pub under_threat: bool,
    /// Tick of the most recent threat sighting (for the auto-clear timer).
    pub threat_since_tick: u64,
}

/// Health pickup; restores the collecting tank to full health.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MedKit;

/// Timed visual effect spawned at impact points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub size: ExplosionSize,
    pub frame: u32,
    /// Tick at which the current frame started.
    pub frame_started: u64,
}

/// Per-agent AI state, exclusively owned by one enemy tank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentState {
    /// Sequential identifier assigned at spawn from the match context.
    pub id: u32,
    pub state: AiState,
    pub role: CombatRole,
    /// Held patrol/travel direction.
    pub heading: Direction,
    /// Position at the previous evaluation (for stuck detection).
    pub last_pos: Position,
    /// Consecutive evaluations with net displacement below the epsilon.
    pub stuck_ticks: u32,
    /// Consecutive evaluations spent on the current heading.
    pub direction_ticks: u32,
    /// Navigation preference; flips when stuck recovery triggers.
    pub clockwise_pref: bool,
    /// Tick of the last evaluation (throttles to one per tick).
    pub last_eval_tick: Option<u64>,
    /// Fire request raised by the most recent evaluation.
    pub wants_fire: bool,
}

impl AgentState {
    pub fn new(id: u32, heading: Direction, spawn: Position) -> Self {
        Self {
            id,
            state: AiState::default(),
            role: CombatRole::default(),
            heading,
            last_pos: spawn,
            stuck_ticks: 0,
            direction_ticks: 0,
            // Alternate the initial preference for variety.
            clockwise_pref: id % 2 == 0,
            last_eval_tick: None,
            wants_fire: false,
        }
    }
}

// Position and Size (types.rs) are used directly as ECS components too.
