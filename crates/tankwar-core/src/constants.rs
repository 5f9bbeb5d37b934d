//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One AI evaluation per agent per tick at most.
pub const TICK_RATE: u32 = 60;

// --- Arena ---

/// Arena width in units.
pub const ARENA_WIDTH: f64 = 800.0;

/// Arena height in units.
pub const ARENA_HEIGHT: f64 = 600.0;

/// Tile side length; walls and map features align to this grid.
pub const TILE_SIZE: i32 = 40;

// --- Entity sizes ---

/// Tank footprint (square).
pub const TANK_SIZE: i32 = 40;

/// Missile footprint (square).
pub const MISSILE_SIZE: i32 = 10;

/// Medkit footprint (square).
pub const MEDKIT_SIZE: i32 = 30;

/// Objective marker footprint (square).
pub const OBJECTIVE_SIZE: i32 = 35;

// --- Health and damage ---

pub const PLAYER_MAX_HEALTH: i32 = 100;
pub const ENEMY_MAX_HEALTH: i32 = 50;

/// Damage dealt by a player-fired missile.
pub const PLAYER_MISSILE_DAMAGE: i32 = 25;

/// Damage dealt by an enemy-fired missile.
pub const ENEMY_MISSILE_DAMAGE: i32 = 15;

/// Breakable wall health tiers.
pub const BREAKABLE_WALL_HEALTH: i32 = 50;
pub const WEAK_WALL_HEALTH: i32 = 25;
pub const STRONG_WALL_HEALTH: i32 = 75;

// --- Movement ---

/// Player tank speed (units per tick).
pub const PLAYER_TANK_SPEED: f64 = 3.0;

/// Enemy tank speed (units per tick). Slower than the player.
pub const ENEMY_TANK_SPEED: f64 = 1.5;

/// Missile speed (units per tick).
pub const MISSILE_SPEED: f64 = 4.0;

/// Shrink applied to both rects before the movement overlap test,
/// permitting near-miss sliding past corners.
pub const COLLISION_BUFFER: f64 = 2.0;

// --- Fire cooldowns (ticks at 60 Hz) ---

/// Player shot cooldown (~400 ms).
pub const PLAYER_SHOT_COOLDOWN_TICKS: u64 = 24;

/// Enemy shot cooldown (~800 ms) — slower firing.
pub const ENEMY_SHOT_COOLDOWN_TICKS: u64 = 48;

// --- AI decision engine ---

/// Agents further than this from the target always patrol.
pub const ENGAGEMENT_RANGE: f64 = 280.0;

/// Within this range a chasing agent switches to attacking.
pub const ATTACK_RANGE: f64 = 120.0;

/// Role coordination kicks in when 2+ agents are within this range of the target.
pub const COORDINATION_RANGE: f64 = 250.0;

/// Consecutive low-displacement ticks before stuck recovery triggers.
pub const STUCK_THRESHOLD: u32 = 15;

/// Net per-tick displacement below this counts as "no progress".
pub const STUCK_EPSILON: f64 = 1.0;

/// Maximum agents simultaneously classified as active chasers.
pub const MAX_CHASERS: usize = 3;

/// Lateral alignment tolerance for the shooting gate (units).
pub const AIM_TOLERANCE: f64 = 35.0;

/// Strafe tolerance while attacking (units).
pub const STRAFE_TOLERANCE: f64 = 15.0;

/// Sample step for the line-of-sight raymarch (units).
pub const LOS_STEP: f64 = 15.0;

// --- Objective ---

/// Enemies within this distance of the objective put it under threat.
pub const OBJECTIVE_DANGER_RADIUS: f64 = 60.0;

/// Ticks after the last nearby enemy before the threat flag clears (~1 s).
pub const OBJECTIVE_THREAT_COOLDOWN_TICKS: u64 = 60;

// --- Explosions ---

pub const EXPLOSION_SIZE_SMALL: i32 = 20;
pub const EXPLOSION_SIZE_MEDIUM: i32 = 35;
pub const EXPLOSION_SIZE_LARGE: i32 = 50;

/// Animation frames per explosion.
pub const EXPLOSION_FRAME_COUNT: u32 = 10;

// --- Spawning ---

/// Enemy tanks per match.
pub const ENEMY_TANK_COUNT: usize = 6;

/// Medkits per match.
pub const MEDKIT_COUNT: usize = 3;

/// Placement attempts before giving up on a medkit.
pub const MEDKIT_PLACEMENT_ATTEMPTS: u32 = 50;

// --- Scoring ---

/// Points for destroying a breakable wall (player-fired only).
pub const SCORE_WALL_DESTROYED: u32 = 10;

/// Points for destroying an enemy tank (player-fired only).
pub const SCORE_ENEMY_DESTROYED: u32 = 25;

/// Points for collecting the objective.
pub const SCORE_OBJECTIVE_COLLECTED: u32 = 100;

/// Bonus awarded once when the player wins the match.
pub const SCORE_WIN_BONUS: u32 = 5000;

/// Starting lives in the match state.
pub const INITIAL_LIVES: u32 = 3;
