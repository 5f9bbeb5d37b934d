//! Sprite asset table.
//!
//! Maps an entity's kind (and facing, where relevant) to the asset name the
//! presentation layer should draw. A missing entry is a non-fatal resource
//! warning — the simulation continues without a renderable reference.

use crate::enums::{Direction, EntityKind, ExplosionSize};

/// Asset name for a tank facing the given direction.
pub fn tank_sprite(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "tank_up",
        Direction::Down => "tank_down",
        Direction::Left => "tank_left",
        Direction::Right => "tank_right",
    }
}

/// Asset name for a missile travelling in the given direction.
pub fn missile_sprite(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "missile_up",
        Direction::Down => "missile_down",
        Direction::Left => "missile_left",
        Direction::Right => "missile_right",
    }
}

/// Asset name for an explosion animation frame, if the frame exists.
pub fn explosion_sprite(size: ExplosionSize, frame: u32) -> Option<&'static str> {
    const SMALL: [&str; 10] = [
        "boom_s0", "boom_s1", "boom_s2", "boom_s3", "boom_s4", "boom_s5", "boom_s6", "boom_s7",
        "boom_s8", "boom_s9",
    ];
    const MEDIUM: [&str; 10] = [
        "boom_m0", "boom_m1", "boom_m2", "boom_m3", "boom_m4", "boom_m5", "boom_m6", "boom_m7",
        "boom_m8", "boom_m9",
    ];
    const LARGE: [&str; 10] = [
        "boom_l0", "boom_l1", "boom_l2", "boom_l3", "boom_l4", "boom_l5", "boom_l6", "boom_l7",
        "boom_l8", "boom_l9",
    ];
    let table = match size {
        ExplosionSize::Small => &SMALL,
        ExplosionSize::Medium => &MEDIUM,
        ExplosionSize::Large => &LARGE,
    };
    table.get(frame as usize).copied()
}

/// Asset name for kinds whose sprite does not depend on facing.
pub fn static_sprite(kind: EntityKind) -> Option<&'static str> {
    match kind {
        EntityKind::Barrier => Some("wall"),
        EntityKind::BreakableWall => Some("wall_breakable"),
        EntityKind::MedKit => Some("medkit"),
        EntityKind::Objective => Some("golden_apple"),
        // Tanks, missiles, and explosions are direction/frame dependent.
        EntityKind::PlayerTank
        | EntityKind::EnemyTank
        | EntityKind::Missile
        | EntityKind::Explosion => None,
    }
}

/// Sprite for a damaged breakable wall.
pub fn damaged_wall_sprite() -> &'static str {
    "wall_breakable_damaged"
}
