//! Direction selection helpers shared by the behavior states.

use tankwar_core::enums::Direction;
use tankwar_core::types::Rect;

/// Cardinal direction from one rect toward another, along the larger axis.
pub fn direction_to(from: &Rect, to: &Rect) -> Direction {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Cardinal direction along the *smaller* axis toward the target.
/// If the target is mostly to the right and slightly up, this is Up.
pub fn secondary_direction(from: &Rect, to: &Rect) -> Direction {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx.abs() <= dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Ordered approach candidates: direct path, secondary axis, the two
/// perpendiculars of the primary axis (order set by the navigation
/// preference), then directly away as a last resort.
pub fn approach_candidates(
    to_target: Direction,
    secondary: Direction,
    clockwise_pref: bool,
) -> [Direction; 5] {
    if clockwise_pref {
        [
            to_target,
            secondary,
            to_target.clockwise(),
            to_target.counter_clockwise(),
            to_target.opposite(),
        ]
    } else {
        [
            to_target,
            secondary,
            to_target.counter_clockwise(),
            to_target.clockwise(),
            to_target.opposite(),
        ]
    }
}

/// Ordered flanking candidates: the role's perpendicular first, then the
/// direct approach, the opposite perpendicular, then retreat.
pub fn flank_candidates(to_target: Direction, flank_clockwise: bool) -> [Direction; 4] {
    let flank = if flank_clockwise {
        to_target.clockwise()
    } else {
        to_target.counter_clockwise()
    };
    [flank, to_target, flank.opposite(), to_target.opposite()]
}

/// Recovery order when a patrol heading is blocked: 90° clockwise, 90°
/// counter-clockwise, then the reverse direction. Fixed order, not
/// preference-dependent.
pub fn recovery_candidates(heading: Direction) -> [Direction; 3] {
    [
        heading.clockwise(),
        heading.counter_clockwise(),
        heading.opposite(),
    ]
}
