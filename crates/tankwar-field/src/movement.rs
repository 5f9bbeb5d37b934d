//! Movement & collision resolver.
//!
//! Validates axis-aligned motion against the arena bounds and the obstacle
//! registry. Both rects are shrunk by the collision buffer before the
//! overlap test so actors can slide past near-miss corners. The first
//! blocking obstacle aborts the check — no partial movement, no sliding.

use tankwar_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use tankwar_core::enums::Direction;
use tankwar_core::types::{Position, Rect};

use crate::obstacles::ObstacleSet;

/// Whether `actor` (identified by `self_id`, occupying `rect`) may advance
/// one step of `speed` units in `direction`.
pub fn can_move(
    self_id: u64,
    rect: &Rect,
    direction: Direction,
    speed: f64,
    obstacles: &ObstacleSet,
) -> bool {
    resolve(self_id, rect, direction, speed, obstacles).is_some()
}

/// The accepted destination for one step, or `None` if the motion is
/// rejected. Callers update the actor's facing to `direction` regardless —
/// turning is always allowed.
pub fn resolve(
    self_id: u64,
    rect: &Rect,
    direction: Direction,
    speed: f64,
    obstacles: &ObstacleSet,
) -> Option<Position> {
    let (dx, dy) = direction.delta();
    let new_x = rect.x + dx * speed;
    let new_y = rect.y + dy * speed;

    // Arena bounds.
    if new_x < 0.0
        || new_y < 0.0
        || new_x + rect.width > ARENA_WIDTH
        || new_y + rect.height > ARENA_HEIGHT
    {
        return None;
    }

    let moved = Rect::new(new_x, new_y, rect.width, rect.height).shrunk();
    for obstacle in obstacles.iter() {
        if obstacle.id == self_id {
            continue;
        }
        if moved.intersects(&obstacle.rect.shrunk()) {
            return None;
        }
    }

    Some(Position::new(new_x, new_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacles::ObstacleKind;
    use tankwar_core::constants::{PLAYER_TANK_SPEED, TANK_SIZE};

    fn tank_rect(x: f64, y: f64) -> Rect {
        Rect::new(x, y, TANK_SIZE as f64, TANK_SIZE as f64)
    }

    #[test]
    fn test_blocked_by_adjacent_wall() {
        // Wall at (140,100). A step from (103,100) to (106,100) overlaps
        // by 6 raw units, past the 2+2 shrink allowance, and is rejected.
        // From (100,100) the same step lands at 103, a 3-unit incursion
        // inside the allowance, and goes through.
        let mut obstacles = ObstacleSet::new();
        obstacles.push(2, ObstacleKind::Barrier, tank_rect(140.0, 100.0));

        let rect = tank_rect(103.0, 100.0);
        assert!(!can_move(1, &rect, Direction::Right, 3.0, &obstacles));
        assert!(resolve(1, &rect, Direction::Right, 3.0, &obstacles).is_none());

        let rect = tank_rect(100.0, 100.0);
        assert!(can_move(1, &rect, Direction::Right, 3.0, &obstacles));
    }

    #[test]
    fn test_open_field_moves() {
        let obstacles = ObstacleSet::new();
        let rect = tank_rect(100.0, 100.0);
        let dest = resolve(1, &rect, Direction::Right, 3.0, &obstacles).unwrap();
        assert_eq!(dest, Position::new(103.0, 100.0));
    }

    #[test]
    fn test_never_escapes_bounds() {
        let obstacles = ObstacleSet::new();
        // Drive into every edge from just inside it.
        let cases = [
            (tank_rect(0.0, 100.0), Direction::Left),
            (tank_rect(100.0, 0.0), Direction::Up),
            (tank_rect(ARENA_WIDTH - TANK_SIZE as f64, 100.0), Direction::Right),
            (tank_rect(100.0, ARENA_HEIGHT - TANK_SIZE as f64), Direction::Down),
        ];
        for (rect, dir) in cases {
            assert!(
                resolve(1, &rect, dir, PLAYER_TANK_SPEED, &obstacles).is_none(),
                "{dir:?} from the edge should be rejected"
            );
        }
    }

    #[test]
    fn test_bounds_hold_over_long_run() {
        // Repeated movement never produces an out-of-bounds position.
        let obstacles = ObstacleSet::new();
        let mut rect = tank_rect(100.0, 100.0);
        let dirs = [
            Direction::Right,
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ];
        for step in 0..1000 {
            let dir = dirs[step % dirs.len()];
            if let Some(pos) = resolve(1, &rect, dir, PLAYER_TANK_SPEED, &obstacles) {
                rect.x = pos.x;
                rect.y = pos.y;
            }
            assert!(rect.x >= 0.0 && rect.y >= 0.0);
            assert!(rect.x + rect.width <= ARENA_WIDTH);
            assert!(rect.y + rect.height <= ARENA_HEIGHT);
        }
    }

    #[test]
    fn test_self_excluded_from_collision() {
        let mut obstacles = ObstacleSet::new();
        // The actor's own registry entry must not block it.
        obstacles.push(1, ObstacleKind::Tank, tank_rect(100.0, 100.0));
        let rect = tank_rect(100.0, 100.0);
        assert!(can_move(1, &rect, Direction::Right, 3.0, &obstacles));
    }

    #[test]
    fn test_inactive_entities_not_in_registry_do_not_block() {
        // Inactive entities are excluded at registry build time; an empty
        // set means free movement.
        let obstacles = ObstacleSet::new();
        let rect = tank_rect(100.0, 100.0);
        for dir in Direction::ALL {
            assert!(can_move(1, &rect, dir, 1.5, &obstacles));
        }
    }

    #[test]
    fn test_corner_slide_within_buffer() {
        // Overlap smaller than the combined shrink buffer is tolerated.
        let mut obstacles = ObstacleSet::new();
        obstacles.push(2, ObstacleKind::Barrier, tank_rect(140.0, 137.0));
        let rect = tank_rect(100.0, 100.0);
        // Moving right to x=103: rows [100,140) vs wall rows [137,177)
        // overlap by 3 raw units, within the 2+2 shrink allowance.
        assert!(can_move(1, &rect, Direction::Right, 3.0, &obstacles));
    }
}
