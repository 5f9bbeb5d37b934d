//! Line-of-sight raymarch.
//!
//! Marches in fixed steps along the segment between two entity centers and
//! reports blocked sight if any sample falls inside an active wall rect.
//! The march is open at both ends so the firer's and target's own tiles
//! never occlude the shot.

use tankwar_core::constants::LOS_STEP;
use tankwar_core::types::Rect;

use crate::obstacles::ObstacleSet;

/// Whether the straight line between the centers of `from` and `to` is
/// free of wall geometry. Total over its inputs; adjacent rects are
/// trivially clear.
pub fn has_line_of_sight(from: &Rect, to: &Rect, obstacles: &ObstacleSet) -> bool {
    let fx = from.center_x();
    let fy = from.center_y();
    let tx = to.center_x();
    let ty = to.center_y();

    let mut dx = tx - fx;
    let mut dy = ty - fy;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < 1.0 {
        return true;
    }
    dx /= dist;
    dy /= dist;

    let mut t = LOS_STEP;
    while t < dist - LOS_STEP {
        let cx = fx + dx * t;
        let cy = fy + dy * t;

        for wall in obstacles.walls() {
            if wall.rect.contains_point(cx, cy) {
                return false;
            }
        }
        t += LOS_STEP;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacles::ObstacleKind;

    fn tile(x: f64, y: f64) -> Rect {
        Rect::new(x, y, 40.0, 40.0)
    }

    #[test]
    fn test_clear_without_walls() {
        let obstacles = ObstacleSet::new();
        assert!(has_line_of_sight(
            &tile(0.0, 0.0),
            &tile(400.0, 0.0),
            &obstacles
        ));
    }

    #[test]
    fn test_wall_on_the_line_blocks() {
        let mut obstacles = ObstacleSet::new();
        // Wall centered on the horizontal sight line.
        obstacles.push(9, ObstacleKind::Barrier, tile(200.0, 0.0));
        assert!(!has_line_of_sight(
            &tile(0.0, 0.0),
            &tile(400.0, 0.0),
            &obstacles
        ));
    }

    #[test]
    fn test_breakable_blocks_too() {
        let mut obstacles = ObstacleSet::new();
        obstacles.push(9, ObstacleKind::BreakableWall, tile(200.0, 0.0));
        assert!(!has_line_of_sight(
            &tile(0.0, 0.0),
            &tile(400.0, 0.0),
            &obstacles
        ));
    }

    #[test]
    fn test_tanks_do_not_occlude() {
        let mut obstacles = ObstacleSet::new();
        obstacles.push(9, ObstacleKind::Tank, tile(200.0, 0.0));
        assert!(has_line_of_sight(
            &tile(0.0, 0.0),
            &tile(400.0, 0.0),
            &obstacles
        ));
    }

    #[test]
    fn test_off_line_wall_stays_clear() {
        let mut obstacles = ObstacleSet::new();
        obstacles.push(9, ObstacleKind::Barrier, tile(200.0, 120.0));
        assert!(has_line_of_sight(
            &tile(0.0, 0.0),
            &tile(400.0, 0.0),
            &obstacles
        ));
    }

    #[test]
    fn test_adjacent_rects_trivially_clear() {
        let mut obstacles = ObstacleSet::new();
        obstacles.push(9, ObstacleKind::Barrier, tile(500.0, 500.0));
        // Overlapping centers — distance under one unit.
        assert!(has_line_of_sight(
            &tile(100.0, 100.0),
            &tile(100.0, 100.0),
            &obstacles
        ));
    }

    #[test]
    fn test_diagonal_march_hits_wall() {
        let mut obstacles = ObstacleSet::new();
        obstacles.push(9, ObstacleKind::Barrier, tile(180.0, 180.0));
        assert!(!has_line_of_sight(
            &tile(0.0, 0.0),
            &tile(400.0, 400.0),
            &obstacles
        ));
    }
}
