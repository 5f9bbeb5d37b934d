//! Arena layout builder.
//!
//! Lays out the fixed 20x15 tile map: a solid border, maze walls with
//! gaps on both sides, four inner obstacle blocks, breakable clusters in
//! the corners, a breakable defense ring around the central objective
//! tile, and scattered strategic breakables that open shortcut lanes when
//! destroyed.

use hecs::World;

use tankwar_core::constants::{ARENA_HEIGHT, ARENA_WIDTH, BREAKABLE_WALL_HEALTH, TILE_SIZE};
use tankwar_core::types::Position;

use crate::world_setup::{spawn_barrier, spawn_breakable};

/// Build the complete arena into the world.
pub fn generate(world: &mut World) {
    let cols = (ARENA_WIDTH / TILE_SIZE as f64) as i32;
    let rows = (ARENA_HEIGHT / TILE_SIZE as f64) as i32;

    border_walls(world, cols, rows);
    maze_walls(world, cols, rows);
    defense_ring(world, cols, rows);
    strategic_breakables(world, cols, rows);
}

fn at(col: i32, row: i32) -> Position {
    let tile = TILE_SIZE as f64;
    Position::new(col as f64 * tile, row as f64 * tile)
}

fn barrier(world: &mut World, col: i32, row: i32) {
    spawn_barrier(world, at(col, row));
}

fn breakable(world: &mut World, col: i32, row: i32) {
    spawn_breakable(world, at(col, row), BREAKABLE_WALL_HEALTH);
}

/// Solid indestructible perimeter.
fn border_walls(world: &mut World, cols: i32, rows: i32) {
    for row in 0..rows {
        for col in 0..cols {
            if row == 0 || row == rows - 1 || col == 0 || col == cols - 1 {
                barrier(world, col, row);
            }
        }
    }
}

fn maze_walls(world: &mut World, cols: i32, rows: i32) {
    let center_col = cols / 2;
    let center_row = rows / 2;

    horizontal_walls(world, cols, rows, center_col);
    vertical_walls(world, cols, rows, center_row);
    inner_obstacles(world, cols, rows);
    corner_breakables(world, cols, rows, center_col, center_row);
}

/// Two horizontal runs near the top and bottom, each split by a central gap.
fn horizontal_walls(world: &mut World, cols: i32, rows: i32, center_col: i32) {
    for col in 4..center_col - 2 {
        barrier(world, col, 3);
    }
    for col in center_col + 3..cols - 4 {
        barrier(world, col, 3);
    }

    for col in 4..center_col - 3 {
        barrier(world, col, rows - 4);
    }
    for col in center_col + 4..cols - 4 {
        barrier(world, col, rows - 4);
    }
}

/// Two broken vertical runs flanking the middle of the arena.
fn vertical_walls(world: &mut World, cols: i32, rows: i32, center_row: i32) {
    for col in [4, cols - 5] {
        barrier(world, col, 4);
        barrier(world, col, 5);
        for row in 8..center_row - 1 {
            barrier(world, col, row);
        }
        for row in center_row + 2..rows - 5 {
            barrier(world, col, row);
        }
    }
}

fn inner_obstacles(world: &mut World, cols: i32, rows: i32) {
    barrier(world, 7, 5);
    barrier(world, cols - 8, 5);
    barrier(world, 7, rows - 6);
    barrier(world, cols - 8, rows - 6);
}

/// Breakable clusters guarding the four corner pockets, plus four single
/// tiles that gate the central area.
fn corner_breakables(world: &mut World, cols: i32, rows: i32, center_col: i32, center_row: i32) {
    breakable(world, 2, 2);
    breakable(world, 3, 2);

    breakable(world, cols - 3, 2);
    breakable(world, cols - 4, 2);

    breakable(world, 2, rows - 3);
    breakable(world, 3, rows - 3);
    breakable(world, 2, rows - 4);
    breakable(world, 2, rows - 5);

    breakable(world, cols - 3, rows - 3);
    breakable(world, cols - 4, rows - 3);
    breakable(world, cols - 3, rows - 4);
    breakable(world, cols - 3, rows - 5);

    breakable(world, center_col - 3, center_row);
    breakable(world, center_col + 3, center_row);
    breakable(world, center_col, center_row - 3);
    breakable(world, center_col, center_row + 3);
}

/// Ring of breakables on the eight tiles around the objective's tile.
fn defense_ring(world: &mut World, cols: i32, rows: i32) {
    let tile = TILE_SIZE as f64;
    let center_col = ((ARENA_WIDTH / 2.0) / tile) as i32;
    let center_row = ((ARENA_HEIGHT / 2.0) / tile) as i32;

    let offsets: [(i32, i32); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    for (dc, dr) in offsets {
        let col = center_col + dc;
        let row = center_row + dr;
        if col > 0 && row > 0 && col < cols - 1 && row < rows - 1 {
            breakable(world, col, row);
        }
    }
}

fn strategic_breakables(world: &mut World, cols: i32, rows: i32) {
    let center_col = cols / 2;
    let center_row = rows / 2;

    breakable(world, 6, 5);
    breakable(world, 6, center_row);
    breakable(world, 6, rows - 6);

    breakable(world, cols - 7, 5);
    breakable(world, cols - 7, center_row);
    breakable(world, cols - 7, rows - 6);

    breakable(world, 8, 2);
    breakable(world, cols - 9, 2);

    breakable(world, 8, rows - 3);
    breakable(world, cols - 9, rows - 3);

    breakable(world, center_col - 4, center_row - 2);
    breakable(world, center_col + 4, center_row - 2);
    breakable(world, center_col - 4, center_row + 2);
    breakable(world, center_col + 4, center_row + 2);

    breakable(world, 9, 6);
    breakable(world, cols - 10, 6);
    breakable(world, 9, rows - 7);
    breakable(world, cols - 10, rows - 7);
}
