//! Synthetic office floor plan.
//!
//! ```text
//! +--------+---------+---  ---+---------+---------+------+
//! | office | office  |  lobby | office  | office  |      |
//! +--dd----+----dd---+---dd---+---dd----+---dd----+      |
//! |                      corridor                        dd
//! +--dd----+----dd---+---dd---+---dd----+---dd----+      |
//! | office | office  | office | office  | office  | hall |
//! +--------+---------+--------+---------+---------+------+
//! ```
//!
//! Not to scale; see [`build_floor_plan`] for the exact walls.  The fire
//! starts at the grid centre, inside the middle office of the south wing.

use ev_core::Cell;
use ev_grid::Grid;

pub const WIDTH:  usize = 60;
pub const HEIGHT: usize = 40;

const NORTH_WING_WALL: i32 = 12;
const SOUTH_WING_WALL: i32 = 18;

fn wall_row(grid: &mut Grid, y: i32, x0: i32, x1: i32) {
    for x in x0..=x1 {
        grid.set_wall(Cell::new(x, y), true);
    }
}

fn wall_col(grid: &mut Grid, x: i32, y0: i32, y1: i32) {
    for y in y0..=y1 {
        grid.set_wall(Cell::new(x, y), true);
    }
}

fn door(grid: &mut Grid, x: i32, y: i32, width: i32, horizontal: bool) {
    for i in 0..width {
        let cell = if horizontal { Cell::new(x + i, y) } else { Cell::new(x, y + i) };
        grid.set_wall(cell, false);
    }
}

/// Two wings of offices either side of an east-west corridor.
pub fn build_floor_plan() -> Grid {
    let (w, h) = (WIDTH as i32, HEIGHT as i32);
    let mut grid = Grid::open(WIDTH, HEIGHT);

    // Outer shell.
    wall_row(&mut grid, 0, 0, w - 1);
    wall_row(&mut grid, h - 1, 0, w - 1);
    wall_col(&mut grid, 0, 0, h - 1);
    wall_col(&mut grid, w - 1, 0, h - 1);

    // Corridor walls.
    wall_row(&mut grid, NORTH_WING_WALL, 0, w - 8);
    wall_row(&mut grid, SOUTH_WING_WALL, 0, w - 8);

    // Office partitions in both wings.
    for x in [10, 20, 32, 42] {
        wall_col(&mut grid, x, 0, NORTH_WING_WALL);
        wall_col(&mut grid, x, SOUTH_WING_WALL, h - 1);
    }

    // One door per office onto the corridor.
    for x in [4, 14, 25, 36, 46] {
        door(&mut grid, x, NORTH_WING_WALL, 2, true);
        door(&mut grid, x, SOUTH_WING_WALL, 2, true);
    }

    // Street doors: lobby at the top, fire door at the east end.
    door(&mut grid, 25, 0, 3, true);
    door(&mut grid, w - 1, 14, 3, false);

    grid
}
