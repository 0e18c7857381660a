//! Integer grid coordinate.
//!
//! `x` is the column and `y` the row, both measured from the top-left corner.
//! Coordinates are signed so neighbour arithmetic and out-of-bounds ignition
//! points need no special casing; bounds are checked by the field that is
//! being indexed.

use std::fmt;

/// A cell on the floor-plan grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// 4-connected neighbour offsets in probe order: right, left, down, up.
    pub const NEIGHBOURS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell shifted by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Cell {
        Cell::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbours in [`Cell::NEIGHBOURS`] order.
    /// May lie outside the grid.
    #[inline]
    pub fn neighbours(self) -> impl Iterator<Item = Cell> {
        Self::NEIGHBOURS.into_iter().map(move |(dx, dy)| self.offset(dx, dy))
    }

    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Straight-line distance in grid units.
    #[inline]
    pub fn distance(self, other: Cell) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
