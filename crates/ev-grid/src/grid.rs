//! Static floor-plan representation.
//!
//! # Data layout
//!
//! Walls are stored row-major in a flat `Vec<bool>`; cell `(x, y)` lives at
//! `y * width + x`.  The grid is produced once by the perception step (or a
//! test helper) and is read-only for the lifetime of an environment, which
//! shares it behind an `Arc`.

use ev_core::Cell;

use crate::{GridError, GridResult};

/// 2-D wall/free occupancy field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width:  usize,
    height: usize,
    walls:  Vec<bool>,
}

impl Grid {
    /// Build from a row-major wall buffer of exactly `width * height` cells.
    pub fn new(width: usize, height: usize, walls: Vec<bool>) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        let expected = width * height;
        if walls.len() != expected {
            return Err(GridError::Dimensions { expected, got: walls.len() });
        }
        Ok(Self { width, height, walls })
    }

    /// A grid with no walls at all.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn open(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self { width, height, walls: vec![false; width * height] }
    }

    /// Build from rows of `0` (free) / non-zero (wall) values, the shape a
    /// segmentation mask arrives in.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }

        let mut walls = Vec::with_capacity(width * height);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(GridError::Ragged { row, expected: width, got: values.len() });
            }
            walls.extend(values.iter().map(|&v| v != 0));
        }
        Ok(Self { width, height, walls })
    }

    /// Parse an ASCII floor plan: `#` is a wall, any other character is free.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn parse(text: &str) -> GridResult<Self> {
        let rows: Vec<Vec<u8>> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().map(|c| u8::from(c == '#')).collect())
            .collect();
        Self::from_rows(&rows)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// The geometric centre, `(width / 2, height / 2)`.
    #[inline]
    pub fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    // ── Indexing ──────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.width && (cell.y as usize) < self.height
    }

    /// Flat index of `cell`, or `None` when out of bounds.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.width + cell.x as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// `true` for wall cells.  Out-of-bounds cells count as walls.
    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.index_of(cell).is_none_or(|i| self.walls[i])
    }

    /// `true` for in-bounds, non-wall cells.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        !self.is_wall(cell)
    }

    /// Mark or clear a wall.  Out-of-bounds cells are ignored.
    pub fn set_wall(&mut self, cell: Cell, wall: bool) {
        if let Some(i) = self.index_of(cell) {
            self.walls[i] = wall;
        }
    }

    /// Row-major wall buffer.
    #[inline]
    pub fn walls(&self) -> &[bool] {
        &self.walls
    }

    /// All free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.walls
            .iter()
            .enumerate()
            .filter(|&(_, &wall)| !wall)
            .map(|(i, _)| self.cell_at(i))
    }

    pub fn free_cell_count(&self) -> usize {
        self.walls.iter().filter(|&&w| !w).count()
    }
}
