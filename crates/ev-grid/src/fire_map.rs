//! Burning-cell overlay.
//!
//! `FireMap` is plain data: the fire model in `ev-fire` owns one and is the
//! only writer, while pathfinding and status checks read it.  It has the same
//! dimensions and row-major layout as the [`Grid`] it was created for.

use ev_core::Cell;

use crate::Grid;

/// 2-D burning/unburnt field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FireMap {
    width:   usize,
    height:  usize,
    burning: Vec<bool>,
    count:   usize,
}

impl FireMap {
    /// An all-unburnt map of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, burning: vec![false; width * height], count: 0 }
    }

    /// An all-unburnt map matching `grid`'s dimensions.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` when this map overlays `grid` cell for cell.
    #[inline]
    pub fn matches(&self, grid: &Grid) -> bool {
        self.width == grid.width() && self.height == grid.height()
    }

    #[inline]
    fn index_of(&self, cell: Cell) -> Option<usize> {
        (cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.width && (cell.y as usize) < self.height)
            .then(|| cell.y as usize * self.width + cell.x as usize)
    }

    /// `true` if `cell` is burning.  Out-of-bounds cells never burn.
    #[inline]
    pub fn is_burning(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some_and(|i| self.burning[i])
    }

    /// Set `cell` alight.  Returns `true` if it was not burning before.
    /// Out-of-bounds cells are ignored.
    pub fn ignite(&mut self, cell: Cell) -> bool {
        match self.index_of(cell) {
            Some(i) if !self.burning[i] => {
                self.burning[i] = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Extinguish everything.
    pub fn clear(&mut self) {
        self.burning.fill(false);
        self.count = 0;
    }

    /// Number of burning cells.
    #[inline]
    pub fn burning_count(&self) -> usize {
        self.count
    }

    /// Burning cells in row-major order.
    pub fn burning_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width;
        self.burning
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(move |(i, _)| Cell::new((i % width) as i32, (i / width) as i32))
    }

    /// Row-major burning buffer.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.burning
    }
}
