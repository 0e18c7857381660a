//! Exit discovery and nearest-exit lookup.
//!
//! # Scan order
//!
//! Candidate exits are the free cells of the rings one cell in from each
//! edge.  The scan visits, for each column, the top ring (row 1) then the
//! bottom ring (row `h - 2`); then, for each row, the left ring (column 1)
//! then the right ring (column `w - 2`).  De-duplication is greedy in that
//! order, so the order decides which cell of a wide doorway becomes the exit
//! and which index each doorway gets.  Downstream action indices depend on
//! it; do not reorder.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over the kept exits answers "is this agent close
//! enough to any exit" and "which exit is nearest" without scanning.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use ev_core::{Cell, ExitId};

use crate::Grid;

/// Scan `grid`'s inner border rings for free cells and keep those whose
/// distance to every previously kept exit is strictly greater than
/// `separation`.  The first candidate found is always kept.
///
/// Returns an empty vector for a sealed floor plan.
pub fn discover_exits(grid: &Grid, separation: f64) -> Vec<Cell> {
    let w = grid.width() as i32;
    let h = grid.height() as i32;

    let mut candidates = Vec::new();
    let mut probe = |cell: Cell| {
        if grid.is_free(cell) {
            candidates.push(cell);
        }
    };

    for x in 0..w {
        probe(Cell::new(x, 1));
        probe(Cell::new(x, h - 2));
    }
    for y in 0..h {
        probe(Cell::new(1, y));
        probe(Cell::new(w - 2, y));
    }

    let mut kept: Vec<Cell> = Vec::new();
    for cell in candidates {
        if kept.iter().all(|k| k.distance(cell) > separation) {
            kept.push(cell);
        }
    }
    kept
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct ExitEntry {
    point: [f64; 2],
    id:    ExitId,
}

impl RTreeObject for ExitEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ExitEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

#[inline]
fn point_of(cell: Cell) -> [f64; 2] {
    [f64::from(cell.x), f64::from(cell.y)]
}

// ── ExitIndex ─────────────────────────────────────────────────────────────────

/// The immutable exit set of an environment, indexed by [`ExitId`].
pub struct ExitIndex {
    exits: Vec<Cell>,
    tree:  RTree<ExitEntry>,
}

impl ExitIndex {
    pub fn new(exits: Vec<Cell>) -> Self {
        let entries = exits
            .iter()
            .enumerate()
            .map(|(i, &cell)| ExitEntry { point: point_of(cell), id: ExitId::from_index(i) })
            .collect();
        Self { exits, tree: RTree::bulk_load(entries) }
    }

    /// Discover exits on `grid` and index them.
    pub fn discover(grid: &Grid, separation: f64) -> Self {
        Self::new(discover_exits(grid, separation))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exits.is_empty()
    }

    /// Exit coordinates in index order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.exits
    }

    #[inline]
    pub fn get(&self, id: ExitId) -> Option<Cell> {
        self.exits.get(id.index()).copied()
    }

    /// The closest exit to `cell` and its Euclidean distance.
    pub fn nearest(&self, cell: Cell) -> Option<(ExitId, f64)> {
        let p = point_of(cell);
        self.tree
            .nearest_neighbor(&p)
            .map(|e| (e.id, e.distance_2(&p).sqrt()))
    }

    /// `true` if some exit lies strictly closer than `radius` to `cell`.
    pub fn any_within(&self, cell: Cell, radius: f64) -> bool {
        self.nearest(cell).is_some_and(|(_, d)| d < radius)
    }
}
