//! Pathfinding trait and default A* implementation.
//!
//! # Pluggability
//!
//! The environment calls pathfinding through the [`Pathfinder`] trait so
//! applications can swap in alternatives (flow fields, crowd-aware costs)
//! without touching the stepping loop.
//!
//! # Statelessness
//!
//! Every call searches from scratch.  The fire overlay changes between
//! calls, so a cached search tree would be invalid anyway.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ev_core::Cell;

use crate::{FireMap, Grid};

/// Ordered cells to walk, excluding the start and including the goal.
/// Empty when no motion is possible or needed.
pub type Path = Vec<Cell>;

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable grid search.
///
/// Implementations must be `Send + Sync` so one instance can serve
/// environments running on different worker threads.
pub trait Pathfinder: Send + Sync {
    /// Shortest 4-connected path from `start` to `goal` that avoids walls
    /// and, when `fire` is given, burning cells.
    ///
    /// Never fails: an unreachable goal, a goal on a wall or fire, or
    /// `start == goal` all yield an empty path.
    fn find_path(&self, grid: &Grid, fire: Option<&FireMap>, start: Cell, goal: Cell) -> Path;
}

// ── AStarPathfinder ───────────────────────────────────────────────────────────

/// A* over the uniform-cost grid with the Manhattan heuristic.
///
/// Open-set entries with equal priority pop in insertion order.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStarPathfinder;

impl Pathfinder for AStarPathfinder {
    fn find_path(&self, grid: &Grid, fire: Option<&FireMap>, start: Cell, goal: Cell) -> Path {
        astar(grid, fire, start, goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

const NO_PARENT: u32 = u32::MAX;

#[inline]
fn passable(grid: &Grid, fire: Option<&FireMap>, cell: Cell) -> bool {
    grid.is_free(cell) && !fire.is_some_and(|f| f.is_burning(cell))
}

fn astar(grid: &Grid, fire: Option<&FireMap>, start: Cell, goal: Cell) -> Path {
    if let Some(f) = fire {
        assert!(f.matches(grid), "fire map {}x{} does not overlay grid {}x{}",
            f.width(), f.height(), grid.width(), grid.height());
    }

    if start == goal {
        return Vec::new();
    }
    let (Some(start_idx), Some(goal_idx)) = (grid.index_of(start), grid.index_of(goal)) else {
        return Vec::new();
    };
    if !passable(grid, fire, goal) {
        return Vec::new();
    }

    let n = grid.len();
    // g[v] = best known cost to reach v.
    let mut g = vec![u32::MAX; n];
    let mut parent = vec![NO_PARENT; n];
    let mut closed = vec![false; n];

    // Min-heap keyed by (f, insertion sequence) so equal-f entries pop FIFO.
    let mut heap: BinaryHeap<Reverse<(u32, u64, u32)>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    g[start_idx] = 0;
    heap.push(Reverse((start.manhattan(goal), seq, start_idx as u32)));

    while let Some(Reverse((_, _, idx))) = heap.pop() {
        let idx = idx as usize;
        if idx == goal_idx {
            return reconstruct(grid, &parent, start_idx, goal_idx);
        }
        if closed[idx] {
            continue;
        }
        closed[idx] = true;

        let current = grid.cell_at(idx);
        let next_g = g[idx] + 1;

        for neighbour in current.neighbours() {
            if !passable(grid, fire, neighbour) {
                continue;
            }
            let Some(nidx) = grid.index_of(neighbour) else { continue };
            if closed[nidx] || next_g >= g[nidx] {
                continue;
            }
            g[nidx] = next_g;
            parent[nidx] = idx as u32;
            seq += 1;
            heap.push(Reverse((next_g + neighbour.manhattan(goal), seq, nidx as u32)));
        }
    }

    Vec::new()
}

fn reconstruct(grid: &Grid, parent: &[u32], start_idx: usize, goal_idx: usize) -> Path {
    let mut path = Vec::new();
    let mut cur = goal_idx;
    while cur != start_idx {
        path.push(grid.cell_at(cur));
        cur = parent[cur] as usize;
    }
    path.reverse();
    path
}
