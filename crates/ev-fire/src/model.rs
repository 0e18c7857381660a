//! The `FireModel` owner of the burning-cell overlay.

use ev_core::{Cell, SimRng};
use ev_grid::{FireMap, Grid};

/// Owns a [`FireMap`] and advances it one step at a time.
///
/// The grid is passed into every call rather than stored, so the model never
/// outlives or aliases the environment's floor plan.
#[derive(Clone, Debug)]
pub struct FireModel {
    map:                FireMap,
    spread_probability: f64,
}

impl FireModel {
    pub const DEFAULT_SPREAD_PROBABILITY: f64 = 0.25;

    /// An all-unburnt model sized for `grid`.
    pub fn new(grid: &Grid, spread_probability: f64) -> Self {
        Self {
            map: FireMap::for_grid(grid),
            spread_probability,
        }
    }

    /// Read-only view for pathfinding, status checks, and observations.
    #[inline]
    pub fn map(&self) -> &FireMap {
        &self.map
    }

    #[inline]
    pub fn spread_probability(&self) -> f64 {
        self.spread_probability
    }

    pub fn set_spread_probability(&mut self, p: f64) {
        self.spread_probability = p;
    }

    /// Mark each point as burning.  Out-of-bounds points and walls are
    /// skipped.  Returns how many cells newly caught fire.
    pub fn ignite<I>(&mut self, grid: &Grid, points: I) -> usize
    where
        I: IntoIterator<Item = Cell>,
    {
        assert!(self.map.matches(grid), "fire model does not match grid dimensions");
        points
            .into_iter()
            .filter(|&p| grid.is_free(p))
            .filter(|&p| self.map.ignite(p))
            .count()
    }

    /// Spread the fire by one step.  Returns how many cells newly caught fire.
    pub fn advance(&mut self, grid: &Grid, rng: &mut SimRng) -> usize {
        assert!(self.map.matches(grid), "fire model does not match grid dimensions");

        let front: Vec<Cell> = self.map.burning_cells().collect();
        let mut pending = Vec::new();

        for cell in front {
            for neighbour in cell.neighbours() {
                if grid.is_free(neighbour)
                    && !self.map.is_burning(neighbour)
                    && rng.gen_bool(self.spread_probability)
                {
                    pending.push(neighbour);
                }
            }
        }

        // A neighbour drawn from two burning cells is only counted once.
        pending
            .into_iter()
            .filter(|&c| self.map.ignite(c))
            .count()
    }

    /// Extinguish everything.  Dimensions are unchanged.
    pub fn reset(&mut self) {
        self.map.clear();
    }
}
