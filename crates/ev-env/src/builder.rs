//! Fluent builder for constructing an [`EvacuationEnv`].

use std::sync::Arc;

use ev_core::{EnvConfig, SimRng, Step};
use ev_fire::FireModel;
use ev_grid::{AStarPathfinder, ExitIndex, Grid, Pathfinder};
use tracing::debug;

use crate::observation::AreaResampler;
use crate::{EnvError, EnvPhase, EnvResult, EvacuationEnv};

/// Fluent builder for [`EvacuationEnv<P>`].
///
/// # Required inputs
///
/// - [`Grid`]: the floor plan, shared read-only across environments
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                    |
/// |----------------------|----------------------------|
/// | `.config(c)`         | `EnvConfig::default()`     |
/// | `.agent_count(n)`    | 3                          |
/// | `.max_steps(n)`      | 500                        |
/// | `.seed(s)`           | 0                          |
/// | `.pathfinder(p)`     | [`AStarPathfinder`]        |
///
/// # Example
///
/// ```rust,ignore
/// let mut env = EnvBuilder::new(grid)
///     .agent_count(5)
///     .seed(42)
///     .build()?;
/// let obs = env.reset(None)?;
/// let out = env.step(ExitId(0))?;
/// ```
pub struct EnvBuilder<P: Pathfinder = AStarPathfinder> {
    grid:       Arc<Grid>,
    config:     EnvConfig,
    pathfinder: P,
}

impl EnvBuilder {
    pub fn new(grid: impl Into<Arc<Grid>>) -> Self {
        Self {
            grid:       grid.into(),
            config:     EnvConfig::default(),
            pathfinder: AStarPathfinder,
        }
    }
}

impl<P: Pathfinder> EnvBuilder<P> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: EnvConfig) -> Self {
        self.config = config;
        self
    }

    pub fn agent_count(mut self, n: usize) -> Self {
        self.config.agent_count = n;
        self
    }

    /// Step budget after which episodes are truncated.
    pub fn max_steps(mut self, n: u64) -> Self {
        self.config.max_steps = n;
        self
    }

    /// Seed used until the first `reset(Some(_))`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Swap the routing algorithm.
    pub fn pathfinder<Q: Pathfinder>(self, pathfinder: Q) -> EnvBuilder<Q> {
        EnvBuilder { grid: self.grid, config: self.config, pathfinder }
    }

    /// Validate the configuration, discover exits, and return an environment
    /// in [`EnvPhase::Ready`].  Call [`reset`](EvacuationEnv::reset) before
    /// stepping.
    pub fn build(self) -> EnvResult<EvacuationEnv<P>> {
        self.config.validate()?;

        let grid = self.grid;
        let exits = ExitIndex::discover(&grid, self.config.exit_separation);
        if exits.is_empty() {
            return Err(EnvError::NoExits { width: grid.width(), height: grid.height() });
        }

        debug!(
            width  = grid.width(),
            height = grid.height(),
            free   = grid.free_cell_count(),
            exits  = exits.len(),
            agents = self.config.agent_count,
            "environment built"
        );

        Ok(EvacuationEnv {
            fire:       FireModel::new(&grid, self.config.spread_probability),
            resampler:  AreaResampler::new(
                grid.width(),
                grid.height(),
                self.config.observation_resolution,
            ),
            rng:        SimRng::new(self.config.seed),
            agents:     Vec::new(),
            step:       Step::ZERO,
            target:     None,
            phase:      EnvPhase::Ready,
            pathfinder: self.pathfinder,
            exits,
            grid,
            config:     self.config,
        })
    }
}
