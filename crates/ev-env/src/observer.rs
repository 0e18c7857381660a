//! Episode observer trait for progress reporting and data collection.

use ev_agent::Agent;
use ev_core::{Cell, ExitId, Step};
use ev_grid::{FireMap, Grid};

use crate::{EpisodeSummary, StepOutcome};

/// Read-only view of an environment between steps.
///
/// Observers receive this instead of the environment itself so the trait does
/// not depend on the environment's pathfinder type.
pub struct EnvView<'a> {
    pub step:   Step,
    pub grid:   &'a Grid,
    pub exits:  &'a [Cell],
    pub fire:   &'a FireMap,
    pub agents: &'a [Agent],
}

/// Callbacks invoked by [`run_episode`][crate::run_episode].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait EpisodeObserver {
    /// Called after `reset`, before the first step.
    fn on_reset(&mut self, _env: &EnvView<'_>) {}

    /// Called after every step with the action that drove it.
    fn on_step(&mut self, _env: &EnvView<'_>, _action: ExitId, _outcome: &StepOutcome) {}

    /// Called once when the episode terminates or is truncated.
    fn on_episode_end(&mut self, _summary: &EpisodeSummary) {}
}

/// An [`EpisodeObserver`] that does nothing.
pub struct NoopObserver;

impl EpisodeObserver for NoopObserver {}

/// Fan callbacks out to two observers, first `.0` then `.1`.
impl<A: EpisodeObserver, B: EpisodeObserver> EpisodeObserver for (A, B) {
    fn on_reset(&mut self, env: &EnvView<'_>) {
        self.0.on_reset(env);
        self.1.on_reset(env);
    }

    fn on_step(&mut self, env: &EnvView<'_>, action: ExitId, outcome: &StepOutcome) {
        self.0.on_step(env, action, outcome);
        self.1.on_step(env, action, outcome);
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) {
        self.0.on_episode_end(summary);
        self.1.on_episode_end(summary);
    }
}
