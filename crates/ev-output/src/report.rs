//! In-memory episode history and the final report built from it.
//!
//! The report is what a front end needs to replay an episode: the floor
//! plan's shape, the exits, and for every step the burning cells plus each
//! agent's position and status.  It serializes with `serde`.

use serde::{Deserialize, Serialize};

use ev_agent::AgentStatus;
use ev_core::{Cell, ExitId};
use ev_env::{AgentSnapshot, EnvView, EpisodeObserver, EpisodeSummary, StepOutcome};

/// State after one step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step:    u64,
    pub action:  ExitId,
    pub reward:  f64,
    /// Burning cells in row-major order.
    pub burning: Vec<Cell>,
    pub agents:  Vec<AgentSnapshot>,
}

/// Outcome and full history of one episode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeReport {
    pub total_agents: usize,
    pub escaped:      usize,
    pub burned:       usize,
    pub exits:        Vec<Cell>,
    pub grid_width:   usize,
    pub grid_height:  usize,
    pub summary:      Option<EpisodeSummary>,
    pub history:      Vec<StepRecord>,
}

/// An [`EpisodeObserver`] that keeps every step in memory.
///
/// Reusable: each reset starts a fresh report.
#[derive(Default)]
pub struct EpisodeRecorder {
    report: EpisodeReport,
}

impl EpisodeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The report so far.  `escaped`/`burned` reflect the latest step.
    #[inline]
    pub fn report(&self) -> &EpisodeReport {
        &self.report
    }

    pub fn into_report(self) -> EpisodeReport {
        self.report
    }
}

impl EpisodeObserver for EpisodeRecorder {
    fn on_reset(&mut self, env: &EnvView<'_>) {
        self.report = EpisodeReport {
            total_agents: env.agents.len(),
            exits:        env.exits.to_vec(),
            grid_width:   env.grid.width(),
            grid_height:  env.grid.height(),
            ..EpisodeReport::default()
        };
    }

    fn on_step(&mut self, env: &EnvView<'_>, action: ExitId, outcome: &StepOutcome) {
        let agents: Vec<AgentSnapshot> = env
            .agents
            .iter()
            .map(|a| AgentSnapshot { id: a.id(), position: a.position(), status: a.status() })
            .collect();

        self.report.escaped = agents.iter().filter(|a| a.status == AgentStatus::Escaped).count();
        self.report.burned = agents.iter().filter(|a| a.status == AgentStatus::Burned).count();
        self.report.history.push(StepRecord {
            step:    env.step.0,
            action,
            reward:  outcome.reward,
            burning: env.fire.burning_cells().collect(),
            agents,
        });
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) {
        self.report.summary = Some(*summary);
    }
}
