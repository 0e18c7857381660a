//! `EpisodeOutputObserver<W>`: bridges `EpisodeObserver` to an `OutputWriter`.

use ev_agent::StatusCounts;
use ev_core::ExitId;
use ev_env::{EnvView, EpisodeObserver, EpisodeSummary, StepOutcome};

use crate::row::{AgentSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`EpisodeObserver`] that writes agent snapshots and step summaries to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the episode, check with
/// [`take_error`][Self::take_error].
pub struct EpisodeOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EpisodeOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the episode.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EpisodeObserver for EpisodeOutputObserver<W> {
    fn on_step(&mut self, env: &EnvView<'_>, _action: ExitId, outcome: &StepOutcome) {
        let step = env.step.0;
        let rows: Vec<AgentSnapshotRow> = env
            .agents
            .iter()
            .map(|a| AgentSnapshotRow {
                step,
                agent_id: a.id().0,
                x:        a.position().x,
                y:        a.position().y,
                status:   a.status(),
            })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        let counts: StatusCounts = env.agents.iter().map(|a| a.status()).collect();
        let row = StepSummaryRow {
            step,
            reward:        outcome.reward,
            burning_cells: env.fire.burning_count(),
            evacuating:    counts.evacuating,
            escaped:       counts.escaped,
            burned:        counts.burned,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_episode_end(&mut self, _summary: &EpisodeSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
