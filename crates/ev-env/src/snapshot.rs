//! Plain data handed to observers and reporting layers.

use ev_agent::{AgentStatus, StatusCounts};
use ev_core::{AgentId, Cell, Step};

/// Position and status of one agent at the end of a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:       AgentId,
    pub position: Cell,
    pub status:   AgentStatus,
}

/// Everything the orchestration layer records per step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSnapshot {
    pub step:    Step,
    /// Burning cells in row-major order.
    pub burning: Vec<Cell>,
    pub agents:  Vec<AgentSnapshot>,
}

/// Result of one `step` call.
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    pub observation: crate::Observation,
    pub reward:      f64,
    /// Every agent has escaped or burned.
    pub terminated:  bool,
    /// The step budget is exhausted.
    pub truncated:   bool,
}

impl StepOutcome {
    #[inline]
    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Aggregate of a finished episode.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpisodeSummary {
    pub steps:        Step,
    pub total_reward: f64,
    pub counts:       StatusCounts,
    pub terminated:   bool,
    pub truncated:    bool,
}
