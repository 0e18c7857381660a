//! Plain data row types written by output backends.

use ev_agent::AgentStatus;

/// One agent's position and status at the end of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub step:     u64,
    pub agent_id: u32,
    pub x:        i32,
    pub y:        i32,
    pub status:   AgentStatus,
}

/// Aggregate figures for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub step:          u64,
    pub reward:        f64,
    pub burning_cells: usize,
    pub evacuating:    usize,
    pub escaped:       usize,
    pub burned:        usize,
}
