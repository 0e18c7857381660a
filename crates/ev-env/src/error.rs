//! Errors raised by the environment and its builder.

use ev_core::{AgentId, CoreError};
use ev_grid::GridError;
use thiserror::Error;

use crate::EnvPhase;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("environment configuration error: {0}")]
    Config(#[from] CoreError),

    /// The floor plan has no free cell on any inner border ring.
    #[error("no exits found on the {width}x{height} floor plan")]
    NoExits { width: usize, height: usize },

    #[error("action {action} is out of range for {exit_count} exits")]
    InvalidAction { action: usize, exit_count: usize },

    #[error("step called while the environment is {phase}")]
    NotRunning { phase: EnvPhase },

    #[error("could not place {agent} on a free cell after {attempts} draws")]
    Placement { agent: AgentId, attempts: u64 },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type EnvResult<T> = Result<T, EnvError>;
