//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced while constructing a [`Grid`][crate::Grid].
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column (got {width}x{height})")]
    Empty { width: usize, height: usize },

    #[error("wall buffer has {got} cells, expected {expected}")]
    Dimensions { expected: usize, got: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, got: usize },
}

pub type GridResult<T> = Result<T, GridError>;
