//! `ev-grid`: floor-plan grid, fire overlay, exits, and pathfinding.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`grid`]       | `Grid`: static wall/free field                            |
//! | [`fire_map`]   | `FireMap`: burning-cell overlay read by pathfinding       |
//! | [`exits`]      | `discover_exits`, `ExitIndex` (R-tree nearest-exit)       |
//! | [`pathfinder`] | `Pathfinder` trait, `AStarPathfinder`                     |
//! | [`error`]      | `GridError`, `GridResult<T>`                              |
//!
//! The grid and fire map are always passed into calls explicitly; nothing in
//! this crate holds onto either between calls.

pub mod error;
pub mod exits;
pub mod fire_map;
pub mod grid;
pub mod pathfinder;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use exits::{ExitIndex, discover_exits};
pub use fire_map::FireMap;
pub use grid::Grid;
pub use pathfinder::{AStarPathfinder, Path, Pathfinder};
