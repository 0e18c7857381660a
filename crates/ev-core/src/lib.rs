//! `ev-core`: foundational types for the evacuation simulator.
//!
//! This crate is a dependency of every other `ev-*` crate.  It has no `ev-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`cell`]   | `Cell` grid coordinate, Manhattan/Euclidean distance   |
//! | [`ids`]    | `AgentId`, `ExitId`                                    |
//! | [`step`]   | `Step` episode counter                                 |
//! | [`rng`]    | `SimRng` (reseedable, per-environment)                 |
//! | [`config`] | `EnvConfig`, `RewardConfig`                            |
//! | [`error`]  | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::{EnvConfig, RewardConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, ExitId};
pub use rng::SimRng;
pub use step::Step;
