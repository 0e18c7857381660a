//! `ev-agent`: per-evacuee state.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`status`] | `AgentStatus` (Evacuating / Escaped / Burned), `StatusCounts` |
//! | [`agent`]  | `Agent`: position, route, `replan`/`advance`/`evaluate_status`  |
//!
//! # Movement model
//!
//! Agents move exactly one cell per tick along a route computed by a
//! [`Pathfinder`][ev_grid::Pathfinder].  An empty route means "stay put";
//! the environment re-plans such agents on the next step.

pub mod agent;
pub mod status;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use status::{AgentStatus, StatusCounts};
