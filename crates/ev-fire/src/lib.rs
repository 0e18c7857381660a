//! `ev-fire`: stochastic fire spread over a floor-plan grid.
//!
//! # Spread rule
//!
//! Each [`FireModel::advance`] reads the fire map as it stood at the start of
//! the call.  For every burning cell (row-major) and each of its four
//! neighbours (right, left, down, up) that is free and not yet burning, one
//! Bernoulli draw with the spread probability decides whether that neighbour
//! ignites.  Ignitions are applied only after all draws, so a cell lit this
//! step cannot spread further until the next one.  Fire never enters a wall
//! and never goes out.
//!
//! Draw order is fixed, so a seeded [`SimRng`][ev_core::SimRng] reproduces
//! the same fire front bit for bit.

pub mod model;


pub use model::FireModel;
