//! `ev-policy`: the decision side of the evacuation loop.
//!
//! Each step an external "commander" looks at the observation vector and
//! picks one exit; every evacuating agent is routed toward it.  This crate
//! defines that contract and a few reference commanders.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`context`] | `PolicyContext<'a>`: read-only step snapshot              |
//! | [`policy`]  | `ExitPolicy` trait                                         |
//! | [`builtin`] | `FixedExit`, `RandomExit`, `NearestExit`, `FnPolicy`       |
//!
//! Learned policies live outside this workspace; they only need to implement
//! [`ExitPolicy`] (or be wrapped in [`FnPolicy`]).

pub mod builtin;
pub mod context;
pub mod policy;


pub use builtin::{FixedExit, FnPolicy, NearestExit, RandomExit};
pub use context::PolicyContext;
pub use policy::ExitPolicy;
