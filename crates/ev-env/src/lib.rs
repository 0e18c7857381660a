//! `ev-env`: the reset/step evacuation environment.
//!
//! # Step order
//!
//! ```text
//! step(exit):
//!   ① Validate:  environment must be running, exit must be in range.
//!   ② Fire:      one stochastic spread over the previous burning map.
//!   ③ Agents:    for each evacuee, in id order:
//!                  re-plan toward `exit` (empty route or periodic),
//!                  move one cell, resolve Burned / Escaped.
//!   ④ Reward:    step penalty + escape bonus + burn penalty.
//!   ⑤ Done:      terminated when nobody evacuates, truncated at budget.
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`env`]         | `EvacuationEnv`, `EnvPhase`                              |
//! | [`builder`]     | `EnvBuilder`: validation and exit discovery              |
//! | [`observation`] | `Observation`, `AreaResampler`, `assemble`               |
//! | [`snapshot`]    | `StepOutcome`, `StepSnapshot`, `EpisodeSummary`          |
//! | [`observer`]    | `EpisodeObserver` trait, `EnvView`, `NoopObserver`       |
//! | [`runner`]      | `run_episode`, `run_batch`, `mean_reward`                |
//! | [`error`]       | `EnvError`, `EnvResult`                                  |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `run_batch` runs episodes on Rayon's thread pool.      |
//! | `serde`    | Serialize/Deserialize on snapshots and summaries.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ev_env::{run_episode, EnvBuilder, NoopObserver};
//! use ev_grid::Grid;
//! use ev_policy::NearestExit;
//!
//! let grid = Grid::parse(FLOOR_PLAN)?;
//! let mut env = EnvBuilder::new(grid).agent_count(5).seed(7).build()?;
//! let summary = run_episode(&mut env, &mut NearestExit, &mut NoopObserver, None)?;
//! ```

pub mod builder;
pub mod env;
pub mod error;
pub mod observation;
pub mod observer;
pub mod runner;
pub mod snapshot;


pub use builder::EnvBuilder;
pub use env::{EnvPhase, EvacuationEnv};
pub use error::{EnvError, EnvResult};
pub use observation::{AreaResampler, Observation};
pub use observer::{EnvView, EpisodeObserver, NoopObserver};
pub use runner::{mean_reward, run_batch, run_episode};
pub use snapshot::{AgentSnapshot, EpisodeSummary, StepOutcome, StepSnapshot};
