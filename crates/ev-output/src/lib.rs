//! `ev-output`: episode recording and file output.
//!
//! | Type                      | Role                                                    |
//! |---------------------------|---------------------------------------------------------|
//! | [`EpisodeRecorder`]       | In-memory history → serializable [`EpisodeReport`]      |
//! | [`CsvWriter`]             | `agent_snapshots.csv`, `step_summaries.csv`             |
//! | [`EpisodeOutputObserver`] | Drives any [`OutputWriter`] from episode callbacks      |
//!
//! Both observers implement `ev_env::EpisodeObserver`; pass them as a pair
//! `(recorder, csv_observer)` to drive both from one episode.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ev_output::{CsvWriter, EpisodeOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = EpisodeOutputObserver::new(writer);
//! run_episode(&mut env, &mut policy, &mut obs, None)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EpisodeOutputObserver;
pub use report::{EpisodeRecorder, EpisodeReport, StepRecord};
pub use row::{AgentSnapshotRow, StepSummaryRow};
pub use writer::OutputWriter;
