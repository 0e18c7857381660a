//! Environment configuration.
//!
//! Every tunable constant of the simulation lives here so applications can
//! load a run description from JSON (with the `serde` feature) and hand it to
//! the environment builder.  `Default` reproduces the reference behaviour.

use crate::{CoreError, CoreResult};

// ── RewardConfig ──────────────────────────────────────────────────────────────

/// Per-step reward shaping.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardConfig {
    /// Added the step an agent transitions to Escaped.
    pub escape: f64,
    /// Added the step an agent transitions to Burned (negative).
    pub burn: f64,
    /// Added once per `step` call regardless of agent count.
    pub step_penalty: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            escape:       10.0,
            burn:         -10.0,
            step_penalty: -0.01,
        }
    }
}

// ── EnvConfig ─────────────────────────────────────────────────────────────────

/// Top-level environment configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnvConfig {
    /// Number of evacuees placed on every reset.  Fixed for the episode.
    pub agent_count: usize,

    /// Step budget.  `truncated` becomes true once the counter reaches it.
    pub max_steps: u64,

    /// Seed used when the environment is built and whenever `reset(None)`
    /// is called before any explicit seed.
    pub seed: u64,

    /// Probability that a burning cell ignites one unburnt free neighbour
    /// during a single advance.
    pub spread_probability: f64,

    /// Agents within this Euclidean distance (grid units) of any exit escape.
    pub escape_radius: f64,

    /// Two discovered exits closer than or equal to this are merged.
    pub exit_separation: f64,

    /// Evacuating agents re-plan whenever the step counter is a multiple of
    /// this, in addition to whenever their route runs out.
    pub replan_interval: u64,

    /// Side length of the square fire plane in the observation vector.
    pub observation_resolution: usize,

    /// Rejection-sampling draws allowed per agent during placement.
    pub max_placement_attempts: u64,

    pub rewards: RewardConfig,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            agent_count:            3,
            max_steps:              500,
            seed:                   0,
            spread_probability:     0.25,
            escape_radius:          5.0,
            exit_separation:        20.0,
            replan_interval:        10,
            observation_resolution: 64,
            max_placement_attempts: 1_000_000,
            rewards:                RewardConfig::default(),
        }
    }
}

impl EnvConfig {
    /// Reject values the environment cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.spread_probability) {
            return Err(CoreError::Config(format!(
                "spread_probability must be in [0, 1], got {}",
                self.spread_probability
            )));
        }
        if self.max_steps == 0 {
            return Err(CoreError::Config("max_steps must be at least 1".into()));
        }
        if self.replan_interval == 0 {
            return Err(CoreError::Config("replan_interval must be at least 1".into()));
        }
        if self.observation_resolution == 0 {
            return Err(CoreError::Config("observation_resolution must be at least 1".into()));
        }
        if !(self.escape_radius > 0.0) {
            return Err(CoreError::Config(format!(
                "escape_radius must be positive, got {}",
                self.escape_radius
            )));
        }
        if self.exit_separation < 0.0 {
            return Err(CoreError::Config(format!(
                "exit_separation must be non-negative, got {}",
                self.exit_separation
            )));
        }
        if self.max_placement_attempts == 0 {
            return Err(CoreError::Config("max_placement_attempts must be at least 1".into()));
        }
        Ok(())
    }

    /// Length of the flattened observation vector for this configuration.
    #[inline]
    pub fn observation_len(&self) -> usize {
        self.observation_resolution * self.observation_resolution + 2 * self.agent_count + 1
    }
}
