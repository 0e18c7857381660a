//! Episode step counter.

use std::fmt;

/// Number of `step` calls completed since the last reset.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// The following step.
    #[inline]
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }

    /// `true` when this step lands on a multiple of `interval`.
    /// Step zero never counts.
    #[inline]
    pub fn is_periodic(self, interval: u64) -> bool {
        interval > 0 && self.0 > 0 && self.0 % interval == 0
    }

    /// Fraction of `budget` consumed, as fed to the observation vector.
    #[inline]
    pub fn fraction_of(self, budget: u64) -> f32 {
        if budget == 0 {
            return 1.0;
        }
        (self.0 as f64 / budget as f64) as f32
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
