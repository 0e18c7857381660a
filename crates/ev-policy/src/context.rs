//! Read-only environment state passed to every policy call.

use ev_agent::Agent;
use ev_core::{Cell, Step};

/// A snapshot of the environment handed to [`ExitPolicy::select_exit`]
/// alongside the flat observation.
///
/// Policies trained on the observation alone can ignore it; hand-written
/// commanders use it to avoid decoding the vector.
///
/// [`ExitPolicy::select_exit`]: crate::ExitPolicy::select_exit
pub struct PolicyContext<'a> {
    /// Steps completed so far in this episode.
    pub step: Step,

    /// Exit coordinates; the action is an index into this slice.
    pub exits: &'a [Cell],

    /// Every agent in index order, resolved ones included.
    pub agents: &'a [Agent],
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(step: Step, exits: &'a [Cell], agents: &'a [Agent]) -> Self {
        Self { step, exits, agents }
    }

    /// Size of the action space.
    #[inline]
    pub fn action_count(&self) -> usize {
        self.exits.len()
    }
}
