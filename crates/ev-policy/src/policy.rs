//! The `ExitPolicy` trait: the main extension point for decision code.

use ev_core::ExitId;

use crate::PolicyContext;

/// Chooses which exit the whole population is routed toward this step.
///
/// The environment range-checks the returned id; an out-of-range choice is
/// reported as an error, never clamped.
///
/// `Send` so a policy can be moved onto the worker thread running its
/// episode in a batch.
pub trait ExitPolicy: Send {
    /// Pick an exit given the flat observation vector.
    fn select_exit(&mut self, observation: &[f32], ctx: &PolicyContext<'_>) -> ExitId;

    /// Called after every environment reset.  Default: nothing.
    fn on_reset(&mut self) {}
}

impl<P: ExitPolicy + ?Sized> ExitPolicy for Box<P> {
    fn select_exit(&mut self, observation: &[f32], ctx: &PolicyContext<'_>) -> ExitId {
        (**self).select_exit(observation, ctx)
    }

    fn on_reset(&mut self) {
        (**self).on_reset();
    }
}
