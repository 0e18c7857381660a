//! Reference commanders.

use ev_core::{Cell, ExitId, SimRng};

use crate::{ExitPolicy, PolicyContext};

// ── FixedExit ─────────────────────────────────────────────────────────────────

/// Always sends everyone to the same exit.
#[derive(Clone, Copy, Debug)]
pub struct FixedExit(pub ExitId);

impl ExitPolicy for FixedExit {
    fn select_exit(&mut self, _observation: &[f32], _ctx: &PolicyContext<'_>) -> ExitId {
        self.0
    }
}

// ── RandomExit ────────────────────────────────────────────────────────────────

/// Picks a uniformly random exit every step from its own seeded stream.
///
/// The stream is independent of the environment's, so swapping this policy
/// in does not change the fire.
pub struct RandomExit {
    rng: SimRng,
}

impl RandomExit {
    pub fn new(seed: u64) -> Self {
        Self { rng: SimRng::new(seed) }
    }
}

impl ExitPolicy for RandomExit {
    fn select_exit(&mut self, _observation: &[f32], ctx: &PolicyContext<'_>) -> ExitId {
        match ctx.action_count() {
            0 => ExitId(0),
            n => ExitId::from_index(self.rng.gen_range(0..n)),
        }
    }
}

// ── NearestExit ───────────────────────────────────────────────────────────────

/// Routes toward the exit closest to the centroid of the agents still
/// evacuating.  Ties go to the lower exit index.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestExit;

impl ExitPolicy for NearestExit {
    fn select_exit(&mut self, _observation: &[f32], ctx: &PolicyContext<'_>) -> ExitId {
        let (mut sx, mut sy, mut n) = (0.0f64, 0.0f64, 0usize);
        for a in ctx.agents.iter().filter(|a| a.is_evacuating()) {
            sx += f64::from(a.position().x);
            sy += f64::from(a.position().y);
            n += 1;
        }
        if n == 0 {
            return ExitId(0);
        }
        let (cx, cy) = (sx / n as f64, sy / n as f64);
        let dist2 = |c: &Cell| {
            let dx = f64::from(c.x) - cx;
            let dy = f64::from(c.y) - cy;
            dx * dx + dy * dy
        };

        let mut best = (0usize, f64::INFINITY);
        for (i, exit) in ctx.exits.iter().enumerate() {
            let d = dist2(exit);
            if d < best.1 {
                best = (i, d);
            }
        }
        ExitId::from_index(best.0)
    }
}

// ── FnPolicy ──────────────────────────────────────────────────────────────────

/// Adapts a closure over the raw observation, e.g. a model's forward pass.
pub struct FnPolicy<F>(pub F);

impl<F> ExitPolicy for FnPolicy<F>
where
    F: FnMut(&[f32]) -> ExitId + Send,
{
    fn select_exit(&mut self, observation: &[f32], _ctx: &PolicyContext<'_>) -> ExitId {
        (self.0)(observation)
    }
}
