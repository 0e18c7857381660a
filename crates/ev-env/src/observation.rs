//! Fixed-length observation vector.
//!
//! # Layout
//!
//! ```text
//! [ fire plane: R×R, row-major ][ x0 y0 x1 y1 … ][ step / budget ]
//! ```
//!
//! The fire plane is the burning map resampled to `R×R` by area averaging,
//! so each value is the burning fraction of the source area it covers.
//! Agent coordinates are divided by grid width/height.  The total length is
//! `R² + 2N + 1` regardless of the floor plan's size.
//!
//! Assembly is a pure function of the fire map, agents, and step counter.

use ev_agent::Agent;
use ev_core::Step;
use ev_grid::FireMap;

// ── Observation ───────────────────────────────────────────────────────────────

/// One observation vector plus the layout needed to slice it.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    data:        Vec<f32>,
    resolution:  usize,
    agent_count: usize,
}

impl Observation {
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The resampled fire plane, `resolution²` values row-major.
    #[inline]
    pub fn fire_plane(&self) -> &[f32] {
        &self.data[..self.resolution * self.resolution]
    }

    /// Normalised `(x, y)` of agent `i`.
    pub fn agent_position(&self, i: usize) -> Option<(f32, f32)> {
        if i >= self.agent_count {
            return None;
        }
        let base = self.resolution * self.resolution + 2 * i;
        Some((self.data[base], self.data[base + 1]))
    }

    /// Fraction of the step budget consumed.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.data[self.data.len() - 1]
    }
}

impl AsRef<[f32]> for Observation {
    fn as_ref(&self) -> &[f32] {
        &self.data
    }
}

// ── AreaResampler ─────────────────────────────────────────────────────────────

/// Precomputed separable area weights from a `src_w × src_h` field to an
/// `out × out` plane.  Built once per environment since grid size is fixed.
#[derive(Clone, Debug)]
pub struct AreaResampler {
    src_width:  usize,
    src_height: usize,
    out:        usize,
    rows:      Vec<Vec<(usize, f32)>>,
    cols:      Vec<Vec<(usize, f32)>>,
}

/// For each output index, the source indices it overlaps and the fraction
/// of the output span each covers.  Weights per output sum to one.
fn axis_weights(src: usize, out: usize) -> Vec<Vec<(usize, f32)>> {
    let scale = src as f64 / out as f64;
    (0..out)
        .map(|o| {
            let start = o as f64 * scale;
            let end = start + scale;
            let mut weights = Vec::new();
            let mut i = start.floor() as usize;
            while i < src && (i as f64) < end {
                let lo = start.max(i as f64);
                let hi = end.min((i + 1) as f64);
                if hi > lo {
                    weights.push((i, ((hi - lo) / scale) as f32));
                }
                i += 1;
            }
            weights
        })
        .collect()
}

impl AreaResampler {
    pub fn new(src_width: usize, src_height: usize, out: usize) -> Self {
        Self {
            src_width,
            src_height,
            out,
            rows: axis_weights(src_height, out),
            cols: axis_weights(src_width, out),
        }
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.out
    }

    /// Resample a row-major boolean field, appending `out²` values to `dst`.
    pub fn resample_into(&self, field: &[bool], dst: &mut Vec<f32>) {
        assert_eq!(field.len(), self.src_width * self.src_height, "field size mismatch");
        for row in &self.rows {
            for col in &self.cols {
                let mut acc = 0.0f32;
                for &(y, wy) in row {
                    let base = y * self.src_width;
                    for &(x, wx) in col {
                        if field[base + x] {
                            acc += wy * wx;
                        }
                    }
                }
                dst.push(acc);
            }
        }
    }
}

// ── Assembly ──────────────────────────────────────────────────────────────────

/// Build the observation for the current state.
///
/// `budget` is the episode step budget used to normalise `step`.
pub fn assemble(
    resampler:   &AreaResampler,
    fire:        &FireMap,
    agents:      &[Agent],
    step:        Step,
    budget:      u64,
) -> Observation {
    let res = resampler.resolution();
    let mut data = Vec::with_capacity(res * res + 2 * agents.len() + 1);

    resampler.resample_into(fire.as_slice(), &mut data);

    let w = fire.width() as f32;
    let h = fire.height() as f32;
    for agent in agents {
        let p = agent.position();
        data.push(p.x as f32 / w);
        data.push(p.y as f32 / h);
    }

    data.push(step.fraction_of(budget));

    Observation { data, resolution: res, agent_count: agents.len() }
}
