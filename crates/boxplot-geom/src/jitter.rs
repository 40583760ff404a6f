//! Deterministic, density-aware point jitter
//!
//! Scattered points must land in the same place on every render, so the
//! generator is a plain linear-congruential sequence reseeded to a fixed
//! constant at the start of every trace's point pass. Jitter width per
//! point follows local density: points in crowded stretches of the
//! sorted sample spread wide, points in sparse stretches stay tight, and
//! the trace-wide maximum normalizes amplitude so the configured jitter
//! value bounds the visible spread consistently across traces.

use boxplot_calc::BoxStats;
use boxplot_core::math::constrain;
use boxplot_core::PointMode;

/// Fixed seed for every trace's point pass
pub const JITTER_SEED: u32 = 2_000_000_000;

const LCG_MULTIPLIER: u32 = 69069;
const TWO_POW_32: f64 = 4_294_967_296.0;
/// Draws closer than this to the previous state (0.1 of the state
/// space) are redrawn for better local uniformity
const MIN_STATE_STEP: u32 = 429_496_729;
/// Cap on consecutive redraws; the last draw is accepted as-is
const MAX_REDRAWS: usize = 32;

/// Points either side of a sample included in its density window
const JITTER_COUNT: usize = 5;
/// Fraction of the IQR counted as "dense"
const JITTER_SPREAD: f64 = 0.01;

/// Repeatable pseudorandom generator for point scatter
#[derive(Debug, Clone)]
pub struct JitterRng {
    state: u32,
}

impl JitterRng {
    /// Start a trace point pass at the fixed seed
    pub fn new() -> Self {
        Self { state: JITTER_SEED }
    }

    /// Next draw in `[0, 1)`.
    ///
    /// Consecutive states closer than a tenth of the state space are
    /// discarded and redrawn, trading strict uniformity for better
    /// local spread. The redraw loop is bounded, so the generator
    /// terminates on any state sequence.
    pub fn next_value(&mut self) -> f64 {
        for _ in 0..MAX_REDRAWS {
            let last = self.state;
            self.state = LCG_MULTIPLIER.wrapping_mul(last).wrapping_add(1);
            if self.state.abs_diff(last) >= MIN_STATE_STEP {
                break;
            }
        }
        f64::from(self.state) / TWO_POW_32
    }
}

impl Default for JitterRng {
    fn default() -> Self {
        Self::new()
    }
}

/// Density-aware jitter factors for one bin's displayed points.
///
/// `points` are the displayed values in ascending order. Each point's
/// factor comes from a window of up to [`JITTER_COUNT`] neighbors on
/// each side; when only outliers are displayed the window value range is
/// clamped at the fences, since the in-fence bulk is not drawn. Returns
/// the per-point factors in `[0, 1]` and their maximum.
pub fn jitter_factors(points: &[f64], stats: &BoxStats, mode: PointMode) -> (Vec<f64>, f64) {
    let spread_limit = stats.iqr() * JITTER_SPREAD;
    let mut factors = Vec::with_capacity(points.len());
    let mut max_factor = 0.0f64;

    for (i, &p) in points.iter().enumerate() {
        let i0 = i.saturating_sub(JITTER_COUNT);
        let i1 = (points.len() - 1).min(i + JITTER_COUNT);
        let mut pmin = points[i0];
        let mut pmax = points[i1];

        if mode != PointMode::All {
            if p < stats.lf {
                pmax = pmax.min(stats.lf);
            } else {
                pmin = pmin.max(stats.uf);
            }
        }

        let raw = (spread_limit * (i1 - i0) as f64 / (pmax - pmin)).sqrt();
        let factor = if raw.is_nan() {
            0.0
        } else {
            constrain(raw.abs(), 0.0, 1.0)
        };

        max_factor = max_factor.max(factor);
        factors.push(factor);
    }

    (factors, max_factor)
}

/// Trace-wide amplitude scale: the configured jitter value bounds the
/// spread of the densest point. A max factor that is zero or non-finite
/// (all-tied bins) disables jitter entirely.
pub fn jitter_scale(configured_jitter: f64, max_factor: f64) -> f64 {
    if configured_jitter > 0.0 && max_factor > 0.0 && max_factor.is_finite() {
        configured_jitter * 2.0 / max_factor
    } else {
        0.0
    }
}
