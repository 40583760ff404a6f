//! Math primitives shared by binning, statistics, and layout
//!
//! These are the small pieces every stage leans on: the
//! distinct-value/minimum-gap scan that defines bin spacing, a
//! binary-search bin lookup, and the fractional-rank interpolation used
//! for quartiles.

use num_traits::Float;

/// Floor for the minimum gap when fewer than two distinct positions
/// exist. Keeps bins from collapsing to zero width.
pub const MIN_DIFF_FLOOR: f64 = 1.0;

/// Distinct position values and the minimum gap between them
#[derive(Debug, Clone, PartialEq)]
pub struct DistinctVals {
    /// Deduplicated values, sorted ascending
    pub vals: Vec<f64>,
    /// Minimum gap between consecutive distinct values, floored to
    /// [`MIN_DIFF_FLOOR`] when no gap exists
    pub min_diff: f64,
}

/// Scan a position array for its distinct values and minimum gap.
///
/// Non-finite entries are ignored; they belong to no bin.
///
/// # Examples
///
/// ```rust
/// use boxplot_core::math::distinct_vals;
///
/// let dv = distinct_vals(&[3.0, 1.0, 3.0, 7.0]);
/// assert_eq!(dv.vals, vec![1.0, 3.0, 7.0]);
/// assert_eq!(dv.min_diff, 2.0);
/// ```
pub fn distinct_vals(data: &[f64]) -> DistinctVals {
    let mut vals: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    vals.sort_by(f64::total_cmp);
    vals.dedup();

    let mut min_diff = f64::INFINITY;
    for pair in vals.windows(2) {
        min_diff = min_diff.min(pair[1] - pair[0]);
    }
    if !min_diff.is_finite() {
        min_diff = MIN_DIFF_FLOOR;
    }

    DistinctVals { vals, min_diff }
}

/// Binary-search lookup of the interval containing `x`.
///
/// Returns the largest index `i` such that `edges[i] <= x` (or
/// `edges[i] < x` when `line_low` is set, so a value sitting exactly on
/// an edge falls in the interval below it). Returns `-1` when `x` is
/// below every edge, `edges.len() - 1` when it is at or above the last.
/// `x` values that compare with nothing (NaN) return `-1`.
pub fn find_bin(x: f64, edges: &[f64], line_low: bool) -> isize {
    if x.is_nan() {
        return -1;
    }
    let count = if line_low {
        edges.partition_point(|&e| e < x)
    } else {
        edges.partition_point(|&e| e <= x)
    };
    count as isize - 1
}

/// Fractional-rank interpolation into a sorted array.
///
/// For a 1-indexed target rank `r`, interpolates linearly between
/// `sorted[floor(r - 0.5)]` and `sorted[ceil(r - 0.5)]`, clipping to the
/// first/last element when `r - 0.5` falls outside `[0, len - 1]`. The
/// result depends only on the sorted order of the data.
///
/// # Panics
///
/// Panics on an empty slice; callers filter empty bins first.
pub fn interp(sorted: &[f64], rank: f64) -> f64 {
    let n = rank - 0.5;
    if n <= 0.0 {
        return sorted[0];
    }
    let last = sorted.len() - 1;
    if n >= last as f64 {
        return sorted[last];
    }
    let frac = n.fract();
    frac * sorted[n.ceil() as usize] + (1.0 - frac) * sorted[n.floor() as usize]
}

/// Clamp `v` into `[lower, upper]`.
///
/// When `lower > upper` (a degenerate interval, e.g. a box thinner than
/// two device units) the result saturates at `upper`.
#[inline]
pub fn constrain<T: Float>(v: T, lower: T, upper: T) -> T {
    v.max(lower).min(upper)
}

/// Arithmetic mean. Returns 0.0 for empty slices.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation around a precomputed mean.
pub fn population_std_dev(data: &[f64], mean: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let variance = data
        .iter()
        .map(|&x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64;
    variance.sqrt()
}
