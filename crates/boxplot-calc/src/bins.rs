//! Position binning
//!
//! Samples are grouped by distinct position value: each distinct value
//! owns the half-open interval `[pos - d_pos, pos + d_pos)` where `d_pos`
//! is half the minimum gap between distinct positions. A trace with one
//! box per distinct x (or y, when horizontal) falls out of this
//! naturally; a trace with no position data at all gets a single bin at
//! its scalar base or registration index.

use boxplot_core::error::{Error, Result};
use boxplot_core::math::{distinct_vals, find_bin};
use boxplot_core::TraceConfig;

/// One position bin and the samples assigned to it (unsorted)
#[derive(Debug, Clone, PartialEq)]
pub struct PositionBin {
    pub pos: f64,
    pub values: Vec<f64>,
}

/// Binning output: the trace-local half-spacing and the bins in
/// ascending position order (empty bins included)
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedTrace {
    /// Half the minimum gap between distinct positions
    pub d_pos: f64,
    pub bins: Vec<PositionBin>,
}

/// Resolve a per-sample position array for a trace.
///
/// Priority: explicit position array, then the scalar `position_base`
/// broadcast across every sample, then the trace's registration index —
/// so every trace gets at least one bin even with no position data.
pub fn resolve_positions(trace: &TraceConfig, box_index: usize) -> Vec<f64> {
    if let Some(positions) = &trace.positions {
        return positions.clone();
    }
    let base = trace.position_base.unwrap_or(box_index as f64);
    vec![base; trace.samples.len()]
}

/// Partition samples into position bins.
///
/// `positions` and `samples` are aligned index-for-index. A non-finite
/// sample anywhere aborts the whole trace with
/// [`Error::NonFiniteSample`]; a non-finite position only drops that
/// sample (it belongs to no bin).
pub fn bin_samples(positions: &[f64], samples: &[f64]) -> Result<BinnedTrace> {
    debug_assert_eq!(positions.len(), samples.len());

    let dv = distinct_vals(positions);
    let d_pos = dv.min_diff / 2.0;

    // bin edges at each distinct value +/- d_pos
    let mut edges: Vec<f64> = dv.vals.iter().map(|v| v - d_pos).collect();
    if let Some(last) = dv.vals.last() {
        edges.push(last + d_pos);
    }

    let mut bins: Vec<PositionBin> = dv
        .vals
        .iter()
        .map(|&pos| PositionBin {
            pos,
            values: Vec::new(),
        })
        .collect();

    for (i, (&pos, &v)) in positions.iter().zip(samples).enumerate() {
        if !v.is_finite() {
            return Err(Error::non_finite_sample(i));
        }
        let n = find_bin(pos, &edges, false);
        if n >= 0 && (n as usize) < bins.len() {
            bins[n as usize].values.push(v);
        }
    }

    Ok(BinnedTrace { d_pos, bins })
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxplot_core::math::MIN_DIFF_FLOOR;

    #[test]
    fn test_one_bin_per_distinct_position() {
        let positions = [0.0, 0.0, 1.0, 1.0, 1.0, 2.0];
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let binned = bin_samples(&positions, &samples).unwrap();

        assert_eq!(binned.d_pos, 0.5);
        assert_eq!(binned.bins.len(), 3);
        assert_eq!(binned.bins[0].values, vec![1.0, 2.0]);
        assert_eq!(binned.bins[1].values, vec![3.0, 4.0, 5.0]);
        assert_eq!(binned.bins[2].values, vec![6.0]);
    }

    #[test]
    fn test_close_positions_stay_distinct_bins() {
        // every position value is distinct, so each owns its own bin;
        // the minimum gap shrinks to the tightest pair
        let positions = [0.0, 1.0, 0.25, 0.75];
        let samples = [10.0, 20.0, 11.0, 21.0];
        let binned = bin_samples(&positions, &samples).unwrap();

        assert_eq!(binned.d_pos, 0.125);
        assert_eq!(binned.bins.len(), 4);
        assert_eq!(binned.bins[0].values, vec![10.0]);
        assert_eq!(binned.bins[1].values, vec![11.0]);
        assert_eq!(binned.bins[2].values, vec![21.0]);
        assert_eq!(binned.bins[3].values, vec![20.0]);
    }

    #[test]
    fn test_off_value_positions_fall_in_the_containing_interval() {
        // with distinct set {0, 1}, bin edges sit at -0.5, 0.5, 1.5;
        // values between positions land by half-open interval lookup
        let positions = [0.0, 0.0, 1.0, 1.0];
        let samples = [1.0, 2.0, 3.0, 4.0];
        let binned = bin_samples(&positions, &samples).unwrap();
        let edges = [-0.5, 0.5, 1.5];

        assert_eq!(find_bin(0.4, &edges, false), 0);
        assert_eq!(find_bin(0.5, &edges, false), 1); // left-closed
        assert_eq!(find_bin(0.6, &edges, false), 1);
        assert_eq!(binned.bins.len(), 2);
    }

    #[test]
    fn test_degenerate_spacing_uses_floor() {
        let positions = [5.0; 4];
        let samples = [1.0, 2.0, 3.0, 4.0];
        let binned = bin_samples(&positions, &samples).unwrap();

        assert_eq!(binned.d_pos, MIN_DIFF_FLOOR / 2.0);
        assert_eq!(binned.bins.len(), 1);
        assert_eq!(binned.bins[0].values.len(), 4);
    }

    #[test]
    fn test_non_finite_sample_aborts_trace() {
        let positions = [0.0, 0.0, 1.0];
        let samples = [1.0, f64::NAN, 3.0];
        let err = bin_samples(&positions, &samples).unwrap_err();
        assert!(matches!(err, Error::NonFiniteSample { index: 1 }));
    }

    #[test]
    fn test_non_finite_position_drops_sample() {
        let positions = [0.0, f64::NAN, 0.0];
        let samples = [1.0, 2.0, 3.0];
        let binned = bin_samples(&positions, &samples).unwrap();
        assert_eq!(binned.bins.len(), 1);
        assert_eq!(binned.bins[0].values, vec![1.0, 3.0]);
    }

    #[test]
    fn test_resolve_positions_priority() {
        let mut trace = TraceConfig::from_samples(vec![1.0, 2.0]);
        trace.positions = Some(vec![3.0, 4.0]);
        trace.position_base = Some(9.0);
        assert_eq!(resolve_positions(&trace, 5), vec![3.0, 4.0]);

        trace.positions = None;
        assert_eq!(resolve_positions(&trace, 5), vec![9.0, 9.0]);

        trace.position_base = None;
        assert_eq!(resolve_positions(&trace, 5), vec![5.0, 5.0]);
    }

    #[test]
    fn test_every_finite_sample_lands_exactly_once() {
        let positions = [0.0, 2.0, 2.0, 4.0, 0.0];
        let samples = [1.0, 5.0, 6.0, 9.0, 2.0];
        let binned = bin_samples(&positions, &samples).unwrap();
        let total: usize = binned.bins.iter().map(|b| b.values.len()).sum();
        assert_eq!(total, samples.len());
    }
}
