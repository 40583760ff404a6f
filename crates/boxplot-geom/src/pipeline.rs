//! End-to-end render pass
//!
//! Runs the whole engine for one figure: per-trace statistics, the
//! cross-trace layout barrier per orientation, then geometry and hover
//! metadata per trace. Traces that fail calculation (a non-finite
//! sample, nothing left after binning) are skipped silently — partial
//! rendering beats aborting the plot — while configuration errors
//! propagate. Synchronous and single-threaded: the pass runs to
//! completion or its output is discarded.

use tracing::debug;

use boxplot_calc::{calc_trace, TraceCalc};
use boxplot_core::{
    AxisAdapter, BoxLayoutConfig, Orientation, RenderPass, Result, TraceConfig,
};

use crate::geometry::{build_geometry, BinGeometry};
use crate::hover::{hover_labels, HoverLabel};
use crate::layout::{layout_traces, TraceLayout};

/// Everything the renderer needs for one trace
#[derive(Debug, Clone)]
pub struct TraceGeometry {
    /// Index of the trace in the input slice
    pub trace_index: usize,
    pub orientation: Orientation,
    pub layout: TraceLayout,
    pub bins: Vec<BinGeometry>,
    /// Hover labels, one group per bin
    pub hover: Vec<Vec<HoverLabel>>,
}

/// Run one render pass over every box trace of a figure.
///
/// Invalid traces vanish from the output without blocking their
/// siblings. Output order follows input order within each orientation;
/// vertical traces come first.
pub fn plot_pass<'a>(
    traces: &[TraceConfig],
    layout_cfg: &BoxLayoutConfig,
    x_axis: &'a mut dyn AxisAdapter,
    y_axis: &'a mut dyn AxisAdapter,
) -> Result<Vec<TraceGeometry>> {
    let mut pass = RenderPass::new();

    // statistics per trace; skips are logged, not raised
    let mut calcs: Vec<(usize, TraceCalc)> = Vec::new();
    for (trace_index, trace) in traces.iter().enumerate() {
        if !trace.visible {
            continue;
        }
        let dst_axis: &mut dyn AxisAdapter = match trace.orientation {
            Orientation::Vertical => &mut *y_axis,
            Orientation::Horizontal => &mut *x_axis,
        };
        match calc_trace(&mut pass, trace, dst_axis) {
            Ok(calc) => calcs.push((trace_index, calc)),
            Err(err) if err.is_trace_skip() => {
                debug!(trace_index, %err, "skipping box trace");
            }
            Err(err) => return Err(err),
        }
    }

    let mut output = Vec::with_capacity(calcs.len());
    for orientation in [Orientation::Vertical, Orientation::Horizontal] {
        let members: Vec<(usize, &TraceCalc, &TraceConfig)> = calcs
            .iter()
            .filter(|(i, _)| traces[*i].orientation == orientation)
            .map(|(i, calc)| (*i, calc, &traces[*i]))
            .collect();
        if members.is_empty() {
            continue;
        }

        // layout barrier: every sibling's statistics are in hand before
        // any trace's geometry is built
        let layout_input: Vec<(&TraceCalc, &TraceConfig)> =
            members.iter().map(|(_, calc, cfg)| (*calc, *cfg)).collect();
        let (pos_axis, dst_axis) = orientation.split(&mut *x_axis, &mut *y_axis);
        let layouts = layout_traces(&layout_input, layout_cfg, pass.box_count(), &mut *pos_axis);

        for ((trace_index, calc, cfg), layout) in members.iter().zip(layouts) {
            let bins = build_geometry(calc, &layout, cfg, &*pos_axis, &*dst_axis);
            let hover = calc.stats.iter().map(|s| hover_labels(s, cfg)).collect();
            output.push(TraceGeometry {
                trace_index: *trace_index,
                orientation,
                layout,
                bins,
                hover,
            });
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxplot_core::{LinearAxis, PointMode};

    fn axes() -> (LinearAxis, LinearAxis) {
        (
            LinearAxis::new([0.0, 1.0], 400.0),
            LinearAxis::new([0.0, 1.0], 300.0),
        )
    }

    #[test]
    fn test_invalid_trace_vanishes_siblings_survive() {
        let good = TraceConfig {
            positions: Some(vec![0.0, 0.0, 0.0]),
            samples: vec![1.0, 2.0, 3.0],
            ..TraceConfig::default()
        };
        let bad = TraceConfig {
            positions: Some(vec![0.0, 0.0, 0.0]),
            samples: vec![1.0, f64::NAN, 3.0],
            ..TraceConfig::default()
        };

        let (mut xa, mut ya) = axes();
        let out = plot_pass(
            &[good, bad],
            &BoxLayoutConfig::default(),
            &mut xa,
            &mut ya,
        )
        .unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].trace_index, 0);
    }

    #[test]
    fn test_invisible_trace_is_ignored() {
        let mut trace = TraceConfig::from_samples(vec![1.0, 2.0, 3.0]);
        trace.visible = false;

        let (mut xa, mut ya) = axes();
        let out = plot_pass(&[trace], &BoxLayoutConfig::default(), &mut xa, &mut ya).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_config_errors_propagate() {
        let mut trace = TraceConfig::from_samples(vec![1.0, 2.0]);
        trace.jitter = 5.0;

        let (mut xa, mut ya) = axes();
        let err = plot_pass(&[trace], &BoxLayoutConfig::default(), &mut xa, &mut ya).unwrap_err();
        assert!(!err.is_trace_skip());
    }

    #[test]
    fn test_orientation_splits_axis_roles() {
        let vertical = TraceConfig {
            samples: vec![10.0, 20.0, 30.0],
            position_base: Some(0.0),
            ..TraceConfig::default()
        };
        let horizontal = TraceConfig {
            samples: vec![10.0, 20.0, 30.0],
            position_base: Some(0.0),
            orientation: Orientation::Horizontal,
            ..TraceConfig::default()
        };

        let (mut xa, mut ya) = axes();
        let out = plot_pass(
            &[vertical, horizontal],
            &BoxLayoutConfig::default(),
            &mut xa,
            &mut ya,
        )
        .unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].orientation, Orientation::Vertical);
        assert_eq!(out[1].orientation, Orientation::Horizontal);
        // the vertical trace expanded y over its samples, the
        // horizontal trace expanded x
        assert!(ya.range()[1] >= 30.0);
        assert!(xa.range()[1] >= 30.0);
    }

    #[test]
    fn test_repeated_passes_are_identical() {
        let trace = TraceConfig {
            positions: Some(vec![0.0; 8]),
            samples: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
            ..TraceConfig::default()
        }
        .with_point_mode(PointMode::All);

        let (mut xa, mut ya) = axes();
        let first = plot_pass(
            std::slice::from_ref(&trace),
            &BoxLayoutConfig::default(),
            &mut xa,
            &mut ya,
        )
        .unwrap();
        let second = plot_pass(
            std::slice::from_ref(&trace),
            &BoxLayoutConfig::default(),
            &mut xa,
            &mut ya,
        )
        .unwrap();

        assert_eq!(first[0].bins, second[0].bins);
    }
}
