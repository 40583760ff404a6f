//! Cross-trace box layout
//!
//! Once every sibling trace on an axis pair has its box statistics, the
//! layout pass reconciles them: a layout-wide half-spacing from the
//! combined position set, group offsets for co-located traces, and the
//! position-axis padding request that keeps boxes (and points jittered
//! past them) in view. Layout must run before any trace's geometry is
//! built; the [`TraceLayout`] value each trace receives is the proof.

use tracing::debug;

use boxplot_calc::TraceCalc;
use boxplot_core::axis::{AxisAdapter, ExpandOptions};
use boxplot_core::math::distinct_vals;
use boxplot_core::{BoxLayoutConfig, BoxMode, TraceConfig};

/// Placement of one trace's boxes along the position axis
///
/// Immutable output of the layout pass, consumed read-only by geometry.
/// All widths and offsets are in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceLayout {
    /// Registration index; the trace's slot within a group
    pub box_index: usize,
    /// Layout-wide half-spacing between box positions
    pub d_pos: f64,
    /// Box half-width
    pub half_width: f64,
    /// Offset of the box center from the bin position (zero unless
    /// grouped)
    pub offset: f64,
    /// Whisker-cap half-width
    pub whisker_half_width: f64,
}

/// Compute layouts for every box trace sharing one axis pair and
/// orientation.
///
/// `box_count` is the render pass's registered trace count. Grouping
/// only applies when at least two traces genuinely share a position
/// value: if the combined position list has no duplicates, group
/// semantics are disabled by forcing the active count to one.
///
/// Side effects on the position axis: a minimum-tick-spacing hint and a
/// padded range expansion covering the outermost boxes plus any point
/// columns jittered beyond them.
///
/// An empty `traces` slice does no work and returns no layouts.
pub fn layout_traces(
    traces: &[(&TraceCalc, &TraceConfig)],
    layout_cfg: &BoxLayoutConfig,
    box_count: usize,
    pos_axis: &mut dyn AxisAdapter,
) -> Vec<TraceLayout> {
    if traces.is_empty() {
        return Vec::new();
    }

    let combined: Vec<f64> = traces
        .iter()
        .flat_map(|(calc, _)| calc.positions())
        .collect();
    let dv = distinct_vals(&combined);
    let d_pos = dv.min_diff / 2.0;

    // no duplicated positions means every trace stands alone; disable
    // group semantics
    let num_boxes = if combined.len() == dv.vals.len() {
        1
    } else {
        box_count.max(1)
    };
    let group = layout_cfg.mode == BoxMode::Group && num_boxes > 1;
    debug!(
        traces = traces.len(),
        num_boxes, group, d_pos, "box layout pass"
    );

    pos_axis.set_min_tick_spacing(dv.min_diff, dv.vals[0]);

    // padding beyond the outermost box positions, including room for
    // point columns that jitter past the box edge
    let mut min_pad = 0.0f64;
    let mut max_pad = 0.0f64;
    for (_, cfg) in traces {
        if cfg.point_mode.shows_points() {
            min_pad = min_pad.max(cfg.jitter - cfg.point_pos - 1.0);
            max_pad = max_pad.max(cfg.jitter + cfg.point_pos - 1.0);
        }
    }
    let width_divisor = if group { num_boxes as f64 } else { 1.0 };
    let half_width = d_pos * (1.0 - layout_cfg.gap) * (1.0 - layout_cfg.group_gap) / width_divisor;
    pos_axis.expand_range(
        &dv.vals,
        &ExpandOptions {
            padded: false,
            vpad_minus: d_pos + min_pad * half_width,
            vpad_plus: d_pos + max_pad * half_width,
        },
    );

    traces
        .iter()
        .map(|(calc, cfg)| {
            let offset = if group {
                let slot = calc.box_index as f64;
                2.0 * d_pos * (-0.5 + (slot + 0.5) / num_boxes as f64) * (1.0 - layout_cfg.gap)
            } else {
                0.0
            };
            TraceLayout {
                box_index: calc.box_index,
                d_pos,
                half_width,
                offset,
                whisker_half_width: half_width * cfg.whisker_width,
            }
        })
        .collect()
}
