//! Per-trace calculation
//!
//! Binds the binning and statistics stages together for one trace:
//! request distribution-axis autorange over the raw samples, resolve
//! positions, bin, drop empty bins, reduce each bin to [`BoxStats`].

use tracing::debug;

use boxplot_core::axis::{AxisAdapter, ExpandOptions};
use boxplot_core::error::{Error, Result};
use boxplot_core::{RenderPass, TraceConfig};

use crate::bins::{bin_samples, resolve_positions};
use crate::stats::{compute_stats, BoxStats};

/// Calculated statistics for one trace: one [`BoxStats`] per non-empty
/// bin, in ascending position order
#[derive(Debug, Clone)]
pub struct TraceCalc {
    /// Registration index within the render pass; group layout slot and
    /// fallback position
    pub box_index: usize,
    /// Trace-local half-spacing (layout recomputes a shared value across
    /// sibling traces)
    pub d_pos: f64,
    pub stats: Vec<BoxStats>,
}

impl TraceCalc {
    /// Bin positions, in ascending order
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.stats.iter().map(|s| s.pos)
    }
}

/// Calculate box statistics for one trace.
///
/// The distribution axis is expanded over the full raw sample array
/// before binning, so autorange reflects outliers even though whisker
/// geometry uses fences. Errors classified as trace skips
/// ([`Error::is_trace_skip`]) mean "render nothing for this trace";
/// sibling traces are unaffected.
pub fn calc_trace(
    pass: &mut RenderPass,
    trace: &TraceConfig,
    dst_axis: &mut dyn AxisAdapter,
) -> Result<TraceCalc> {
    trace.validate()?;
    let box_index = pass.next_box_index();
    // the index is confirmed by register_box() only once the trace
    // calculates; failed traces shift no sibling's slot

    // size autorange from all source points; position autorange happens
    // in layout once every sibling's bins are known
    dst_axis.expand_range(&trace.samples, &ExpandOptions::padded());

    let positions = resolve_positions(trace, box_index);
    let binned = bin_samples(&positions, &trace.samples)?;

    let stats = binned
        .bins
        .into_iter()
        .filter(|bin| !bin.values.is_empty())
        .map(|bin| compute_stats(bin.pos, bin.values))
        .collect::<Result<Vec<_>>>()?;

    if stats.is_empty() {
        return Err(Error::EmptyTrace);
    }

    pass.register_box();
    debug!(
        box_index,
        bins = stats.len(),
        d_pos = binned.d_pos,
        "calculated box trace"
    );

    Ok(TraceCalc {
        box_index,
        d_pos: binned.d_pos,
        stats,
    })
}
