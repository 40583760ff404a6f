//! Per-trace box statistics: binning and quartile/fence reduction
//!
//! Turns a raw sample array plus position array into per-bin box
//! statistics. Positions are partitioned by the distinct-value/minimum-
//! gap rule ([`bins`]), each non-empty bin is reduced to quartiles,
//! fences, and outlier thresholds ([`stats`]), and [`calc::calc_trace`]
//! ties the stages together for one trace, including the distribution-
//! axis autorange request.

pub mod bins;
pub mod calc;
pub mod stats;

pub use bins::{bin_samples, resolve_positions, BinnedTrace, PositionBin};
pub use calc::{calc_trace, TraceCalc};
pub use stats::{compute_stats, BoxStats};
