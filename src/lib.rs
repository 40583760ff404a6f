//! Box-and-whisker trace engine
//!
//! Computes everything a renderer needs to draw box plots from raw
//! samples: position binning, quartile/fence statistics, cross-trace
//! layout, and pixel geometry with deterministic point jitter. The
//! engine stops at geometry; actual drawing, styling, and interaction
//! belong to the caller.
//!
//! The facade re-exports the member crates. Most callers only need
//! [`plot_pass`] plus the configuration types:
//!
//! ```
//! use boxplot_stats::{plot_pass, BoxLayoutConfig, LinearAxis, TraceConfig};
//!
//! let trace = TraceConfig::from_samples(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! let mut x = LinearAxis::new([0.0, 1.0], 400.0);
//! let mut y = LinearAxis::new([0.0, 1.0], 300.0);
//! let traces = plot_pass(&[trace], &BoxLayoutConfig::default(), &mut x, &mut y)?;
//! assert_eq!(traces.len(), 1);
//! # Ok::<(), boxplot_stats::Error>(())
//! ```

pub use boxplot_core::{
    AxisAdapter, AxisKind, BoxLayoutConfig, BoxMode, Error, ExpandOptions, LinearAxis, MeanMode,
    Orientation, PointMode, RenderPass, Result, TraceConfig,
};

pub use boxplot_calc::{bin_samples, calc_trace, compute_stats, BinnedTrace, BoxStats, TraceCalc};

pub use boxplot_geom::{
    build_geometry, hover_labels, layout_traces, plot_pass, BinGeometry, HoverLabel, JitterRng,
    MeanMarker, ScatterPoint, StatKind, TraceGeometry, TraceLayout,
};
