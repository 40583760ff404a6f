//! Layout and pixel geometry for box traces
//!
//! Everything downstream of per-trace statistics: the cross-trace
//! layout barrier that sizes and offsets boxes sharing a position axis
//! ([`layout`]), the deterministic jitter stream and density-aware
//! spread factors ([`jitter`]), pixel-space box/whisker/point geometry
//! ([`geometry`]), hover label selection ([`hover`]), and the
//! [`pipeline::plot_pass`] entry point that runs a whole figure.

pub mod geometry;
pub mod hover;
pub mod jitter;
pub mod layout;
pub mod pipeline;

pub use geometry::{build_geometry, BinGeometry, MeanMarker, ScatterPoint};
pub use hover::{hover_labels, HoverLabel, StatKind};
pub use jitter::{jitter_factors, jitter_scale, JitterRng};
pub use layout::{layout_traces, TraceLayout};
pub use pipeline::{plot_pass, TraceGeometry};
