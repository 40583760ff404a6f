//! Shared foundation for the box-and-whisker trace engine
//!
//! This crate holds everything the calculation and geometry crates have
//! in common: the unified error type, the math primitives behind binning
//! and quartile interpolation, the host axis interface, the resolved
//! trace/layout configuration records, and the render-pass context.

pub mod axis;
pub mod config;
pub mod error;
pub mod math;
pub mod pass;

pub use axis::{AxisAdapter, AxisKind, ExpandOptions, LinearAxis};
pub use config::{BoxLayoutConfig, BoxMode, MeanMode, Orientation, PointMode, TraceConfig};
pub use error::{Error, Result};
pub use pass::RenderPass;
