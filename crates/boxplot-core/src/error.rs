//! Error types for the box-and-whisker trace engine
//!
//! Provides a unified error type for all boxplot crates. Trace-level
//! failures (non-finite samples, empty traces) are recoverable by design:
//! the pipeline skips the offending trace and keeps rendering its
//! siblings.

use thiserror::Error;

/// Core error type for box trace calculation
#[derive(Error, Debug)]
pub enum Error {
    /// A non-finite value in the distribution array. One bad entry
    /// invalidates quartile math for the whole trace, so the trace is
    /// aborted rather than partially rendered.
    #[error("Non-finite sample at index {index}: the trace cannot be binned")]
    NonFiniteSample { index: usize },

    /// Binning produced no non-empty bins; the trace renders nothing.
    #[error("Empty trace: no bin received a finite sample")]
    EmptyTrace,

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a non-finite distribution value
    pub fn non_finite_sample(index: usize) -> Self {
        Self::NonFiniteSample { index }
    }

    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a fraction that must lie in [0, 1]
    pub fn invalid_fraction(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} {value} must be in [0, 1]"))
    }

    /// Whether the error means "skip this trace, keep its siblings"
    pub fn is_trace_skip(&self) -> bool {
        matches!(self, Self::NonFiniteSample { .. } | Self::EmptyTrace)
    }
}
