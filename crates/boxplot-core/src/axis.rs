//! Host axis interface
//!
//! The engine never owns axis scale computation. It consumes a narrow
//! adapter: coordinate mapping into pixels, autorange expansion requests,
//! and a minimum-tick-spacing hint. [`LinearAxis`] is a self-contained
//! linear implementation used by the test suite and available to hosts
//! that do not bring their own axis system.

/// Axis scale classification, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    Linear,
    Log,
    Date,
    Category,
}

/// Autorange expansion request options
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandOptions {
    /// Ask the host for extra pixel padding beyond the data extremes
    pub padded: bool,
    /// Extra data-space padding below each value
    pub vpad_minus: f64,
    /// Extra data-space padding above each value
    pub vpad_plus: f64,
}

impl ExpandOptions {
    /// Padded expansion with no extra data-space padding
    pub fn padded() -> Self {
        Self {
            padded: true,
            ..Self::default()
        }
    }
}

/// Coordinate transform and autorange services consumed from the host
pub trait AxisAdapter {
    /// Map a data value to a pixel coordinate
    fn data_to_pixel(&self, value: f64) -> f64;

    /// Grow the axis range so every value (plus padding) stays in view
    fn expand_range(&mut self, values: &[f64], opts: &ExpandOptions);

    /// Hint that ticks closer than `min_gap` would overlap box slots;
    /// `anchor` is a data value a tick should land on
    fn set_min_tick_spacing(&mut self, min_gap: f64, anchor: f64);

    /// Scale classification of this axis
    fn kind(&self) -> AxisKind;
}

/// Fraction of the data span added on each side for `padded` requests
const PAD_FRACTION: f64 = 0.05;

/// Linear reference axis
///
/// Tracks the widest range requested so far and maps linearly onto a
/// pixel span. Hosts with a real axis system implement [`AxisAdapter`]
/// themselves; this one backs the tests and standalone use.
#[derive(Debug, Clone)]
pub struct LinearAxis {
    range: [f64; 2],
    pixel_span: f64,
    min_dtick: Option<(f64, f64)>,
}

impl LinearAxis {
    /// Create an axis over `range` rendered across `pixel_span` pixels
    pub fn new(range: [f64; 2], pixel_span: f64) -> Self {
        Self {
            range,
            pixel_span,
            min_dtick: None,
        }
    }

    /// Current data range
    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Tightest tick spacing hint received, with its anchor value
    pub fn min_dtick(&self) -> Option<(f64, f64)> {
        self.min_dtick
    }
}

impl AxisAdapter for LinearAxis {
    fn data_to_pixel(&self, value: f64) -> f64 {
        let span = self.range[1] - self.range[0];
        if span == 0.0 {
            return 0.0;
        }
        (value - self.range[0]) / span * self.pixel_span
    }

    fn expand_range(&mut self, values: &[f64], opts: &ExpandOptions) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in values.iter().filter(|v| v.is_finite()) {
            lo = lo.min(v - opts.vpad_minus);
            hi = hi.max(v + opts.vpad_plus);
        }
        if lo > hi {
            return;
        }
        if opts.padded {
            let pad = (hi - lo) * PAD_FRACTION;
            lo -= pad;
            hi += pad;
        }
        self.range[0] = self.range[0].min(lo);
        self.range[1] = self.range[1].max(hi);
    }

    fn set_min_tick_spacing(&mut self, min_gap: f64, anchor: f64) {
        match self.min_dtick {
            Some((gap, _)) if gap <= min_gap => {}
            _ => self.min_dtick = Some((min_gap, anchor)),
        }
    }

    fn kind(&self) -> AxisKind {
        AxisKind::Linear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_mapping() {
        let axis = LinearAxis::new([0.0, 10.0], 100.0);
        assert_relative_eq!(axis.data_to_pixel(0.0), 0.0);
        assert_relative_eq!(axis.data_to_pixel(5.0), 50.0);
        assert_relative_eq!(axis.data_to_pixel(10.0), 100.0);
    }

    #[test]
    fn test_expand_only_widens() {
        let mut axis = LinearAxis::new([0.0, 10.0], 100.0);
        axis.expand_range(&[2.0, 8.0], &ExpandOptions::default());
        assert_eq!(axis.range(), [0.0, 10.0]);

        axis.expand_range(&[-5.0, 15.0], &ExpandOptions::default());
        assert_eq!(axis.range(), [-5.0, 15.0]);
    }

    #[test]
    fn test_expand_with_vpad() {
        let mut axis = LinearAxis::new([0.0, 1.0], 100.0);
        axis.expand_range(
            &[0.0, 10.0],
            &ExpandOptions {
                padded: false,
                vpad_minus: 2.0,
                vpad_plus: 3.0,
            },
        );
        assert_eq!(axis.range(), [-2.0, 13.0]);
    }

    #[test]
    fn test_expand_padded_adds_fraction() {
        let mut axis = LinearAxis::new([0.0, 0.0], 100.0);
        axis.expand_range(&[0.0, 100.0], &ExpandOptions::padded());
        assert_relative_eq!(axis.range()[0], -5.0);
        assert_relative_eq!(axis.range()[1], 105.0);
    }

    #[test]
    fn test_expand_ignores_non_finite() {
        let mut axis = LinearAxis::new([0.0, 1.0], 100.0);
        axis.expand_range(&[f64::NAN, f64::INFINITY], &ExpandOptions::default());
        assert_eq!(axis.range(), [0.0, 1.0]);
    }

    #[test]
    fn test_min_tick_spacing_keeps_tightest() {
        let mut axis = LinearAxis::new([0.0, 1.0], 100.0);
        axis.set_min_tick_spacing(2.0, 0.0);
        axis.set_min_tick_spacing(5.0, 1.0);
        assert_eq!(axis.min_dtick(), Some((2.0, 0.0)));
        axis.set_min_tick_spacing(1.0, 3.0);
        assert_eq!(axis.min_dtick(), Some((1.0, 3.0)));
    }
}
