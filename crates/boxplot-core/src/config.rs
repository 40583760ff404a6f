//! Resolved trace and layout configuration
//!
//! Attribute-schema default resolution happens outside this engine; what
//! arrives here is the fully-resolved record. The types mirror that
//! schema: whisker width 0.5, boxgap/boxgroupgap 0.3, overlay mode, and
//! point defaults that depend on the point display mode.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which axis carries the position role
///
/// Vertical boxes take position from x and distribution from y;
/// horizontal boxes swap the roles. Geometry math is written once
/// against the (position, distribution) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Split an (x, y) pair into (position, distribution) roles
    pub fn split<T>(self, x: T, y: T) -> (T, T) {
        match self {
            Orientation::Vertical => (x, y),
            Orientation::Horizontal => (y, x),
        }
    }
}

/// Individual point display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointMode {
    /// Scatter every sample next to the box
    All,
    /// Scatter only points beyond the fences
    #[default]
    Outliers,
    /// Like `Outliers`, with points inside 3×IQR tagged as suspected
    SuspectedOutliers,
    /// No point overlay; whiskers extend to true min/max
    Off,
}

impl PointMode {
    /// Whether any points are drawn at all
    pub fn shows_points(self) -> bool {
        self != PointMode::Off
    }
}

/// Mean marker display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeanMode {
    #[default]
    Off,
    /// Dashed mean line
    Mean,
    /// Mean line plus a mean ± sd diamond
    WithSd,
}

/// How co-located box traces share an axis slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxMode {
    Group,
    #[default]
    Overlay,
}

/// One fully-resolved box trace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Per-sample position values, aligned with `samples`. When absent,
    /// every sample shares `position_base` (or a per-pass fallback index).
    #[serde(default)]
    pub positions: Option<Vec<f64>>,
    /// Raw distribution values, one per sample
    pub samples: Vec<f64>,
    /// Scalar position used when no position array is given
    #[serde(default)]
    pub position_base: Option<f64>,
    #[serde(default)]
    pub orientation: Orientation,
    /// Whisker cap width as a fraction of the box half-width, in [0, 1]
    #[serde(default = "default_whisker_width")]
    pub whisker_width: f64,
    #[serde(default)]
    pub point_mode: PointMode,
    /// Jitter amplitude in [0, 1], as a fraction of the box half-width
    #[serde(default)]
    pub jitter: f64,
    /// Point column offset relative to the box center, in [-2, 2]
    #[serde(default)]
    pub point_pos: f64,
    #[serde(default)]
    pub mean_mode: MeanMode,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_whisker_width() -> f64 {
    0.5
}

fn default_visible() -> bool {
    true
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            positions: None,
            samples: Vec::new(),
            position_base: None,
            orientation: Orientation::default(),
            whisker_width: default_whisker_width(),
            point_mode: PointMode::default(),
            jitter: 0.0,
            point_pos: 0.0,
            mean_mode: MeanMode::default(),
            visible: true,
        }
    }
}

impl TraceConfig {
    /// A trace with samples only, everything else defaulted
    pub fn from_samples(samples: Vec<f64>) -> Self {
        Self {
            samples,
            ..Self::default()
        }
    }

    /// Apply the schema's point defaults: `All` points sit beside the
    /// box (jitter 0.3, point_pos -1.5), other modes on its center line.
    pub fn with_point_mode(mut self, mode: PointMode) -> Self {
        self.point_mode = mode;
        if mode == PointMode::All {
            self.jitter = 0.3;
            self.point_pos = -1.5;
        } else {
            self.jitter = 0.0;
            self.point_pos = 0.0;
        }
        self
    }

    /// Check resolved values against their documented ranges
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.whisker_width) {
            return Err(Error::invalid_fraction("whisker_width", self.whisker_width));
        }
        if !(0.0..=1.0).contains(&self.jitter) {
            return Err(Error::invalid_fraction("jitter", self.jitter));
        }
        if !(-2.0..=2.0).contains(&self.point_pos) {
            return Err(Error::InvalidParameter(format!(
                "point_pos {} must be in [-2, 2]",
                self.point_pos
            )));
        }
        if let Some(positions) = &self.positions {
            if positions.len() != self.samples.len() {
                return Err(Error::InvalidParameter(format!(
                    "positions length {} does not match samples length {}",
                    positions.len(),
                    self.samples.len()
                )));
            }
        }
        Ok(())
    }
}

/// Layout parameters shared by every box trace on an axis pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoxLayoutConfig {
    #[serde(default)]
    pub mode: BoxMode,
    /// Gap between box slots, as a fraction of slot width, in [0, 1]
    #[serde(default = "default_gap")]
    pub gap: f64,
    /// Gap between boxes within a group, in [0, 1]
    #[serde(default = "default_gap")]
    pub group_gap: f64,
}

fn default_gap() -> f64 {
    0.3
}

impl Default for BoxLayoutConfig {
    fn default() -> Self {
        Self {
            mode: BoxMode::default(),
            gap: default_gap(),
            group_gap: default_gap(),
        }
    }
}

impl BoxLayoutConfig {
    /// Group mode with default gaps
    pub fn grouped() -> Self {
        Self {
            mode: BoxMode::Group,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_split() {
        assert_eq!(Orientation::Vertical.split("x", "y"), ("x", "y"));
        assert_eq!(Orientation::Horizontal.split("x", "y"), ("y", "x"));
    }

    #[test]
    fn test_point_mode_defaults() {
        let all = TraceConfig::from_samples(vec![1.0]).with_point_mode(PointMode::All);
        assert_eq!(all.jitter, 0.3);
        assert_eq!(all.point_pos, -1.5);

        let outliers = TraceConfig::from_samples(vec![1.0]).with_point_mode(PointMode::Outliers);
        assert_eq!(outliers.jitter, 0.0);
        assert_eq!(outliers.point_pos, 0.0);

        assert!(PointMode::All.shows_points());
        assert!(!PointMode::Off.shows_points());
    }

    #[test]
    fn test_validate_ranges() {
        let mut cfg = TraceConfig::from_samples(vec![1.0, 2.0]);
        assert!(cfg.validate().is_ok());

        cfg.jitter = 1.5;
        assert!(cfg.validate().is_err());
        cfg.jitter = 0.0;

        cfg.point_pos = -3.0;
        assert!(cfg.validate().is_err());
        cfg.point_pos = 0.0;

        cfg.positions = Some(vec![1.0]);
        assert!(cfg.validate().is_err());
        cfg.positions = Some(vec![1.0, 2.0]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_layout_defaults() {
        let layout = BoxLayoutConfig::default();
        assert_eq!(layout.mode, BoxMode::Overlay);
        assert_eq!(layout.gap, 0.3);
        assert_eq!(layout.group_gap, 0.3);
        assert_eq!(BoxLayoutConfig::grouped().mode, BoxMode::Group);
    }

    #[test]
    fn test_serde_round_trip() {
        let cfg = TraceConfig {
            positions: Some(vec![0.0, 0.0, 1.0]),
            samples: vec![1.0, 2.0, 3.0],
            orientation: Orientation::Horizontal,
            point_mode: PointMode::SuspectedOutliers,
            ..TraceConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: TraceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.orientation, Orientation::Horizontal);
        assert_eq!(back.point_mode, PointMode::SuspectedOutliers);
        assert_eq!(back.samples, cfg.samples);
    }
}
