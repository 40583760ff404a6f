//! Hover metadata
//!
//! A box bin answers hover with one label per displayed statistic.
//! Labels come out in a fixed order (median first, it keeps the trace
//! name), values that coincide are reported once, and the mean label
//! carries the standard deviation when the sd diamond is shown.

use boxplot_calc::BoxStats;
use boxplot_core::{MeanMode, TraceConfig};

/// Which statistic a hover label reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Min,
    Q1,
    Median,
    Q3,
    Max,
    Mean,
    LowerFence,
    UpperFence,
}

/// One hover label for one bin statistic
#[derive(Debug, Clone, PartialEq)]
pub struct HoverLabel {
    /// Position value of the bin
    pub pos: f64,
    pub stat: StatKind,
    pub value: f64,
    /// Standard deviation, attached to the mean label under
    /// [`MeanMode::WithSd`]
    pub sd: Option<f64>,
}

/// Hover labels for one bin, deduplicated by value.
pub fn hover_labels(stats: &BoxStats, cfg: &TraceConfig) -> Vec<HoverLabel> {
    let mut entries = vec![
        (StatKind::Median, stats.med),
        (StatKind::Min, stats.min),
        (StatKind::Q1, stats.q1),
        (StatKind::Q3, stats.q3),
        (StatKind::Max, stats.max),
    ];
    if cfg.mean_mode != MeanMode::Off {
        entries.push((StatKind::Mean, stats.mean));
    }
    if cfg.point_mode.shows_points() {
        entries.push((StatKind::LowerFence, stats.lf));
        entries.push((StatKind::UpperFence, stats.uf));
    }

    let mut used = Vec::with_capacity(entries.len());
    let mut labels = Vec::with_capacity(entries.len());
    for (stat, value) in entries {
        if used.contains(&value) {
            continue;
        }
        used.push(value);
        let sd = (stat == StatKind::Mean && cfg.mean_mode == MeanMode::WithSd)
            .then_some(stats.sd);
        labels.push(HoverLabel {
            pos: stats.pos,
            stat,
            value,
            sd,
        });
    }
    labels
}
