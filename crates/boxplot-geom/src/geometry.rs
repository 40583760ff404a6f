//! Renderable box geometry
//!
//! Combines a trace's statistics, its layout, and the axis coordinate
//! mapping into per-bin geometry: box rectangle edges, whisker endpoints
//! and caps, a median line kept visibly clear of the quartiles, optional
//! mean/sd markers, and jittered scatter points. All math runs once
//! against (position, distribution) axis roles; orientation only decides
//! which concrete axis plays which role at the call site.

use boxplot_calc::{BoxStats, TraceCalc};
use boxplot_core::math::constrain;
use boxplot_core::{AxisAdapter, MeanMode, PointMode, TraceConfig};

use crate::jitter::{jitter_factors, jitter_scale, JitterRng};
use crate::layout::TraceLayout;

/// One scattered sample point
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// Position-axis pixel (includes jitter and point offset)
    pub pos: f64,
    /// Distribution-axis pixel
    pub dst: f64,
    /// The sample value behind the point
    pub value: f64,
    /// Beyond a fence but inside 3×IQR, under `SuspectedOutliers`
    pub suspected: bool,
}

/// Mean line, optionally with a mean ± sd diamond
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanMarker {
    /// Distribution-axis pixel of the mean
    pub mean: f64,
    /// Distribution-axis pixels of mean ± sd, when the diamond is shown
    pub sd_span: Option<(f64, f64)>,
}

/// Renderable geometry for one bin, in pixel coordinates
///
/// `pos_*` fields are on the position axis, the rest on the distribution
/// axis; `Orientation::split` tells the renderer which is x and which
/// is y.
#[derive(Debug, Clone, PartialEq)]
pub struct BinGeometry {
    /// Data position identifying the bin
    pub pos: f64,
    /// Box center line
    pub pos_center: f64,
    /// Box rectangle edges
    pub pos_edges: (f64, f64),
    /// Whisker cap edges
    pub pos_whisker_edges: (f64, f64),
    pub q1: f64,
    pub q3: f64,
    /// Median, nudged at least one device unit inside both quartiles
    pub med: f64,
    /// Whisker endpoints: fences when points overlay the box, true
    /// min/max when they don't
    pub whiskers: (f64, f64),
    pub mean: Option<MeanMarker>,
    pub points: Vec<ScatterPoint>,
}

/// Build geometry for every bin of one trace.
///
/// Requires the trace's [`TraceLayout`] — layout for the whole axis-pair
/// group must have completed first. The jitter generator is reseeded
/// here, so repeated renders of the same pass are pixel-identical.
pub fn build_geometry(
    calc: &TraceCalc,
    layout: &TraceLayout,
    cfg: &TraceConfig,
    pos_axis: &dyn AxisAdapter,
    dst_axis: &dyn AxisAdapter,
) -> Vec<BinGeometry> {
    let mut rng = JitterRng::new();
    calc.stats
        .iter()
        .map(|stats| bin_geometry(stats, layout, cfg, pos_axis, dst_axis, &mut rng))
        .collect()
}

fn bin_geometry(
    stats: &BoxStats,
    layout: &TraceLayout,
    cfg: &TraceConfig,
    pos_axis: &dyn AxisAdapter,
    dst_axis: &dyn AxisAdapter,
    rng: &mut JitterRng,
) -> BinGeometry {
    let center = stats.pos + layout.offset;
    let pos_center = pos_axis.data_to_pixel(center);
    let pos_edges = (
        pos_axis.data_to_pixel(center - layout.half_width),
        pos_axis.data_to_pixel(center + layout.half_width),
    );
    let pos_whisker_edges = (
        pos_axis.data_to_pixel(center - layout.whisker_half_width),
        pos_axis.data_to_pixel(center + layout.whisker_half_width),
    );

    let q1 = dst_axis.data_to_pixel(stats.q1);
    let q3 = dst_axis.data_to_pixel(stats.q3);
    // keep the median visible when the quartiles crowd it
    let med = constrain(
        dst_axis.data_to_pixel(stats.med),
        q1.min(q3) + 1.0,
        q1.max(q3) - 1.0,
    );

    // with no point overlay there is nothing marking true outliers, so
    // whiskers extend to the data extremes instead of the fences
    let whiskers = if cfg.point_mode.shows_points() {
        (
            dst_axis.data_to_pixel(stats.lf),
            dst_axis.data_to_pixel(stats.uf),
        )
    } else {
        (
            dst_axis.data_to_pixel(stats.min),
            dst_axis.data_to_pixel(stats.max),
        )
    };

    let mean = match cfg.mean_mode {
        MeanMode::Off => None,
        MeanMode::Mean => Some(MeanMarker {
            mean: dst_axis.data_to_pixel(stats.mean),
            sd_span: None,
        }),
        MeanMode::WithSd => Some(MeanMarker {
            mean: dst_axis.data_to_pixel(stats.mean),
            sd_span: Some((
                dst_axis.data_to_pixel(stats.mean - stats.sd),
                dst_axis.data_to_pixel(stats.mean + stats.sd),
            )),
        }),
    };

    let points = if cfg.point_mode.shows_points() {
        scatter_points(stats, layout, cfg, pos_axis, dst_axis, rng)
    } else {
        Vec::new()
    };

    BinGeometry {
        pos: stats.pos,
        pos_center,
        pos_edges,
        pos_whisker_edges,
        q1,
        q3,
        med,
        whiskers,
        mean,
        points,
    }
}

fn scatter_points(
    stats: &BoxStats,
    layout: &TraceLayout,
    cfg: &TraceConfig,
    pos_axis: &dyn AxisAdapter,
    dst_axis: &dyn AxisAdapter,
    rng: &mut JitterRng,
) -> Vec<ScatterPoint> {
    let shown: Vec<f64> = if cfg.point_mode == PointMode::All {
        stats.samples.clone()
    } else {
        stats
            .samples
            .iter()
            .copied()
            .filter(|&v| stats.is_outlier(v))
            .collect()
    };

    let scale = if cfg.jitter > 0.0 {
        let (factors, max_factor) = jitter_factors(&shown, stats, cfg.point_mode);
        let scale = jitter_scale(cfg.jitter, max_factor);
        Some((factors, scale))
    } else {
        None
    };

    shown
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let mut pos_offset = cfg.point_pos;
            if let Some((factors, scale)) = &scale {
                pos_offset += scale * factors[i] * (rng.next_value() - 0.5);
            }
            ScatterPoint {
                pos: pos_axis
                    .data_to_pixel(stats.pos + pos_offset * layout.half_width + layout.offset),
                dst: dst_axis.data_to_pixel(v),
                value: v,
                suspected: cfg.point_mode == PointMode::SuspectedOutliers
                    && stats.is_suspected_outlier(v),
            }
        })
        .collect()
}
