//! Per-bin box statistics
//!
//! Reduces one bin's samples to the quantities a box needs: quartiles by
//! fractional-rank interpolation, 1.5×IQR fences clipped to the data,
//! 3×IQR outlier thresholds left unclipped (they only discriminate
//! suspected from far outliers, they are never drawn against the data),
//! and mean/population standard deviation.
//!
//! Outlier definition after <http://www.physics.csbsju.edu/stats/box2.html>.

use boxplot_core::error::{Error, Result};
use boxplot_core::math::{find_bin, interp, mean, population_std_dev};

/// Summary statistics for one non-empty position bin
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    /// Position value identifying the bin
    pub pos: f64,
    /// The bin's samples, sorted ascending
    pub samples: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation
    pub sd: f64,
    pub q1: f64,
    pub med: f64,
    pub q3: f64,
    /// Lower fence: most extreme sample within 1.5×IQR below q1,
    /// never above q1
    pub lf: f64,
    /// Upper fence: most extreme sample within 1.5×IQR above q3,
    /// never below q3
    pub uf: f64,
    /// Lower 3×IQR outlier threshold (not clipped to the data)
    pub lo: f64,
    /// Upper 3×IQR outlier threshold (not clipped to the data)
    pub uo: f64,
}

impl BoxStats {
    /// Number of samples in the bin
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Whether `v` lies beyond the fences
    pub fn is_outlier(&self, v: f64) -> bool {
        v < self.lf || v > self.uf
    }

    /// Whether `v` is beyond a fence but inside the 3×IQR threshold
    pub fn is_suspected_outlier(&self, v: f64) -> bool {
        self.is_outlier(v) && v > self.lo && v < self.uo
    }
}

/// Reduce one bin's samples into [`BoxStats`].
///
/// Sorts the values; callers hand over ownership of the bin.
pub fn compute_stats(pos: f64, mut values: Vec<f64>) -> Result<BoxStats> {
    if values.is_empty() {
        return Err(Error::empty_input());
    }
    values.sort_by(f64::total_cmp);

    let v = &values;
    let n = v.len();
    let nf = n as f64;

    let mean = mean(v);
    let sd = population_std_dev(v, mean);
    let q1 = interp(v, nf / 4.0);
    let med = interp(v, nf / 2.0);
    let q3 = interp(v, 0.75 * nf);

    // fences: last data point inside 1.5 interquartile ranges from the
    // quartiles, never looser than the quartile itself
    let last = (n - 1) as isize;
    let lf_idx = (find_bin(2.5 * q1 - 1.5 * q3, v, true) + 1).clamp(0, last) as usize;
    let uf_idx = find_bin(2.5 * q3 - 1.5 * q1, v, false).clamp(0, last) as usize;
    let lf = q1.min(v[lf_idx]);
    let uf = q3.max(v[uf_idx]);

    // 3 IQR out; only discriminates suspected from far outliers
    let lo = 4.0 * q1 - 3.0 * q3;
    let uo = 4.0 * q3 - 3.0 * q1;

    Ok(BoxStats {
        pos,
        min: v[0],
        max: v[n - 1],
        mean,
        sd,
        q1,
        med,
        q3,
        lf,
        uf,
        lo,
        uo,
        samples: values,
    })
}
