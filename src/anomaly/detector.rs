//! Z-score anomaly detection on daily returns.
//!
//! A whole-series, single-pass statistic recomputed per call. Too little
//! data is a defined "no signal" outcome, not an error — the asymmetry with
//! the forecaster (which fails loudly on short series) is intentional.

use crate::core::types::{AnomalyLabel, AnomalyStats, PriceSeries};

/// Returns needed before a z-score is meaningful.
const MIN_RETURNS: usize = 5;

/// Guards division when the return series has no variance.
const STD_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy)]
pub struct AnomalyThresholds {
    pub mild: f64,
    pub severe: f64,
}

impl Default for AnomalyThresholds {
    fn default() -> Self {
        Self {
            mild: 2.0,
            severe: 3.0,
        }
    }
}

/// Label the series by the maximum absolute z-score of its daily returns.
pub fn detect(series: &PriceSeries, thresholds: AnomalyThresholds) -> (AnomalyLabel, AnomalyStats) {
    let returns = series.returns();
    let n = returns.len();

    if n < MIN_RETURNS {
        return (
            AnomalyLabel::None,
            AnomalyStats {
                n,
                max_abs_z: 0.0,
            },
        );
    }

    let mean = returns.iter().sum::<f64>() / n as f64;
    // Sample (Bessel-corrected) standard deviation.
    let var = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std = var.sqrt() + STD_EPSILON;

    let max_abs_z = returns
        .iter()
        .map(|r| ((r - mean) / std).abs())
        .fold(0.0_f64, f64::max);

    let label = if max_abs_z >= thresholds.severe {
        AnomalyLabel::Severe
    } else if max_abs_z >= thresholds.mild {
        AnomalyLabel::Mild
    } else {
        AnomalyLabel::None
    };

    (label, AnomalyStats { n, max_abs_z })
}
