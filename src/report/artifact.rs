//! The exported analysis record — the only artifact the system persists.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::core::types::{AnomalyLabel, AnomalyStats, Decision, Forecast, Period, PriceSeries};
use crate::forecast::drift::ForecastModel;

#[derive(Debug, Clone, Serialize)]
pub struct AnomalyRecord {
    pub label: String,
    pub n: usize,
    pub max_abs_z: f64,
}

/// One analysis run, flattened for export. Consumed by whatever UI or
/// download button sits on top; the core defines no other on-disk format.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastArtifact {
    /// ISO-8601 UTC creation time.
    pub timestamp: String,
    /// Where the prices came from, e.g. "yahoo" or an uploaded file name.
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub horizon_days: u32,
    pub model: String,
    pub last_close: f64,
    pub forecast_last: f64,
    pub projected_change_pct: f64,
    pub anomaly: AnomalyRecord,
    pub sentiment_compound: f64,
    pub decision: String,
    pub reason: String,
}

impl ForecastArtifact {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: &str,
        ticker: Option<&str>,
        period: Option<Period>,
        horizon_days: u32,
        model: ForecastModel,
        series: &PriceSeries,
        forecast: &Forecast,
        projected_change_pct: f64,
        anomaly: (AnomalyLabel, &AnomalyStats),
        sentiment_compound: f64,
        decision: Decision,
        reasons: &[String],
    ) -> Self {
        let (label, stats) = anomaly;
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            source: source.to_string(),
            ticker: ticker.map(str::to_string),
            period: period.map(|p| p.as_str().to_string()),
            horizon_days,
            model: model.as_str().to_string(),
            last_close: series.last().map(|p| p.close).unwrap_or(0.0),
            forecast_last: forecast.last().map(|p| p.predicted).unwrap_or(0.0),
            projected_change_pct,
            anomaly: AnomalyRecord {
                label: label.as_str().to_string(),
                n: stats.n,
                max_abs_z: stats.max_abs_z,
            },
            sentiment_compound,
            decision: decision.as_str().to_string(),
            reason: reasons.join("; "),
        }
    }
}
