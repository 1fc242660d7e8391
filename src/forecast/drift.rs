//! Price projection from historical daily returns.
//!
//! Two interchangeable strategies share one output shape: a drift model that
//! compounds the mean historical return forward, and a persistence model
//! that repeats the last observed price. Both are pure functions of
//! (series, horizon); running one twice gives bit-identical output.

use chrono::Duration;

use crate::core::error::ForecastError;
use crate::core::types::{Forecast, ForecastPoint, PriceSeries};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForecastModel {
    /// last * (1 + mean_return)^t
    Drift,
    /// last, repeated.
    Persistence,
}

impl ForecastModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastModel::Drift => "drift",
            ForecastModel::Persistence => "persistence",
        }
    }
}

/// Project `horizon_days` consecutive calendar days starting the day after
/// the series' last date.
pub fn forecast(
    series: &PriceSeries,
    horizon_days: u32,
    model: ForecastModel,
) -> Result<Forecast, ForecastError> {
    if horizon_days == 0 {
        return Err(ForecastError::InvalidHorizon);
    }

    let returns = series.returns();
    if returns.is_empty() {
        return Err(ForecastError::EmptyReturns);
    }

    let last = series.last().expect("non-empty after returns check");
    let mean_return = returns.iter().sum::<f64>() / returns.len() as f64;

    let points = (1..=i64::from(horizon_days))
        .map(|t| {
            let predicted = match model {
                ForecastModel::Drift => last.close * (1.0 + mean_return).powi(t as i32),
                ForecastModel::Persistence => last.close,
            };
            ForecastPoint {
                date: last.date + Duration::days(t),
                predicted,
            }
        })
        .collect();

    Ok(Forecast { points })
}

/// Projected percent change from the last actual close to the last
/// forecast price.
pub fn growth_percent(series: &PriceSeries, forecast: &Forecast) -> f64 {
    let last_actual = match series.last() {
        Some(p) => p.close,
        None => return 0.0,
    };
    let last_pred = match forecast.last() {
        Some(p) => p.predicted,
        None => return 0.0,
    };
    (last_pred - last_actual) / last_actual * 100.0
}
