use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::error::PriceError;

/// Minimum clean rows a price series needs before forecasting makes sense.
pub const MIN_SERIES_LEN: usize = 10;

// ----------- Price series -----------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Ordered (date, close) pairs: strictly increasing dates, deduplicated,
/// every close finite and positive. Built once by a normalizer, never
/// mutated; derived data like returns is computed on demand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Normalize raw rows: drop rows with a missing/unparsable field or a
    /// non-finite/non-positive close, dedup by date keeping the first
    /// occurrence, sort ascending. Fails if fewer than MIN_SERIES_LEN rows
    /// survive cleaning.
    pub fn from_rows(rows: Vec<(Option<NaiveDate>, Option<f64>)>) -> Result<Self, PriceError> {
        let mut points: Vec<PricePoint> = rows
            .into_iter()
            .filter_map(|(date, close)| match (date, close) {
                (Some(date), Some(close)) if close.is_finite() && close > 0.0 => {
                    Some(PricePoint { date, close })
                }
                _ => None,
            })
            .collect();

        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);

        if points.len() < MIN_SERIES_LEN {
            return Err(PriceError::InsufficientData {
                rows: points.len(),
                min: MIN_SERIES_LEN,
            });
        }

        Ok(Self { points })
    }

    /// Build a series without the minimum-length gate. The ≥10-row rule
    /// belongs to the normalizer/forecast path; anomaly detection accepts
    /// shorter windows and degrades to its no-signal default instead.
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.retain(|p| p.close.is_finite() && p.close > 0.0);
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Fractional day-over-day returns; one element shorter than the series.
    pub fn returns(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| (w[1].close - w[0].close) / w[0].close)
            .collect()
    }
}

// ----------- Forecast -----------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted: f64,
}

/// Projected prices for contiguous calendar days strictly after the source
/// series' last date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub points: Vec<ForecastPoint>,
}

impl Forecast {
    pub fn last(&self) -> Option<&ForecastPoint> {
        self.points.last()
    }
}

// ----------- Anomaly -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyLabel {
    None,
    Mild,
    Severe,
}

impl AnomalyLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyLabel::None => "None",
            AnomalyLabel::Mild => "Mild",
            AnomalyLabel::Severe => "Severe",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnomalyStats {
    /// Number of returns the statistic was computed over.
    pub n: usize,
    pub max_abs_z: f64,
}

// ----------- Decision -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Buy,
    Hold,
    Sell,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Buy => "BUY",
            Decision::Hold => "HOLD",
            Decision::Sell => "SELL",
        }
    }
}

// ----------- Q&A -----------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedAnswer {
    /// Cosine similarity to the question, in [0, 1].
    pub score: f64,
    pub sentence: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    /// Ordinal position of the sentence window within the document.
    pub index: usize,
    pub compound: f64,
}

// ----------- Remote fetch parameters -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
    FiveYears,
    TenYears,
    Max,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::FiveYears => "5y",
            Period::TenYears => "10y",
            Period::Max => "max",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "3mo" => Some(Period::ThreeMonths),
            "6mo" => Some(Period::SixMonths),
            "1y" => Some(Period::OneYear),
            "2y" => Some(Period::TwoYears),
            "5y" => Some(Period::FiveYears),
            "10y" => Some(Period::TenYears),
            "max" => Some(Period::Max),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Daily => "1d",
            Interval::Weekly => "1wk",
            Interval::Monthly => "1mo",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1d" => Some(Interval::Daily),
            "1wk" => Some(Interval::Weekly),
            "1mo" => Some(Interval::Monthly),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_from_rows_cleans_and_sorts() {
        let mut rows: Vec<(Option<NaiveDate>, Option<f64>)> = (1..=11)
            .map(|i| (Some(d(&format!("2024-01-{i:02}"))), Some(100.0 + i as f64)))
            .collect();
        // Out-of-order duplicate of day 5 plus broken rows; all must vanish.
        rows.push((Some(d("2024-01-05")), Some(999.0)));
        rows.push((None, Some(50.0)));
        rows.push((Some(d("2024-01-20")), None));
        rows.push((Some(d("2024-01-21")), Some(-3.0)));
        rows.push((Some(d("2024-01-22")), Some(f64::NAN)));

        let series = PriceSeries::from_rows(rows).unwrap();
        assert_eq!(series.len(), 11);
        assert_eq!(series.points()[4].close, 105.0); // first occurrence kept
        assert!(series.points().windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_from_rows_too_short() {
        let rows = vec![(Some(d("2024-01-01")), Some(100.0))];
        let err = PriceSeries::from_rows(rows).unwrap_err();
        assert!(matches!(err, PriceError::InsufficientData { rows: 1, .. }));
    }

    #[test]
    fn test_returns() {
        let rows: Vec<_> = (1..=10)
            .map(|i| {
                (
                    Some(d(&format!("2024-01-{i:02}"))),
                    Some(100.0 * 1.01f64.powi(i - 1)),
                )
            })
            .collect();
        let series = PriceSeries::from_rows(rows).unwrap();
        let rets = series.returns();
        assert_eq!(rets.len(), 9);
        for r in rets {
            assert!((r - 0.01).abs() < 1e-12);
        }
    }

    #[test]
    fn test_period_interval_roundtrip() {
        for p in ["3mo", "6mo", "1y", "2y", "5y", "10y", "max"] {
            assert_eq!(Period::parse(p).unwrap().as_str(), p);
        }
        assert!(Period::parse("7w").is_none());
        assert_eq!(Interval::parse("1d").unwrap().as_str(), "1d");
    }
}
