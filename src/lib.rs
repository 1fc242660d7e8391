//! findoc core: extractive Q&A over financial documents plus a
//! deterministic price pipeline (drift forecast, z-score anomalies,
//! rule-based BUY/HOLD/SELL fusion).
//!
//! Every component is a synchronous pure function except the remote price
//! fetch; nothing persists between calls.

pub mod anomaly;
pub mod config;
pub mod core;
pub mod forecast;
pub mod prices;
pub mod qna;
pub mod report;
pub mod sentiment;
pub mod strategy;
pub mod text;

pub use crate::core::error::{ForecastError, PriceError};
pub use crate::core::types::{
    AnomalyLabel, AnomalyStats, Decision, Forecast, Interval, Period, PricePoint, PriceSeries,
    RankedAnswer, SentimentPoint,
};
