use thiserror::Error;

/// Failures raised while normalizing tabular or remote price data.
#[derive(Debug, Error)]
pub enum PriceError {
    #[error(
        "input must contain a date column (e.g. Date) and a close/price column (e.g. Close)"
    )]
    Schema,

    #[error("only {rows} clean rows after parsing; need at least {min}")]
    InsufficientData { rows: usize, min: usize },

    #[error("no price data returned for {symbol}")]
    NoData { symbol: String },

    #[error("price fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Failures raised by the forecasting step. Deliberately stricter than the
/// anomaly detector, which treats short series as a defined no-signal result.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("return series is empty; need at least 2 prices")]
    EmptyReturns,

    #[error("horizon must be at least 1 day")]
    InvalidHorizon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        let e = PriceError::InsufficientData { rows: 4, min: 10 };
        assert_eq!(e.to_string(), "only 4 clean rows after parsing; need at least 10");

        let e = PriceError::NoData { symbol: "AAPL".into() };
        assert!(e.to_string().contains("AAPL"));

        assert!(ForecastError::InvalidHorizon.to_string().contains("horizon"));
    }
}
