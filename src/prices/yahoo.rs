//! Yahoo chart API client.
//!
//! Fetches `/v8/finance/chart/{symbol}?range=&interval=` and normalizes
//! whichever close variant the response carries (adjusted preferred, raw
//! otherwise) through the same cleaning policy as tabular input.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::config::config::YahooCfg;
use crate::core::error::PriceError;
use crate::core::types::{Interval, Period, PriceSeries};
use crate::prices::client::PriceClient;

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
    #[serde(default)]
    adjclose: Vec<AdjClose>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

pub struct YahooClient {
    client: Client,
    cfg: YahooCfg,
}

impl YahooClient {
    pub fn new(cfg: YahooCfg, client: Client) -> Self {
        Self { client, cfg }
    }

    fn chart_url(&self, symbol: &str, period: Period, interval: Interval) -> String {
        format!(
            "{}/v8/finance/chart/{}?range={}&interval={}",
            self.cfg.base_url,
            symbol,
            period.as_str(),
            interval.as_str()
        )
    }
}

#[async_trait]
impl PriceClient for YahooClient {
    async fn fetch_history(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<PriceSeries, PriceError> {
        let url = self.chart_url(symbol, period, interval);
        info!(%symbol, period = period.as_str(), "fetching price history");

        let resp: ChartResponse = self.client.get(&url).send().await?.json().await?;

        if let Some(err) = resp.chart.error {
            info!(code = %err.code, desc = %err.description, "chart API error");
            return Err(PriceError::NoData {
                symbol: symbol.to_string(),
            });
        }

        let result = resp
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| PriceError::NoData {
                symbol: symbol.to_string(),
            })?;

        if result.timestamp.is_empty() {
            return Err(PriceError::NoData {
                symbol: symbol.to_string(),
            });
        }

        // Adjusted close when the source exposes it, raw close otherwise.
        let closes: &[Option<f64>] = result
            .indicators
            .adjclose
            .first()
            .map(|a| a.adjclose.as_slice())
            .filter(|c| !c.is_empty())
            .or_else(|| result.indicators.quote.first().map(|q| q.close.as_slice()))
            .ok_or_else(|| PriceError::NoData {
                symbol: symbol.to_string(),
            })?;

        let rows = result
            .timestamp
            .iter()
            .zip(closes.iter())
            .map(|(&ts, &close)| {
                let date = DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive());
                (date, close)
            })
            .collect();

        PriceSeries::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ChartResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_chart_url() {
        let client = YahooClient::new(YahooCfg::default(), Client::new());
        assert_eq!(
            client.chart_url("AAPL", Period::OneYear, Interval::Daily),
            "https://query1.finance.yahoo.com/v8/finance/chart/AAPL?range=1y&interval=1d"
        );
    }

    #[test]
    fn test_response_shape_with_adjclose() {
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704067200, 1704153600],
                    "indicators": {
                        "quote": [{"close": [100.0, 101.0]}],
                        "adjclose": [{"adjclose": [99.0, 100.5]}]
                    }
                }],
                "error": null
            }
        }"#;
        let resp = parse(body);
        let result = &resp.chart.result.unwrap()[0];
        assert_eq!(result.timestamp.len(), 2);
        assert_eq!(result.indicators.adjclose[0].adjclose[1], Some(100.5));
    }

    #[test]
    fn test_response_shape_error_branch() {
        let body = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found"}
            }
        }"#;
        let resp = parse(body);
        assert!(resp.chart.result.is_none());
        assert_eq!(resp.chart.error.unwrap().code, "Not Found");
    }
}
