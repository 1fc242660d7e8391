//! Tabular price input with loosely specified column names.
//!
//! Recognizes a date and a close/price column from fixed priority lists,
//! coerces unparsable cells to missing and hands the rows to
//! `PriceSeries::from_rows` for the shared drop/dedup/sort/min-length policy.

use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::io::Read;
use tracing::debug;

use crate::core::error::PriceError;
use crate::core::types::PriceSeries;

/// Candidate column names, in priority order.
const DATE_COLUMNS: [&str; 5] = ["Date", "date", "timestamp", "Datetime", "datetime"];
const CLOSE_COLUMNS: [&str; 6] = ["Close", "Adj Close", "close", "adj_close", "Price", "price"];

/// Parse a CSV of historical prices into a clean series.
pub fn clean_price_csv<R: Read>(input: R) -> Result<PriceSeries, PriceError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);

    let headers = reader.headers().map_err(|_| PriceError::Schema)?.clone();
    let date_idx = find_column(&headers, &DATE_COLUMNS);
    let close_idx = find_column(&headers, &CLOSE_COLUMNS);

    let (date_idx, close_idx) = match (date_idx, close_idx) {
        (Some(d), Some(c)) => (d, c),
        _ => return Err(PriceError::Schema),
    };

    debug!(
        date_col = headers.get(date_idx).unwrap_or(""),
        close_col = headers.get(close_idx).unwrap_or(""),
        "recognized price columns"
    );

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(_) => continue, // malformed line, treat as missing
        };
        let date = record.get(date_idx).and_then(parse_date);
        let close = record
            .get(close_idx)
            .and_then(|v| v.trim().parse::<f64>().ok());
        rows.push((date, close));
    }

    PriceSeries::from_rows(rows)
}

fn find_column(headers: &csv::StringRecord, candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|name| headers.iter().position(|h| h.trim() == *name))
}

/// Try the date formats seen in exported price data; anything else is
/// treated as missing.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    // ISO datetimes: keep the date part.
    let head = raw.get(..10).unwrap_or(raw);

    NaiveDate::parse_from_str(head, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d-%m-%Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_of(header: &str, rows: &[String]) -> String {
        let mut out = String::from(header);
        out.push('\n');
        for r in rows {
            out.push_str(r);
            out.push('\n');
        }
        out
    }

    fn twelve_rows(date_fmt: impl Fn(u32) -> String) -> Vec<String> {
        (1..=12)
            .map(|i| format!("{},{}", date_fmt(i), 100.0 + i as f64))
            .collect()
    }

    #[test]
    fn test_timestamp_price_headers_accepted() {
        let data = csv_of(
            "timestamp,price",
            &twelve_rows(|i| format!("2024-03-{i:02}")),
        );
        let series = clean_price_csv(data.as_bytes()).unwrap();
        assert_eq!(series.len(), 12);
        assert_eq!(series.last().unwrap().close, 112.0);
    }

    #[test]
    fn test_unknown_headers_rejected() {
        let data = csv_of("foo,bar", &twelve_rows(|i| format!("2024-03-{i:02}")));
        let err = clean_price_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PriceError::Schema));
    }

    #[test]
    fn test_column_priority_prefers_close_over_price() {
        let rows: Vec<String> = (1..=12)
            .map(|i| format!("2024-03-{i:02},{},{}", 50.0 + i as f64, 100.0 + i as f64))
            .collect();
        let data = csv_of("Date,Close,Price", &rows);
        let series = clean_price_csv(data.as_bytes()).unwrap();
        assert_eq!(series.last().unwrap().close, 62.0);
    }

    #[test]
    fn test_bad_cells_coerced_to_missing() {
        let mut rows = twelve_rows(|i| format!("2024-03-{i:02}"));
        rows.push("not-a-date,99.0".to_string());
        rows.push("2024-04-01,n/a".to_string());
        let data = csv_of("Date,Close", &rows);
        let series = clean_price_csv(data.as_bytes()).unwrap();
        assert_eq!(series.len(), 12);
    }

    #[test]
    fn test_too_few_clean_rows() {
        let rows: Vec<String> = (1..=4)
            .map(|i| format!("2024-03-{i:02},{}", 100.0 + i as f64))
            .collect();
        let data = csv_of("Date,Close", &rows);
        let err = clean_price_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PriceError::InsufficientData { rows: 4, .. }));
    }

    #[test]
    fn test_datetime_cells_and_us_dates() {
        assert_eq!(
            parse_date("2024-03-05T16:00:00"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(
            parse_date("3/5/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(parse_date("yesterday"), None);
    }
}
