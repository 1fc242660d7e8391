//! Fuses forecast delta, sentiment and the anomaly label into a
//! recommendation with a human-readable rationale.

use crate::core::types::{AnomalyLabel, Decision};

/// Pure decision rule. Always produces exactly two reasons, sentiment first,
/// then anomaly. Gates are evaluated in order; the first match wins:
/// BUY needs everything aligned, SELL triggers on any single red flag,
/// otherwise HOLD.
pub fn decide(
    forecast_change_pct: f64,
    sentiment_compound: f64,
    anomaly_label: AnomalyLabel,
) -> (Decision, Vec<String>) {
    let sentiment_reason = if sentiment_compound > 0.2 {
        "Positive sentiment"
    } else if sentiment_compound < -0.2 {
        "Negative sentiment"
    } else {
        "Neutral sentiment"
    };

    let anomaly_reason = match anomaly_label {
        AnomalyLabel::Severe => "Severe anomalies detected",
        AnomalyLabel::Mild => "Mild anomalies detected",
        AnomalyLabel::None => "No anomalies detected",
    };

    let decision = if forecast_change_pct > 2.0
        && sentiment_compound > 0.1
        && anomaly_label == AnomalyLabel::None
    {
        Decision::Buy
    } else if forecast_change_pct < -2.0
        || sentiment_compound < -0.1
        || anomaly_label == AnomalyLabel::Severe
    {
        Decision::Sell
    } else {
        Decision::Hold
    };

    (
        decision,
        vec![sentiment_reason.to_string(), anomaly_reason.to_string()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_when_everything_aligned() {
        let (decision, reasons) = decide(3.0, 0.5, AnomalyLabel::None);
        assert_eq!(decision, Decision::Buy);
        assert_eq!(reasons, vec!["Positive sentiment", "No anomalies detected"]);
    }

    #[test]
    fn test_sell_on_forecast_drop_alone() {
        let (decision, reasons) = decide(-5.0, 0.0, AnomalyLabel::None);
        assert_eq!(decision, Decision::Sell);
        assert_eq!(reasons, vec!["Neutral sentiment", "No anomalies detected"]);
    }

    #[test]
    fn test_sell_on_severe_anomaly_alone() {
        let (decision, reasons) = decide(4.0, 0.5, AnomalyLabel::Severe);
        assert_eq!(decision, Decision::Sell);
        assert_eq!(
            reasons,
            vec!["Positive sentiment", "Severe anomalies detected"]
        );
    }

    #[test]
    fn test_sell_on_negative_sentiment_alone() {
        let (decision, _) = decide(0.0, -0.15, AnomalyLabel::None);
        assert_eq!(decision, Decision::Sell);
    }

    #[test]
    fn test_mild_anomaly_blocks_buy_but_not_sell() {
        let (decision, reasons) = decide(3.0, 0.5, AnomalyLabel::Mild);
        assert_eq!(decision, Decision::Hold);
        assert_eq!(
            reasons,
            vec!["Positive sentiment", "Mild anomalies detected"]
        );
    }

    #[test]
    fn test_hold_on_boundaries() {
        // All three BUY conditions are strict inequalities.
        let (decision, _) = decide(2.0, 0.5, AnomalyLabel::None);
        assert_eq!(decision, Decision::Hold);
        let (decision, _) = decide(3.0, 0.1, AnomalyLabel::None);
        assert_eq!(decision, Decision::Hold);
        // SELL boundaries likewise.
        let (decision, _) = decide(-2.0, 0.0, AnomalyLabel::None);
        assert_eq!(decision, Decision::Hold);
        let (decision, _) = decide(0.0, -0.1, AnomalyLabel::None);
        assert_eq!(decision, Decision::Hold);
    }

    #[test]
    fn test_reasons_always_two_in_order() {
        for label in [AnomalyLabel::None, AnomalyLabel::Mild, AnomalyLabel::Severe] {
            let (_, reasons) = decide(0.0, 0.0, label);
            assert_eq!(reasons.len(), 2);
            assert!(reasons[0].contains("sentiment"));
            assert!(reasons[1].contains("anomalies"));
        }
    }
}
