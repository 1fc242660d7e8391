//! Lexicon-and-rule polarity scoring.
//!
//! Deterministic and stateless per text: a compound score in [-1, 1] for a
//! whole span, and a rolling variant over fixed-size non-overlapping windows
//! of sentences for smoothing across a document.

use crate::core::types::SentimentPoint;
use crate::sentiment::lexicon;
use crate::text::sentences::split_sentences;
use crate::text::tokenization::{TokenizationConfig, tokenize};

/// Tokens after a negation that still get their valence flipped.
const NEGATION_WINDOW: usize = 3;

/// Damping applied when a valence is flipped by negation.
const NEGATION_DAMPING: f64 = 0.8;

/// Normalization constant for the compound score, chosen so that a handful
/// of strong hits approaches +/-1 without saturating on a single word.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Compound polarity of `text` in [-1, 1]. Empty text, or text with no
/// lexicon hits, scores exactly 0.0.
pub fn compound(text: &str) -> f64 {
    let cfg = TokenizationConfig::default();
    let tokens = tokenize(text, &cfg);

    let mut total = 0.0;
    let mut modifier = 1.0;
    let mut negated_for = 0usize;

    for token in &tokens {
        if lexicon::is_negation(token) {
            negated_for = NEGATION_WINDOW;
            continue;
        }

        if let Some(boost) = lexicon::booster(token) {
            modifier = boost;
            continue;
        }

        if let Some(valence) = lexicon::valence(token) {
            let mut score = valence * modifier;
            if negated_for > 0 {
                score = -score * NEGATION_DAMPING;
            }
            total += score;
            modifier = 1.0;
        }

        negated_for = negated_for.saturating_sub(1);
    }

    let compound = total / (total * total + NORMALIZATION_ALPHA).sqrt();
    compound.clamp(-1.0, 1.0)
}

/// Score consecutive chunks of `window_sentences` sentences (the last chunk
/// may be shorter). One point per non-empty chunk, index = chunk ordinal.
/// Too few sentences for a single chunk means an empty result; the caller
/// must surface that as "insufficient data" rather than a one-point chart.
pub fn rolling(text: &str, window_sentences: usize) -> Vec<SentimentPoint> {
    if window_sentences == 0 {
        return Vec::new();
    }

    let sentences = split_sentences(text);
    sentences
        .chunks(window_sentences)
        .enumerate()
        .filter_map(|(index, chunk)| {
            let joined = chunk.join(" ");
            if joined.trim().is_empty() {
                return None;
            }
            Some(SentimentPoint {
                index,
                compound: compound(&joined),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_and_negative_texts() {
        let pos = compound("Revenue surged and margins improved; a record quarter.");
        let neg = compound("The company warned of losses as sales collapsed.");
        assert!(pos > 0.2, "expected clearly positive, got {pos}");
        assert!(neg < -0.2, "expected clearly negative, got {neg}");
    }

    #[test]
    fn test_empty_and_neutral() {
        assert_eq!(compound(""), 0.0);
        assert_eq!(compound("The meeting is scheduled for Tuesday."), 0.0);
    }

    #[test]
    fn test_negation_flips() {
        let plain = compound("the business will grow");
        let negated = compound("the business did not grow this quarter");
        assert!(plain > 0.0);
        assert!(negated <= 0.0, "negation should flip polarity, got {negated}");
    }

    #[test]
    fn test_booster_scales() {
        let plain = compound("revenue declined");
        let boosted = compound("revenue sharply declined");
        assert!(boosted < plain, "boosted {boosted} should be more negative than {plain}");
    }

    #[test]
    fn test_deterministic() {
        let text = "Strong growth, but litigation risk remains.";
        assert_eq!(compound(text), compound(text));
    }

    #[test]
    fn test_bounds() {
        let extreme = "surged soared record breakthrough exceptional excellent rally ".repeat(20);
        let c = compound(&extreme);
        assert!(c > 0.9 && c <= 1.0);
    }

    #[test]
    fn test_rolling_windows() {
        let text = "Profits surged. Margins improved. Guidance was strong. \
                    Litigation risk grew. The outlook is uncertain.";
        let points = rolling(text, 3);
        // 5 sentences -> one chunk of 3, one of 2.
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].index, 0);
        assert_eq!(points[1].index, 1);
        assert!(points[0].compound > 0.0);
        assert!(points[1].compound < 0.0);
    }

    #[test]
    fn test_rolling_empty_input() {
        assert!(rolling("", 3).is_empty());
        assert!(rolling("   ", 3).is_empty());
    }
}
