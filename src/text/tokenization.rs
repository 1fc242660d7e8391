//! Normalization and tokenization shared by the ranker and the sentiment
//! scorer.
//!
//! Provides:
//!   - TokenizationConfig: enables/disables stopword removal and stemming
//!   - normalize_text: lowercase, URL strip, deunicode, whitespace collapse
//!   - tokenize: word/number tokens in document order

use deunicode::deunicode;
use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

/// Configuration for the tokenization pipeline. Defaults keep every token
/// untouched so that term weights reflect the text as written; stemming and
/// stopword removal are opt-in for callers that want looser matching.
#[derive(Debug, Clone, Default)]
pub struct TokenizationConfig {
    /// Apply Porter stemming (English) to every token.
    pub use_stemming: bool,
    /// Drop common function words.
    pub remove_stopwords: bool,
}

/// Lowercase, strip URLs, fold unicode to ASCII and collapse whitespace.
pub fn normalize_text(text: &str) -> String {
    lazy_static! {
        static ref URL_RE: Regex = Regex::new(r"https?://\S+").unwrap();
    }

    let lower = text.to_lowercase();
    let no_url = URL_RE.replace_all(&lower, "");
    let ascii = deunicode(&no_url);

    let collapsed = ascii.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim().to_string()
}

/// Extract tokens from normalized text, in order:
///   words:       revenue, guidance
///   numbers:     2026, 10
///   decimals:    1.25, 0.5
///   numbers+%:   3%, 2.5%
pub fn tokenize(text: &str, cfg: &TokenizationConfig) -> Vec<String> {
    lazy_static! {
        static ref TOKEN_RE: Regex = Regex::new(r"[a-zA-Z]+|\d+(?:\.\d+)?%?").unwrap();

        static ref STOPWORDS: HashSet<&'static str> = [
            "the", "a", "an", "of", "and", "or", "to", "in", "on", "for",
            "with", "by", "at", "from", "is", "are", "was", "were", "be",
            "been", "this", "that", "these", "those", "it", "its", "as",
            "will", "may", "might", "could", "should", "has", "have", "had",
        ]
        .into_iter()
        .collect();
    }

    let normalized = normalize_text(text);

    let mut tokens = Vec::new();
    for m in TOKEN_RE.find_iter(&normalized) {
        let token = m.as_str();
        if token.len() <= 1 {
            continue;
        }
        if cfg.remove_stopwords && STOPWORDS.contains(token) {
            continue;
        }
        tokens.push(token.to_string());
    }

    if cfg.use_stemming {
        let stemmer = Stemmer::create(Algorithm::English);
        tokens = tokens.iter().map(|t| stemmer.stem(t).to_string()).collect();
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_urls_and_unicode() {
        let text = "Résumé of Q3  results: https://example.com/q3\tstrong";
        let norm = normalize_text(text);
        assert_eq!(norm, "resume of q3 results: strong");
    }

    #[test]
    fn test_tokenize_words_and_numbers() {
        let cfg = TokenizationConfig::default();
        let tokens = tokenize("Revenue grew 12.5% to 4200 in FY2024", &cfg);
        assert_eq!(
            tokens,
            vec!["revenue", "grew", "12.5%", "to", "4200", "in", "fy", "2024"]
        );
    }

    #[test]
    fn test_stopword_removal() {
        let cfg = TokenizationConfig {
            remove_stopwords: true,
            ..Default::default()
        };
        let tokens = tokenize("The margin of the quarter", &cfg);
        assert_eq!(tokens, vec!["margin", "quarter"]);
    }

    #[test]
    fn test_stemming() {
        let cfg = TokenizationConfig {
            use_stemming: true,
            ..Default::default()
        };
        let tokens = tokenize("rates raised", &cfg);
        assert_eq!(tokens, vec!["rate", "rais"]);
    }

    #[test]
    fn test_single_chars_dropped() {
        let cfg = TokenizationConfig::default();
        assert!(tokenize("a I 7", &cfg).is_empty());
    }
}
