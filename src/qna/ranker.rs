//! TF-IDF sentence ranking for extractive question answering.
//!
//! The vector space is fitted jointly over the sentence corpus plus the
//! question, so the question's vocabulary influences term weights. It is
//! rebuilt on every call: corpora here are single documents, and a fresh fit
//! keeps the scores correct whenever the document changes.

use std::collections::{HashMap, HashSet};

use crate::core::types::RankedAnswer;
use crate::text::tokenization::{TokenizationConfig, tokenize};

#[derive(Debug, Clone, Default)]
pub struct RankerConfig {
    pub tokenization: TokenizationConfig,
}

/// Score each sentence by cosine similarity to `question` and return the
/// `top_k` best as (score, sentence) pairs, descending by score. Ties keep
/// original sentence order. An empty corpus yields an empty ranking; a
/// `top_k` larger than the corpus returns every sentence.
pub fn rank(
    question: &str,
    sentences: &[String],
    top_k: usize,
    cfg: &RankerConfig,
) -> Vec<RankedAnswer> {
    if sentences.is_empty() || top_k == 0 {
        return Vec::new();
    }

    let sentence_tokens: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| tokenize(s, &cfg.tokenization))
        .collect();
    let question_tokens = tokenize(question, &cfg.tokenization);

    // Document frequencies over sentences + question, matching a joint fit.
    let n_docs = sentence_tokens.len() + 1;
    let mut df: HashMap<&str, usize> = HashMap::new();
    for doc in sentence_tokens.iter().chain(std::iter::once(&question_tokens)) {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    // Smooth idf: ln((1 + n) / (1 + df)) + 1. Never zero, so rare terms
    // still contribute.
    let idf: HashMap<&str, f64> = df
        .iter()
        .map(|(&term, &d)| {
            let w = ((1.0 + n_docs as f64) / (1.0 + d as f64)).ln() + 1.0;
            (term, w)
        })
        .collect();

    let question_vec = weighted_vector(&question_tokens, &idf);

    let mut scored: Vec<(f64, usize)> = sentence_tokens
        .iter()
        .enumerate()
        .map(|(i, tokens)| {
            let v = weighted_vector(tokens, &idf);
            (cosine(&question_vec, &v), i)
        })
        .collect();

    // Stable sort: equal scores keep original sentence order.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(top_k);

    scored
        .into_iter()
        .map(|(score, i)| RankedAnswer {
            score,
            sentence: sentences[i].clone(),
        })
        .collect()
}

/// L2-normalized tf-idf vector as a sparse term -> weight map.
fn weighted_vector<'a>(tokens: &'a [String], idf: &HashMap<&str, f64>) -> HashMap<&'a str, f64> {
    let mut tf: HashMap<&str, f64> = HashMap::new();
    for t in tokens {
        *tf.entry(t.as_str()).or_insert(0.0) += 1.0;
    }

    for (term, w) in tf.iter_mut() {
        *w *= idf.get(term).copied().unwrap_or(1.0);
    }

    let norm = tf.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in tf.values_mut() {
            *w /= norm;
        }
    }
    tf
}

/// Dot product of two L2-normalized sparse vectors, i.e. cosine similarity.
fn cosine(a: &HashMap<&str, f64>, b: &HashMap<&str, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .sum()
}
