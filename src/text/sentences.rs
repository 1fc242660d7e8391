//! Sentence boundary detection for financial prose.
//!
//! Rule-based: a sentence ends at `.`, `!` or `?` followed by whitespace,
//! unless the period belongs to a known abbreviation ("Inc.", "U.S.", "No."),
//! an initial ("J. P. Morgan") or a decimal number ("revenue grew 3.5%").

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Tokens that end with a period without ending a sentence. Compared
    /// lowercase, without the trailing period.
    static ref ABBREVIATIONS: HashSet<&'static str> = [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st",
        "inc", "corp", "co", "ltd", "llc", "plc", "dept",
        "vs", "etc", "approx", "est", "no", "fig", "ref",
        "e.g", "i.e", "cf", "al",
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
        "oct", "nov", "dec",
        "u.s", "u.k", "u.n", "e.u",
    ]
    .into_iter()
    .collect();
}

/// Lazy iterator over the sentences of a text. Restartable by constructing
/// a fresh iterator over the same input.
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Sentences<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = &self.text[self.pos..];
        if rest.trim().is_empty() {
            self.pos = self.text.len();
            return None;
        }

        let mut end = None;
        for (i, ch) in rest.char_indices() {
            if !matches!(ch, '.' | '!' | '?') {
                continue;
            }
            let after = &rest[i + ch.len_utf8()..];
            if breaks_sentence(rest, i, ch, after) {
                end = Some(i + ch.len_utf8());
                break;
            }
        }

        let (sentence, consumed) = match end {
            Some(e) => (&rest[..e], e),
            None => (rest, rest.len()),
        };
        self.pos += consumed;

        let trimmed = sentence.trim();
        if trimmed.is_empty() {
            // Stray terminator; move on to the next candidate.
            self.next()
        } else {
            Some(trimmed)
        }
    }
}

/// Decide whether the terminator at byte offset `i` closes a sentence.
fn breaks_sentence(s: &str, i: usize, terminator: char, after: &str) -> bool {
    // Terminator must be followed by whitespace (or end of text).
    match after.chars().next() {
        None => return true,
        Some(c) if !c.is_whitespace() => return false,
        _ => {}
    }

    if terminator != '.' {
        return true;
    }

    // Word immediately before the period, e.g. "Inc" in "Apple Inc. said".
    let before = &s[..i];
    let word = before
        .rsplit(|c: char| c.is_whitespace())
        .next()
        .unwrap_or("");
    let word = word.trim_start_matches(|c: char| c == '(' || c == '"' || c == '\'');

    if ABBREVIATIONS.contains(word.to_lowercase().as_str()) {
        return false;
    }

    // Single capital letter: an initial, as in "J. P. Morgan".
    if word.len() == 1 && word.chars().all(|c| c.is_ascii_uppercase()) {
        return false;
    }

    true
}

/// Split `text` into trimmed, non-empty sentences in document order.
pub fn split_sentences(text: &str) -> Vec<String> {
    Sentences::new(text).map(str::to_string).collect()
}
