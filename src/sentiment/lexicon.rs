//! Fixed valence lexicon for financial prose.
//!
//! Word scores are in [-1, 1]. The vocabulary leans on earnings-report and
//! market-commentary language rather than general English; a word absent
//! from the lexicon contributes nothing.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    static ref VALENCE: HashMap<&'static str, f64> = {
        let entries: &[(&str, f64)] = &[
            // Strongly positive
            ("record", 0.7),
            ("surged", 0.8),
            ("surge", 0.8),
            ("soared", 0.85),
            ("outperformed", 0.8),
            ("outperform", 0.75),
            ("beat", 0.7),
            ("exceeded", 0.7),
            ("breakthrough", 0.75),
            ("excellent", 0.8),
            ("exceptional", 0.8),
            ("robust", 0.65),
            ("rally", 0.7),
            ("upgraded", 0.7),
            ("upgrade", 0.65),
            // Moderately positive
            ("growth", 0.5),
            ("grew", 0.5),
            ("grow", 0.5),
            ("gain", 0.5),
            ("gains", 0.5),
            ("improved", 0.55),
            ("improvement", 0.55),
            ("strong", 0.55),
            ("profit", 0.5),
            ("profits", 0.5),
            ("profitable", 0.55),
            ("positive", 0.5),
            ("rose", 0.45),
            ("up", 0.35),
            ("expanded", 0.45),
            ("expansion", 0.45),
            ("momentum", 0.4),
            ("healthy", 0.5),
            ("resilient", 0.5),
            ("confident", 0.5),
            ("optimistic", 0.55),
            ("opportunity", 0.4),
            ("stable", 0.3),
            ("raised", 0.45),
            ("dividend", 0.3),
            ("recovery", 0.45),
            ("recovered", 0.45),
            // Strongly negative
            ("collapse", -0.9),
            ("collapsed", -0.9),
            ("crash", -0.9),
            ("plunged", -0.85),
            ("plunge", -0.85),
            ("fraud", -0.95),
            ("bankruptcy", -0.95),
            ("bankrupt", -0.95),
            ("default", -0.8),
            ("crisis", -0.8),
            ("lawsuit", -0.6),
            ("investigation", -0.55),
            ("downgraded", -0.7),
            ("downgrade", -0.65),
            ("missed", -0.6),
            ("miss", -0.55),
            ("warning", -0.6),
            ("suspended", -0.65),
            // Moderately negative
            ("loss", -0.55),
            ("losses", -0.55),
            ("decline", -0.5),
            ("declined", -0.5),
            ("fell", -0.45),
            ("down", -0.35),
            ("weak", -0.5),
            ("weakness", -0.5),
            ("negative", -0.5),
            ("risk", -0.3),
            ("risks", -0.3),
            ("uncertainty", -0.4),
            ("uncertain", -0.4),
            ("volatile", -0.4),
            ("volatility", -0.35),
            ("pressure", -0.35),
            ("slowdown", -0.5),
            ("slowed", -0.4),
            ("shortfall", -0.55),
            ("impairment", -0.55),
            ("restructuring", -0.35),
            ("headwinds", -0.45),
            ("concern", -0.4),
            ("concerns", -0.4),
            ("disappointing", -0.6),
            ("disappointed", -0.6),
            ("cut", -0.4),
            ("cuts", -0.4),
        ];
        entries.iter().copied().collect()
    };

    /// Intensity modifiers applied to the next lexicon hit.
    static ref BOOSTERS: HashMap<&'static str, f64> = [
        ("very", 1.3),
        ("extremely", 1.5),
        ("significantly", 1.4),
        ("substantially", 1.4),
        ("sharply", 1.4),
        ("slightly", 0.6),
        ("somewhat", 0.7),
        ("marginally", 0.6),
        ("modestly", 0.7),
    ]
    .into_iter()
    .collect();

    static ref NEGATIONS: HashSet<&'static str> = [
        "not", "no", "never", "without", "neither", "nor",
        "hardly", "barely", "cannot", "failed",
    ]
    .into_iter()
    .collect();
}

pub fn valence(word: &str) -> Option<f64> {
    VALENCE.get(word).copied()
}

pub fn booster(word: &str) -> Option<f64> {
    BOOSTERS.get(word).copied()
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(word)
}
