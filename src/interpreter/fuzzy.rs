//! Fuzzy keyword matching.

use super::action::EditCommand;

/// Similarity of two strings on a 0-100 scale
///
/// Normalized Levenshtein distance: 100 means identical, 0 means nothing in
/// common. Both inputs are compared as given.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Best fuzzy keyword hit for an utterance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    pub command: EditCommand,
    pub score: f64,
}

/// Score `text` against every keyword and keep the best one above `threshold`
///
/// `text` must already be trimmed and lowercased. The comparison is strictly
/// greater-than, and a later keyword only replaces the current best when it
/// scores strictly higher, so ties resolve to the earlier keyword.
pub fn best_match(text: &str, threshold: f64) -> Option<FuzzyMatch> {
    let mut best: Option<FuzzyMatch> = None;

    for command in EditCommand::ALL {
        let score = similarity(text, command.keyword());
        if score <= threshold {
            continue;
        }
        if best.is_none_or(|b| score > b.score) {
            best = Some(FuzzyMatch { command, score });
        }
    }

    best
}
