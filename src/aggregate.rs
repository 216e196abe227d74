//! Score aggregation — merge sub-word pieces into scored whole words.
//!
//! WordPiece splits "flood" into `flo` + `##od`. The piece that starts a
//! word supplies the word's score; continuation pieces only extend the
//! surface string that is later searched for in the original text.

use std::collections::HashSet;

use crate::types::{ExplanationPair, WordScore};

/// Tokenizer sentinels, compared case-insensitively.
///
/// A sentinel written as `[Cls]` is still `[CLS]`, and word keys are
/// lower-cased, so the set stores folded literals only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecialTokens {
    folded: HashSet<String>,
}

impl SpecialTokens {
    pub fn contains(&self, token: &str) -> bool {
        self.folded.contains(&token.trim().to_lowercase())
    }
}

impl<S: AsRef<str>> FromIterator<S> for SpecialTokens {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            folded: iter
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .collect(),
        }
    }
}

/// Words in first-seen order, each key unique.
///
/// `scores()` yields exactly the scores that were retained, in the order
/// they were kept, which is what normalization runs over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordScoreMap {
    words: Vec<WordScore>,
    seen: HashSet<String>,
}

impl WordScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` unless it is empty, special, or already present.
    /// Returns whether the word was kept.
    pub fn insert(&mut self, word: &str, score: f64, special: &SpecialTokens) -> bool {
        let key = word.trim().to_lowercase();
        if key.is_empty() || special.contains(&key) || self.seen.contains(&key) {
            return false;
        }
        self.seen.insert(key.clone());
        self.words.push(WordScore { word: key, score });
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordScore> {
        self.words.iter()
    }

    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.words.iter().map(|w| w.score)
    }
}

/// Fold the explainer's token stream into whole-word scores.
///
/// Special tokens are skipped outright. A piece starting with `marker` is
/// appended (minus the marker) to the word in progress; any other piece
/// closes the pending word and opens a new one. A continuation that has no
/// word to attach to takes the score of the most recent pair when closed.
pub fn aggregate_scores(
    explanation: &[ExplanationPair],
    special: &SpecialTokens,
    marker: &str,
) -> WordScoreMap {
    let mut words = WordScoreMap::new();
    let mut current = String::new();
    let mut pending: Option<f64> = None;
    let mut last_score = 0.0;

    for pair in explanation {
        last_score = pair.score;
        if special.contains(&pair.token) {
            continue;
        }

        match pair.token.strip_prefix(marker).filter(|_| !marker.is_empty()) {
            Some(rest) => current.push_str(rest),
            None => {
                if !current.is_empty() {
                    words.insert(&current, pending.unwrap_or(last_score), special);
                }
                current = pair.token.trim().to_string();
                pending = Some(pair.score);
            }
        }
    }

    if !current.is_empty() {
        words.insert(&current, pending.unwrap_or(last_score), special);
    }
    words
}
