//! Min-max normalization of aggregated word scores.

use crate::aggregate::WordScoreMap;
use crate::types::WordScore;

/// Score given to every word when all retained scores are equal.
pub const FLAT_SCORE: f64 = 0.5;

/// Rescale scores into `[0, 1]`.
///
/// Returns `[]` for no input and all-`0.5` when min equals max.
pub fn normalize_scores(scores: &[f64]) -> Vec<f64> {
    match bounds(scores.iter().copied()) {
        None => Vec::new(),
        Some((min, max)) => scores.iter().map(|&s| rescale(s, min, max)).collect(),
    }
}

/// Rescale every word's score against the min and max of the retained scores.
pub fn normalize_words(words: &WordScoreMap) -> Vec<WordScore> {
    let Some((min, max)) = bounds(words.scores()) else {
        return Vec::new();
    };
    words
        .iter()
        .map(|w| WordScore {
            word: w.word.clone(),
            score: rescale(w.score, min, max),
        })
        .collect()
}

fn bounds(scores: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    scores.fold(None, |acc, s| match acc {
        None => Some((s, s)),
        Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
    })
}

fn rescale(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        FLAT_SCORE
    } else {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    }
}
