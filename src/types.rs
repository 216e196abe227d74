use serde::{Deserialize, Deserializer, Serialize};

/// One `(token, score)` pair emitted by the gradient explainer.
///
/// Deserializes from either `["tok", 0.4]` or `{"token": "tok", "score": 0.4}`,
/// the two shapes the dashboard backend has produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationPair {
    pub token: String,
    pub score: f64,
}

impl ExplanationPair {
    pub fn new(token: impl Into<String>, score: f64) -> Self {
        Self {
            token: token.into(),
            score,
        }
    }
}

impl<S: Into<String>> From<(S, f64)> for ExplanationPair {
    fn from((token, score): (S, f64)) -> Self {
        Self::new(token, score)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPair {
    Tuple(String, f64),
    Record { token: String, score: f64 },
}

impl<'de> Deserialize<'de> for ExplanationPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawPair::deserialize(deserializer)? {
            RawPair::Tuple(token, score) | RawPair::Record { token, score } => {
                Self { token, score }
            }
        })
    }
}

/// A whole word (lower-cased, trimmed) and its aggregated score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordScore {
    pub word: String,
    pub score: f64,
}

/// Where a scored word occurs in the original text.
///
/// `start..end` is a half-open UTF-8 byte range on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    pub word: String,
    pub start: usize,
    pub end: usize,
}

/// A contiguous run of the original text with one colour and score.
///
/// Plain runs carry score 0 and the configured plain colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub text: String,
    pub color: String,
    pub score: f64,
}

impl Segment {
    pub fn is_highlighted(&self) -> bool {
        self.score > 0.0
    }

    /// Foreground colour that stays readable on this segment's background.
    pub fn text_color(&self, contrast_threshold: f64) -> &'static str {
        if self.score > contrast_threshold {
            "#ffffff"
        } else {
            "#000000"
        }
    }
}
