//! The highlighting engine.
//!
//! Ties the stages together: aggregate sub-word scores into words,
//! normalize them, locate each word in the original text, and partition
//! the text into coloured segments. Stateless across calls; one
//! `Highlighter` can be shared between threads.

use std::collections::HashSet;

use tracing::debug;

use crate::aggregate::{aggregate_scores, SpecialTokens};
use crate::color::{ColorScale, Rgb};
use crate::config::{
    HighlightConfig, DEFAULT_CONTINUATION_MARKER, DEFAULT_CONTRAST_THRESHOLD, DEFAULT_MAX_COLOR,
    DEFAULT_MIN_COLOR, DEFAULT_PLAIN_COLOR, DEFAULT_SPECIAL_TOKENS,
};
use crate::error::{HighlightError, Result};
use crate::locate::locate_words;
use crate::normalize::normalize_words;
use crate::segment::{build_segments, plain_segment};
use crate::types::{ExplanationPair, Segment, WordScore};

#[derive(Debug, Clone, PartialEq)]
pub struct Highlighter {
    scale: ColorScale,
    plain: Rgb,
    special_tokens: SpecialTokens,
    continuation_marker: String,
    contrast_threshold: f64,
}

impl Highlighter {
    /// Validate `config` and build an engine from it.
    pub fn new(config: HighlightConfig) -> Result<Self> {
        let low: Rgb = config.min_color.parse()?;
        let high: Rgb = config.max_color.parse()?;
        let plain: Rgb = config.plain_color.parse()?;
        Ok(Self {
            scale: ColorScale::new(low, high),
            plain,
            special_tokens: config.special_tokens.iter().collect(),
            continuation_marker: config.continuation_marker,
            contrast_threshold: config.contrast_threshold,
        })
    }

    /// Engine with the given endpoint colours and default everything else.
    pub fn with_colors(min_color: &str, max_color: &str) -> Result<Self> {
        Self::new(HighlightConfig::with_colors(min_color, max_color))
    }

    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.special_tokens
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    /// Partition `text` into segments coloured by word importance.
    ///
    /// Empty text gives no segments. An explanation with nothing scorable
    /// (empty, or only special tokens) gives one plain segment spanning
    /// the text. Any non-finite score rejects the whole call.
    pub fn highlight(&self, text: &str, explanation: &[ExplanationPair]) -> Result<Vec<Segment>> {
        self.run(text, explanation, &self.special_tokens)
    }

    /// As [`Highlighter::highlight`] with a per-call special token set.
    pub fn highlight_with_special_tokens(
        &self,
        text: &str,
        explanation: &[ExplanationPair],
        special_tokens: &HashSet<String>,
    ) -> Result<Vec<Segment>> {
        let special: SpecialTokens = special_tokens.iter().collect();
        self.run(text, explanation, &special)
    }

    fn run(
        &self,
        text: &str,
        explanation: &[ExplanationPair],
        special_tokens: &SpecialTokens,
    ) -> Result<Vec<Segment>> {
        validate(explanation)?;
        if text.is_empty() {
            debug!("empty text, nothing to highlight");
            return Ok(Vec::new());
        }

        let scores = self.word_scores(explanation, special_tokens);
        if scores.is_empty() {
            debug!(pairs = explanation.len(), "no scorable tokens, returning plain text");
            return Ok(vec![plain_segment(text, self.plain)]);
        }

        let spans = locate_words(text, scores.iter().map(|w| w.word.as_str()));
        let segments = build_segments(text, &spans, &scores, &self.scale, self.plain);
        debug!(
            words = scores.len(),
            spans = spans.len(),
            segments = segments.len(),
            "built highlight segments"
        );
        Ok(segments)
    }

    /// Parse a JSON explanation (pairs as `[token, score]` arrays or
    /// `{"token", "score"}` objects) and highlight `text` with it.
    pub fn highlight_json(&self, text: &str, explanation_json: &str) -> Result<Vec<Segment>> {
        let explanation: Vec<ExplanationPair> = serde_json::from_str(explanation_json)?;
        self.highlight(text, &explanation)
    }

    /// Normalized word scores, most influential first; ties by word.
    pub fn ranked_words(&self, explanation: &[ExplanationPair]) -> Result<Vec<WordScore>> {
        validate(explanation)?;
        let mut scores = self.word_scores(explanation, &self.special_tokens);
        scores.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
        Ok(scores)
    }

    /// Readable foreground colour for a segment rendered with its colour as
    /// background.
    pub fn foreground_for(&self, segment: &Segment) -> &'static str {
        segment.text_color(self.contrast_threshold)
    }

    fn word_scores(
        &self,
        explanation: &[ExplanationPair],
        special_tokens: &SpecialTokens,
    ) -> Vec<WordScore> {
        let words = aggregate_scores(explanation, special_tokens, &self.continuation_marker);
        normalize_words(&words)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self {
            scale: ColorScale::new(DEFAULT_MIN_COLOR, DEFAULT_MAX_COLOR),
            plain: DEFAULT_PLAIN_COLOR,
            special_tokens: DEFAULT_SPECIAL_TOKENS.iter().collect(),
            continuation_marker: DEFAULT_CONTINUATION_MARKER.to_string(),
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
        }
    }
}

fn validate(explanation: &[ExplanationPair]) -> Result<()> {
    match explanation.iter().position(|p| !p.score.is_finite()) {
        Some(index) => Err(HighlightError::NonFiniteScore {
            index,
            token: explanation[index].token.clone(),
        }),
        None => Ok(()),
    }
}
