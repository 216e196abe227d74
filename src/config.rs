//! Highlighter configuration.
//!
//! Colours and tokenizer conventions are passed in explicitly rather than
//! read from globals. A TOML file may override any subset of the defaults:
//!
//! ```toml
//! min_color = "#FFFFFF"
//! max_color = "#FF6B6B"
//! special_tokens = ["[CLS]", "[SEP]", "[PAD]", "[UNK]"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::Rgb;
use crate::error::Result;

/// Sentinels emitted by WordPiece tokenizers that never carry content.
pub const DEFAULT_SPECIAL_TOKENS: &[&str] = &["[CLS]", "[SEP]", "[PAD]", "[UNK]"];

pub const DEFAULT_MIN_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const DEFAULT_MAX_COLOR: Rgb = Rgb::new(0xFF, 0x00, 0x00);
pub const DEFAULT_PLAIN_COLOR: Rgb = Rgb::new(0x00, 0x00, 0x00);
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 0.5;

/// Prefix WordPiece puts on non-initial pieces of a word.
pub const DEFAULT_CONTINUATION_MARKER: &str = "##";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Colour for the least influential word.
    pub min_color: String,
    /// Colour for the most influential word.
    pub max_color: String,
    /// Colour attached to plain (unscored) runs.
    pub plain_color: String,
    pub special_tokens: Vec<String>,
    pub continuation_marker: String,
    /// Highlighted runs scoring above this want light foreground text.
    pub contrast_threshold: f64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            min_color: DEFAULT_MIN_COLOR.to_string(),
            max_color: DEFAULT_MAX_COLOR.to_string(),
            plain_color: DEFAULT_PLAIN_COLOR.to_string(),
            special_tokens: DEFAULT_SPECIAL_TOKENS.iter().map(|s| s.to_string()).collect(),
            continuation_marker: DEFAULT_CONTINUATION_MARKER.to_string(),
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
        }
    }
}

impl HighlightConfig {
    /// Config with the given endpoint colours and every other field defaulted.
    pub fn with_colors(min_color: impl Into<String>, max_color: impl Into<String>) -> Self {
        Self {
            min_color: min_color.into(),
            max_color: max_color.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
