//! Error types for the highlighting engine.

/// Errors raised while configuring the engine or validating its input.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("Invalid colour '{value}': expected #RRGGBB")]
    InvalidColor { value: String },

    #[error("Explanation pair {index} ('{token}') has a non-finite score")]
    NonFiniteScore { index: usize, token: String },

    #[error("Malformed explanation: {0}")]
    MalformedExplanation(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HighlightError>;
