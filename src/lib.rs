//! Explanation alignment and token highlighting for disaster tweet
//! classification.
//!
//! Takes the `(sub-word token, importance)` pairs produced by the
//! gradient explainer and maps them back onto the original tweet:
//! 1. Score aggregation (merge `##` pieces into whole words)
//! 2. Min-max normalization
//! 3. Whole-word location in the original text
//! 4. Segment building (greedy, highest score first)
//! 5. Colour interpolation between two endpoints
//!
//! Built with the `python` feature it is also the dashboard's native
//! extension module.

pub mod aggregate;
pub mod color;
pub mod config;
pub mod error;
pub mod highlighter;
pub mod locate;
pub mod normalize;
pub mod segment;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use aggregate::{aggregate_scores, SpecialTokens, WordScoreMap};
pub use color::{ColorScale, Rgb};
pub use config::HighlightConfig;
pub use error::{HighlightError, Result};
pub use highlighter::Highlighter;
pub use normalize::normalize_scores;
pub use types::{ExplanationPair, MatchSpan, Segment, WordScore};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Crisis XAI Core — native token highlighting for the dashboard.
#[cfg(feature = "python")]
#[pymodule]
fn crisis_xai_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyTokenHighlighter>()?;
    m.add_function(wrap_pyfunction!(python::highlight_json, m)?)?;
    Ok(())
}
