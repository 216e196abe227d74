//! Python bindings used by the dashboard's tweet detail view.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashSet;

use crate::error::HighlightError;
use crate::highlighter::Highlighter;
use crate::types::ExplanationPair;

fn to_py_err(err: HighlightError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_pairs(explanation: Vec<(String, f64)>) -> Vec<ExplanationPair> {
    explanation.into_iter().map(ExplanationPair::from).collect()
}

/// Token-level highlighter with a colour gradient.
#[pyclass(name = "TokenHighlighter", frozen)]
pub struct PyTokenHighlighter {
    inner: Highlighter,
}

#[pymethods]
impl PyTokenHighlighter {
    #[new]
    #[pyo3(signature = (min_color="#FFFFFF", max_color="#FF0000"))]
    fn new(min_color: &str, max_color: &str) -> PyResult<Self> {
        let inner = Highlighter::with_colors(min_color, max_color).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Return a list of (text_segment, color, score) tuples for rendering.
    #[pyo3(signature = (text, explanation, special_tokens=None))]
    fn create_highlighted_text(
        &self,
        text: &str,
        explanation: Vec<(String, f64)>,
        special_tokens: Option<HashSet<String>>,
    ) -> PyResult<Vec<(String, String, f64)>> {
        let pairs = to_pairs(explanation);
        let segments = match special_tokens {
            Some(special) => self.inner.highlight_with_special_tokens(text, &pairs, &special),
            None => self.inner.highlight(text, &pairs),
        }
        .map_err(to_py_err)?;
        Ok(segments
            .into_iter()
            .map(|s| (s.text, s.color, s.score))
            .collect())
    }

    /// Interpolate between the min and max colours; ratio is clamped to [0, 1].
    fn interpolate_color(&self, ratio: f64) -> String {
        self.inner.scale().hex_at(ratio)
    }

    /// Normalize scores to the 0-1 range.
    #[staticmethod]
    fn normalize_scores(scores: Vec<f64>) -> Vec<f64> {
        crate::normalize::normalize_scores(&scores)
    }

    /// (word, normalized score) pairs, most influential first.
    fn ranked_words(&self, explanation: Vec<(String, f64)>) -> PyResult<Vec<(String, f64)>> {
        let ranked = self.inner.ranked_words(&to_pairs(explanation)).map_err(to_py_err)?;
        Ok(ranked.into_iter().map(|w| (w.word, w.score)).collect())
    }
}

/// Highlight `text` from a JSON-encoded explanation using default colours.
#[pyfunction]
pub fn highlight_json(text: &str, explanation_json: &str) -> PyResult<Vec<(String, String, f64)>> {
    let segments = Highlighter::default()
        .highlight_json(text, explanation_json)
        .map_err(to_py_err)?;
    Ok(segments
        .into_iter()
        .map(|s| (s.text, s.color, s.score))
        .collect())
}
