//! Python bindings for fuzzy matching using PyO3

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::MatchConfig;
use crate::distance::word_matches;
use crate::error::FuzzyError;
use crate::matcher::FuzzyMatcher;
use crate::normalize::{default_stop_words, normalize};
use crate::similarity::fuzzy_match;
use crate::types::EditThreshold;

impl From<FuzzyError> for PyErr {
    fn from(err: FuzzyError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn threshold_arg(threshold: Option<i64>) -> PyResult<EditThreshold> {
    Ok(threshold
        .map(EditThreshold::try_from)
        .transpose()?
        .unwrap_or_default())
}

/// Compare two strings, returning `(ratio, distance)` (Python function)
#[pyfunction]
#[pyo3(name = "fuzzy_match", signature = (str1, str2, threshold=None))]
pub fn py_fuzzy_match(str1: &str, str2: &str, threshold: Option<i64>) -> PyResult<(f64, usize)> {
    Ok(fuzzy_match(str1, str2, threshold_arg(threshold)?).as_tuple())
}

/// Match two words, returning edit distance + 1 or None (Python function)
#[pyfunction]
#[pyo3(name = "word_match", signature = (word1, word2, threshold=None))]
pub fn py_word_match(word1: &str, word2: &str, threshold: Option<i64>) -> PyResult<Option<usize>> {
    Ok(word_matches(word1, word2, threshold_arg(threshold)?))
}

/// Normalize text with the default stop words (Python function)
#[pyfunction]
#[pyo3(name = "normalize")]
pub fn py_normalize(text: &str) -> String {
    normalize(text, default_stop_words())
}

/// Python wrapper for a configured matcher
#[pyclass(name = "FuzzyMatcher")]
pub struct PyFuzzyMatcher {
    matcher: FuzzyMatcher,
}

#[pymethods]
impl PyFuzzyMatcher {
    #[new]
    #[pyo3(signature = (threshold=None, stop_words=None, min_confidence=None))]
    fn new(
        threshold: Option<i64>,
        stop_words: Option<Vec<String>>,
        min_confidence: Option<f64>,
    ) -> PyResult<Self> {
        let defaults = MatchConfig::default();
        let config = MatchConfig {
            threshold: threshold_arg(threshold)?,
            stop_words: stop_words.unwrap_or(defaults.stop_words),
            min_confidence: min_confidence.unwrap_or(defaults.min_confidence),
            ..defaults
        };
        Ok(Self {
            matcher: FuzzyMatcher::with_config(config)?,
        })
    }

    /// Build a matcher from a JSON configuration object
    #[staticmethod]
    fn from_json(config: &str) -> PyResult<Self> {
        let config = MatchConfig::from_json(config)?;
        Ok(Self {
            matcher: FuzzyMatcher::with_config(config)?,
        })
    }

    fn compare(&self, str1: &str, str2: &str) -> (f64, usize) {
        self.matcher.compare(str1, str2).as_tuple()
    }

    fn word_match(&self, word1: &str, word2: &str) -> Option<usize> {
        self.matcher.word_match(word1, word2)
    }

    fn normalize(&self, text: &str) -> String {
        self.matcher.normalize(text)
    }

    /// Score candidates against a query, best first
    fn match_all<'py>(
        &self,
        py: Python<'py>,
        query: &str,
        candidates: Vec<String>,
    ) -> PyResult<Vec<Bound<'py, PyDict>>> {
        let matcher = &self.matcher;
        let matches = py.allow_threads(|| matcher.match_all(query, &candidates));

        matches
            .into_iter()
            .map(|m| -> PyResult<Bound<'py, PyDict>> {
                let dict = PyDict::new_bound(py);
                dict.set_item("index", m.index)?;
                dict.set_item("label", m.label)?;
                dict.set_item("confidence", m.confidence)?;
                dict.set_item("distance", m.distance)?;
                Ok(dict)
            })
            .collect()
    }

    /// Current configuration as JSON
    fn config_json(&self) -> PyResult<String> {
        Ok(self.matcher.config().to_json()?)
    }

    fn __repr__(&self) -> String {
        let config = self.matcher.config();
        format!(
            "FuzzyMatcher(threshold={}, stop_words={}, min_confidence={})",
            config.threshold,
            config.stop_words.len(),
            config.min_confidence
        )
    }
}
