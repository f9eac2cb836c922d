//! Process-wide defaults and per-matcher configuration

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};
use crate::types::EditThreshold;

/// Edit threshold used when a caller does not supply one
pub const DEFAULT_THRESHOLD: usize = 2;

/// Common words dropped before matching, applied in this order
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the",
    "and",
    "a",
    "an",
    "as",
    "in",
    "at",
    "to",
    "of",
    "on",
    "philosophy",
];

/// Confidence a candidate needs to be accepted by a batch search
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// Configuration for a [`FuzzyMatcher`](crate::matcher::FuzzyMatcher)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Maximum edits between two matching words
    pub threshold: EditThreshold,
    /// Words removed during normalization
    pub stop_words: Vec<String>,
    /// Minimum ratio for a candidate to be accepted by `match_all`
    pub min_confidence: f64,
    /// Cap on branch points explored per word pair (unbounded when `None`)
    pub max_branches: Option<usize>,
    /// Log every recursion step of the word matcher at trace level
    pub trace: bool,
    /// Log per-word decisions and per-string summaries at debug level
    pub debug: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: EditThreshold::default(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_branches: None,
            trace: false,
            debug: false,
        }
    }
}

impl MatchConfig {
    /// Parse a JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(FuzzyError::InvalidConfidence(self.min_confidence));
        }
        if self.stop_words.iter().any(|w| w.trim().is_empty()) {
            return Err(FuzzyError::EmptyStopWord);
        }
        Ok(())
    }

    pub fn with_threshold(mut self, threshold: impl Into<EditThreshold>) -> Self {
        self.threshold = threshold.into();
        self
    }
}
