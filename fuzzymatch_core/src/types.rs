//! Core data types for match results

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_THRESHOLD;
use crate::error::FuzzyError;

/// Maximum number of character edits two words may differ by and still match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditThreshold(usize);

impl EditThreshold {
    pub const fn new(edits: usize) -> Self {
        Self(edits)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for EditThreshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl From<usize> for EditThreshold {
    fn from(edits: usize) -> Self {
        Self(edits)
    }
}

impl TryFrom<i64> for EditThreshold {
    type Error = FuzzyError;

    fn try_from(edits: i64) -> Result<Self, Self::Error> {
        usize::try_from(edits)
            .map(Self)
            .map_err(|_| FuzzyError::NegativeThreshold(edits))
    }
}

impl fmt::Display for EditThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of comparing two strings word by word
///
/// `ratio` is the product of the matched-word ratios against the shorter and
/// the longer word sequence. `distance` sums the edit distances of the matched
/// word pairs and is 0 whenever nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub ratio: f64,
    pub distance: usize,
}

impl MatchResult {
    pub const NONE: MatchResult = MatchResult {
        ratio: 0.0,
        distance: 0,
    };

    pub fn is_match(&self) -> bool {
        self.ratio > 0.0
    }

    pub fn as_tuple(&self) -> (f64, usize) {
        (self.ratio, self.distance)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.ratio, self.distance)
    }
}

/// A candidate label accepted by a batch search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatch {
    /// Position of the candidate in the searched list
    pub index: usize,
    pub label: String,
    pub confidence: f64,
    pub distance: usize,
}

impl CandidateMatch {
    pub fn new(index: usize, label: String, result: MatchResult) -> Self {
        Self {
            index,
            label,
            confidence: result.ratio,
            distance: result.distance,
        }
    }
}
