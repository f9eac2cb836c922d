//! Configured matcher and batch search of a query against candidate labels

use std::cmp::Ordering;

use log::debug;
use rayon::prelude::*;

use crate::config::MatchConfig;
use crate::distance::WordMatcher;
use crate::error::Result;
use crate::normalize::{normalize, split_words, StopWordSet};
use crate::similarity::score_words;
use crate::types::{CandidateMatch, MatchResult};

/// Fuzzy matcher bound to one validated configuration
///
/// Holds no mutable state, so a single matcher can be shared across threads.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    config: MatchConfig,
    stop_words: StopWordSet,
    words: WordMatcher,
}

impl FuzzyMatcher {
    /// Create a matcher with the default configuration
    pub fn new() -> Self {
        let config = MatchConfig::default();
        Self {
            words: WordMatcher::from_config(&config),
            stop_words: StopWordSet::default(),
            config,
        }
    }

    /// Create a matcher with a custom configuration
    pub fn with_config(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        let stop_words = StopWordSet::new(&config.stop_words)?;
        Ok(Self {
            words: WordMatcher::from_config(&config),
            stop_words,
            config,
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn normalize(&self, input: &str) -> String {
        normalize(input, &self.stop_words)
    }

    /// Match two single words, returning edit distance + 1 on success
    pub fn word_match(&self, w1: &str, w2: &str) -> Option<usize> {
        self.words.matches(w1, w2)
    }

    pub fn compare(&self, str1: &str, str2: &str) -> MatchResult {
        let normalized1 = self.normalize(str1);
        let normalized2 = self.normalize(str2);
        score_words(
            &split_words(&normalized1),
            &split_words(&normalized2),
            &self.words,
        )
    }

    /// Score every candidate against `query`.
    ///
    /// Returns the candidates whose ratio reaches `min_confidence`, best first.
    /// Ties are broken by lower distance, then by position in `candidates`.
    pub fn match_all<S>(&self, query: &str, candidates: &[S]) -> Vec<CandidateMatch>
    where
        S: AsRef<str> + Sync,
    {
        let normalized_query = self.normalize(query);
        let query_words = split_words(&normalized_query);
        if query_words.is_empty() {
            if self.config.debug {
                debug!("query {query:?} is empty after normalization");
            }
            return Vec::new();
        }

        let min_confidence = self.config.min_confidence;
        let mut matches: Vec<CandidateMatch> = candidates
            .par_iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                let label = candidate.as_ref();
                let normalized = self.normalize(label);
                let result = score_words(&query_words, &split_words(&normalized), &self.words);
                (result.is_match() && result.ratio >= min_confidence)
                    .then(|| CandidateMatch::new(index, label.to_string(), result))
            })
            .collect();

        matches.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.distance.cmp(&b.distance))
                .then_with(|| a.index.cmp(&b.index))
        });

        if self.config.debug {
            debug!(
                "{} of {} candidates matched {query:?}",
                matches.len(),
                candidates.len()
            );
        }
        matches
    }

    /// The highest-ranked candidate, if any reaches `min_confidence`
    pub fn best_match<S>(&self, query: &str, candidates: &[S]) -> Option<CandidateMatch>
    where
        S: AsRef<str> + Sync,
    {
        self.match_all(query, candidates).into_iter().next()
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}
