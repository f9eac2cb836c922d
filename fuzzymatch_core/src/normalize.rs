//! Text normalization ahead of word matching
//!
//! Strips stop words, the punctuation `! ? : ,`, negative contractions and
//! possessive apostrophes. Nothing else is touched: case and accents of the
//! remaining text are preserved.

use std::sync::OnceLock;

use ahash::AHashSet;
use regex::Regex;

use crate::config::DEFAULT_STOP_WORDS;
use crate::error::{FuzzyError, Result};

/// Ordered set of words removed from both strings before matching
///
/// Each word is matched whole and case-insensitively, together with the
/// whitespace that follows it.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: Vec<String>,
    patterns: Vec<Regex>,
}

impl StopWordSet {
    /// Compile a stop-word set. Order is preserved; case-insensitive
    /// duplicates are dropped.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = AHashSet::new();
        let mut kept = Vec::new();
        let mut patterns = Vec::new();

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                return Err(FuzzyError::EmptyStopWord);
            }
            if !seen.insert(word.to_lowercase()) {
                continue;
            }
            patterns.push(Regex::new(&format!(r"(?i)\b{}\b\s*", regex::escape(word)))?);
            kept.push(word.to_string());
        }

        Ok(Self {
            words: kept,
            patterns,
        })
    }

    pub fn empty() -> Self {
        Self {
            words: Vec::new(),
            patterns: Vec::new(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Remove every stop word, one word at a time in set order.
    pub fn strip(&self, input: &str) -> String {
        let mut text = input.to_string();
        for pattern in &self.patterns {
            text = pattern.replace_all(&text, "").into_owned();
        }
        text
    }
}

impl Default for StopWordSet {
    fn default() -> Self {
        default_stop_words().clone()
    }
}

/// The built-in stop words, compiled once per process.
pub fn default_stop_words() -> &'static StopWordSet {
    static DEFAULT: OnceLock<StopWordSet> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        StopWordSet::new(DEFAULT_STOP_WORDS).expect("Invalid default stop word")
    })
}

struct Rewrites {
    punctuation: Regex,
    negation: Regex,
    possessive: Regex,
}

fn rewrites() -> &'static Rewrites {
    static REWRITES: OnceLock<Rewrites> = OnceLock::new();
    REWRITES.get_or_init(|| Rewrites {
        punctuation: Regex::new(r"[!?:,]").expect("Invalid regex pattern"),
        negation: Regex::new(r"(?i)n't\b").expect("Invalid regex pattern"),
        possessive: Regex::new(r"(?i)'s\b").expect("Invalid regex pattern"),
    })
}

/// Normalize a string for word matching.
///
/// Stop words go first so their boundaries are judged against the original
/// punctuation; then punctuation, `n't` -> ` not` and `'s` -> `s`.
pub fn normalize(input: &str, stop_words: &StopWordSet) -> String {
    let rewrites = rewrites();

    let text = stop_words.strip(input);
    let text = rewrites.punctuation.replace_all(&text, "").into_owned();
    let text = rewrites.negation.replace_all(&text, " not").into_owned();
    rewrites.possessive.replace_all(&text, "s").into_owned()
}

/// Split normalized text into words, discarding empty tokens.
pub fn split_words(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}
