//! Error types for fuzzy matching
//!
//! The matching algorithm itself never fails. These errors only surface where
//! untyped input (a signed threshold, user-supplied stop words, a JSON config)
//! is turned into the crate's types.

use thiserror::Error;

/// Result type alias for fuzzy matching operations.
pub type Result<T> = std::result::Result<T, FuzzyError>;

#[derive(Error, Debug)]
pub enum FuzzyError {
    /// Edit thresholds count edits and cannot be negative
    #[error("edit threshold must be non-negative, got {0}")]
    NegativeThreshold(i64),

    /// A stop word was empty after trimming
    #[error("stop word must not be empty")]
    EmptyStopWord,

    /// Minimum confidence outside [0, 1]
    #[error("minimum confidence must be within [0, 1], got {0}")]
    InvalidConfidence(f64),

    /// Stop-word pattern failed to compile
    #[error("invalid stop word pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// JSON configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            FuzzyError::NegativeThreshold(-3).to_string(),
            "edit threshold must be non-negative, got -3"
        );
        assert_eq!(
            FuzzyError::InvalidConfidence(1.5).to_string(),
            "minimum confidence must be within [0, 1], got 1.5"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err: FuzzyError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, FuzzyError::Config(_)));
    }
}
