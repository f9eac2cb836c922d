//! Word-level similarity between two short strings
//!
//! Both strings are normalized and split into words. Each word of the first
//! string is paired with the first word of the second string it fuzzily
//! matches; the matched-word count is then scored against both word counts.

use log::debug;

use crate::distance::WordMatcher;
use crate::normalize::{default_stop_words, normalize, split_words, StopWordSet};
use crate::types::{EditThreshold, MatchResult};

/// Compare two strings with the built-in stop words.
///
/// # Example
/// ```
/// use fuzzymatch_core::{fuzzy_match, EditThreshold};
///
/// let result = fuzzy_match("The Extended Mind", "Extended and Embodied Mind", EditThreshold::default());
/// assert!(result.ratio > 0.6 && result.ratio < 0.7);
/// assert_eq!(result.distance, 0);
/// ```
pub fn fuzzy_match(str1: &str, str2: &str, threshold: EditThreshold) -> MatchResult {
    fuzzy_match_with(str1, str2, default_stop_words(), &WordMatcher::new(threshold))
}

/// Compare two strings with explicit stop words and word matcher.
pub fn fuzzy_match_with(
    str1: &str,
    str2: &str,
    stop_words: &StopWordSet,
    matcher: &WordMatcher,
) -> MatchResult {
    let normalized1 = normalize(str1, stop_words);
    let normalized2 = normalize(str2, stop_words);

    score_words(&split_words(&normalized1), &split_words(&normalized2), matcher)
}

/// Score two word sequences.
///
/// Pairing is greedy and first-fit: a word of `words1` takes the first word
/// of `words2` it matches, and words of `words2` are never consumed, so one
/// of them can be matched by several words of `words1`.
pub(crate) fn score_words(words1: &[&str], words2: &[&str], matcher: &WordMatcher) -> MatchResult {
    if words1.is_empty() || words2.is_empty() {
        if matcher.debug() {
            debug!("empty word sequence after normalization");
        }
        return MatchResult::NONE;
    }

    let mut matched = 0usize;
    let mut distance = 0usize;

    for word1 in words1 {
        if let Some(value) = words2.iter().find_map(|word2| matcher.matches(word1, word2)) {
            matched += 1;
            // undo the +1 offset of a word match
            distance += value - 1;
        }
    }

    if matched == 0 {
        if matcher.debug() {
            debug!("no matching words: {words1:?} vs {words2:?}");
        }
        return MatchResult::NONE;
    }

    let shorter = words1.len().min(words2.len()) as f64;
    let longer = words1.len().max(words2.len()) as f64;
    let ratio_short = matched as f64 / shorter;
    let ratio_long = matched as f64 / longer;

    if matcher.debug() {
        debug!(
            "{matched} matched, {ratio_short:.3} of shorter, {ratio_long:.3} of longer (cum. dist. {distance})"
        );
    }

    MatchResult {
        // double counting can push the product past 1
        ratio: (ratio_short * ratio_long).min(1.0),
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::capture_logs;
    use pretty_assertions::assert_eq;

    fn t(edits: usize) -> EditThreshold {
        EditThreshold::new(edits)
    }

    #[test]
    fn test_self_match() {
        for title in [
            "Extended Mind",
            "The Extended Mind",
            "Aspects of the Evolution of Peter Abelards Thought",
            "Christopher P. Adams",
        ] {
            for threshold in 0..6 {
                let result = fuzzy_match(title, title, t(threshold));
                assert_eq!(result.ratio, 1.0);
                // from 3 up, the gap cutoff lets an earlier, different word win
                if threshold <= 2 {
                    assert_eq!(result.distance, 0);
                }
            }
        }
    }

    #[test]
    fn test_no_words_match() {
        assert_eq!(fuzzy_match("apples", "oranges", t(2)), MatchResult::NONE);
        assert_eq!(fuzzy_match("apples", "grapefruit", t(2)), MatchResult::NONE);
    }

    #[test]
    fn test_partial_title_match() {
        let result = fuzzy_match("The Extended Mind", "Extended and Embodied Mind", t(2));
        assert!((result.ratio - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.distance, 0);
    }

    #[test]
    fn test_misspelled_title() {
        // "Extedned" is one transposition from "Extended", "Mnid" one from "Mind"
        let result = fuzzy_match("The Extedned Mnid", "Extended and Embodied Mind", t(2));
        assert!((result.ratio - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.distance, 2);
    }

    #[test]
    fn test_contraction_equivalence() {
        let result = fuzzy_match("doesn't", "does not", t(2));
        assert_eq!(result.as_tuple(), (1.0, 0));
    }

    #[test]
    fn test_all_stop_words_is_no_match() {
        assert_eq!(fuzzy_match("The", "The Philosophy of", t(2)), MatchResult::NONE);
        assert_eq!(fuzzy_match("of the", "Extended Mind", t(2)), MatchResult::NONE);
        assert_eq!(fuzzy_match("", "", t(2)), MatchResult::NONE);
    }

    #[test]
    fn test_first_fit_without_consumption() {
        let matcher = WordMatcher::new(t(2));
        // both "mind"s pair with the same word
        let result = score_words(&["mind", "mind"], &["mind", "body"], &matcher);
        assert_eq!(result.as_tuple(), (1.0, 0));

        // the first candidate within threshold wins, even if a later one is exact
        let result = score_words(&["mond"], &["mind", "mond"], &matcher);
        assert_eq!(result.as_tuple(), (0.5, 1));
    }

    #[test]
    fn test_ratio_clamped() {
        let matcher = WordMatcher::new(t(2));
        let result = score_words(&["mind", "mind", "mind"], &["mind"], &matcher);
        assert_eq!(result.ratio, 1.0);
    }

    #[test]
    fn test_not_symmetric_under_double_counting() {
        let forward = fuzzy_match("mind mind body", "mind body soul", t(0));
        let backward = fuzzy_match("mind body soul", "mind mind body", t(0));
        assert_eq!(forward.ratio, 1.0);
        assert!((backward.ratio - 4.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_stop_words() {
        let stop_words = StopWordSet::new(["mind"]).unwrap();
        let matcher = WordMatcher::new(t(2));
        let result = fuzzy_match_with("Extended Mind", "Extended", &stop_words, &matcher);
        assert_eq!(result.as_tuple(), (1.0, 0));
    }

    #[test]
    fn test_ratio_in_unit_interval() {
        let pairs = [
            ("Physical Chemistry", "Physics and Chemistry"),
            ("Mind Body Problem", "Extended and Embodied Mind"),
            ("Christopher P. Adams", "Chris Adams"),
            (
                "Aspects of the Evolution of Peter Abelards Thought on Signification and Predication",
                "On The Plurality of Worlds",
            ),
        ];
        for (s1, s2) in pairs {
            let result = fuzzy_match(s1, s2, t(2));
            assert!((0.0..=1.0).contains(&result.ratio), "{s1} / {s2}");
            if !result.is_match() {
                assert_eq!(result.distance, 0);
            }
        }
    }

    #[test]
    fn test_silent_without_debug() {
        let (result, lines) = capture_logs(|| fuzzy_match("apples", "oranges", t(2)));
        assert_eq!(result, MatchResult::NONE);
        assert_eq!(lines, Vec::<String>::new());

        let (result, lines) = capture_logs(|| {
            fuzzy_match("The Extended Mind", "Extended and Embodied Mind", t(2))
        });
        assert!(result.is_match());
        assert_eq!(lines, Vec::<String>::new());

        let (_, lines) = capture_logs(|| fuzzy_match("the", "of", t(2)));
        assert_eq!(lines, Vec::<String>::new());
    }

    #[test]
    fn test_debug_logs_summary() {
        let matcher = WordMatcher::new(t(2)).with_debug(true);
        let (_, lines) = capture_logs(|| {
            fuzzy_match_with("Extended Mind", "Extended Mind", default_stop_words(), &matcher)
        });
        assert!(lines.iter().any(|l| l.starts_with("2 matched")), "{lines:?}");

        let (_, lines) = capture_logs(|| {
            fuzzy_match_with("apples", "oranges", default_stop_words(), &matcher)
        });
        assert!(lines.iter().any(|l| l.starts_with("no matching words")), "{lines:?}");
    }
}
