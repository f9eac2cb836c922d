//! Bounded edit distance between two words
//!
//! A Damerau-Levenshtein style distance computed by recursing on the heads of
//! both words. It differs from the textbook metric in three ways that callers'
//! thresholds are tuned against:
//!
//! - matching heads are always consumed together, never explored as an edit
//! - once the accumulated error passes the threshold the search stops and
//!   reports `err + 1`
//! - a remaining length gap above 2 is returned as-is, without the error
//!   accumulated so far
//!
//! Past the threshold the value is therefore an approximation, not a metric.
//! Below it, every reported distance is realised by an actual alignment.

use std::fmt;

use log::{debug, trace};

use crate::config::MatchConfig;
use crate::types::EditThreshold;

/// Length gap beyond which the remaining suffixes are not compared at all
const MAX_LENGTH_GAP: usize = 2;

/// Edit distance between `w1` and `w2`, exploring branches only while the
/// accumulated error is within `threshold`.
pub fn edit_distance(w1: &str, w2: &str, threshold: EditThreshold) -> usize {
    WordMatcher::new(threshold).distance(w1, w2)
}

/// Returns `Some(distance + 1)` when the words are within `threshold` edits.
///
/// The offset keeps an exact match (`Some(1)`) distinct from "no match".
pub fn word_matches(w1: &str, w2: &str, threshold: EditThreshold) -> Option<usize> {
    WordMatcher::new(threshold).matches(w1, w2)
}

/// Word comparison with an explicit threshold and diagnostic switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordMatcher {
    threshold: EditThreshold,
    max_branches: Option<usize>,
    trace: bool,
    debug: bool,
}

impl WordMatcher {
    pub fn new(threshold: EditThreshold) -> Self {
        Self {
            threshold,
            max_branches: None,
            trace: false,
            debug: false,
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self {
            threshold: config.threshold,
            max_branches: config.max_branches,
            trace: config.trace,
            debug: config.debug,
        }
    }

    pub fn threshold(&self) -> EditThreshold {
        self.threshold
    }

    /// Cap the number of branch points opened per word pair.
    pub fn with_max_branches(mut self, max_branches: usize) -> Self {
        self.max_branches = Some(max_branches);
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Whether per-word decisions and summaries are logged
    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn distance(&self, w1: &str, w2: &str) -> usize {
        let w1: Vec<char> = w1.chars().collect();
        let w2: Vec<char> = w2.chars().collect();

        let mut search = Search {
            threshold: self.threshold.get(),
            branches_left: self.max_branches,
            trace: self.trace,
        };
        search.recurse(&w1, &w2, 0, 0)
    }

    pub fn matches(&self, w1: &str, w2: &str) -> Option<usize> {
        let distance = self.distance(w1, w2);
        if distance <= self.threshold.get() {
            if self.debug {
                debug!("   MATCH! {w1} ~ {w2} ({distance})");
            }
            Some(distance + 1)
        } else {
            if self.debug {
                debug!("  no match: {w1} vs {w2} ({distance})");
            }
            None
        }
    }
}

impl Default for WordMatcher {
    fn default() -> Self {
        Self::new(EditThreshold::default())
    }
}

/// State of one word-pair comparison
struct Search {
    threshold: usize,
    branches_left: Option<usize>,
    trace: bool,
}

impl Search {
    fn recurse(
        &mut self,
        mut w1: &[char],
        mut w2: &[char],
        err: usize,
        mut depth: usize,
    ) -> usize {
        // matching heads cost nothing, so walk them without growing the stack
        loop {
            self.note(
                depth,
                format_args!(
                    "{depth}> comparing {} to {} (err {err})",
                    Suffix(w1),
                    Suffix(w2)
                ),
            );

            let gap = w1.len().abs_diff(w2.len());
            if gap > MAX_LENGTH_GAP {
                return gap;
            }

            if w1.is_empty() || w2.is_empty() {
                return err + w1.len() + w2.len();
            }

            if w1[0] != w2[0] {
                break;
            }
            w1 = &w1[1..];
            w2 = &w2[1..];
            depth += 1;
        }

        let (l1, l2) = (w1.len(), w2.len());

        if err > self.threshold {
            self.note(depth, format_args!("---over threshold---"));
            return err + 1;
        }

        if !self.take_branch() {
            self.note(depth, format_args!("---branch budget spent---"));
            return err + 1;
        }

        self.note(depth, format_args!("   substitution branch"));
        let mut min_err = self.recurse(&w1[1..], &w2[1..], err + 1, depth + 1);

        if l1 > 1 {
            self.note(depth, format_args!("   insertion to w1 branch"));
            min_err = min_err.min(self.recurse(&w1[1..], w2, err + 1, depth + 1));
        }

        if l2 > 1 {
            self.note(depth, format_args!("   insertion to w2 branch"));
            min_err = min_err.min(self.recurse(w1, &w2[1..], err + 1, depth + 1));

            if l1 > 1 && w1[1] == w2[0] && w1[0] == w2[1] {
                self.note(depth, format_args!("   transposition branch"));
                min_err = min_err.min(self.recurse(&w1[2..], &w2[2..], err + 1, depth + 1));
            }
        }

        min_err
    }

    fn take_branch(&mut self) -> bool {
        match self.branches_left.as_mut() {
            None => true,
            Some(0) => false,
            Some(left) => {
                *left -= 1;
                true
            }
        }
    }

    fn note(&self, depth: usize, message: fmt::Arguments<'_>) {
        if self.trace {
            trace!("{:indent$}{message}", "", indent = depth * 3);
        }
    }
}

/// Displays a remaining suffix, `-` when it is exhausted
struct Suffix<'a>(&'a [char]);

impl fmt::Display for Suffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("-");
        }
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
