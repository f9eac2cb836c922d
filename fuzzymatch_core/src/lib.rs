//! Fuzzy matching of short titles and names
//!
//! Two strings are compared word by word: each word of one string is paired
//! with the first word of the other that lies within a small number of
//! character edits, and the matched-word counts are turned into a similarity
//! ratio plus the cumulative edit distance of the pairs.
//!
//! ```
//! use fuzzymatch_core::{fuzzy_match, EditThreshold};
//!
//! let result = fuzzy_match("doesn't", "does not", EditThreshold::default());
//! assert_eq!(result.as_tuple(), (1.0, 0));
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod similarity;
pub mod types;

#[cfg(test)]
mod testing;

pub use config::*;
pub use distance::*;
pub use error::{FuzzyError, Result};
pub use matcher::*;
pub use normalize::*;
pub use similarity::*;
pub use types::*;

use log::{debug, info};

/// Install the `env_logger` backend once per process.
///
/// The level is taken from `RUST_LOG`, e.g. `RUST_LOG=fuzzymatch_core=trace`
/// to see every step of the word matcher when tracing is enabled.
pub fn init_logger() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        if env_logger::try_init().is_ok() {
            info!("fuzzymatch logging initialized");
        } else {
            debug!("a logger was already installed");
        }
    });
}

// Python bindings
#[cfg(feature = "extension-module")]
pub mod py;

#[cfg(feature = "extension-module")]
use pyo3::prelude::*;

#[cfg(feature = "extension-module")]
#[pymodule]
fn fuzzymatch_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    init_logger();
    m.add_class::<PyFuzzyMatcher>()?;
    m.add_function(wrap_pyfunction!(py_fuzzy_match, m)?)?;
    m.add_function(wrap_pyfunction!(py_word_match, m)?)?;
    m.add_function(wrap_pyfunction!(py_normalize, m)?)?;
    m.add("DEFAULT_THRESHOLD", DEFAULT_THRESHOLD)?;
    m.add("DEFAULT_MIN_CONFIDENCE", DEFAULT_MIN_CONFIDENCE)?;
    Ok(())
}
