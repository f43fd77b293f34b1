//! Case-insensitive substring search over a dataset.
//!
//! A record matches when any of its field values, lower-cased,
//! contains the lower-cased query as a substring. Plain containment,
//! no tokenization, no type-aware comparison.

use crate::core::types::{Dataset, Record};

/// Check whether a single record matches an already-lower-cased needle.
pub fn record_matches(record: &Record, needle: &str) -> bool {
    record.values().any(|value| value.to_lowercase().contains(needle))
}

/// Filter a dataset down to the records matching `query`.
///
/// Matches are returned in original dataset order. An empty result is
/// a normal outcome, not an error.
pub fn filter(dataset: &[Record], query: &str) -> Dataset {
    let needle = query.to_lowercase();

    dataset
        .iter()
        .filter(|record| record_matches(record, &needle))
        .cloned()
        .collect()
}
