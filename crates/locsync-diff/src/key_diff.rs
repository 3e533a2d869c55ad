//! Missing-key diff between flattened localization documents.
//!
//! The comparison is one-directional: the reference key set is ground
//! truth for completeness, and keys present only in the candidate are
//! deliberately not reported.

use locsync_keymap::FlatMap;
use serde::{Deserialize, Serialize};

/// The result of comparing one candidate against the reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDiff {
    /// Paths present in the reference and absent from the candidate, in
    /// reference order.
    pub missing: Vec<String>,
}

impl KeyDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the candidate has every reference key.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of missing keys.
    pub fn len(&self) -> usize {
        self.missing.len()
    }
}

/// Compute the keys `candidate` is missing relative to `reference`.
///
/// Iteration follows `reference`'s insertion order, so repeated runs over
/// unchanged input produce identical reports.
pub fn missing_keys(reference: &FlatMap, candidate: &FlatMap) -> KeyDiff {
    let missing = reference
        .keys()
        .filter(|key| !candidate.contains_key(key.as_str()))
        .cloned()
        .collect();

    KeyDiff { missing }
}
