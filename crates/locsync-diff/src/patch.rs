//! Placeholder patching and snapshot construction.
//!
//! Patching never touches the candidate tree it was given; it produces a
//! new tree with every missing path materialized, plus the serialized
//! before/after pair a diff viewer needs.

use locsync_keymap::{deep_set, KeyPath, Tree};
use serde_json::Value;

use crate::error::{DiffError, DiffResult};

/// Placeholder inserted for missing keys unless the caller overrides it.
pub const DEFAULT_PLACEHOLDER: &str = "MISSING_TRANSLATION";

/// Apply `placeholder` at every path in `missing`, returning the patched
/// tree. The input tree is untouched.
///
/// Paths normally come from a flattened reference document and are always
/// well-formed; re-parsing here is a defensive check only.
pub fn patch_missing(tree: &Tree, missing: &[String], placeholder: &Value) -> DiffResult<Tree> {
    let mut patched = tree.clone();
    for path in missing {
        let path = KeyPath::parse(path)?;
        patched = deep_set(&patched, &path, placeholder.clone());
    }
    Ok(patched)
}

/// Before/after text of a patched document, ready for a diff viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchPreview {
    /// Display title, e.g. the candidate file name.
    pub title: String,
    /// The unmodified original document text, byte for byte.
    pub before: String,
    /// Pretty-printed serialization of the patched tree.
    pub after: String,
}

impl PatchPreview {
    /// Build a preview from the original document text and the patched tree.
    ///
    /// The patched side is serialized with 2-space indentation and a
    /// trailing newline, matching how localization files are conventionally
    /// formatted.
    pub fn build(
        title: impl Into<String>,
        original_text: impl Into<String>,
        patched: &Tree,
    ) -> DiffResult<Self> {
        let mut after = serde_json::to_string_pretty(patched)
            .map_err(|e| DiffError::Serialization(e.to_string()))?;
        after.push('\n');

        Ok(Self {
            title: title.into(),
            before: original_text.into(),
            after,
        })
    }
}
