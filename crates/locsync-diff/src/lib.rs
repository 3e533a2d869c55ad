//! Missing-key diff and patch preview for localization documents.
//!
//! Compares flattened documents against a reference, builds patched copies
//! with placeholder values, and renders line-level before/after diffs.
//!
//! # Key Types
//!
//! - [`KeyDiff`] / [`missing_keys`] -- reference-order missing-key diff
//! - [`PatchPreview`] / [`patch_missing`] -- placeholder patching and snapshots
//! - [`TextDiffReport`] / [`DiffHunk`] / [`DiffLine`] -- line-level preview diff

pub mod error;
pub mod key_diff;
pub mod patch;
pub mod preview;

pub use error::{DiffError, DiffResult};
pub use key_diff::{missing_keys, KeyDiff};
pub use patch::{patch_missing, PatchPreview, DEFAULT_PLACEHOLDER};
pub use preview::{diff_text, DiffHunk, DiffLine, TextDiffReport};
