//! Error types for the diff crate.

use thiserror::Error;

/// Errors that can occur while building patches and previews.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// A missing-key path failed validation before patching.
    #[error("invalid patch path: {0}")]
    InvalidPath(#[from] locsync_keymap::KeymapError),

    /// Snapshot serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
