//! Error types for the keymap crate.

use thiserror::Error;

/// Errors produced by key-path and flatten operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeymapError {
    /// A textual key path failed validation.
    #[error("invalid key path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// A source key contains a literal `.`, which is indistinguishable from
    /// a nesting boundary once dot-joined.
    #[error("ambiguous key {path:?}: key contains a literal '.'")]
    AmbiguousKey { path: String },
}

/// Convenience alias for keymap results.
pub type KeymapResult<T> = Result<T, KeymapError>;
