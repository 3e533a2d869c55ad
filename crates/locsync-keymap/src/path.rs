//! Dot-delimited key path validation.
//!
//! Valid key paths:
//! - Must be non-empty
//! - Must not start or end with `.`
//! - Every dot-separated segment must be non-empty (no `..`)

use std::fmt;

use crate::error::{KeymapError, KeymapResult};

/// A validated dot-delimited key path, e.g. `menu.file.save`.
///
/// Parsing is the only constructor, so any held `KeyPath` is well-formed by
/// construction and [`crate::deep_set`] never re-validates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath(String);

impl KeyPath {
    /// Parse and validate a textual key path.
    ///
    /// # Examples
    ///
    /// ```
    /// use locsync_keymap::KeyPath;
    ///
    /// assert!(KeyPath::parse("menu.file.save").is_ok());
    /// assert!(KeyPath::parse("title").is_ok());
    /// assert!(KeyPath::parse("").is_err());
    /// assert!(KeyPath::parse("a..b").is_err());
    /// ```
    pub fn parse(path: &str) -> KeymapResult<Self> {
        if path.is_empty() {
            return Err(KeymapError::InvalidPath {
                path: path.to_string(),
                reason: "key path must not be empty".into(),
            });
        }

        if path.starts_with('.') || path.ends_with('.') {
            return Err(KeymapError::InvalidPath {
                path: path.to_string(),
                reason: "must not start or end with '.'".into(),
            });
        }

        // Interior empty segments.
        if path.contains("..") {
            return Err(KeymapError::InvalidPath {
                path: path.to_string(),
                reason: "segments must not be empty ('..')".into(),
            });
        }

        Ok(Self(path.to_string()))
    }

    /// The dot-separated segments, root first. Always yields at least one.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The underlying textual path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_single_segment() {
        assert!(KeyPath::parse("title").is_ok());
        assert!(KeyPath::parse("greeting-short").is_ok());
        assert!(KeyPath::parse("第一").is_ok());
    }

    #[test]
    fn valid_nested_paths() {
        assert!(KeyPath::parse("menu.file.save").is_ok());
        assert!(KeyPath::parse("errors.network.timeout.retry").is_ok());
    }

    #[test]
    fn reject_empty_path() {
        assert!(KeyPath::parse("").is_err());
    }

    #[test]
    fn reject_leading_dot() {
        assert!(KeyPath::parse(".menu").is_err());
    }

    #[test]
    fn reject_trailing_dot() {
        assert!(KeyPath::parse("menu.").is_err());
    }

    #[test]
    fn reject_empty_segment() {
        assert!(KeyPath::parse("a..b").is_err());
        assert!(KeyPath::parse("a...b").is_err());
    }

    #[test]
    fn lone_dot_rejected() {
        assert!(KeyPath::parse(".").is_err());
    }

    #[test]
    fn segments_root_first() {
        let path = KeyPath::parse("menu.file.save").unwrap();
        let segments: Vec<&str> = path.segments().collect();
        assert_eq!(segments, vec!["menu", "file", "save"]);
    }

    #[test]
    fn display_round_trips() {
        let path = KeyPath::parse("a.b.c").unwrap();
        assert_eq!(path.to_string(), "a.b.c");
        assert_eq!(path.as_str(), "a.b.c");
    }

    #[test]
    fn error_names_the_path() {
        let err = KeyPath::parse("bad..path").unwrap_err();
        assert!(err.to_string().contains("bad..path"));
    }
}
