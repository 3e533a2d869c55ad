//! Key-path tree operations for localization documents.
//!
//! A localization document is a JSON object whose nesting encodes
//! dot-delimited message keys (`{"menu": {"file": {"save": "Save"}}}` holds
//! the key `menu.file.save`). This crate provides the pure transforms the
//! rest of the workspace builds on:
//!
//! # Key Types
//!
//! - [`flatten`] -- nested tree to dot-path map
//! - [`deep_set`] -- set a value at a dot path, creating intermediate objects
//! - [`KeyPath`] -- validated dot-delimited path

pub mod error;
pub mod flatten;
pub mod path;
pub mod set;

pub use error::{KeymapError, KeymapResult};
pub use flatten::flatten;
pub use path::KeyPath;
pub use set::deep_set;

use serde_json::Value;

/// A parsed localization document: the root JSON object.
///
/// Key insertion order is preserved so re-serialization keeps the source
/// order and reports stay stable across runs.
pub type Tree = serde_json::Map<String, Value>;

/// A flattened document: dot-joined key path to leaf value, in depth-first
/// source order.
pub type FlatMap = serde_json::Map<String, Value>;
