//! Flatten a nested localization tree into dot-joined key paths.
//!
//! Objects recurse; everything else (strings, numbers, booleans, null,
//! arrays) is a leaf. Arrays are deliberately opaque: descending into them
//! would fabricate numeric path segments no translation key uses.

use serde_json::Value;

use crate::error::{KeymapError, KeymapResult};
use crate::{FlatMap, Tree};

/// Flatten `tree` into a map from dot-joined key path to leaf value.
///
/// Entries appear in depth-first source order, one per reachable leaf.
/// Empty nested objects contribute nothing: a structurally present but
/// key-less branch is invisible to the comparison.
///
/// A source key containing a literal `.` fails with
/// [`KeymapError::AmbiguousKey`], since the joined path could not be told
/// apart from a nesting boundary.
pub fn flatten(tree: &Tree) -> KeymapResult<FlatMap> {
    let mut flat = FlatMap::new();
    flatten_into(tree, "", &mut flat)?;
    Ok(flat)
}

fn flatten_into(tree: &Tree, prefix: &str, flat: &mut FlatMap) -> KeymapResult<()> {
    for (key, value) in tree {
        let path = join(prefix, key);
        if key.contains('.') {
            return Err(KeymapError::AmbiguousKey { path });
        }
        match value {
            Value::Object(child) => flatten_into(child, &path, flat)?,
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }
    Ok(())
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: Value) -> Tree {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other:?}"),
        }
    }

    #[test]
    fn nested_objects_become_dotted_keys() {
        let t = tree(json!({"a": {"b": 1}, "c": 2}));
        let flat = flatten(&t).unwrap();

        assert_eq!(flat.len(), 2);
        assert_eq!(flat["a.b"], json!(1));
        assert_eq!(flat["c"], json!(2));
    }

    #[test]
    fn empty_tree_flattens_to_empty() {
        let flat = flatten(&Tree::new()).unwrap();
        assert!(flat.is_empty());
    }

    #[test]
    fn deep_nesting() {
        let t = tree(json!({"a": {"b": {"c": {"d": "leaf"}}}}));
        let flat = flatten(&t).unwrap();

        assert_eq!(flat.len(), 1);
        assert_eq!(flat["a.b.c.d"], json!("leaf"));
    }

    #[test]
    fn arrays_are_opaque_leaves() {
        let t = tree(json!({"items": ["one", "two"], "nested": {"list": [1, 2, 3]}}));
        let flat = flatten(&t).unwrap();

        assert_eq!(flat.len(), 2);
        assert_eq!(flat["items"], json!(["one", "two"]));
        assert_eq!(flat["nested.list"], json!([1, 2, 3]));
        assert!(!flat.contains_key("items.0"));
    }

    #[test]
    fn null_and_falsy_values_are_leaves() {
        let t = tree(json!({"a": null, "b": false, "c": 0, "d": ""}));
        let flat = flatten(&t).unwrap();

        assert_eq!(flat.len(), 4);
        assert_eq!(flat["a"], json!(null));
        assert_eq!(flat["b"], json!(false));
        assert_eq!(flat["c"], json!(0));
        assert_eq!(flat["d"], json!(""));
    }

    #[test]
    fn empty_nested_object_is_invisible() {
        let t = tree(json!({"a": {}, "b": "x"}));
        let flat = flatten(&t).unwrap();

        assert_eq!(flat.len(), 1);
        assert!(flat.contains_key("b"));
        assert!(!flat.contains_key("a"));
    }

    #[test]
    fn source_order_is_preserved() {
        let t = tree(json!({"zeta": 1, "alpha": {"m": 2, "b": 3}, "kilo": 4}));
        let flat = flatten(&t).unwrap();

        let keys: Vec<&String> = flat.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha.m", "alpha.b", "kilo"]);
    }

    #[test]
    fn dotted_key_is_rejected() {
        let t = tree(json!({"a.b": 1}));
        let err = flatten(&t).unwrap_err();
        assert_eq!(err, KeymapError::AmbiguousKey { path: "a.b".into() });
    }

    #[test]
    fn dotted_key_rejected_with_full_path() {
        let t = tree(json!({"outer": {"in.ner": 1}}));
        let err = flatten(&t).unwrap_err();
        assert_eq!(
            err,
            KeymapError::AmbiguousKey {
                path: "outer.in.ner".into()
            }
        );
    }
}
