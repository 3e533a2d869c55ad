//! Set a value at a dot-delimited path, creating intermediate objects.

use serde_json::Value;

use crate::path::KeyPath;
use crate::Tree;

/// Return a copy of `tree` with `value` assigned at `path`.
///
/// Missing intermediate segments are created as empty objects. An
/// intermediate segment holding a non-object value is replaced by an empty
/// object before descending; the test is presence-and-type, never
/// truthiness, so leaves like `false`, `0`, or `""` at *other* paths are
/// never disturbed. The terminal segment is assigned unconditionally,
/// overwriting whatever was there.
///
/// The input tree is left untouched; before/after snapshots built from the
/// two trees can never alias.
pub fn deep_set(tree: &Tree, path: &KeyPath, value: Value) -> Tree {
    let mut out = tree.clone();
    let segments: Vec<&str> = path.segments().collect();

    if let Some((&last, parents)) = segments.split_last() {
        let mut current = &mut out;
        for &segment in parents {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Tree::new()));
            if !entry.is_object() {
                *entry = Value::Object(Tree::new());
            }
            // `entry` is an object at this point.
            current = match entry {
                Value::Object(child) => child,
                _ => unreachable!("entry was just ensured to be an object"),
            };
        }
        current.insert(last.to_string(), value);
    }

    out
}
