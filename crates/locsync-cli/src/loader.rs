//! Input loading: read, parse, and flatten localization documents.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;
use tracing::{debug, warn};
use walkdir::WalkDir;

use locsync_keymap::{flatten, FlatMap, Tree};

/// A successfully loaded and flattened document.
#[derive(Debug)]
pub struct Document {
    pub path: PathBuf,
    /// Raw file content, kept for the byte-exact "before" snapshot.
    pub text: String,
    pub tree: Tree,
    pub flat: FlatMap,
}

/// Read, parse, and flatten one localization file.
///
/// Fails if the file cannot be read, is not valid JSON, does not have an
/// object at the root, or contains a dotted key.
pub fn load_document(path: &Path) -> anyhow::Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;
    let Value::Object(tree) = value else {
        anyhow::bail!("{}: root must be a JSON object", path.display());
    };

    let flat = flatten(&tree).with_context(|| format!("cannot flatten {}", path.display()))?;
    debug!(path = %path.display(), keys = flat.len(), "loaded document");

    Ok(Document {
        path: path.to_path_buf(),
        text,
        tree,
        flat,
    })
}

/// Expand candidate arguments into concrete file paths.
///
/// A directory contributes every `.json` file beneath it in lexicographic
/// order, minus the reference file, so a locale directory that contains the
/// reference can be passed as-is. Plain file arguments pass through
/// untouched.
pub fn expand_candidates(candidates: &[PathBuf], reference: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for candidate in candidates {
        if candidate.is_dir() {
            let walker = WalkDir::new(candidate).sort_by_file_name();
            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        warn!("skipping unreadable entry under {}: {}", candidate.display(), err);
                        continue;
                    }
                };
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.into_path();
                if path.extension().is_some_and(|ext| ext == "json") && !same_file(&path, reference)
                {
                    paths.push(path);
                }
            }
        } else {
            paths.push(candidate.clone());
        }
    }
    paths
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
