//! Line-level diff between the two sides of a patch preview.
//!
//! Uses the `similar` crate (Myers diff algorithm) to produce structured
//! hunks with context lines. Both inputs are locally produced JSON text,
//! so there is no binary-content handling.

use similar::{ChangeTag, TextDiff};

/// The result of diffing the before/after text of a patch preview.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextDiffReport {
    /// The diff hunks, in document order.
    pub hunks: Vec<DiffHunk>,
    /// Total number of lines on the before side.
    pub old_lines: usize,
    /// Total number of lines on the after side.
    pub new_lines: usize,
}

impl TextDiffReport {
    /// Returns `true` if the two sides are identical.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Total number of added lines across all hunks.
    pub fn additions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| matches!(l, DiffLine::Added(_)))
            .count()
    }

    /// Total number of removed lines across all hunks.
    pub fn deletions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| matches!(l, DiffLine::Removed(_)))
            .count()
    }
}

/// A contiguous region of changes with surrounding context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffHunk {
    /// 1-based start line on the before side.
    pub old_start: usize,
    /// Number of before-side lines covered by this hunk.
    pub old_count: usize,
    /// 1-based start line on the after side.
    pub new_start: usize,
    /// Number of after-side lines covered by this hunk.
    pub new_count: usize,
    /// The individual diff lines.
    pub lines: Vec<DiffLine>,
}

impl DiffHunk {
    /// Unified-diff style hunk header, e.g. `@@ -3,4 +3,6 @@`.
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_count, self.new_start, self.new_count
        )
    }
}

/// A single line in a diff hunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffLine {
    /// Present on both sides.
    Context(String),
    /// Present only on the after side.
    Added(String),
    /// Present only on the before side.
    Removed(String),
}

/// Compute a line diff between `old` and `new`, grouped into hunks with
/// three lines of context.
pub fn diff_text(old: &str, new: &str) -> TextDiffReport {
    let old_lines = old.lines().count();
    let new_lines = new.lines().count();

    if old == new {
        return TextDiffReport {
            hunks: Vec::new(),
            old_lines,
            new_lines,
        };
    }

    let diff = TextDiff::from_lines(old, new);
    let mut hunks = Vec::new();

    for group in diff.grouped_ops(3) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        // Ops within a group are contiguous on both sides.
        let old_range = first.old_range().start..last.old_range().end;
        let new_range = first.new_range().start..last.new_range().end;

        let mut lines = Vec::new();
        for op in &group {
            for change in diff.iter_changes(op) {
                let text = change.value().trim_end_matches('\n').to_string();
                lines.push(match change.tag() {
                    ChangeTag::Equal => DiffLine::Context(text),
                    ChangeTag::Insert => DiffLine::Added(text),
                    ChangeTag::Delete => DiffLine::Removed(text),
                });
            }
        }

        hunks.push(DiffHunk {
            old_start: old_range.start + 1,
            old_count: old_range.len(),
            new_start: new_range.start + 1,
            new_count: new_range.len(),
            lines,
        });
    }

    TextDiffReport {
        hunks,
        old_lines,
        new_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text_has_no_hunks() {
        let text = "{\n  \"a\": 1\n}\n";
        let report = diff_text(text, text);

        assert!(report.is_empty());
        assert_eq!(report.additions(), 0);
        assert_eq!(report.deletions(), 0);
        assert_eq!(report.old_lines, 3);
    }

    #[test]
    fn inserted_key_shows_as_addition() {
        let old = "{\n  \"a\": \"x\"\n}\n";
        let new = "{\n  \"a\": \"x\",\n  \"b\": \"MISSING_TRANSLATION\"\n}\n";

        let report = diff_text(old, new);
        assert!(!report.is_empty());
        assert!(report.additions() >= 1);

        let added: Vec<&String> = report
            .hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter_map(|l| match l {
                DiffLine::Added(text) => Some(text),
                _ => None,
            })
            .collect();
        assert!(added.iter().any(|l| l.contains("MISSING_TRANSLATION")));
    }

    #[test]
    fn context_lines_surround_changes() {
        let old = "a\nb\nc\nd\ne\nf\ng\n";
        let new = "a\nb\nc\nX\ne\nf\ng\n";

        let report = diff_text(old, new);
        let hunk = &report.hunks[0];
        assert!(hunk
            .lines
            .iter()
            .any(|l| matches!(l, DiffLine::Context(_))));
    }

    #[test]
    fn distant_changes_become_separate_hunks() {
        let old: String = (1..=30).map(|i| format!("line{i}\n")).collect();
        let new = old.replace("line2\n", "LINE2\n").replace("line28\n", "LINE28\n");

        let report = diff_text(&old, &new);
        assert_eq!(report.hunks.len(), 2);
    }

    #[test]
    fn hunk_positions_are_one_based() {
        let old = "a\nb\n";
        let new = "a\nB\n";

        let report = diff_text(old, new);
        let hunk = &report.hunks[0];
        assert!(hunk.old_start >= 1);
        assert!(hunk.new_start >= 1);
    }

    #[test]
    fn hunk_header_format() {
        let hunk = DiffHunk {
            old_start: 3,
            old_count: 4,
            new_start: 3,
            new_count: 6,
            lines: Vec::new(),
        };
        assert_eq!(hunk.header(), "@@ -3,4 +3,6 @@");
    }

    #[test]
    fn empty_before_side() {
        let report = diff_text("", "{\n}\n");
        assert!(!report.is_empty());
        assert!(report.additions() >= 1);
        assert_eq!(report.deletions(), 0);
    }
}
