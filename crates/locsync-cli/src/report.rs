//! Report rendering: per-candidate outcomes in text or JSON form.

use colored::Colorize;
use serde::Serialize;

/// The full comparison report handed to the user.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The reference file.
    pub reference: String,
    /// Per-candidate outcomes, in comparison order.
    pub candidates: Vec<CandidateReport>,
}

#[derive(Debug, Serialize)]
pub struct CandidateReport {
    pub file: String,
    #[serde(flatten)]
    pub outcome: CandidateOutcome,
}

/// Outcome of comparing one candidate against the reference.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CandidateOutcome {
    /// Every reference key is present.
    Complete,
    /// Reference keys absent from this candidate, in reference order.
    MissingKeys {
        missing: Vec<String>,
        patched: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        snapshots: Option<SnapshotPair>,
    },
    /// The candidate was excluded from the comparison.
    Skipped { reason: String },
}

/// Paths of a written before/after snapshot pair.
#[derive(Debug, Serialize)]
pub struct SnapshotPair {
    pub before: String,
    pub after: String,
}

impl Report {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let mut complete = 0usize;
        let mut incomplete = 0usize;
        let mut skipped = 0usize;

        for candidate in &self.candidates {
            match &candidate.outcome {
                CandidateOutcome::Complete => {
                    complete += 1;
                    out.push_str(&format!(
                        "{} {}: no missing keys\n",
                        "✓".green(),
                        candidate.file.bold()
                    ));
                }
                CandidateOutcome::MissingKeys {
                    missing,
                    patched,
                    snapshots,
                } => {
                    incomplete += 1;
                    out.push_str(&format!(
                        "{} {} is missing {} keys:\n",
                        "✗".red(),
                        candidate.file.bold(),
                        missing.len().to_string().yellow()
                    ));
                    for key in missing {
                        out.push_str(&format!("    - {key}\n"));
                    }
                    if *patched {
                        if let Some(pair) = snapshots {
                            out.push_str(&format!(
                                "  {} {} / {}\n",
                                "patched:".green(),
                                pair.before,
                                pair.after
                            ));
                        }
                    }
                }
                CandidateOutcome::Skipped { reason } => {
                    skipped += 1;
                    out.push_str(&format!(
                        "{} {} skipped: {}\n",
                        "⚠".yellow(),
                        candidate.file.bold(),
                        reason
                    ));
                }
            }
        }

        out.push_str(&format!(
            "\n{} candidates compared against {}: {} complete, {} missing keys, {} skipped\n",
            self.candidates.len(),
            self.reference.bold(),
            complete,
            incomplete,
            skipped
        ));
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
