use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use serde_json::Value;
use tracing::{debug, warn};

use locsync_diff::{diff_text, missing_keys, patch_missing, DiffLine, PatchPreview};

use crate::cli::{Cli, Command, CompareArgs, OutputFormat};
use crate::exit_codes;
use crate::loader::{self, Document};
use crate::report::{CandidateOutcome, CandidateReport, Report, SnapshotPair};

pub fn run_command(cli: Cli) -> anyhow::Result<u8> {
    match cli.command {
        Command::Compare(args) => cmd_compare(&args, &cli.format),
    }
}

fn cmd_compare(args: &CompareArgs, format: &OutputFormat) -> anyhow::Result<u8> {
    let run = run_compare(args)?;

    match format {
        OutputFormat::Text => {
            print!("{}", run.report.render_text());
            for preview in &run.previews {
                print!("{}", render_preview(preview));
            }
        }
        OutputFormat::Json => println!("{}", run.report.render_json()?),
    }

    Ok(run.exit_code())
}

#[derive(Debug)]
struct CompareRun {
    report: Report,
    previews: Vec<PatchPreview>,
    /// Any parse or IO failure along the way, even a per-file one.
    failed: bool,
}

impl CompareRun {
    fn exit_code(&self) -> u8 {
        if self.failed {
            return exit_codes::FAILURE;
        }
        let unpatched = self.report.candidates.iter().any(|c| {
            matches!(
                c.outcome,
                CandidateOutcome::MissingKeys { patched: false, .. }
            )
        });
        if unpatched {
            exit_codes::MISSING_KEYS
        } else {
            exit_codes::CLEAN
        }
    }
}

fn run_compare(args: &CompareArgs) -> anyhow::Result<CompareRun> {
    let reference =
        loader::load_document(&args.reference).context("reference file is unusable")?;
    let placeholder = Value::String(args.placeholder.clone());

    let candidate_paths = loader::expand_candidates(&args.candidates, &reference.path);
    debug!(
        reference = %reference.path.display(),
        candidates = candidate_paths.len(),
        "comparing"
    );

    let mut candidates = Vec::new();
    let mut previews = Vec::new();
    let mut failed = false;

    for path in candidate_paths {
        let file = path.display().to_string();
        let doc = match loader::load_document(&path) {
            Ok(doc) => doc,
            Err(err) => {
                warn!("skipping {}: {:#}", path.display(), err);
                failed = true;
                candidates.push(CandidateReport {
                    file,
                    outcome: CandidateOutcome::Skipped {
                        reason: format!("{err:#}"),
                    },
                });
                continue;
            }
        };

        let diff = missing_keys(&reference.flat, &doc.flat);
        if diff.is_empty() {
            candidates.push(CandidateReport {
                file,
                outcome: CandidateOutcome::Complete,
            });
            continue;
        }

        let mut patched = false;
        let mut snapshots = None;
        if args.fix {
            match fix_candidate(&doc, &diff.missing, &placeholder) {
                Ok((preview, pair)) => {
                    previews.push(preview);
                    snapshots = Some(pair);
                    patched = true;
                }
                Err(err) => {
                    // The missing-key report for this file stands; only its
                    // preview is abandoned.
                    warn!("no preview for {}: {:#}", path.display(), err);
                    failed = true;
                }
            }
        }

        candidates.push(CandidateReport {
            file,
            outcome: CandidateOutcome::MissingKeys {
                missing: diff.missing,
                patched,
                snapshots,
            },
        });
    }

    Ok(CompareRun {
        report: Report {
            reference: reference.path.display().to_string(),
            candidates,
        },
        previews,
        failed,
    })
}

/// Patch a candidate in memory and write its snapshot pair.
///
/// Either both snapshot files exist afterwards or neither does: a failed
/// write of the patched side removes the already-written original, so a
/// preview can never reference a half-written pair. The candidate file
/// itself is never modified.
fn fix_candidate(
    doc: &Document,
    missing: &[String],
    placeholder: &Value,
) -> anyhow::Result<(PatchPreview, SnapshotPair)> {
    let patched = patch_missing(&doc.tree, missing, placeholder)?;

    let title = doc
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| doc.path.display().to_string());
    let preview = PatchPreview::build(title, doc.text.clone(), &patched)?;

    let before_path = snapshot_path(&doc.path, "orig");
    let after_path = snapshot_path(&doc.path, "patched");

    fs::write(&before_path, &preview.before)
        .with_context(|| format!("failed to write {}", before_path.display()))?;
    if let Err(err) = fs::write(&after_path, &preview.after) {
        let _ = fs::remove_file(&before_path);
        return Err(err).with_context(|| format!("failed to write {}", after_path.display()));
    }

    Ok((
        preview,
        SnapshotPair {
            before: before_path.display().to_string(),
            after: after_path.display().to_string(),
        },
    ))
}

// de.json -> de.orig.json / de.patched.json, next to the candidate.
fn snapshot_path(path: &Path, tag: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".into());
    path.with_file_name(format!("{stem}.{tag}.json"))
}

fn render_preview(preview: &PatchPreview) -> String {
    let diff = diff_text(&preview.before, &preview.after);

    let mut out = String::new();
    out.push_str(&format!("\n--- {}\n", preview.title));
    out.push_str(&format!("+++ {} (patched)\n", preview.title));
    for hunk in &diff.hunks {
        out.push_str(&format!("{}\n", hunk.header().cyan()));
        for line in &hunk.lines {
            match line {
                DiffLine::Context(text) => out.push_str(&format!(" {text}\n")),
                DiffLine::Added(text) => {
                    out.push_str(&format!("{}\n", format!("+{text}").green()));
                }
                DiffLine::Removed(text) => {
                    out.push_str(&format!("{}\n", format!("-{text}").red()));
                }
            }
        }
    }
    out
}
