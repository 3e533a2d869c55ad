use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use locsync_diff::DEFAULT_PLACEHOLDER;

#[derive(Parser)]
#[command(
    name = "locsync",
    about = "Localization file completeness checker",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare candidates against a reference file and report missing keys
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// Reference file whose key set is the ground truth
    pub reference: PathBuf,

    /// Candidate files, or directories scanned for .json files
    #[arg(required = true)]
    pub candidates: Vec<PathBuf>,

    /// Write before/after preview snapshots with missing keys filled in
    #[arg(long)]
    pub fix: bool,

    /// Placeholder value inserted for missing keys
    #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,
}
