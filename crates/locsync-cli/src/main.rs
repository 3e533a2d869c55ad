use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod exit_codes;
mod loader;
mod report;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let max_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();

    match commands::run_command(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_codes::FAILURE)
        }
    }
}
