//! # lpa CLI entry point
//!
//! Parses command-line arguments, installs logging and dispatches to
//! subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use lpa_cli::config::{init_tracing, CliConfig};
use lpa_cli::progress::{run_progress, ProgressArgs};
use lpa_cli::stages::{run_stages, StagesArgs};

/// LPA progress tracker.
///
/// Shows how far a lasting power of attorney has got, from the donor
/// signing to registration.
#[derive(Parser, Debug)]
#[command(name = "lpa", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: CliConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the progress list for an LPA snapshot.
    Progress(ProgressArgs),

    /// List every stage in evaluation order.
    Stages(StagesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli.config) {
        eprintln!("error: {e:#}");
        return ExitCode::from(2);
    }

    tracing::debug!(log_format = ?cli.config.log_format, "lpa CLI starting");

    let result = match cli.command {
        Commands::Progress(args) => run_progress(&args),
        Commands::Stages(args) => run_stages(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
