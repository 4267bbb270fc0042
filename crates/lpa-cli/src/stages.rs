//! # Stages Subcommand
//!
//! Lists every progress stage in evaluation order.

use anyhow::{Context, Result};
use clap::Args;

use lpa_progress::Stage;

use crate::OutputFormat;

/// Arguments for the `lpa stages` subcommand.
#[derive(Args, Debug)]
pub struct StagesArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the stages subcommand.
pub fn run_stages(args: &StagesArgs) -> Result<u8> {
    println!("{}", render(args.format)?);
    Ok(0)
}

fn render(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(Stage::ALL
            .iter()
            .map(Stage::as_str)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string(&Stage::ALL).context("serializing stages"),
    }
}
