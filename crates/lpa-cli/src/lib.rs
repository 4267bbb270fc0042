//! # lpa-cli — LPA Progress Command-Line Interface
//!
//! Provides the `lpa` binary, which renders the progress list for an LPA
//! snapshot held in a JSON or YAML file.
//!
//! ## Subcommands
//!
//! - `lpa progress <SNAPSHOT>` — Show the stages a reader would see, with
//!   their states and labels.
//! - `lpa stages` — List every stage in evaluation order.
//!
//! ```bash
//! lpa progress lpa.json
//! lpa progress lpa.yaml --fee-type halfFee --payment pending --format json
//! lpa --log-format json progress lpa.json --show-translation-keys
//! ```
//!
//! Results go to stdout and logs to stderr, so output can be piped.

pub mod config;
pub mod progress;
pub mod stages;

use clap::ValueEnum;

/// How a subcommand writes its result to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per entry.
    #[default]
    Text,
    /// A JSON array.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text", false).unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("json", false).unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml", false).is_err());
    }
}
