//! # CLI Configuration
//!
//! Global options, parsed once in `main` and passed down explicitly.
//! Each option can also be set from the environment.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct CliConfig {
    /// Log output format.
    #[arg(long, global = true, value_enum, env = "LPA_LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Log filter directives, e.g. `info` or `lpa_progress=debug`.
    #[arg(long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            log_filter: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Parse the log filter directives.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.log_filter)
            .with_context(|| format!("invalid log filter {:?}", self.log_filter))
    }
}

/// Install the global tracing subscriber, writing to stderr.
pub fn init_tracing(config: &CliConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_writer(std::io::stderr);

    let installed = match config.log_format {
        LogFormat::Pretty => builder.with_target(false).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.log_filter, "info");
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn module_filter_directives_parse() {
        let config = CliConfig {
            log_filter: "warn,lpa_progress=debug".to_string(),
            ..Default::default()
        };
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let config = CliConfig {
            log_filter: "lpa_progress=loud".to_string(),
            ..Default::default()
        };
        let err = config.env_filter().unwrap_err();
        assert!(format!("{err:#}").contains("invalid log filter"));
    }
}
