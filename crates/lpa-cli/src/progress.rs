//! # Progress Subcommand
//!
//! Reads an LPA snapshot and prints its progress list.
//!
//! ```text
//! $ lpa progress lpa.json
//! [completed]  You’ve signed your LPA
//! [inProgress] Charlie Cooper has provided their certificate
//! [notStarted] Your attorneys have signed your LPA
//! ...
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use lpa_core::{
    FeeType, Lpa, Notification, Notifications, PaymentContext, PaymentState, Timestamp,
};
use lpa_progress::{EnglishLocalizer, KeyLocalizer, Localizer, Progress, ProgressTracker};

use crate::OutputFormat;

/// Arguments for the `lpa progress` subcommand.
#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Path to the LPA snapshot (`.yaml`/`.yml` as YAML, otherwise JSON).
    pub snapshot: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// The fee the donor applied to pay, e.g. `halfFee`.
    #[arg(long, default_value_t = FeeType::FullFee)]
    pub fee_type: FeeType,

    /// State of the donor's payment task, e.g. `pending` or `approved`.
    #[arg(long, default_value_t = PaymentState::NotStarted)]
    pub payment: PaymentState,

    /// When the donor was emailed about their fee evidence (RFC 3339).
    #[arg(long)]
    pub fee_notified_at: Option<Timestamp>,

    /// Print translation keys and their arguments instead of English.
    #[arg(long)]
    pub show_translation_keys: bool,
}

impl ProgressArgs {
    /// The payment details given on the command line.
    pub fn payment_context(&self) -> PaymentContext {
        PaymentContext {
            fee_type: self.fee_type,
            pay_for_lpa: self.payment,
            notifications: Notifications {
                fee_evidence: self
                    .fee_notified_at
                    .map(|received| Notification { received }),
            },
        }
    }
}

/// Execute the progress subcommand.
pub fn run_progress(args: &ProgressArgs) -> Result<u8> {
    let lpa = load_snapshot(&args.snapshot)?;
    let payment = args.payment_context();

    let output = if args.show_translation_keys {
        render(&track(KeyLocalizer, &lpa, &payment), args.format)?
    } else {
        render(&track(EnglishLocalizer, &lpa, &payment), args.format)?
    };

    tracing::info!(
        snapshot = %args.snapshot.display(),
        fee_type = %args.fee_type,
        "rendered lpa progress"
    );

    println!("{output}");
    Ok(0)
}

fn track<L: Localizer>(localizer: L, lpa: &Lpa, payment: &PaymentContext) -> Progress {
    ProgressTracker::new(localizer).progress_with(lpa, payment)
}

/// Read a snapshot file, choosing the format by extension.
pub fn load_snapshot(path: &Path) -> Result<Lpa> {
    if is_yaml(path) {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("parsing YAML snapshot: {}", path.display()))
    } else {
        Lpa::from_json_file(path)
            .with_context(|| format!("loading JSON snapshot: {}", path.display()))
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}

/// Format the visible stages of `progress`.
pub fn render(progress: &Progress, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let lines: Vec<String> = progress
                .to_slice()
                .iter()
                .map(|task| format!("{:<12} {}", format!("[{}]", task.state), task.label))
                .collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(&progress.to_slice())
            .context("serializing progress"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT_JSON: &str = r#"{
        "signedAt": "2024-03-01T10:00:00Z",
        "certificateProvider": {"firstNames": "Charlie", "lastName": "Cooper"},
        "attorneys": {"attorneys": [{"firstNames": "Ada", "lastName": "Lovelace"}]}
    }"#;

    const SNAPSHOT_YAML: &str = "\
signedAt: 2024-03-01T10:00:00Z
certificateProvider:
  firstNames: Charlie
  lastName: Cooper
attorneys:
  attorneys:
    - firstNames: Ada
      lastName: Lovelace
";

    fn write_snapshot(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn args(snapshot: PathBuf) -> ProgressArgs {
        ProgressArgs {
            snapshot,
            format: OutputFormat::Text,
            fee_type: FeeType::FullFee,
            payment: PaymentState::NotStarted,
            fee_notified_at: None,
            show_translation_keys: false,
        }
    }

    #[test]
    fn load_json_snapshot() {
        let file = write_snapshot(".json", SNAPSHOT_JSON);
        let lpa = load_snapshot(file.path()).unwrap();
        assert!(lpa.signed_at.is_some());
        assert_eq!(lpa.attorneys.len(), 1);
    }

    #[test]
    fn load_yaml_snapshot_matches_json() {
        let json = write_snapshot(".json", SNAPSHOT_JSON);
        let yaml = write_snapshot(".yaml", SNAPSHOT_YAML);
        assert_eq!(
            load_snapshot(yaml.path()).unwrap(),
            load_snapshot(json.path()).unwrap()
        );
    }

    #[test]
    fn load_missing_snapshot_fails_with_path() {
        let err = load_snapshot(Path::new("/nonexistent/lpa.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/lpa.json"));
    }

    #[test]
    fn load_malformed_snapshot_fails() {
        let file = write_snapshot(".yml", "signedAt: [not, a, time]");
        let err = load_snapshot(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing YAML snapshot"));
    }

    #[test]
    fn yaml_detected_by_extension() {
        assert!(is_yaml(Path::new("lpa.yaml")));
        assert!(is_yaml(Path::new("dir/lpa.yml")));
        assert!(!is_yaml(Path::new("lpa.json")));
        assert!(!is_yaml(Path::new("lpa")));
    }

    #[test]
    fn render_text() {
        let lpa = Lpa::from_json(SNAPSHOT_JSON).unwrap();
        let progress = track(EnglishLocalizer, &lpa, &PaymentContext::default());
        let text = render(&progress, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "[completed]  You’ve signed your LPA");
        assert_eq!(
            lines[1],
            "[inProgress] Charlie Cooper has provided their certificate"
        );
        assert_eq!(lines[5], "[notStarted] Your LPA has been registered");
    }

    #[test]
    fn render_json() {
        let lpa = Lpa::from_json(SNAPSHOT_JSON).unwrap();
        let progress = track(KeyLocalizer, &lpa, &PaymentContext::default());
        let json = render(&progress, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["state"], "completed");
        assert_eq!(value[0]["label"], "youveSignedYourLpa");
        assert_eq!(value[0]["completed"], "2024-03-01T10:00:00Z");
        assert_eq!(value[1]["state"], "inProgress");
    }

    #[test]
    fn payment_context_from_args() {
        let mut args = args(PathBuf::from("lpa.json"));
        args.fee_type = FeeType::HalfFee;
        args.payment = PaymentState::Pending;
        args.fee_notified_at = Some(Timestamp::parse("2024-02-10T09:00:00Z").unwrap());

        let payment = args.payment_context();
        assert_eq!(payment.fee_type, FeeType::HalfFee);
        assert_eq!(payment.pay_for_lpa, PaymentState::Pending);
        assert!(payment.notifications.fee_evidence.is_some());
    }

    #[test]
    fn fee_evidence_rendered_first() {
        let lpa = Lpa::from_json(SNAPSHOT_JSON).unwrap();
        let mut args = args(PathBuf::from("lpa.json"));
        args.fee_type = FeeType::NoFee;
        args.payment = PaymentState::Pending;

        let progress = track(KeyLocalizer, &lpa, &args.payment_context());
        let text = render(&progress, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "[completed]  yourLPAFeeEvidenceHasBeenSubmitted");
        assert_eq!(lines[1], "[completed]  youveSignedYourLpa");
        assert_eq!(lines[2], "[inProgress] yourLPAFeeEvidenceHasBeenApproved");
    }

    #[test]
    fn run_progress_on_file() {
        let file = write_snapshot(".json", SNAPSHOT_JSON);
        let mut args = args(file.path().to_path_buf());
        args.format = OutputFormat::Json;
        args.show_translation_keys = true;
        assert_eq!(run_progress(&args).unwrap(), 0);
    }
}
