//! # Progress Labels
//!
//! Every label the tracker can produce is a [`Message`] variant, with its
//! named arguments as fields. A [`Localizer`] turns a message into display
//! text. Adding a label means adding a variant, and every localizer then
//! fails to compile until it handles it.

use lpa_core::Timestamp;

/// A label on the progress list, with the values it interpolates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Self-service donor.
    YouveSignedYourLpa,
    YourCertificateProviderHasDeclared,
    CertificateProviderHasDeclared { certificate_provider_full_name: String },
    AttorneysHaveDeclared { count: usize },
    WeHaveReceivedYourLpa,
    WeSentAnEmailYourLpaIsReadyToRegister { sent_on: String },
    YourWaitingPeriodHasStarted,
    YourLpaHasBeenRegistered,
    YourLpaFeeEvidenceHasBeenSubmitted,
    YourLpaFeeEvidenceHasBeenApproved,
    YourFee,
    WeEmailedYouOnAbout { on: String, about: String },

    // Organisation supporter acting for the donor.
    DonorFullNameHasPaid { donor_full_name: String },
    DonorFullNameHasConfirmedTheirIdentity { donor_full_name: String },
    DonorFullNameHasSignedTheLpa { donor_full_name: String },
    TheCertificateProviderHasDeclared,
    AllAttorneysHaveSignedTheLpa,
    OpgHasReceivedTheLpa,
    WeSentAnEmailTheLpaIsReadyToRegister { sent_on: String },
    TheWaitingPeriodHasStarted,
    TheLpaHasBeenRegistered,
    DonorNamesLpaFeeEvidenceHasBeenSubmitted { donor_full_name_possessive: String },
    DonorNamesLpaFeeEvidenceHasBeenApproved { donor_full_name_possessive: String },
    TheFee,
    WeEmailedDonorNameOnAbout { on: String, about: String, donor_full_name: String },
}

impl Message {
    /// The translation key for this message.
    pub fn key(&self) -> &'static str {
        match self {
            Self::YouveSignedYourLpa => "youveSignedYourLpa",
            Self::YourCertificateProviderHasDeclared => "yourCertificateProviderHasDeclared",
            Self::CertificateProviderHasDeclared { .. } => "certificateProviderHasDeclared",
            Self::AttorneysHaveDeclared { .. } => "attorneysHaveDeclared",
            Self::WeHaveReceivedYourLpa => "weHaveReceivedYourLpa",
            Self::WeSentAnEmailYourLpaIsReadyToRegister { .. } => {
                "weSentAnEmailYourLpaIsReadyToRegister"
            }
            Self::YourWaitingPeriodHasStarted => "yourWaitingPeriodHasStarted",
            Self::YourLpaHasBeenRegistered => "yourLpaHasBeenRegistered",
            Self::YourLpaFeeEvidenceHasBeenSubmitted => "yourLPAFeeEvidenceHasBeenSubmitted",
            Self::YourLpaFeeEvidenceHasBeenApproved => "yourLPAFeeEvidenceHasBeenApproved",
            Self::YourFee => "yourFee",
            Self::WeEmailedYouOnAbout { .. } => "weEmailedYouOnAbout",
            Self::DonorFullNameHasPaid { .. } => "donorFullNameHasPaid",
            Self::DonorFullNameHasConfirmedTheirIdentity { .. } => {
                "donorFullNameHasConfirmedTheirIdentity"
            }
            Self::DonorFullNameHasSignedTheLpa { .. } => "donorFullNameHasSignedTheLPA",
            Self::TheCertificateProviderHasDeclared => "theCertificateProviderHasDeclared",
            Self::AllAttorneysHaveSignedTheLpa => "allAttorneysHaveSignedTheLpa",
            Self::OpgHasReceivedTheLpa => "opgHasReceivedTheLPA",
            Self::WeSentAnEmailTheLpaIsReadyToRegister { .. } => {
                "weSentAnEmailTheLpaIsReadyToRegister"
            }
            Self::TheWaitingPeriodHasStarted => "theWaitingPeriodHasStarted",
            Self::TheLpaHasBeenRegistered => "theLpaHasBeenRegistered",
            Self::DonorNamesLpaFeeEvidenceHasBeenSubmitted { .. } => {
                "donorNamesLPAFeeEvidenceHasBeenSubmitted"
            }
            Self::DonorNamesLpaFeeEvidenceHasBeenApproved { .. } => {
                "donorNamesLPAFeeEvidenceHasBeenApproved"
            }
            Self::TheFee => "theFee",
            Self::WeEmailedDonorNameOnAbout { .. } => "weEmailedDonorNameOnAbout",
        }
    }

    /// Named arguments, in the order they appear in the message.
    pub fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::CertificateProviderHasDeclared {
                certificate_provider_full_name,
            } => vec![(
                "CertificateProviderFullName",
                certificate_provider_full_name.clone(),
            )],
            Self::AttorneysHaveDeclared { count } => vec![("Count", count.to_string())],
            Self::WeSentAnEmailYourLpaIsReadyToRegister { sent_on }
            | Self::WeSentAnEmailTheLpaIsReadyToRegister { sent_on } => {
                vec![("SentOn", sent_on.clone())]
            }
            Self::WeEmailedYouOnAbout { on, about } => {
                vec![("On", on.clone()), ("About", about.clone())]
            }
            Self::DonorFullNameHasPaid { donor_full_name }
            | Self::DonorFullNameHasConfirmedTheirIdentity { donor_full_name }
            | Self::DonorFullNameHasSignedTheLpa { donor_full_name } => {
                vec![("DonorFullName", donor_full_name.clone())]
            }
            Self::DonorNamesLpaFeeEvidenceHasBeenSubmitted {
                donor_full_name_possessive,
            }
            | Self::DonorNamesLpaFeeEvidenceHasBeenApproved {
                donor_full_name_possessive,
            } => vec![(
                "DonorFullNamePossessive",
                donor_full_name_possessive.clone(),
            )],
            Self::WeEmailedDonorNameOnAbout {
                on,
                about,
                donor_full_name,
            } => vec![
                ("DonorFullName", donor_full_name.clone()),
                ("On", on.clone()),
                ("About", about.clone()),
            ],
            Self::YouveSignedYourLpa
            | Self::YourCertificateProviderHasDeclared
            | Self::WeHaveReceivedYourLpa
            | Self::YourWaitingPeriodHasStarted
            | Self::YourLpaHasBeenRegistered
            | Self::YourLpaFeeEvidenceHasBeenSubmitted
            | Self::YourLpaFeeEvidenceHasBeenApproved
            | Self::YourFee
            | Self::TheCertificateProviderHasDeclared
            | Self::AllAttorneysHaveSignedTheLpa
            | Self::OpgHasReceivedTheLpa
            | Self::TheWaitingPeriodHasStarted
            | Self::TheLpaHasBeenRegistered
            | Self::TheFee => Vec::new(),
        }
    }
}

/// Renders messages, dates and names for display.
pub trait Localizer {
    fn render(&self, message: &Message) -> String;

    fn format_date(&self, ts: &Timestamp) -> String;

    /// The possessive form of a name, e.g. "Sam’s".
    fn possessive(&self, name: &str) -> String;
}

impl<L: Localizer + ?Sized> Localizer for &L {
    fn render(&self, message: &Message) -> String {
        (**self).render(message)
    }

    fn format_date(&self, ts: &Timestamp) -> String {
        (**self).format_date(ts)
    }

    fn possessive(&self, name: &str) -> String {
        (**self).possessive(name)
    }
}

/// English labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn render(&self, message: &Message) -> String {
        match message {
            Message::YouveSignedYourLpa => "You’ve signed your LPA".to_string(),
            Message::YourCertificateProviderHasDeclared => {
                "Your certificate provider has provided their certificate".to_string()
            }
            Message::CertificateProviderHasDeclared {
                certificate_provider_full_name,
            } => format!("{certificate_provider_full_name} has provided their certificate"),
            Message::AttorneysHaveDeclared { count: 1 } => {
                "Your attorney has signed your LPA".to_string()
            }
            Message::AttorneysHaveDeclared { .. } => {
                "Your attorneys have signed your LPA".to_string()
            }
            Message::WeHaveReceivedYourLpa => "We have received your LPA".to_string(),
            Message::WeSentAnEmailYourLpaIsReadyToRegister { sent_on } => {
                format!("We sent an email on {sent_on} to say your LPA is ready to register")
            }
            Message::YourWaitingPeriodHasStarted => {
                "Your 4-week waiting period has started".to_string()
            }
            Message::YourLpaHasBeenRegistered => "Your LPA has been registered".to_string(),
            Message::YourLpaFeeEvidenceHasBeenSubmitted => {
                "Your LPA fee evidence has been submitted".to_string()
            }
            Message::YourLpaFeeEvidenceHasBeenApproved => {
                "Your LPA fee evidence has been approved".to_string()
            }
            Message::YourFee => "your fee".to_string(),
            Message::WeEmailedYouOnAbout { on, about } => {
                format!("We emailed you on {on} about {about}")
            }
            Message::DonorFullNameHasPaid { donor_full_name } => {
                format!("{donor_full_name} has paid")
            }
            Message::DonorFullNameHasConfirmedTheirIdentity { donor_full_name } => {
                format!("{donor_full_name} has confirmed their identity")
            }
            Message::DonorFullNameHasSignedTheLpa { donor_full_name } => {
                format!("{donor_full_name} has signed the LPA")
            }
            Message::TheCertificateProviderHasDeclared => {
                "The certificate provider has provided their certificate".to_string()
            }
            Message::AllAttorneysHaveSignedTheLpa => "All attorneys have signed the LPA".to_string(),
            Message::OpgHasReceivedTheLpa => "OPG has received the LPA".to_string(),
            Message::WeSentAnEmailTheLpaIsReadyToRegister { sent_on } => {
                format!("We sent an email on {sent_on} to say the LPA is ready to register")
            }
            Message::TheWaitingPeriodHasStarted => {
                "The 4-week waiting period has started".to_string()
            }
            Message::TheLpaHasBeenRegistered => "The LPA has been registered".to_string(),
            Message::DonorNamesLpaFeeEvidenceHasBeenSubmitted {
                donor_full_name_possessive,
            } => format!("{donor_full_name_possessive} LPA fee evidence has been submitted"),
            Message::DonorNamesLpaFeeEvidenceHasBeenApproved {
                donor_full_name_possessive,
            } => format!("{donor_full_name_possessive} LPA fee evidence has been approved"),
            Message::TheFee => "the fee".to_string(),
            Message::WeEmailedDonorNameOnAbout {
                on,
                about,
                donor_full_name,
            } => format!("We emailed {donor_full_name} on {on} about {about}"),
        }
    }

    fn format_date(&self, ts: &Timestamp) -> String {
        ts.as_datetime().format("%-d %B %Y").to_string()
    }

    fn possessive(&self, name: &str) -> String {
        if name.ends_with('s') {
            format!("{name}’")
        } else {
            format!("{name}’s")
        }
    }
}

/// Renders each message as its translation key followed by its arguments,
/// e.g. `donorFullNameHasPaid{DonorFullName=Sam Smith}`. Dates render as
/// ISO 8601.
///
/// Used to review which label each stage resolved to without depending on
/// the wording of any language.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyLocalizer;

impl Localizer for KeyLocalizer {
    fn render(&self, message: &Message) -> String {
        let args = message.args();
        if args.is_empty() {
            return message.key().to_string();
        }

        let args = args
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}{{{args}}}", message.key())
    }

    fn format_date(&self, ts: &Timestamp) -> String {
        ts.to_iso8601()
    }

    fn possessive(&self, name: &str) -> String {
        format!("possessive({name})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_possessive() {
        assert_eq!(EnglishLocalizer.possessive("Sam Smith"), "Sam Smith’s");
        assert_eq!(EnglishLocalizer.possessive("James"), "James’");
    }

    #[test]
    fn test_english_format_date() {
        let ts = Timestamp::parse("2006-01-02T15:04:05Z").unwrap();
        assert_eq!(EnglishLocalizer.format_date(&ts), "2 January 2006");
    }

    #[test]
    fn test_english_attorney_count() {
        assert_eq!(
            EnglishLocalizer.render(&Message::AttorneysHaveDeclared { count: 1 }),
            "Your attorney has signed your LPA"
        );
        assert_eq!(
            EnglishLocalizer.render(&Message::AttorneysHaveDeclared { count: 3 }),
            "Your attorneys have signed your LPA"
        );
    }

    #[test]
    fn test_english_interpolation() {
        let text = EnglishLocalizer.render(&Message::WeEmailedDonorNameOnAbout {
            on: "3 March 2024".to_string(),
            about: EnglishLocalizer.render(&Message::TheFee),
            donor_full_name: "Sam Smith".to_string(),
        });
        assert_eq!(text, "We emailed Sam Smith on 3 March 2024 about the fee");
    }

    #[test]
    fn test_key_localizer_without_args() {
        assert_eq!(KeyLocalizer.render(&Message::OpgHasReceivedTheLpa), "opgHasReceivedTheLPA");
    }

    #[test]
    fn test_key_localizer_with_args() {
        let text = KeyLocalizer.render(&Message::WeEmailedYouOnAbout {
            on: "d".to_string(),
            about: "yourFee".to_string(),
        });
        assert_eq!(text, "weEmailedYouOnAbout{On=d, About=yourFee}");
    }

    #[test]
    fn test_localizer_through_reference() {
        let localizer: &dyn Localizer = &EnglishLocalizer;
        assert_eq!(localizer.render(&Message::TheFee), "the fee");
    }
}
