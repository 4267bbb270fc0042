//! # Progress Tracker
//!
//! Walks an LPA's milestones in order and reports how far it has got.
//!
//! Evaluation is a single pass with early return: each gate either marks
//! its stage completed and moves the next stage to in progress, or leaves
//! its stage in progress and stops. No later stage is touched once a gate
//! fails, which is what keeps the visible list monotonic.

use lpa_core::{Lpa, PaymentContext, SignatureRule, StandardSignatureRule, Timestamp};
use tracing::debug;

use crate::localize::{Localizer, Message};
use crate::progress::{Progress, ProgressTask, Stage, TaskState};

/// Derives [`Progress`] from an LPA snapshot.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker<L, R = StandardSignatureRule> {
    localizer: L,
    signature_rule: R,
}

impl<L: Localizer> ProgressTracker<L> {
    /// A tracker using the register's standard attorney signature rule.
    pub fn new(localizer: L) -> Self {
        Self {
            localizer,
            signature_rule: StandardSignatureRule,
        }
    }
}

impl<L: Localizer, R: SignatureRule> ProgressTracker<L, R> {
    /// A tracker with a custom rule for when all attorneys have signed.
    pub fn with_signature_rule(localizer: L, signature_rule: R) -> Self {
        Self {
            localizer,
            signature_rule,
        }
    }

    /// Progress of an LPA paid in full, with no fee evidence involved.
    pub fn progress(&self, lpa: &Lpa) -> Progress {
        self.progress_with(lpa, &PaymentContext::default())
    }

    /// Progress of an LPA, including fee evidence stages for donors
    /// applying for a reduced or waived fee.
    pub fn progress_with(&self, lpa: &Lpa, payment: &PaymentContext) -> Progress {
        let mut progress = self.initial(lpa, payment);
        let stopped_at = self.advance(&mut progress, lpa, payment);

        debug!(
            lpa_uid = lpa.uid.as_ref().map(|uid| uid.as_str()),
            is_organisation = lpa.is_organisation_donor,
            stopped_at = %stopped_at,
            "derived lpa progress"
        );

        progress
    }

    /// Walk the gates, returning the stage at which evaluation stopped.
    fn advance(&self, progress: &mut Progress, lpa: &Lpa, payment: &PaymentContext) -> Stage {
        if payment.fee_type.requires_evidence() {
            complete(progress, Stage::FeeEvidenceSubmitted);

            if let Some(notification) = &payment.notifications.fee_evidence {
                let task = progress.task_mut(Stage::FeeEvidenceNotification);
                task.state = TaskState::Completed;
                task.completed = Some(notification.received);
            }

            if !payment.pay_for_lpa.is_approved() {
                start(progress, Stage::FeeEvidenceApproved);

                // A donor may sign while their evidence is still being looked at.
                if let Some(signed_at) = lpa.signed_at {
                    complete_at(progress, Stage::DonorSigned, signed_at);
                }

                return Stage::FeeEvidenceApproved;
            }

            complete(progress, Stage::FeeEvidenceApproved);
        }

        if lpa.is_organisation_donor {
            start(progress, Stage::Paid);
            if !lpa.paid {
                return Stage::Paid;
            }
            complete(progress, Stage::Paid);

            start(progress, Stage::ConfirmedId);
            if lpa.donor.identity_check.is_none() {
                return Stage::ConfirmedId;
            }
            complete(progress, Stage::ConfirmedId);
        }

        start(progress, Stage::DonorSigned);
        let Some(signed_at) = lpa.signed_at else {
            return Stage::DonorSigned;
        };
        complete_at(progress, Stage::DonorSigned, signed_at);

        start(progress, Stage::CertificateProviderSigned);
        if lpa.certificate_provider.signed_at.is_none() {
            return Stage::CertificateProviderSigned;
        }
        complete(progress, Stage::CertificateProviderSigned);

        start(progress, Stage::AttorneysSigned);
        if !self.signature_rule.all_attorneys_signed(lpa) {
            return Stage::AttorneysSigned;
        }
        complete(progress, Stage::AttorneysSigned);

        start(progress, Stage::LpaSubmitted);
        if !lpa.submitted {
            return Stage::LpaSubmitted;
        }
        complete(progress, Stage::LpaSubmitted);

        if lpa.perfect_at.is_none() {
            return Stage::NoticesOfIntentSent;
        }
        complete(progress, Stage::NoticesOfIntentSent);

        start(progress, Stage::StatutoryWaitingPeriod);
        if lpa.registered_at.is_none() {
            return Stage::StatutoryWaitingPeriod;
        }
        complete(progress, Stage::StatutoryWaitingPeriod);
        complete(progress, Stage::LpaRegistered);

        Stage::LpaRegistered
    }

    /// All stages not started, with the labels for this kind of donor.
    fn initial(&self, lpa: &Lpa, payment: &PaymentContext) -> Progress {
        let l = &self.localizer;
        let label = |message: Message| ProgressTask::labelled(l.render(&message));

        let mut progress = if lpa.is_organisation_donor {
            let donor_full_name = lpa.donor.full_name();

            Progress {
                is_organisation: true,
                paid: label(Message::DonorFullNameHasPaid {
                    donor_full_name: donor_full_name.clone(),
                }),
                confirmed_id: label(Message::DonorFullNameHasConfirmedTheirIdentity {
                    donor_full_name: donor_full_name.clone(),
                }),
                donor_signed: label(Message::DonorFullNameHasSignedTheLpa { donor_full_name }),
                certificate_provider_signed: label(Message::TheCertificateProviderHasDeclared),
                attorneys_signed: label(Message::AllAttorneysHaveSignedTheLpa),
                lpa_submitted: label(Message::OpgHasReceivedTheLpa),
                statutory_waiting_period: label(Message::TheWaitingPeriodHasStarted),
                lpa_registered: label(Message::TheLpaHasBeenRegistered),
                ..Default::default()
            }
        } else {
            let certificate_provider = if lpa.certificate_provider.first_names.is_empty() {
                Message::YourCertificateProviderHasDeclared
            } else {
                Message::CertificateProviderHasDeclared {
                    certificate_provider_full_name: lpa.certificate_provider.full_name(),
                }
            };

            Progress {
                is_organisation: false,
                donor_signed: label(Message::YouveSignedYourLpa),
                certificate_provider_signed: label(certificate_provider),
                attorneys_signed: label(Message::AttorneysHaveDeclared {
                    count: lpa.attorneys.len(),
                }),
                lpa_submitted: label(Message::WeHaveReceivedYourLpa),
                statutory_waiting_period: label(Message::YourWaitingPeriodHasStarted),
                lpa_registered: label(Message::YourLpaHasBeenRegistered),
                ..Default::default()
            }
        };

        if payment.fee_type.requires_evidence() {
            self.label_fee_evidence(&mut progress, lpa, payment);
        }

        if let Some(perfect_at) = &lpa.perfect_at {
            let sent_on = l.format_date(perfect_at);
            progress.notices_of_intent_sent.label = l.render(&if lpa.is_organisation_donor {
                Message::WeSentAnEmailTheLpaIsReadyToRegister { sent_on }
            } else {
                Message::WeSentAnEmailYourLpaIsReadyToRegister { sent_on }
            });
        }

        progress
    }

    fn label_fee_evidence(&self, progress: &mut Progress, lpa: &Lpa, payment: &PaymentContext) {
        let l = &self.localizer;

        if lpa.is_organisation_donor {
            let donor_full_name = lpa.donor.full_name();
            let donor_full_name_possessive = l.possessive(&donor_full_name);

            progress.fee_evidence_submitted.label =
                l.render(&Message::DonorNamesLpaFeeEvidenceHasBeenSubmitted {
                    donor_full_name_possessive: donor_full_name_possessive.clone(),
                });
            progress.fee_evidence_approved.label =
                l.render(&Message::DonorNamesLpaFeeEvidenceHasBeenApproved {
                    donor_full_name_possessive,
                });

            if let Some(notification) = &payment.notifications.fee_evidence {
                progress.fee_evidence_notification.label =
                    l.render(&Message::WeEmailedDonorNameOnAbout {
                        on: l.format_date(&notification.received),
                        about: l.render(&Message::TheFee),
                        donor_full_name,
                    });
            }
        } else {
            progress.fee_evidence_submitted.label =
                l.render(&Message::YourLpaFeeEvidenceHasBeenSubmitted);
            progress.fee_evidence_approved.label =
                l.render(&Message::YourLpaFeeEvidenceHasBeenApproved);

            if let Some(notification) = &payment.notifications.fee_evidence {
                progress.fee_evidence_notification.label = l.render(&Message::WeEmailedYouOnAbout {
                    on: l.format_date(&notification.received),
                    about: l.render(&Message::YourFee),
                });
            }
        }
    }
}

fn start(progress: &mut Progress, stage: Stage) {
    progress.task_mut(stage).state = TaskState::InProgress;
}

fn complete(progress: &mut Progress, stage: Stage) {
    progress.task_mut(stage).state = TaskState::Completed;
}

fn complete_at(progress: &mut Progress, stage: Stage, at: Timestamp) {
    let task = progress.task_mut(stage);
    task.state = TaskState::Completed;
    task.completed = Some(at);
}
