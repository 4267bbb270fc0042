//! # Progress Model
//!
//! The output of the tracker: one [`ProgressTask`] per [`Stage`], plus the
//! projection that decides which of them a reader sees, and in what order.

use serde::{Deserialize, Serialize};

use lpa_core::{LpaError, Timestamp};

/// The status of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl TaskState {
    pub fn is_not_started(&self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "notStarted",
            Self::InProgress => "inProgress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskState {
    type Err = LpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "notStarted" => Ok(Self::NotStarted),
            "inProgress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(LpaError::UnknownTaskState(other.to_string())),
        }
    }
}

/// One row of the progress list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressTask {
    pub state: TaskState,
    pub label: String,
    /// When the stage was completed, where the snapshot records it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<Timestamp>,
}

impl ProgressTask {
    pub(crate) fn labelled(label: String) -> Self {
        Self {
            label,
            ..Default::default()
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }
}

/// A named stage of the journey, in its fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    FeeEvidenceSubmitted,
    FeeEvidenceNotification,
    FeeEvidenceApproved,
    Paid,
    ConfirmedId,
    DonorSigned,
    CertificateProviderSigned,
    AttorneysSigned,
    LpaSubmitted,
    NoticesOfIntentSent,
    StatutoryWaitingPeriod,
    LpaRegistered,
}

impl Stage {
    /// Every stage, in evaluation order.
    pub const ALL: [Stage; 12] = [
        Stage::FeeEvidenceSubmitted,
        Stage::FeeEvidenceNotification,
        Stage::FeeEvidenceApproved,
        Stage::Paid,
        Stage::ConfirmedId,
        Stage::DonorSigned,
        Stage::CertificateProviderSigned,
        Stage::AttorneysSigned,
        Stage::LpaSubmitted,
        Stage::NoticesOfIntentSent,
        Stage::StatutoryWaitingPeriod,
        Stage::LpaRegistered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FeeEvidenceSubmitted => "feeEvidenceSubmitted",
            Self::FeeEvidenceNotification => "feeEvidenceNotification",
            Self::FeeEvidenceApproved => "feeEvidenceApproved",
            Self::Paid => "paid",
            Self::ConfirmedId => "confirmedId",
            Self::DonorSigned => "donorSigned",
            Self::CertificateProviderSigned => "certificateProviderSigned",
            Self::AttorneysSigned => "attorneysSigned",
            Self::LpaSubmitted => "lpaSubmitted",
            Self::NoticesOfIntentSent => "noticesOfIntentSent",
            Self::StatutoryWaitingPeriod => "statutoryWaitingPeriod",
            Self::LpaRegistered => "lpaRegistered",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The state of every stage of an LPA.
///
/// Built by [`crate::ProgressTracker`]. All stages exist for every LPA;
/// [`Progress::to_slice`] picks out the ones that apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub(crate) is_organisation: bool,
    pub fee_evidence_submitted: ProgressTask,
    pub fee_evidence_notification: ProgressTask,
    pub fee_evidence_approved: ProgressTask,
    pub paid: ProgressTask,
    pub confirmed_id: ProgressTask,
    pub donor_signed: ProgressTask,
    pub certificate_provider_signed: ProgressTask,
    pub attorneys_signed: ProgressTask,
    pub lpa_submitted: ProgressTask,
    pub notices_of_intent_sent: ProgressTask,
    pub statutory_waiting_period: ProgressTask,
    pub lpa_registered: ProgressTask,
}

impl Progress {
    /// Whether the LPA is being made by an organisation for the donor.
    pub fn is_organisation(&self) -> bool {
        self.is_organisation
    }

    pub fn task(&self, stage: Stage) -> &ProgressTask {
        match stage {
            Stage::FeeEvidenceSubmitted => &self.fee_evidence_submitted,
            Stage::FeeEvidenceNotification => &self.fee_evidence_notification,
            Stage::FeeEvidenceApproved => &self.fee_evidence_approved,
            Stage::Paid => &self.paid,
            Stage::ConfirmedId => &self.confirmed_id,
            Stage::DonorSigned => &self.donor_signed,
            Stage::CertificateProviderSigned => &self.certificate_provider_signed,
            Stage::AttorneysSigned => &self.attorneys_signed,
            Stage::LpaSubmitted => &self.lpa_submitted,
            Stage::NoticesOfIntentSent => &self.notices_of_intent_sent,
            Stage::StatutoryWaitingPeriod => &self.statutory_waiting_period,
            Stage::LpaRegistered => &self.lpa_registered,
        }
    }

    pub(crate) fn task_mut(&mut self, stage: Stage) -> &mut ProgressTask {
        match stage {
            Stage::FeeEvidenceSubmitted => &mut self.fee_evidence_submitted,
            Stage::FeeEvidenceNotification => &mut self.fee_evidence_notification,
            Stage::FeeEvidenceApproved => &mut self.fee_evidence_approved,
            Stage::Paid => &mut self.paid,
            Stage::ConfirmedId => &mut self.confirmed_id,
            Stage::DonorSigned => &mut self.donor_signed,
            Stage::CertificateProviderSigned => &mut self.certificate_provider_signed,
            Stage::AttorneysSigned => &mut self.attorneys_signed,
            Stage::LpaSubmitted => &mut self.lpa_submitted,
            Stage::NoticesOfIntentSent => &mut self.notices_of_intent_sent,
            Stage::StatutoryWaitingPeriod => &mut self.statutory_waiting_period,
            Stage::LpaRegistered => &mut self.lpa_registered,
        }
    }

    /// The stages shown to the reader, in display order.
    ///
    /// - Fee evidence stages appear only once evidence has been submitted.
    ///   A donor who signed while their evidence was still being decided
    ///   sees their signature straight after the submission.
    /// - `Paid` and `ConfirmedId` appear only for organisation donors.
    /// - `NoticesOfIntentSent` appears only once completed.
    pub fn visible_stages(&self) -> Vec<Stage> {
        let mut stages = Vec::with_capacity(Stage::ALL.len());
        let mut donor_signed_placed = false;

        if self.fee_evidence_submitted.is_completed() {
            stages.push(Stage::FeeEvidenceSubmitted);

            if self.donor_signed.is_completed()
                && !(self.fee_evidence_approved.is_completed() && self.notified_before_signing())
            {
                stages.push(Stage::DonorSigned);
                donor_signed_placed = true;
            }

            if self.fee_evidence_notification.is_completed() {
                stages.push(Stage::FeeEvidenceNotification);
            }

            stages.push(Stage::FeeEvidenceApproved);
        }

        if self.is_organisation {
            stages.push(Stage::Paid);
            stages.push(Stage::ConfirmedId);
        }

        if !donor_signed_placed {
            stages.push(Stage::DonorSigned);
        }

        stages.push(Stage::CertificateProviderSigned);
        stages.push(Stage::AttorneysSigned);
        stages.push(Stage::LpaSubmitted);

        if self.notices_of_intent_sent.is_completed() {
            stages.push(Stage::NoticesOfIntentSent);
        }

        stages.push(Stage::StatutoryWaitingPeriod);
        stages.push(Stage::LpaRegistered);
        stages
    }

    /// The visible tasks, in display order.
    pub fn to_slice(&self) -> Vec<ProgressTask> {
        self.visible_stages()
            .into_iter()
            .map(|stage| self.task(stage).clone())
            .collect()
    }

    fn notified_before_signing(&self) -> bool {
        if !self.fee_evidence_notification.is_completed() {
            return false;
        }

        match (
            self.fee_evidence_notification.completed,
            self.donor_signed.completed,
        ) {
            (Some(notified), Some(signed)) => notified < signed,
            _ => false,
        }
    }
}
