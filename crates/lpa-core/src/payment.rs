//! # Payment State
//!
//! The donor-side view of paying for an LPA. Donors on a reduced or waived
//! fee submit evidence, which is then approved or not; until it is, the
//! tracker holds the journey at the fee evidence stage.

use serde::{Deserialize, Serialize};

use crate::error::LpaError;
use crate::notification::Notifications;

/// The fee a donor has applied to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeeType {
    #[default]
    FullFee,
    HalfFee,
    QuarterFee,
    NoFee,
    HardshipFee,
    RepeatApplicationFee,
}

impl FeeType {
    /// Whether the donor must send evidence to qualify for this fee.
    pub fn requires_evidence(&self) -> bool {
        !matches!(self, Self::FullFee)
    }

    /// The camelCase name used in snapshots and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullFee => "fullFee",
            Self::HalfFee => "halfFee",
            Self::QuarterFee => "quarterFee",
            Self::NoFee => "noFee",
            Self::HardshipFee => "hardshipFee",
            Self::RepeatApplicationFee => "repeatApplicationFee",
        }
    }
}

impl std::fmt::Display for FeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FeeType {
    type Err = LpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullFee" => Ok(Self::FullFee),
            "halfFee" => Ok(Self::HalfFee),
            "quarterFee" => Ok(Self::QuarterFee),
            "noFee" => Ok(Self::NoFee),
            "hardshipFee" => Ok(Self::HardshipFee),
            "repeatApplicationFee" => Ok(Self::RepeatApplicationFee),
            other => Err(LpaError::UnknownFeeType(other.to_string())),
        }
    }
}

/// State of the donor's "pay for your LPA" task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentState {
    #[default]
    NotStarted,
    InProgress,
    Pending,
    MoreEvidenceRequired,
    Approved,
    Denied,
    Completed,
}

impl PaymentState {
    /// Whether the fee has been settled, either by approval of evidence or
    /// by payment in full.
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved | Self::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "notStarted",
            Self::InProgress => "inProgress",
            Self::Pending => "pending",
            Self::MoreEvidenceRequired => "moreEvidenceRequired",
            Self::Approved => "approved",
            Self::Denied => "denied",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for PaymentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentState {
    type Err = LpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "notStarted" => Ok(Self::NotStarted),
            "inProgress" => Ok(Self::InProgress),
            "pending" => Ok(Self::Pending),
            "moreEvidenceRequired" => Ok(Self::MoreEvidenceRequired),
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            "completed" => Ok(Self::Completed),
            other => Err(LpaError::UnknownPaymentState(other.to_string())),
        }
    }
}

/// Donor-provided payment details the tracker reads alongside the LPA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentContext {
    pub fee_type: FeeType,
    pub pay_for_lpa: PaymentState,
    pub notifications: Notifications,
}
