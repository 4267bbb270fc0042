//! Records of emails sent to the donor that the progress list reports on.

use serde::{Deserialize, Serialize};

use crate::temporal::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// When the email was received by the donor.
    pub received: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notifications {
    /// Sent when a decision about the donor's fee evidence needs their attention.
    pub fee_evidence: Option<Notification>,
}
