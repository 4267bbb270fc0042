//! # LPA Snapshot
//!
//! A read-only view of an LPA as held by the register: who is named on it,
//! and when each of them completed their part. The progress tracker never
//! mutates a snapshot; each actor's own journey owns those writes.
//!
//! Every field defaults, so a partially filled JSON or YAML document
//! deserializes to the corresponding zero state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LpaError;
use crate::identity::{ActorUid, LpaUid};
use crate::signing::{SignatureRule, StandardSignatureRule};
use crate::temporal::Timestamp;

/// An LPA and the milestones recorded against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lpa {
    pub uid: Option<LpaUid>,

    /// When the donor signed their LPA.
    pub signed_at: Option<Timestamp>,

    /// Set once the LPA has been sent to the register, or for paper
    /// applications once received.
    pub submitted: bool,

    /// When notices of intent were sent, starting the statutory waiting
    /// period.
    pub perfect_at: Option<Timestamp>,

    pub registered_at: Option<Timestamp>,

    /// Set once the payment task is complete.
    pub paid: bool,

    /// Set when the LPA is being made by a supporter working for an
    /// organisation on the donor's behalf.
    pub is_organisation_donor: bool,

    pub donor: Donor,
    pub certificate_provider: CertificateProvider,
    pub attorneys: Attorneys,
    pub replacement_attorneys: Attorneys,
}

impl Lpa {
    /// Whether every attorney, replacement attorney and trust corporation
    /// signatory has signed, under [`StandardSignatureRule`].
    pub fn all_attorneys_signed(&self) -> bool {
        StandardSignatureRule.all_attorneys_signed(self)
    }

    /// Parse a JSON snapshot.
    pub fn from_json(s: &str) -> Result<Self, LpaError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON snapshot file.
    pub fn from_json_file(path: &Path) -> Result<Self, LpaError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Donor {
    pub uid: ActorUid,
    pub first_names: String,
    pub last_name: String,
    pub identity_check: Option<IdentityCheck>,
}

impl Donor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_name)
    }
}

/// Outcome of a successful identity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityCheck {
    pub checked_at: Timestamp,
    #[serde(rename = "type", default)]
    pub check_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateProvider {
    pub uid: ActorUid,
    pub first_names: String,
    pub last_name: String,
    pub signed_at: Option<Timestamp>,
}

impl CertificateProvider {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_name)
    }
}

/// One group of attorneys: either the original attorneys or the
/// replacements, each of which may include one trust corporation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attorneys {
    pub attorneys: Vec<Attorney>,
    pub trust_corporation: Option<TrustCorporation>,
}

impl Attorneys {
    /// Number of attorneys in the group, counting a named trust
    /// corporation as one.
    pub fn len(&self) -> usize {
        self.attorneys.len() + usize::from(self.named_trust_corporation().is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The trust corporation, if one is actually appointed. Snapshots
    /// carry an unnamed placeholder when there is none.
    pub fn named_trust_corporation(&self) -> Option<&TrustCorporation> {
        self.trust_corporation
            .as_ref()
            .filter(|trust| !trust.name.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attorney {
    pub uid: ActorUid,
    pub first_names: String,
    pub last_name: String,
    pub signed_at: Option<Timestamp>,
}

/// A company acting as attorney. It signs through one or more signatories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrustCorporation {
    pub uid: ActorUid,
    pub name: String,
    pub company_number: String,
    pub signatories: Vec<TrustCorporationSignatory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrustCorporationSignatory {
    pub first_names: String,
    pub last_name: String,
    pub professional_title: String,
    pub signed_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_partial_snapshot() {
        let lpa = Lpa::from_json(
            r#"{
                "uid": "M-1111-2222-3333",
                "signedAt": "2024-03-01T10:00:00Z",
                "isOrganisationDonor": true,
                "donor": {"firstNames": "Sam", "lastName": "Smith"}
            }"#,
        )
        .unwrap();

        assert_eq!(lpa.uid.as_ref().map(LpaUid::as_str), Some("M-1111-2222-3333"));
        assert!(lpa.signed_at.is_some());
        assert!(lpa.is_organisation_donor);
        assert_eq!(lpa.donor.full_name(), "Sam Smith");
        assert!(!lpa.submitted);
        assert!(lpa.attorneys.is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_uid() {
        let err = Lpa::from_json(r#"{"uid": "not-a-uid"}"#).unwrap_err();
        assert!(matches!(err, LpaError::Serialization(_)));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = Lpa::from_json_file(Path::new("/nonexistent/lpa.json")).unwrap_err();
        assert!(matches!(err, LpaError::Io(_)));
    }

    #[test]
    fn test_full_names() {
        let donor = Donor {
            first_names: "Sam".to_string(),
            last_name: "Smith".to_string(),
            ..Default::default()
        };
        assert_eq!(donor.full_name(), "Sam Smith");

        let cp = CertificateProvider {
            first_names: "Charlie".to_string(),
            last_name: "Cooper".to_string(),
            ..Default::default()
        };
        assert_eq!(cp.full_name(), "Charlie Cooper");
    }

    #[test]
    fn test_attorneys_len_counts_named_trust_corporation() {
        let mut group = Attorneys {
            attorneys: vec![Attorney::default(), Attorney::default()],
            trust_corporation: None,
        };
        assert_eq!(group.len(), 2);

        group.trust_corporation = Some(TrustCorporation {
            name: "Trusty Ltd".to_string(),
            ..Default::default()
        });
        assert_eq!(group.len(), 3);
        assert!(!group.is_empty());
        assert!(Attorneys::default().is_empty());
    }

    #[test]
    fn test_unnamed_trust_corporation_is_not_counted() {
        let lpa = Lpa::from_json(
            r#"{"attorneys": {"attorneys": [], "trustCorporation": {"name": ""}}}"#,
        )
        .unwrap();

        assert!(lpa.attorneys.trust_corporation.is_some());
        assert!(lpa.attorneys.named_trust_corporation().is_none());
        assert_eq!(lpa.attorneys.len(), 0);
        assert!(lpa.attorneys.is_empty());
        assert!(!lpa.all_attorneys_signed());
    }

    #[test]
    fn test_partial_snapshot_deserializes() {
        let lpa: Lpa = serde_json::from_str(
            r#"{
                "uid": "M-1111-2222-3333",
                "signedAt": "2024-01-02T10:00:00Z",
                "donor": {"firstNames": "Sam", "lastName": "Smith"},
                "attorneys": {"attorneys": [{"signedAt": "2024-01-03T10:00:00Z"}]}
            }"#,
        )
        .unwrap();

        assert_eq!(lpa.uid.as_ref().map(LpaUid::as_str), Some("M-1111-2222-3333"));
        assert!(lpa.signed_at.is_some());
        assert!(!lpa.submitted);
        assert!(lpa.perfect_at.is_none());
        assert_eq!(lpa.donor.full_name(), "Sam Smith");
        assert_eq!(lpa.attorneys.len(), 1);
        assert!(lpa.replacement_attorneys.is_empty());
    }

    #[test]
    fn test_identity_check_type_field() {
        let check: IdentityCheck =
            serde_json::from_str(r#"{"checkedAt": "2024-01-02T10:00:00Z", "type": "one-login"}"#)
                .unwrap();
        assert_eq!(check.check_type, "one-login");
    }
}
