//! # Attorney Signature Completeness
//!
//! Deciding when "all attorneys have signed" is not a simple count. Trust
//! corporations sign through named signatories, and replacement attorneys
//! must sign before the LPA can be submitted even though they may never act.
//! The progress tracker takes the rule as a [`SignatureRule`] so that a
//! register with different step-in policies can supply its own.

use crate::lpa::{Attorneys, Lpa};

/// Decides whether every attorney on an LPA has signed.
pub trait SignatureRule {
    fn all_attorneys_signed(&self, lpa: &Lpa) -> bool;
}

impl<R: SignatureRule + ?Sized> SignatureRule for &R {
    fn all_attorneys_signed(&self, lpa: &Lpa) -> bool {
        (**self).all_attorneys_signed(lpa)
    }
}

/// The register's rule.
///
/// - An LPA with no attorneys is never fully signed.
/// - Every attorney and replacement attorney must have signed.
/// - A trust corporation, in either group, must have at least one
///   signatory, and every signatory must have signed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSignatureRule;

impl SignatureRule for StandardSignatureRule {
    fn all_attorneys_signed(&self, lpa: &Lpa) -> bool {
        if lpa.attorneys.is_empty() {
            return false;
        }

        [&lpa.attorneys, &lpa.replacement_attorneys]
            .into_iter()
            .all(group_signed)
    }
}

fn group_signed(group: &Attorneys) -> bool {
    if group.attorneys.iter().any(|a| a.signed_at.is_none()) {
        return false;
    }

    match group.named_trust_corporation() {
        Some(trust) => {
            !trust.signatories.is_empty() && trust.signatories.iter().all(|s| s.signed_at.is_some())
        }
        None => true,
    }
}
