//! # lpa-core — Foundational Types for LPA Progress Tracking
//!
//! Defines the read-only inputs the progress tracker works from: the LPA
//! snapshot and its actors, the donor's payment state, and the notification
//! records sent about their fee. Every other crate in the workspace depends on
//! `lpa-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Absent, not zero.** A milestone that has not happened is `None`.
//!    There is no zero-valued timestamp to compare against.
//!
//! 2. **Newtype identifiers.** `ActorUid` and `LpaUid` cannot be swapped
//!    for each other or for a bare string.
//!
//! 3. **Pluggable signature completeness.** Whether "all attorneys have
//!    signed" depends on trust corporation signatories and replacement
//!    attorneys; the rule lives behind the [`SignatureRule`] trait.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `lpa-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod lpa;
pub mod notification;
pub mod payment;
pub mod signing;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::LpaError;
pub use identity::{ActorUid, LpaUid};
pub use lpa::{
    Attorney, Attorneys, CertificateProvider, Donor, IdentityCheck, Lpa, TrustCorporation,
    TrustCorporationSignatory,
};
pub use notification::{Notification, Notifications};
pub use payment::{FeeType, PaymentContext, PaymentState};
pub use signing::{SignatureRule, StandardSignatureRule};
pub use temporal::Timestamp;
