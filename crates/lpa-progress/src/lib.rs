//! # lpa-progress — LPA Progress Tracker
//!
//! Derives the progress list shown on an LPA's "check progress" page from a
//! read-only [`lpa_core::Lpa`] snapshot.
//!
//! ## Stages
//!
//! ```text
//! [FeeEvidenceSubmitted ──▶ FeeEvidenceNotification ──▶ FeeEvidenceApproved]
//!        (reduced or waived fee only)
//!                              │
//! [Paid ──▶ ConfirmedID]       ▼
//!   (organisation only) ──▶ DonorSigned ──▶ CertificateProviderSigned
//!                              │
//!                              ▼
//!         AttorneysSigned ──▶ LpaSubmitted ──▶ NoticesOfIntentSent
//!                              │
//!                              ▼
//!           StatutoryWaitingPeriod ──▶ LpaRegistered (terminal)
//! ```
//!
//! Each stage is a [`ProgressTask`] with a [`TaskState`] and a label. The
//! tracker evaluates stages in order and stops at the first unmet gate, so
//! a stage is only ever in progress or completed once everything visible
//! before it is completed.
//!
//! ## Design
//!
//! The tracker is a pure function of its inputs. It performs no I/O and
//! holds no state between calls; labels come from a [`Localizer`] given a
//! typed [`Message`], so a label can never refer to a missing translation
//! key.

pub mod localize;
pub mod progress;
pub mod tracker;

pub use localize::{EnglishLocalizer, KeyLocalizer, Localizer, Message};
pub use progress::{Progress, ProgressTask, Stage, TaskState};
pub use tracker::ProgressTracker;
