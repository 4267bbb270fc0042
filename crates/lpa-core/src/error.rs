//! # Error Types
//!
//! The progress tracker is total and never fails. Errors only arise at the
//! edges: parsing timestamps, identifiers and enum names from snapshot files
//! and command-line flags, and reading those files.

use thiserror::Error;

/// Top-level error type for the LPA crates.
#[derive(Error, Debug)]
pub enum LpaError {
    /// Timestamp was not valid RFC 3339.
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// LPA UID did not match `M-XXXX-XXXX-XXXX`.
    #[error("invalid LPA UID {0:?}: expected M-XXXX-XXXX-XXXX")]
    InvalidUid(String),

    /// Unrecognised task state name.
    #[error("unknown task state {0:?}")]
    UnknownTaskState(String),

    /// Unrecognised fee type name.
    #[error("unknown fee type {0:?}")]
    UnknownFeeType(String),

    /// Unrecognised payment state name.
    #[error("unknown payment state {0:?}")]
    UnknownPaymentState(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
