//! Error types for pilgrimdesk
//!
//! A single error enum is shared by every crate in the workspace. Read paths
//! of the overlay store never surface these errors (they fail open to the
//! seed list); write paths surface them according to `WriteFailurePolicy`.

use thiserror::Error;

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by storage backends, the overlay store and form actions
#[derive(Debug, Error)]
pub enum Error {
    /// Backend failed to read or write a slot
    #[error("storage error on slot '{slot}': {reason}")]
    Storage {
        /// Slot key the operation targeted
        slot: String,
        /// Backend-specific failure description
        reason: String,
    },

    /// Write would exceed the backend's byte quota
    #[error("quota exceeded writing slot '{slot}': need {needed} bytes, quota is {quota}")]
    QuotaExceeded {
        /// Slot key the write targeted
        slot: String,
        /// Total bytes the backend would hold after the write
        needed: usize,
        /// Configured quota in bytes
        quota: usize,
    },

    /// Slot key cannot be mapped onto the backend
    #[error("invalid slot key: {0:?}")]
    InvalidSlotKey(String),

    /// Record list could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Required form field is blank
    #[error("{collection}: required field '{field}' is missing")]
    MissingField {
        /// Collection the record belongs to
        collection: &'static str,
        /// Field name as it appears on the wire
        field: &'static str,
    },

    /// No record with this id in the merged view
    #[error("{collection}: no record with id '{id}'")]
    NotFound {
        /// Collection that was searched
        collection: &'static str,
        /// Requested id
        id: String,
    },

    /// Configuration could not be parsed or is inconsistent
    #[error("configuration error: {0}")]
    Config(String),

    /// Underlying filesystem error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a backend failure for `slot`
    pub fn storage(slot: impl Into<String>, reason: impl ToString) -> Self {
        Error::Storage {
            slot: slot.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error came from the persistence layer
    ///
    /// Only these errors are subject to `WriteFailurePolicy::LogAndContinue`;
    /// validation and lookup errors always reach the caller.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            Error::Storage { .. } | Error::QuotaExceeded { .. } | Error::Io(_)
        )
    }
}
