//! Error type shared by every roster operation.

use thiserror::Error;

/// Errors raised by the duty roster core and its store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No driver with the given id exists in the registry.
    #[error("driver not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },
    /// A weekly template replacement did not cover each weekday exactly once.
    #[error("invalid weekly template: {reason}")]
    InvalidTemplate {
        /// What was wrong with the submitted entries.
        reason: String,
    },
    /// Driver input was rejected before touching the registry.
    #[error("invalid driver: {reason}")]
    InvalidDriver {
        /// What was wrong with the driver input.
        reason: String,
    },
    /// A date key was not an ISO `YYYY-MM-DD` calendar date.
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },
    /// Reading or writing the persisted roster failed.
    #[error("roster storage failed: {message}")]
    Storage {
        /// Underlying failure description.
        message: String,
    },
}

impl RosterError {
    pub(crate) fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub(crate) fn invalid_template(reason: impl Into<String>) -> Self {
        Self::InvalidTemplate { reason: reason.into() }
    }

    pub(crate) fn invalid_driver(reason: impl Into<String>) -> Self {
        Self::InvalidDriver { reason: reason.into() }
    }

    pub(crate) fn storage(message: impl Into<String>) -> Self {
        Self::Storage { message: message.into() }
    }
}
