//! Error types for roster domain validation.

use thiserror::Error;

/// Errors returned while constructing roster domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterDomainError {
    /// The worker identifier is empty after trimming.
    #[error("worker identifier must not be empty")]
    EmptyWorkerId,

    /// The resident identifier is empty after trimming.
    #[error("resident identifier must not be empty")]
    EmptyResidentId,

    /// The home identifier payload is empty after trimming.
    #[error("home identifier must not be empty")]
    EmptyHomeId,

    /// The area label is empty after trimming.
    #[error("area label must not be empty")]
    EmptyAreaLabel,

    /// The worker role value is not part of the fixed role set.
    #[error("unknown worker role: {0}")]
    UnknownRole(String),
}
