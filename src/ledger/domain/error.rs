//! Error types for ledger domain validation.

use thiserror::Error;

/// Errors returned while constructing ledger domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerDomainError {
    /// The credit amount is zero or negative.
    #[error("credit amount must be a positive integer, got {0}")]
    NonPositiveAmount(i64),

    /// The activity description is empty after trimming.
    #[error("activity description must not be empty")]
    EmptyDescription,
}
