//! Repository port for atomic balance crediting and the audit trail.

use crate::ledger::domain::{AccountRef, ActivityRecord, PointBalance};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for ledger store operations.
pub type LedgerStoreResult<T> = Result<T, LedgerStoreError>;

/// Ledger persistence contract.
///
/// This port is the only balance-mutation path in the system.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Applies one credit: appends the activity record and increases the
    /// account balance by the record's delta as one atomic step.
    ///
    /// A partial application (record without balance update, or the
    /// reverse) is a correctness violation; implementations must commit
    /// both or neither. Returns the balance after the credit.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerStoreError::UnknownAccount`] when the referenced
    /// account does not exist; nothing is written in that case.
    async fn credit(&self, activity: &ActivityRecord) -> LedgerStoreResult<PointBalance>;

    /// Returns the stored balance for an account.
    ///
    /// Returns `None` when the account does not exist.
    async fn balance(&self, account: &AccountRef) -> LedgerStoreResult<Option<PointBalance>>;

    /// Returns an account's most recent activity records, newest first.
    async fn activities(
        &self,
        account: &AccountRef,
        limit: usize,
    ) -> LedgerStoreResult<Vec<ActivityRecord>>;
}

/// Errors returned by ledger store implementations.
#[derive(Debug, Clone, Error)]
pub enum LedgerStoreError {
    /// The referenced account is not registered.
    #[error("unknown account: {0}")]
    UnknownAccount(AccountRef),

    /// The backing store is unreachable; the caller may retry.
    #[error("ledger store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl LedgerStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
