//! Repository port for scan and collection-mark persistence.

use crate::roster::domain::{HomeId, WorkerId};
use crate::verification::domain::{CollectionMark, VerificationScan};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for scan store operations.
pub type ScanStoreResult<T> = Result<T, ScanStoreError>;

/// Scan persistence contract.
///
/// Scans and collection marks are append-only; there are no update or
/// delete operations.
#[async_trait]
pub trait ScanStore: Send + Sync {
    /// Appends a verification scan.
    async fn insert_scan(&self, scan: &VerificationScan) -> ScanStoreResult<()>;

    /// Finds the most recent scan for a (worker, home) pair.
    ///
    /// Returns `None` when the pair has never been scanned.
    async fn find_latest(
        &self,
        worker: &WorkerId,
        home: &HomeId,
    ) -> ScanStoreResult<Option<VerificationScan>>;

    /// Appends a same-day collection mark.
    async fn mark_collected(&self, mark: &CollectionMark) -> ScanStoreResult<()>;
}

/// Errors returned by scan store implementations.
#[derive(Debug, Clone, Error)]
pub enum ScanStoreError {
    /// The backing store is unreachable; the caller may retry.
    #[error("scan store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ScanStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
