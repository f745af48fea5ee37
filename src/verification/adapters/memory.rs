//! In-memory scan store adapter over the shared [`MemoryStore`].

use async_trait::async_trait;

use crate::roster::domain::{HomeId, WorkerId};
use crate::store::memory::MemoryStore;
use crate::verification::{
    domain::{CollectionMark, VerificationScan},
    ports::{ScanStore, ScanStoreError, ScanStoreResult},
};

/// Scan store adapter backed by the shared in-memory database.
#[derive(Debug, Clone)]
pub struct InMemoryScanStore {
    db: MemoryStore,
}

impl InMemoryScanStore {
    /// Creates a scan store over the given in-memory database.
    #[must_use]
    pub const fn new(db: MemoryStore) -> Self {
        Self { db }
    }
}

fn lock_error(err: String) -> ScanStoreError {
    ScanStoreError::persistence(std::io::Error::other(err))
}

#[async_trait]
impl ScanStore for InMemoryScanStore {
    async fn insert_scan(&self, scan: &VerificationScan) -> ScanStoreResult<()> {
        let mut state = self.db.write().map_err(lock_error)?;
        state.scans.push(scan.clone());
        Ok(())
    }

    async fn find_latest(
        &self,
        worker: &WorkerId,
        home: &HomeId,
    ) -> ScanStoreResult<Option<VerificationScan>> {
        let state = self.db.read().map_err(lock_error)?;
        let latest = state
            .scans
            .iter()
            .filter(|scan| scan.worker() == worker && scan.home() == home)
            .max_by_key(|scan| scan.scanned_at())
            .cloned();
        Ok(latest)
    }

    async fn mark_collected(&self, mark: &CollectionMark) -> ScanStoreResult<()> {
        let mut state = self.db.write().map_err(lock_error)?;
        // Marking is idempotent per (home, worker, day).
        let already_marked = state.collections.iter().any(|existing| {
            existing.home() == mark.home()
                && existing.worker() == mark.worker()
                && existing.collected_on() == mark.collected_on()
        });
        if !already_marked {
            state.collections.push(mark.clone());
        }
        Ok(())
    }
}
