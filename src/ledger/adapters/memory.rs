//! In-memory ledger adapter over the shared [`MemoryStore`].

use async_trait::async_trait;

use crate::ledger::{
    domain::{AccountRef, ActivityRecord, PointBalance},
    ports::{LedgerStore, LedgerStoreError, LedgerStoreResult},
};
use crate::store::memory::{MemoryState, MemoryStore};

/// Ledger adapter backed by the shared in-memory database.
///
/// Because the database is shared, crediting a worker here is visible to the
/// roster directory immediately, exactly as with one SQL database.
#[derive(Debug, Clone)]
pub struct InMemoryLedger {
    db: MemoryStore,
}

impl InMemoryLedger {
    /// Creates a ledger over the given in-memory database.
    #[must_use]
    pub const fn new(db: MemoryStore) -> Self {
        Self { db }
    }
}

fn lock_error(err: String) -> LedgerStoreError {
    LedgerStoreError::persistence(std::io::Error::other(err))
}

fn stored_balance(state: &MemoryState, account: &AccountRef) -> Option<PointBalance> {
    match account {
        AccountRef::Worker(id) => state.workers.get(id).map(|w| w.golden_points()),
        AccountRef::Resident(id) => state.residents.get(id).map(|r| r.green_points()),
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedger {
    async fn credit(&self, activity: &ActivityRecord) -> LedgerStoreResult<PointBalance> {
        // Balance increment and activity append happen under one write
        // lock, so concurrent credits on the same account serialize and
        // the balance always equals the sum of recorded deltas.
        let mut state = self.db.write().map_err(lock_error)?;
        let amount = activity.points();
        let balance = match activity.account() {
            AccountRef::Worker(id) => {
                let worker = state
                    .workers
                    .get_mut(id)
                    .ok_or_else(|| LedgerStoreError::UnknownAccount(activity.account().clone()))?;
                worker.credit_points(amount);
                worker.golden_points()
            }
            AccountRef::Resident(id) => {
                let resident = state
                    .residents
                    .get_mut(id)
                    .ok_or_else(|| LedgerStoreError::UnknownAccount(activity.account().clone()))?;
                resident.credit_points(amount);
                resident.green_points()
            }
        };
        state.activities.push(activity.clone());
        Ok(balance)
    }

    async fn balance(&self, account: &AccountRef) -> LedgerStoreResult<Option<PointBalance>> {
        let state = self.db.read().map_err(lock_error)?;
        Ok(stored_balance(&state, account))
    }

    async fn activities(
        &self,
        account: &AccountRef,
        limit: usize,
    ) -> LedgerStoreResult<Vec<ActivityRecord>> {
        let state = self.db.read().map_err(lock_error)?;
        let mut matching: Vec<ActivityRecord> = state
            .activities
            .iter()
            .filter(|activity| activity.account() == account)
            .cloned()
            .collect();
        matching.sort_by_key(|activity| std::cmp::Reverse(activity.recorded_at()));
        matching.truncate(limit);
        Ok(matching)
    }
}
