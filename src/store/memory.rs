//! Thread-safe in-memory database backing the module memory adapters.

use crate::ledger::domain::ActivityRecord;
use crate::roster::domain::{HomeId, Resident, ResidentId, Worker, WorkerId};
use crate::task::domain::{Task, TaskId};
use crate::verification::domain::{CollectionMark, VerificationScan};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Handle to the shared in-memory database.
///
/// Cloning is cheap and every clone refers to the same tables, so one store
/// can back several module adapters at once. Tasks, scans, balances, and
/// activities all live in one place, which is what lets the ledger adapter
/// update a worker's balance and append an activity under a single lock.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

/// Table contents of the in-memory database.
#[derive(Debug, Default)]
pub(crate) struct MemoryState {
    pub(crate) workers: HashMap<WorkerId, Worker>,
    pub(crate) residents: HashMap<ResidentId, Resident>,
    pub(crate) home_index: HashMap<HomeId, ResidentId>,
    pub(crate) tasks: HashMap<TaskId, Task>,
    pub(crate) scans: Vec<VerificationScan>,
    pub(crate) collections: Vec<CollectionMark>,
    pub(crate) activities: Vec<ActivityRecord>,
}

impl MemoryStore {
    /// Creates an empty in-memory database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires a shared read guard over the tables.
    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>, String> {
        self.state.read().map_err(|err| err.to_string())
    }

    /// Acquires an exclusive write guard over the tables.
    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>, String> {
        self.state.write().map_err(|err| err.to_string())
    }
}
