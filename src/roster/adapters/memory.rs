//! In-memory directory adapter over the shared [`MemoryStore`].

use async_trait::async_trait;

use crate::roster::{
    domain::{HomeId, Resident, Worker, WorkerId},
    ports::{DirectoryError, DirectoryResult, LeaderboardFilter, ResidentDirectory, WorkerDirectory},
};
use crate::store::memory::MemoryStore;

/// Directory adapter backed by the shared in-memory database.
#[derive(Debug, Clone)]
pub struct InMemoryDirectory {
    db: MemoryStore,
}

impl InMemoryDirectory {
    /// Creates a directory over the given in-memory database.
    #[must_use]
    pub const fn new(db: MemoryStore) -> Self {
        Self { db }
    }
}

fn lock_error(err: String) -> DirectoryError {
    DirectoryError::persistence(std::io::Error::other(err))
}

fn matches_filter(worker: &Worker, filter: &LeaderboardFilter) -> bool {
    let area_ok = filter.area.as_ref().is_none_or(|area| worker.area() == area);
    let role_ok = filter.role.is_none_or(|role| worker.role() == role);
    area_ok && role_ok
}

#[async_trait]
impl WorkerDirectory for InMemoryDirectory {
    async fn register(&self, worker: &Worker) -> DirectoryResult<()> {
        let mut state = self.db.write().map_err(lock_error)?;
        if state.workers.contains_key(worker.id()) {
            return Err(DirectoryError::DuplicateWorker(worker.id().clone()));
        }
        state.workers.insert(worker.id().clone(), worker.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WorkerId) -> DirectoryResult<Option<Worker>> {
        let state = self.db.read().map_err(lock_error)?;
        Ok(state.workers.get(id).cloned())
    }

    async fn find_active(&self) -> DirectoryResult<Vec<Worker>> {
        let state = self.db.read().map_err(lock_error)?;
        Ok(state
            .workers
            .values()
            .filter(|worker| worker.is_active())
            .cloned()
            .collect())
    }

    async fn leaderboard(
        &self,
        filter: &LeaderboardFilter,
        limit: usize,
    ) -> DirectoryResult<Vec<Worker>> {
        let state = self.db.read().map_err(lock_error)?;
        let mut ranked: Vec<Worker> = state
            .workers
            .values()
            .filter(|worker| worker.is_active() && matches_filter(worker, filter))
            .cloned()
            .collect();
        ranked.sort_by(|a, b| {
            b.golden_points()
                .cmp(&a.golden_points())
                .then_with(|| a.id().cmp(b.id()))
        });
        ranked.truncate(limit);
        Ok(ranked)
    }
}

#[async_trait]
impl ResidentDirectory for InMemoryDirectory {
    async fn register(&self, resident: &Resident) -> DirectoryResult<()> {
        let mut state = self.db.write().map_err(lock_error)?;
        if state.home_index.contains_key(resident.home()) {
            return Err(DirectoryError::DuplicateHome(resident.home().clone()));
        }
        state
            .home_index
            .insert(resident.home().clone(), resident.id().clone());
        state
            .residents
            .insert(resident.id().clone(), resident.clone());
        Ok(())
    }

    async fn find_by_home(&self, home: &HomeId) -> DirectoryResult<Option<Resident>> {
        let state = self.db.read().map_err(lock_error)?;
        let resident = state
            .home_index
            .get(home)
            .and_then(|resident_id| state.residents.get(resident_id))
            .cloned();
        Ok(resident)
    }
}
