//! Directory ports for worker and resident lookup and registration.

use crate::roster::domain::{AreaLabel, HomeId, Resident, Worker, WorkerId, WorkerRole};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Optional narrowing applied to leaderboard queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderboardFilter {
    /// Restrict to workers in this area.
    pub area: Option<AreaLabel>,
    /// Restrict to workers with this role.
    pub role: Option<WorkerRole>,
}

/// Worker directory contract.
///
/// Balances surfaced through this port are read-only; they are written
/// exclusively by the ledger.
#[async_trait]
pub trait WorkerDirectory: Send + Sync {
    /// Stores a newly registered worker.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateWorker`] when the identifier is
    /// already registered.
    async fn register(&self, worker: &Worker) -> DirectoryResult<()>;

    /// Finds a worker by identifier.
    ///
    /// Returns `None` when the worker does not exist.
    async fn find_by_id(&self, id: &WorkerId) -> DirectoryResult<Option<Worker>>;

    /// Returns every worker currently eligible for assignment.
    async fn find_active(&self) -> DirectoryResult<Vec<Worker>>;

    /// Returns active workers ranked by descending golden-point balance.
    ///
    /// Workers with equal balances are ordered by ascending identifier so
    /// the ranking is reproducible.
    async fn leaderboard(
        &self,
        filter: &LeaderboardFilter,
        limit: usize,
    ) -> DirectoryResult<Vec<Worker>>;
}

/// Resident directory contract.
#[async_trait]
pub trait ResidentDirectory: Send + Sync {
    /// Stores a newly registered resident.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateHome`] when the home identifier is
    /// already bound to a resident.
    async fn register(&self, resident: &Resident) -> DirectoryResult<()>;

    /// Finds the resident registered for a canonical home identifier.
    ///
    /// Returns `None` when the home has no registered resident; callers
    /// treat that as an expected outcome, not an error.
    async fn find_by_home(&self, home: &HomeId) -> DirectoryResult<Option<Resident>>;
}

/// Errors returned by directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// A worker with the same identifier already exists.
    #[error("duplicate worker identifier: {0}")]
    DuplicateWorker(WorkerId),

    /// The home identifier is already bound to a resident.
    #[error("home identifier already registered: {0}")]
    DuplicateHome(HomeId),

    /// The backing store is unreachable; the caller may retry.
    #[error("directory store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
