//! Service layer for nearest-worker task dispatch.

use crate::dispatch::{
    domain::{GeoPoint, haversine_km},
    ports::{LocationResolver, ResolverError},
};
use crate::roster::ports::{DirectoryError, WorkerDirectory};
use crate::task::{
    domain::{Priority, Task, TaskAssignment, TaskDomainError, TaskId, TaskKind},
    ports::{TaskStore, TaskStoreError},
};
use crate::roster::domain::{Worker, WorkerId};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Default title for dispatched collection tasks.
const DEFAULT_DISPATCH_TITLE: &str = "waste collection at reported location";

/// Request payload for dispatching a task to the nearest active worker.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignNearestRequest {
    location: GeoPoint,
    title: String,
    description: Option<String>,
    priority: Priority,
}

impl AssignNearestRequest {
    /// Creates a request for a reported location.
    #[must_use]
    pub fn new(location: GeoPoint) -> Self {
        Self {
            location,
            title: DEFAULT_DISPATCH_TITLE.to_owned(),
            description: None,
            priority: Priority::default(),
        }
    }

    /// Overrides the default task title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the dispatch priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentReceipt {
    /// The worker the task was assigned to.
    pub worker_id: WorkerId,
    /// The task created in the `Assigned` state.
    pub task: Task,
}

/// Service-level errors for dispatch operations.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No active workers are available; no task was created.
    #[error("no active workers available for dispatch")]
    NoCandidates,
    /// Task input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Worker roster lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    /// Area resolution failed.
    #[error(transparent)]
    Resolver(#[from] ResolverError),
    /// Task persistence failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for dispatch service operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Nearest-worker dispatch service.
///
/// Ranking is by ascending great-circle distance from the reported
/// location to each active worker's resolved area coordinate, with ties
/// broken by ascending worker id. Both keys are deterministic, so the
/// same roster and report always dispatch to the same worker.
#[derive(Clone)]
pub struct GeoAssignmentService<W, T, R, C>
where
    W: WorkerDirectory,
    T: TaskStore,
    R: LocationResolver,
    C: Clock + Send + Sync,
{
    workers: Arc<W>,
    tasks: Arc<T>,
    resolver: Arc<R>,
    clock: Arc<C>,
}

impl<W, T, R, C> GeoAssignmentService<W, T, R, C>
where
    W: WorkerDirectory,
    T: TaskStore,
    R: LocationResolver,
    C: Clock + Send + Sync,
{
    /// Creates a new geo-assignment service.
    #[must_use]
    pub const fn new(workers: Arc<W>, tasks: Arc<T>, resolver: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            workers,
            tasks,
            resolver,
            clock,
        }
    }

    /// Creates a `Collection` task for the nearest active worker.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NoCandidates`] when no active workers
    /// exist; nothing is created in that case.
    pub async fn assign_nearest(
        &self,
        request: AssignNearestRequest,
    ) -> DispatchResult<AssignmentReceipt> {
        let candidates = self.workers.find_active().await?;

        let mut best: Option<(f64, Worker)> = None;
        for worker in candidates {
            let position = self.resolver.resolve(worker.area()).await?;
            let distance = haversine_km(position, request.location);
            let closer = best.as_ref().is_none_or(|(best_distance, best_worker)| {
                distance
                    .total_cmp(best_distance)
                    .then_with(|| worker.id().cmp(best_worker.id()))
                    .is_lt()
            });
            if closer {
                best = Some((distance, worker));
            }
        }
        let Some((_, chosen)) = best else {
            return Err(DispatchError::NoCandidates);
        };

        let task = Task::assign(
            TaskAssignment {
                id: TaskId::dispatched(&*self.clock),
                worker: chosen.id().clone(),
                kind: TaskKind::Collection,
                title: request.title,
                description: request.description,
                home: None,
                location: Some(request.location.to_string()),
                priority: request.priority,
                award: None,
            },
            &*self.clock,
        )?;
        self.tasks.insert(&task).await?;

        Ok(AssignmentReceipt {
            worker_id: chosen.id().clone(),
            task,
        })
    }
}
