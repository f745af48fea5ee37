//! Repository port for task persistence and the conditional completion step.

use crate::roster::domain::WorkerId;
use crate::task::domain::{Task, TaskCompletion, TaskId, TaskState};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the task identifier
    /// already exists.
    async fn insert(&self, task: &Task) -> TaskStoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>>;

    /// Returns a worker's tasks in the given state, oldest first.
    async fn find_for_worker(
        &self,
        worker: &WorkerId,
        state: TaskState,
    ) -> TaskStoreResult<Vec<Task>>;

    /// Conditionally transitions a task from `Assigned` to `Completed`.
    ///
    /// This is a compare-and-set: the transition is applied only when the
    /// task exists, is owned by `worker`, and is still in the `Assigned`
    /// state. Returns the completed task on success and `None` when the
    /// guard does not match, so two racing completions resolve to exactly
    /// one winner.
    async fn complete(
        &self,
        id: &TaskId,
        worker: &WorkerId,
        completion: TaskCompletion,
    ) -> TaskStoreResult<Option<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The backing store is unreachable; the caller may retry.
    #[error("task store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
