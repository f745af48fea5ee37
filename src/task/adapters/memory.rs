//! In-memory task and blob adapters.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ident::short_token;
use crate::roster::domain::WorkerId;
use crate::store::memory::MemoryStore;
use crate::task::{
    domain::{ProofBlobRef, Task, TaskCompletion, TaskId, TaskState},
    ports::{
        BlobStoreError, BlobStoreResult, ProofBlobStore, TaskStore, TaskStoreError,
        TaskStoreResult,
    },
};

/// Task store adapter backed by the shared in-memory database.
#[derive(Debug, Clone)]
pub struct InMemoryTaskStore {
    db: MemoryStore,
}

impl InMemoryTaskStore {
    /// Creates a task store over the given in-memory database.
    #[must_use]
    pub const fn new(db: MemoryStore) -> Self {
        Self { db }
    }
}

fn lock_error(err: String) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.db.write().map_err(lock_error)?;
        if state.tasks.contains_key(task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id().clone()));
        }
        state.tasks.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.db.read().map_err(lock_error)?;
        Ok(state.tasks.get(id).cloned())
    }

    async fn find_for_worker(
        &self,
        worker: &WorkerId,
        state_filter: TaskState,
    ) -> TaskStoreResult<Vec<Task>> {
        let state = self.db.read().map_err(lock_error)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| task.worker() == worker && task.state() == state_filter)
            .cloned()
            .collect();
        tasks.sort_by_key(|task| task.assigned_at());
        Ok(tasks)
    }

    async fn complete(
        &self,
        id: &TaskId,
        worker: &WorkerId,
        completion: TaskCompletion,
    ) -> TaskStoreResult<Option<Task>> {
        // The whole compare-and-set runs under one write lock so racing
        // completions serialize and exactly one observes `Assigned`.
        let mut state = self.db.write().map_err(lock_error)?;
        let Some(task) = state.tasks.get_mut(id) else {
            return Ok(None);
        };
        if task.worker() != worker || task.state() != TaskState::Assigned {
            return Ok(None);
        }
        if task.complete(completion).is_err() {
            return Ok(None);
        }
        Ok(Some(task.clone()))
    }
}

/// Thread-safe in-memory proof blob store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProofBlobStore {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryProofBlobStore {
    /// Creates an empty blob store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProofBlobStore for InMemoryProofBlobStore {
    async fn put(&self, bytes: Vec<u8>) -> BlobStoreResult<ProofBlobRef> {
        let reference = ProofBlobRef::new(format!("PROOF_{}", short_token(8)));
        let mut blobs = self
            .blobs
            .write()
            .map_err(|err| BlobStoreError::persistence(std::io::Error::other(err.to_string())))?;
        blobs.insert(reference.as_str().to_owned(), bytes);
        Ok(reference)
    }

    async fn get(&self, reference: &ProofBlobRef) -> BlobStoreResult<Option<Vec<u8>>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|err| BlobStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(blobs.get(reference.as_str()).cloned())
    }
}
