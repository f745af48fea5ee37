//! Service layer for task assignment and verification-gated completion.

use crate::ledger::{
    domain::{AccountRef, ActivityCategory, PointsAmount},
    ports::LedgerStore,
    services::{CreditRequest, IncentiveLedger, IncentiveLedgerError},
};
use crate::roster::domain::{HomeId, RosterDomainError, WorkerId};
use crate::task::{
    domain::{
        CompletionProof, Priority, ProofBlobRef, Task, TaskAssignment, TaskCompletion,
        TaskDomainError, TaskId, TaskKind, TaskState,
    },
    ports::{TaskStore, TaskStoreError},
};
use crate::verification::{
    ports::{ScanStore, ScanStoreError},
    services::VerificationGate,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for assigning a task directly to a worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignTaskRequest {
    worker_id: String,
    kind: TaskKind,
    title: String,
    description: Option<String>,
    home: Option<String>,
    location: Option<String>,
    priority: Priority,
    award: Option<PointsAmount>,
}

impl AssignTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(worker_id: impl Into<String>, kind: TaskKind, title: impl Into<String>) -> Self {
        Self {
            worker_id: worker_id.into(),
            kind,
            title: title.into(),
            description: None,
            home: None,
            location: None,
            priority: Priority::default(),
            award: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Links the task to a home, gating completion on a fresh scan.
    ///
    /// The raw value is canonicalised into a [`HomeId`] by the service.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Sets the free-text location label.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the dispatch priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Overrides the default completion award.
    #[must_use]
    pub const fn with_award(mut self, award: PointsAmount) -> Self {
        self.award = Some(award);
        self
    }
}

/// Request payload for completing an assigned task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTaskRequest {
    task_id: String,
    worker_id: String,
    notes: Option<String>,
    photo_ref: Option<ProofBlobRef>,
}

impl CompleteTaskRequest {
    /// Creates a completion request.
    #[must_use]
    pub fn new(task_id: impl Into<String>, worker_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            worker_id: worker_id.into(),
            notes: None,
            photo_ref: None,
        }
    }

    /// Attaches completion notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attaches a stored proof photo reference.
    #[must_use]
    pub fn with_photo_ref(mut self, photo_ref: ProofBlobRef) -> Self {
        self.photo_ref = Some(photo_ref);
        self
    }
}

/// Outcome of a successful task completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReceipt {
    /// The task in its completed state.
    pub task: Task,
    /// Golden points credited to the owning worker.
    pub points_earned: PointsAmount,
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Task input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Worker or home identifier validation failed.
    #[error(transparent)]
    Roster(#[from] RosterDomainError),
    /// The task is absent, owned by another worker, or already completed.
    ///
    /// Deliberately indistinguishable outcomes: retrying a completion is
    /// harmless and reveals nothing about other workers' tasks.
    #[error("task not found or already completed: {0}")]
    NotFoundOrAlreadyCompleted(TaskId),
    /// The task is home-linked and no fresh scan backs the completion.
    #[error("verification required for task: {0}")]
    VerificationRequired(TaskId),
    /// Scan lookup for the verification gate failed.
    #[error(transparent)]
    Verification(#[from] ScanStoreError),
    /// Task persistence failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// Completion credit failed.
    #[error(transparent)]
    Ledger(#[from] IncentiveLedgerError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Completion is the only point-earning transition: the verification gate
/// is consulted first for home-linked tasks, the store's compare-and-set
/// picks exactly one winner among racing completions, and only the winner
/// triggers the single ledger credit.
#[derive(Clone)]
pub struct TaskLifecycleService<T, S, L, C>
where
    T: TaskStore,
    S: ScanStore,
    L: LedgerStore,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    gate: VerificationGate<S, C>,
    ledger: IncentiveLedger<L, C>,
    clock: Arc<C>,
}

impl<T, S, L, C> TaskLifecycleService<T, S, L, C>
where
    T: TaskStore,
    S: ScanStore,
    L: LedgerStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        gate: VerificationGate<S, C>,
        ledger: IncentiveLedger<L, C>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            gate,
            ledger,
            clock,
        }
    }

    /// Assigns a task directly to a worker.
    ///
    /// The task is created in the `Assigned` state; no points are awarded
    /// until it completes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when input validation fails or the
    /// store rejects persistence.
    pub async fn assign_direct(&self, request: AssignTaskRequest) -> TaskLifecycleResult<Task> {
        let worker = WorkerId::new(request.worker_id)?;
        let home = request.home.map(HomeId::canonicalize).transpose()?;

        let task = Task::assign(
            TaskAssignment {
                id: TaskId::direct(),
                worker,
                kind: request.kind,
                title: request.title,
                description: request.description,
                home,
                location: request.location,
                priority: request.priority,
                award: request.award,
            },
            &*self.clock,
        )?;
        self.tasks.insert(&task).await?;
        Ok(task)
    }

    /// Completes an assigned task and credits the owning worker.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFoundOrAlreadyCompleted`] when the
    /// task is absent, foreign-owned, or already completed (nothing is
    /// mutated), and [`TaskLifecycleError::VerificationRequired`] when the
    /// task is home-linked and the worker's latest scan of that home is
    /// stale or missing.
    pub async fn complete(
        &self,
        request: CompleteTaskRequest,
    ) -> TaskLifecycleResult<CompletionReceipt> {
        let id = TaskId::new(request.task_id)?;
        let worker = WorkerId::new(request.worker_id)?;

        let Some(task) = self.tasks.find_by_id(&id).await? else {
            return Err(TaskLifecycleError::NotFoundOrAlreadyCompleted(id));
        };
        if task.worker() != &worker || task.state().is_terminal() {
            return Err(TaskLifecycleError::NotFoundOrAlreadyCompleted(id));
        }

        if let Some(home) = task.home() {
            let verified = self.gate.verify(&worker, home).await?;
            if !verified {
                return Err(TaskLifecycleError::VerificationRequired(id));
            }
        }

        let proof = build_proof(request.notes, request.photo_ref);
        let completion = TaskCompletion {
            completed_at: self.clock.utc(),
            proof,
        };

        // The CAS resolves racing completions; only the winner reaches the
        // ledger credit below, so the award is applied exactly once.
        let Some(completed) = self.tasks.complete(&id, &worker, completion).await? else {
            return Err(TaskLifecycleError::NotFoundOrAlreadyCompleted(id));
        };

        let points_earned = completed.award();
        self.ledger
            .credit(CreditRequest::new(
                AccountRef::Worker(worker),
                ActivityCategory::TaskCompletion,
                format!("completed task {}", completed.id()),
                points_earned,
            ))
            .await?;

        Ok(CompletionReceipt {
            task: completed,
            points_earned,
        })
    }

    /// Returns a worker's tasks in the given state, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when persistence lookup fails.
    pub async fn tasks_for_worker(
        &self,
        worker: &WorkerId,
        state: TaskState,
    ) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.find_for_worker(worker, state).await?)
    }
}

fn build_proof(notes: Option<String>, photo_ref: Option<ProofBlobRef>) -> Option<CompletionProof> {
    if notes.is_none() && photo_ref.is_none() {
        return None;
    }
    Some(CompletionProof { notes, photo_ref })
}
