//! Task aggregate root and related task lifecycle types.

use super::{
    ParsePriorityError, ParseTaskKindError, ParseTaskStateError, ProofBlobRef, TaskDomainError,
    TaskId,
};
use crate::ledger::domain::PointsAmount;
use crate::roster::domain::{HomeId, WorkerId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Kind of field work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Door-to-door waste collection.
    Collection,
    /// Site or dustbin inspection.
    Inspection,
    /// Proof-of-presence verification round.
    Verification,
    /// Resident complaint follow-up.
    Complaint,
}

impl TaskKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Inspection => "inspection",
            Self::Verification => "verification",
            Self::Complaint => "complaint",
        }
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = ParseTaskKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "collection" => Ok(Self::Collection),
            "inspection" => Ok(Self::Inspection),
            "verification" => Ok(Self::Verification),
            "complaint" => Ok(Self::Complaint),
            _ => Err(ParseTaskKindError(value.to_owned())),
        }
    }
}

/// Task urgency, ordered from lowest to highest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Routine work.
    Low,
    /// Standard dispatch priority.
    #[default]
    Medium,
    /// Urgent work.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Task lifecycle state.
///
/// The state machine is monotonic: `Assigned` → `Completed` is the only
/// transition, and `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Task is waiting on its owning worker.
    Assigned,
    /// Task work has been completed and credited.
    Completed,
}

impl TaskState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Completed => "completed",
        }
    }

    /// Returns whether the state admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseTaskStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "assigned" => Ok(Self::Assigned),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStateError(value.to_owned())),
        }
    }
}

/// Optional evidence attached when a task is completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionProof {
    /// Free-text completion notes from the worker.
    pub notes: Option<String>,
    /// Reference to a stored proof photo.
    pub photo_ref: Option<ProofBlobRef>,
}

impl CompletionProof {
    /// Returns whether the proof carries neither notes nor a photo.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.notes.is_none() && self.photo_ref.is_none()
    }
}

/// Data applied when a task transitions to `Completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCompletion {
    /// Completion timestamp.
    pub completed_at: DateTime<Utc>,
    /// Optional completion evidence.
    pub proof: Option<CompletionProof>,
}

/// Parameter object for creating a task in the `Assigned` state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskAssignment {
    /// Task identifier.
    pub id: TaskId,
    /// Owning worker.
    pub worker: WorkerId,
    /// Kind of field work.
    pub kind: TaskKind,
    /// Short human-readable title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Optional linked home identifier; gates completion on a fresh scan.
    pub home: Option<HomeId>,
    /// Optional free-text location label.
    pub location: Option<String>,
    /// Dispatch priority.
    pub priority: Priority,
    /// Point award granted at completion; `None` selects the default.
    pub award: Option<PointsAmount>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    worker: WorkerId,
    kind: TaskKind,
    title: String,
    description: Option<String>,
    home: Option<HomeId>,
    location: Option<String>,
    priority: Priority,
    state: TaskState,
    award: PointsAmount,
    assigned_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    proof: Option<CompletionProof>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning worker.
    pub worker: WorkerId,
    /// Persisted task kind.
    pub kind: TaskKind,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted linked home identifier, if any.
    pub home: Option<HomeId>,
    /// Persisted location label, if any.
    pub location: Option<String>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted lifecycle state.
    pub state: TaskState,
    /// Persisted point award.
    pub award: PointsAmount,
    /// Persisted assignment timestamp.
    pub assigned_at: DateTime<Utc>,
    /// Persisted completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted completion proof, if any.
    pub proof: Option<CompletionProof>,
}

impl Task {
    /// Creates a new task in the `Assigned` state.
    ///
    /// No points are awarded at assignment time; the award is only granted
    /// when the task completes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn assign(data: TaskAssignment, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let title = data.title.trim().to_owned();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            id: data.id,
            worker: data.worker,
            kind: data.kind,
            title,
            description: data.description,
            home: data.home,
            location: data.location,
            priority: data.priority,
            state: TaskState::Assigned,
            award: data.award.unwrap_or(PointsAmount::TASK_AWARD_DEFAULT),
            assigned_at: clock.utc(),
            completed_at: None,
            proof: None,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            worker: data.worker,
            kind: data.kind,
            title: data.title,
            description: data.description,
            home: data.home,
            location: data.location,
            priority: data.priority,
            state: data.state,
            award: data.award,
            assigned_at: data.assigned_at,
            completed_at: data.completed_at,
            proof: data.proof,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the owning worker.
    #[must_use]
    pub const fn worker(&self) -> &WorkerId {
        &self.worker
    }

    /// Returns the task kind.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the linked home identifier, if any.
    #[must_use]
    pub const fn home(&self) -> Option<&HomeId> {
        self.home.as_ref()
    }

    /// Returns the location label, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the dispatch priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the point award granted at completion.
    #[must_use]
    pub const fn award(&self) -> PointsAmount {
        self.award
    }

    /// Returns the assignment timestamp.
    #[must_use]
    pub const fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the completion proof, if any.
    #[must_use]
    pub const fn proof(&self) -> Option<&CompletionProof> {
        self.proof.as_ref()
    }

    /// Transitions the task to `Completed`.
    ///
    /// The transition is monotonic; a completed task never returns to
    /// `Assigned`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyCompleted`] when the task is not in
    /// the `Assigned` state, leaving the aggregate untouched.
    pub fn complete(&mut self, completion: TaskCompletion) -> Result<(), TaskDomainError> {
        if self.state.is_terminal() {
            return Err(TaskDomainError::AlreadyCompleted(self.id.clone()));
        }
        self.state = TaskState::Completed;
        self.completed_at = Some(completion.completed_at);
        self.proof = completion.proof;
        Ok(())
    }
}
