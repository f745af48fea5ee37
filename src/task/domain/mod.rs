//! Domain model for task lifecycle management.
//!
//! Models task creation, the monotonic `assigned` → `completed` state
//! machine, priorities, and completion proof while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::{
    ParsePriorityError, ParseTaskKindError, ParseTaskStateError, TaskDomainError,
};
pub use ids::{ProofBlobRef, TaskId};
pub use task::{
    CompletionProof, PersistedTaskData, Priority, Task, TaskAssignment, TaskCompletion, TaskKind,
    TaskState,
};
