//! Orchestration services for the task lifecycle.

mod lifecycle;

pub use lifecycle::{
    AssignTaskRequest, CompleteTaskRequest, CompletionReceipt, TaskLifecycleError,
    TaskLifecycleResult, TaskLifecycleService,
};
