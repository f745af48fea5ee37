//! Diesel row models for task persistence.

use crate::store::postgres::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub task_id: String,
    /// Owning worker.
    pub worker_id: String,
    /// Task kind.
    pub kind: String,
    /// Short title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Optional linked home identifier.
    pub home_id: Option<String>,
    /// Optional free-text location label.
    pub location: Option<String>,
    /// Dispatch priority.
    pub priority: String,
    /// Lifecycle state.
    pub state: String,
    /// Point award granted at completion.
    pub award: i64,
    /// Assignment timestamp.
    pub assigned_at: DateTime<Utc>,
    /// Completion timestamp, absent until completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Completion proof JSON payload.
    pub proof: Option<Value>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub task_id: String,
    /// Owning worker.
    pub worker_id: String,
    /// Task kind.
    pub kind: String,
    /// Short title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Optional linked home identifier.
    pub home_id: Option<String>,
    /// Optional free-text location label.
    pub location: Option<String>,
    /// Dispatch priority.
    pub priority: String,
    /// Lifecycle state.
    pub state: String,
    /// Point award granted at completion.
    pub award: i64,
    /// Assignment timestamp.
    pub assigned_at: DateTime<Utc>,
    /// Completion timestamp, absent until completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Completion proof JSON payload.
    pub proof: Option<Value>,
}
