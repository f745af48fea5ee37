//! Identifier types for the task domain.

use super::TaskDomainError;
use crate::ident::short_token;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique synthetic identifier for a task record.
///
/// Directly assigned tasks carry a `TASK_` prefix; geo-dispatched tasks an
/// `AUTO_` prefix derived from creation time plus a random suffix so
/// same-second dispatches cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a validated task identifier from an existing value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTaskId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Creates an identifier for a directly assigned task.
    #[must_use]
    pub fn direct() -> Self {
        Self(format!("TASK_{}", short_token(8)))
    }

    /// Creates an identifier for a geo-dispatched task.
    #[must_use]
    pub fn dispatched(clock: &impl Clock) -> Self {
        Self(format!(
            "AUTO_{}_{}",
            clock.utc().timestamp(),
            short_token(6)
        ))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to a stored proof photo blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProofBlobRef(String);

impl ProofBlobRef {
    /// Creates a reference from a storage-issued value.
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the reference as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProofBlobRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
