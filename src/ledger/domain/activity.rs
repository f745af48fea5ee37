//! Account references and the append-only activity audit trail.

use super::{LedgerDomainError, PointsAmount};
use crate::ident::short_token;
use crate::roster::domain::{ResidentId, WorkerId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Discriminant for the two independent account populations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Field worker account accruing golden points.
    Worker,
    /// Resident account accruing green points.
    Resident,
}

impl AccountKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Resident => "resident",
        }
    }
}

impl TryFrom<&str> for AccountKind {
    type Error = ParseAccountKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "worker" => Ok(Self::Worker),
            "resident" => Ok(Self::Resident),
            _ => Err(ParseAccountKindError(value.to_owned())),
        }
    }
}

/// Error returned while parsing account kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown account kind: {0}")]
pub struct ParseAccountKindError(pub String);

/// Reference to a single point-bearing account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum AccountRef {
    /// A field worker's golden-point account.
    Worker(WorkerId),
    /// A resident's green-point account.
    Resident(ResidentId),
}

impl AccountRef {
    /// Returns the account population this reference belongs to.
    #[must_use]
    pub const fn kind(&self) -> AccountKind {
        match self {
            Self::Worker(_) => AccountKind::Worker,
            Self::Resident(_) => AccountKind::Resident,
        }
    }

    /// Returns the account identifier as `str`.
    #[must_use]
    pub fn id_str(&self) -> &str {
        match self {
            Self::Worker(id) => id.as_str(),
            Self::Resident(id) => id.as_str(),
        }
    }
}

impl fmt::Display for AccountRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind().as_str(), self.id_str())
    }
}

/// Category of an incentive-earning event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    /// A task reached the completed state.
    TaskCompletion,
    /// A proof-of-presence scan was recorded.
    Scan,
    /// A resident's pickup was verified by a scan.
    VerifiedPickup,
    /// Training or quiz completion.
    Training,
    /// Ad-hoc dispatcher-initiated award.
    Adjustment,
}

impl ActivityCategory {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskCompletion => "task_completion",
            Self::Scan => "scan",
            Self::VerifiedPickup => "verified_pickup",
            Self::Training => "training",
            Self::Adjustment => "adjustment",
        }
    }
}

impl TryFrom<&str> for ActivityCategory {
    type Error = ParseActivityCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "task_completion" => Ok(Self::TaskCompletion),
            "scan" => Ok(Self::Scan),
            "verified_pickup" => Ok(Self::VerifiedPickup),
            "training" => Ok(Self::Training),
            "adjustment" => Ok(Self::Adjustment),
            _ => Err(ParseActivityCategoryError(value.to_owned())),
        }
    }
}

/// Error returned while parsing activity categories from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown activity category: {0}")]
pub struct ParseActivityCategoryError(pub String);

/// Unique identifier for an activity record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    /// Creates a fresh activity identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("ACT_{}", short_token(8)))
    }

    /// Reconstructs an identifier from persistence.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable audit-trail entry paired with every balance credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    id: ActivityId,
    account: AccountRef,
    category: ActivityCategory,
    description: String,
    points: PointsAmount,
    recorded_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted activity record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedActivityData {
    /// Persisted activity identifier.
    pub id: ActivityId,
    /// Persisted account reference.
    pub account: AccountRef,
    /// Persisted event category.
    pub category: ActivityCategory,
    /// Persisted free-text description.
    pub description: String,
    /// Persisted point delta.
    pub points: PointsAmount,
    /// Persisted event timestamp.
    pub recorded_at: DateTime<Utc>,
}

impl ActivityRecord {
    /// Creates a new activity record for a credit being applied now.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerDomainError::EmptyDescription`] when the description
    /// is empty after trimming.
    pub fn record(
        account: AccountRef,
        category: ActivityCategory,
        description: impl Into<String>,
        points: PointsAmount,
        clock: &impl Clock,
    ) -> Result<Self, LedgerDomainError> {
        let raw = description.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(LedgerDomainError::EmptyDescription);
        }
        Ok(Self {
            id: ActivityId::generate(),
            account,
            category,
            description: normalized.to_owned(),
            points,
            recorded_at: clock.utc(),
        })
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedActivityData) -> Self {
        Self {
            id: data.id,
            account: data.account,
            category: data.category,
            description: data.description,
            points: data.points,
            recorded_at: data.recorded_at,
        }
    }

    /// Returns the activity identifier.
    #[must_use]
    pub const fn id(&self) -> &ActivityId {
        &self.id
    }

    /// Returns the credited account.
    #[must_use]
    pub const fn account(&self) -> &AccountRef {
        &self.account
    }

    /// Returns the event category.
    #[must_use]
    pub const fn category(&self) -> ActivityCategory {
        self.category
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the positive point delta.
    #[must_use]
    pub const fn points(&self) -> PointsAmount {
        self.points
    }

    /// Returns the event timestamp.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
