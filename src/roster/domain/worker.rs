//! Worker aggregate and the fixed field-role set.

use super::{AreaLabel, RosterDomainError, WorkerId};
use crate::ledger::domain::{PointBalance, PointsAmount};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Fixed set of field-worker roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerRole {
    /// Door-to-door waste collection.
    GarbageCollector,
    /// Public dustbin monitoring.
    DustbinMonitor,
    /// Complaint triage and resolution in the field.
    ComplaintManager,
}

impl WorkerRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GarbageCollector => "garbage_collector",
            Self::DustbinMonitor => "dustbin_monitor",
            Self::ComplaintManager => "complaint_manager",
        }
    }
}

impl TryFrom<&str> for WorkerRole {
    type Error = RosterDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "garbage_collector" => Ok(Self::GarbageCollector),
            "dustbin_monitor" => Ok(Self::DustbinMonitor),
            "complaint_manager" => Ok(Self::ComplaintManager),
            _ => Err(RosterDomainError::UnknownRole(value.to_owned())),
        }
    }
}

/// Field-worker aggregate root.
///
/// Workers are created at registration, accrue golden points through the
/// ledger, and are deactivated rather than deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    id: WorkerId,
    role: WorkerRole,
    area: AreaLabel,
    golden_points: PointBalance,
    active: bool,
    registered_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted worker aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedWorkerData {
    /// Persisted worker identifier.
    pub id: WorkerId,
    /// Persisted field role.
    pub role: WorkerRole,
    /// Persisted area label.
    pub area: AreaLabel,
    /// Persisted golden-point balance.
    pub golden_points: PointBalance,
    /// Persisted active flag.
    pub active: bool,
    /// Persisted registration timestamp.
    pub registered_at: DateTime<Utc>,
}

impl Worker {
    /// Creates a newly registered worker with a zero balance.
    #[must_use]
    pub fn register(id: WorkerId, role: WorkerRole, area: AreaLabel, clock: &impl Clock) -> Self {
        Self {
            id,
            role,
            area,
            golden_points: PointBalance::ZERO,
            active: true,
            registered_at: clock.utc(),
        }
    }

    /// Reconstructs a worker from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedWorkerData) -> Self {
        Self {
            id: data.id,
            role: data.role,
            area: data.area,
            golden_points: data.golden_points,
            active: data.active,
            registered_at: data.registered_at,
        }
    }

    /// Returns the worker identifier.
    #[must_use]
    pub const fn id(&self) -> &WorkerId {
        &self.id
    }

    /// Returns the field role.
    #[must_use]
    pub const fn role(&self) -> WorkerRole {
        self.role
    }

    /// Returns the coarse area label.
    #[must_use]
    pub const fn area(&self) -> &AreaLabel {
        &self.area
    }

    /// Returns the golden-point balance.
    #[must_use]
    pub const fn golden_points(&self) -> PointBalance {
        self.golden_points
    }

    /// Returns whether the worker is eligible for assignment.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Removes the worker from the assignment pool.
    pub const fn deactivate(&mut self) {
        self.active = false;
    }

    /// Applies one ledger credit to the stored balance.
    ///
    /// Reserved to the ledger adapters, which pair it with an activity
    /// insert in one atomic step.
    pub(crate) const fn credit_points(&mut self, amount: PointsAmount) {
        self.golden_points = self.golden_points.credited(amount);
    }
}
