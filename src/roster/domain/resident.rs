//! Resident aggregate.

use super::{AreaLabel, HomeId, ResidentId};
use crate::ledger::domain::{PointBalance, PointsAmount};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Registered-resident aggregate root.
///
/// A resident's home identifier is unique: it maps to at most one resident,
/// which is what lets scan intake attribute verified pickups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    id: ResidentId,
    home: HomeId,
    area: AreaLabel,
    green_points: PointBalance,
    registered_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted resident aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedResidentData {
    /// Persisted resident identifier.
    pub id: ResidentId,
    /// Persisted canonical home identifier.
    pub home: HomeId,
    /// Persisted area label.
    pub area: AreaLabel,
    /// Persisted green-point balance.
    pub green_points: PointBalance,
    /// Persisted registration timestamp.
    pub registered_at: DateTime<Utc>,
}

impl Resident {
    /// Creates a newly registered resident with a zero balance.
    #[must_use]
    pub fn register(id: ResidentId, home: HomeId, area: AreaLabel, clock: &impl Clock) -> Self {
        Self {
            id,
            home,
            area,
            green_points: PointBalance::ZERO,
            registered_at: clock.utc(),
        }
    }

    /// Reconstructs a resident from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedResidentData) -> Self {
        Self {
            id: data.id,
            home: data.home,
            area: data.area,
            green_points: data.green_points,
            registered_at: data.registered_at,
        }
    }

    /// Returns the resident identifier.
    #[must_use]
    pub const fn id(&self) -> &ResidentId {
        &self.id
    }

    /// Returns the canonical home identifier.
    #[must_use]
    pub const fn home(&self) -> &HomeId {
        &self.home
    }

    /// Returns the coarse area label.
    #[must_use]
    pub const fn area(&self) -> &AreaLabel {
        &self.area
    }

    /// Returns the green-point balance.
    #[must_use]
    pub const fn green_points(&self) -> PointBalance {
        self.green_points
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Applies one ledger credit to the stored balance.
    ///
    /// Reserved to the ledger adapters, which pair it with an activity
    /// insert in one atomic step.
    pub(crate) const fn credit_points(&mut self, amount: PointsAmount) {
        self.green_points = self.green_points.credited(amount);
    }
}
