//! Verification scans and same-day collection marks.

use crate::ident::short_token;
use crate::roster::domain::{HomeId, WorkerId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a verification scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanId(String);

impl ScanId {
    /// Creates a fresh scan identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("SCAN_{}", short_token(8)))
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

impl fmt::Display for ScanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamped proof-of-presence event linking a worker to a home.
///
/// Scans are append-only; the gate only reads them and never consumes them,
/// so one scan may validate several completions within its freshness window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationScan {
    id: ScanId,
    worker: WorkerId,
    home: HomeId,
    scanned_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedScanData {
    /// Persisted scan identifier.
    pub id: ScanId,
    /// Persisted scanning worker.
    pub worker: WorkerId,
    /// Persisted canonical home identifier.
    pub home: HomeId,
    /// Persisted scan timestamp.
    pub scanned_at: DateTime<Utc>,
}

impl VerificationScan {
    /// Creates a new scan recorded now.
    #[must_use]
    pub fn record(worker: WorkerId, home: HomeId, clock: &impl Clock) -> Self {
        Self {
            id: ScanId::generate(),
            worker,
            home,
            scanned_at: clock.utc(),
        }
    }

    /// Reconstructs a scan from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedScanData) -> Self {
        Self {
            id: data.id,
            worker: data.worker,
            home: data.home,
            scanned_at: data.scanned_at,
        }
    }

    /// Returns the scan identifier.
    #[must_use]
    pub const fn id(&self) -> &ScanId {
        &self.id
    }

    /// Returns the scanning worker.
    #[must_use]
    pub const fn worker(&self) -> &WorkerId {
        &self.worker
    }

    /// Returns the scanned home.
    #[must_use]
    pub const fn home(&self) -> &HomeId {
        &self.home
    }

    /// Returns the scan timestamp.
    #[must_use]
    pub const fn scanned_at(&self) -> DateTime<Utc> {
        self.scanned_at
    }
}

/// Same-day collection record written when a home is scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionMark {
    home: HomeId,
    worker: WorkerId,
    collected_on: NaiveDate,
}

impl CollectionMark {
    /// Creates a collection mark for the scan day.
    #[must_use]
    pub fn for_scan(worker: WorkerId, home: HomeId, clock: &impl Clock) -> Self {
        Self {
            home,
            worker,
            collected_on: clock.utc().date_naive(),
        }
    }

    /// Reconstructs a mark from persisted storage.
    #[must_use]
    pub const fn from_persisted(home: HomeId, worker: WorkerId, collected_on: NaiveDate) -> Self {
        Self {
            home,
            worker,
            collected_on,
        }
    }

    /// Returns the collected home.
    #[must_use]
    pub const fn home(&self) -> &HomeId {
        &self.home
    }

    /// Returns the collecting worker.
    #[must_use]
    pub const fn worker(&self) -> &WorkerId {
        &self.worker
    }

    /// Returns the collection date.
    #[must_use]
    pub const fn collected_on(&self) -> NaiveDate {
        self.collected_on
    }
}
