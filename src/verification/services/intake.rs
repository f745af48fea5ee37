//! Write-side scan intake: record, mark collection, credit.

use crate::ledger::{
    domain::{AccountRef, ActivityCategory, PointsAmount},
    ports::LedgerStore,
    services::{CreditRequest, IncentiveLedger, IncentiveLedgerError},
};
use crate::roster::{
    domain::{HomeId, RosterDomainError, WorkerId},
    ports::{DirectoryError, ResidentDirectory},
};
use crate::verification::{
    domain::{CollectionMark, ScanId, VerificationScan},
    ports::{ScanStore, ScanStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for recording a proof-of-presence scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordScanRequest {
    worker_id: String,
    payload: String,
}

impl RecordScanRequest {
    /// Creates a scan request from the raw worker id and scanned payload.
    #[must_use]
    pub fn new(worker_id: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            worker_id: worker_id.into(),
            payload: payload.into(),
        }
    }
}

/// Outcome of a recorded scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReceipt {
    /// Identifier of the appended scan.
    pub scan_id: ScanId,
    /// Canonical home identifier derived from the payload.
    pub home: HomeId,
    /// Golden points credited to the scanning worker.
    pub worker_points: PointsAmount,
    /// Whether a registered resident received a verified-pickup credit.
    pub resident_credited: bool,
}

/// Service-level errors for scan intake.
#[derive(Debug, Error)]
pub enum ScanIntakeError {
    /// Worker id or payload validation failed.
    #[error(transparent)]
    Roster(#[from] RosterDomainError),
    /// Scan persistence failed.
    #[error(transparent)]
    Store(#[from] ScanStoreError),
    /// Resident lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    /// Incentive credit failed.
    #[error(transparent)]
    Ledger(#[from] IncentiveLedgerError),
}

/// Result type for scan intake operations.
pub type ScanIntakeResult<T> = Result<T, ScanIntakeError>;

/// Scan intake orchestration service.
///
/// Recording a scan appends the scan and the same-day collection mark,
/// credits the scanning worker, and credits the resident registered at the
/// scanned home when one exists.
#[derive(Clone)]
pub struct ScanIntakeService<S, R, L, C>
where
    S: ScanStore,
    R: ResidentDirectory,
    L: LedgerStore,
    C: Clock + Send + Sync,
{
    scans: Arc<S>,
    residents: Arc<R>,
    ledger: IncentiveLedger<L, C>,
    clock: Arc<C>,
}

impl<S, R, L, C> ScanIntakeService<S, R, L, C>
where
    S: ScanStore,
    R: ResidentDirectory,
    L: LedgerStore,
    C: Clock + Send + Sync,
{
    /// Creates a new scan intake service.
    #[must_use]
    pub const fn new(
        scans: Arc<S>,
        residents: Arc<R>,
        ledger: IncentiveLedger<L, C>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            scans,
            residents,
            ledger,
            clock,
        }
    }

    /// Records a scan and applies its incentive credits.
    ///
    /// A payload whose home matches no registered resident is a normal
    /// outcome; the worker is still credited and `resident_credited` is
    /// `false`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanIntakeError::Roster`] when the worker id or payload is
    /// empty, or a store/ledger variant when persistence fails.
    pub async fn record_scan(&self, request: RecordScanRequest) -> ScanIntakeResult<ScanReceipt> {
        let worker = WorkerId::new(request.worker_id)?;
        let home = HomeId::canonicalize(request.payload)?;

        let scan = VerificationScan::record(worker.clone(), home.clone(), &*self.clock);
        self.scans.insert_scan(&scan).await?;

        let mark = CollectionMark::for_scan(worker.clone(), home.clone(), &*self.clock);
        self.scans.mark_collected(&mark).await?;

        self.ledger
            .credit(CreditRequest::new(
                AccountRef::Worker(worker),
                ActivityCategory::Scan,
                format!("recorded verification scan at {}", home.as_str()),
                PointsAmount::SCAN_AWARD,
            ))
            .await?;

        let resident = self.residents.find_by_home(&home).await?;
        let resident_credited = resident.is_some();
        if let Some(resident) = resident {
            self.ledger
                .credit(CreditRequest::new(
                    AccountRef::Resident(resident.id().clone()),
                    ActivityCategory::VerifiedPickup,
                    format!("verified pickup at {}", home.as_str()),
                    PointsAmount::VERIFIED_PICKUP_AWARD,
                ))
                .await?;
        }

        Ok(ScanReceipt {
            scan_id: scan.id().clone(),
            home,
            worker_points: PointsAmount::SCAN_AWARD,
            resident_credited,
        })
    }
}
