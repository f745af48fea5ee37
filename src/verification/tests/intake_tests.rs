//! Scan intake tests covering canonicalisation and crediting.

use std::sync::Arc;

use crate::ledger::{
    adapters::memory::InMemoryLedger,
    domain::{AccountRef, ActivityCategory, PointBalance},
    ports::LedgerStore,
    services::IncentiveLedger,
};
use crate::roster::{
    adapters::memory::InMemoryDirectory,
    domain::{
        AreaLabel, HomeId, Resident, ResidentId, RosterDomainError, Worker, WorkerId, WorkerRole,
    },
    ports::{ResidentDirectory, WorkerDirectory},
};
use crate::store::memory::MemoryStore;
use crate::test_support::FixedClock;
use crate::verification::{
    adapters::memory::InMemoryScanStore,
    ports::ScanStore,
    services::{RecordScanRequest, ScanIntakeError, ScanIntakeService},
};
use eyre::{ensure, eyre};
use rstest::{fixture, rstest};

type TestIntake = ScanIntakeService<InMemoryScanStore, InMemoryDirectory, InMemoryLedger, FixedClock>;

struct Harness {
    db: MemoryStore,
    clock: Arc<FixedClock>,
    intake: TestIntake,
}

impl Harness {
    async fn register_worker(&self, id: &str) -> eyre::Result<WorkerId> {
        let worker_id = WorkerId::new(id)?;
        let worker = Worker::register(
            worker_id.clone(),
            WorkerRole::GarbageCollector,
            AreaLabel::new("ward-3")?,
            &*self.clock,
        );
        let directory = InMemoryDirectory::new(self.db.clone());
        WorkerDirectory::register(&directory, &worker).await?;
        Ok(worker_id)
    }

    async fn register_resident(&self, home: &str) -> eyre::Result<ResidentId> {
        let resident = Resident::register(
            ResidentId::generate(),
            HomeId::canonicalize(home)?,
            AreaLabel::new("ward-3")?,
            &*self.clock,
        );
        let directory = InMemoryDirectory::new(self.db.clone());
        ResidentDirectory::register(&directory, &resident).await?;
        Ok(resident.id().clone())
    }

    async fn balance(&self, account: AccountRef) -> eyre::Result<i64> {
        let ledger = InMemoryLedger::new(self.db.clone());
        Ok(ledger
            .balance(&account)
            .await?
            .unwrap_or(PointBalance::ZERO)
            .value())
    }
}

#[fixture]
fn harness() -> Harness {
    let db = MemoryStore::new();
    let clock = Arc::new(FixedClock::at(2025, 6, 1, 8, 0, 0));
    let ledger = IncentiveLedger::new(
        Arc::new(InMemoryLedger::new(db.clone())),
        Arc::clone(&clock),
    );
    let intake = ScanIntakeService::new(
        Arc::new(InMemoryScanStore::new(db.clone())),
        Arc::new(InMemoryDirectory::new(db.clone())),
        ledger,
        Arc::clone(&clock),
    );
    Harness { db, clock, intake }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn scan_canonicalises_the_payload_and_credits_the_worker(
    harness: Harness,
) -> eyre::Result<()> {
    let worker_id = harness.register_worker("W001").await?;

    let receipt = harness
        .intake
        .record_scan(RecordScanRequest::new("W001", "42"))
        .await?;

    ensure!(receipt.home.as_str() == "HOME42");
    ensure!(receipt.scan_id.as_str().starts_with("SCAN_"));
    ensure!(receipt.worker_points.value() == 5);
    ensure!(!receipt.resident_credited);
    ensure!(harness.balance(AccountRef::Worker(worker_id)).await? == 5);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn scan_of_a_registered_home_also_credits_the_resident(
    harness: Harness,
) -> eyre::Result<()> {
    let worker_id = harness.register_worker("W001").await?;
    let resident_id = harness.register_resident("42").await?;

    let receipt = harness
        .intake
        .record_scan(RecordScanRequest::new("W001", "HOME42"))
        .await?;

    ensure!(receipt.resident_credited);
    ensure!(harness.balance(AccountRef::Worker(worker_id)).await? == 5);
    ensure!(
        harness
            .balance(AccountRef::Resident(resident_id.clone()))
            .await?
            == 10
    );

    let ledger = InMemoryLedger::new(harness.db.clone());
    let activities = ledger
        .activities(&AccountRef::Resident(resident_id), 10)
        .await?;
    let latest = activities.first().ok_or_else(|| eyre!("missing activity"))?;
    ensure!(latest.category() == ActivityCategory::VerifiedPickup);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn scan_records_the_same_day_collection_mark(harness: Harness) -> eyre::Result<()> {
    harness.register_worker("W001").await?;

    harness
        .intake
        .record_scan(RecordScanRequest::new("W001", "42"))
        .await?;
    harness
        .intake
        .record_scan(RecordScanRequest::new("W001", "42"))
        .await?;

    let store = InMemoryScanStore::new(harness.db.clone());
    let latest = store
        .find_latest(&WorkerId::new("W001")?, &HomeId::canonicalize("42")?)
        .await?;
    ensure!(latest.is_some());

    // Two scans on the same day collapse into one collection mark.
    let state = harness.db.read().map_err(|err| eyre!(err))?;
    ensure!(state.collections.len() == 1);
    ensure!(state.scans.len() == 2);
    Ok(())
}

#[rstest]
#[case("", "42", RosterDomainError::EmptyWorkerId)]
#[case("W001", "   ", RosterDomainError::EmptyHomeId)]
#[tokio::test(flavor = "multi_thread")]
async fn scan_rejects_blank_inputs_before_writing(
    harness: Harness,
    #[case] worker: &str,
    #[case] payload: &str,
    #[case] expected: RosterDomainError,
) -> eyre::Result<()> {
    harness.register_worker("W001").await?;

    let result = harness
        .intake
        .record_scan(RecordScanRequest::new(worker, payload))
        .await;

    ensure!(matches!(result, Err(ScanIntakeError::Roster(err)) if err == expected));
    let state = harness.db.read().map_err(|err| eyre!(err))?;
    ensure!(state.scans.is_empty());
    ensure!(state.activities.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn scan_for_an_unregistered_worker_fails_without_credit(
    harness: Harness,
) -> eyre::Result<()> {
    let result = harness
        .intake
        .record_scan(RecordScanRequest::new("W404", "42"))
        .await;

    ensure!(matches!(result, Err(ScanIntakeError::Ledger(_))));
    Ok(())
}
