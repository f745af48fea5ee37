//! Directory adapter tests for registration and the leaderboard.

use std::sync::Arc;

use crate::ledger::{
    domain::{AccountRef, ActivityCategory, ActivityRecord, PointsAmount},
    ports::LedgerStore,
};
use crate::ledger::adapters::memory::InMemoryLedger;
use crate::roster::{
    domain::{AreaLabel, HomeId, Resident, ResidentId, Worker, WorkerId, WorkerRole},
    ports::{DirectoryError, LeaderboardFilter, ResidentDirectory, WorkerDirectory},
};
use crate::store::memory::MemoryStore;
use crate::test_support::FixedClock;
use eyre::{ensure, eyre};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::at(2025, 6, 1, 8, 0, 0)
}

#[fixture]
fn db() -> MemoryStore {
    MemoryStore::new()
}

fn worker(id: &str, area: &str, clock: &FixedClock) -> eyre::Result<Worker> {
    Ok(Worker::register(
        WorkerId::new(id)?,
        WorkerRole::GarbageCollector,
        AreaLabel::new(area)?,
        clock,
    ))
}

async fn credit_worker(
    ledger: &InMemoryLedger,
    id: &str,
    amount: i64,
    clock: &FixedClock,
) -> eyre::Result<()> {
    let record = ActivityRecord::record(
        AccountRef::Worker(WorkerId::new(id)?),
        ActivityCategory::Adjustment,
        "seed balance",
        PointsAmount::new(amount)?,
        clock,
    )?;
    ledger.credit(&record).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_rejects_duplicate_worker_id(db: MemoryStore, clock: FixedClock) {
    let directory = crate::roster::adapters::memory::InMemoryDirectory::new(db);
    let first = worker("W001", "ward-3", &clock).expect("valid worker");
    WorkerDirectory::register(&directory, &first)
        .await
        .expect("first registration should succeed");

    let duplicate = worker("W001", "ward-5", &clock).expect("valid worker");
    let result = WorkerDirectory::register(&directory, &duplicate).await;

    assert!(matches!(result, Err(DirectoryError::DuplicateWorker(id)) if id.as_str() == "W001"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_rejects_second_resident_for_same_home(db: MemoryStore, clock: FixedClock) {
    let directory = crate::roster::adapters::memory::InMemoryDirectory::new(db);
    let home = HomeId::canonicalize("17").expect("valid home");
    let first = Resident::register(
        ResidentId::generate(),
        home.clone(),
        AreaLabel::new("ward-3").expect("valid area"),
        &clock,
    );
    ResidentDirectory::register(&directory, &first)
        .await
        .expect("first registration should succeed");

    let second = Resident::register(
        ResidentId::generate(),
        home.clone(),
        AreaLabel::new("ward-3").expect("valid area"),
        &clock,
    );
    let result = ResidentDirectory::register(&directory, &second).await;

    assert!(matches!(result, Err(DirectoryError::DuplicateHome(h)) if h == home));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_active_excludes_deactivated_workers(
    db: MemoryStore,
    clock: FixedClock,
) -> eyre::Result<()> {
    let directory = crate::roster::adapters::memory::InMemoryDirectory::new(db);
    let mut retired = worker("W001", "ward-3", &clock)?;
    retired.deactivate();
    WorkerDirectory::register(&directory, &retired).await?;
    WorkerDirectory::register(&directory, &worker("W002", "ward-3", &clock)?).await?;

    let active = directory.find_active().await?;

    ensure!(active.len() == 1);
    let only = active.first().ok_or_else(|| eyre!("missing worker"))?;
    ensure!(only.id().as_str() == "W002");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn leaderboard_ranks_by_balance_then_id(
    db: MemoryStore,
    clock: FixedClock,
) -> eyre::Result<()> {
    let directory = Arc::new(crate::roster::adapters::memory::InMemoryDirectory::new(
        db.clone(),
    ));
    let ledger = InMemoryLedger::new(db);
    for id in ["W001", "W002", "W003"] {
        WorkerDirectory::register(&*directory, &worker(id, "ward-3", &clock)?).await?;
    }
    credit_worker(&ledger, "W002", 30, &clock).await?;
    credit_worker(&ledger, "W003", 30, &clock).await?;
    credit_worker(&ledger, "W001", 10, &clock).await?;

    let ranked = directory.leaderboard(&LeaderboardFilter::default(), 10).await?;
    let ids: Vec<&str> = ranked.iter().map(|w| w.id().as_str()).collect();

    // Equal balances fall back to ascending id.
    ensure!(ids == vec!["W002", "W003", "W001"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn leaderboard_applies_area_filter_and_limit(
    db: MemoryStore,
    clock: FixedClock,
) -> eyre::Result<()> {
    let directory = crate::roster::adapters::memory::InMemoryDirectory::new(db.clone());
    let ledger = InMemoryLedger::new(db);
    WorkerDirectory::register(&directory, &worker("W001", "ward-3", &clock)?).await?;
    WorkerDirectory::register(&directory, &worker("W002", "ward-5", &clock)?).await?;
    WorkerDirectory::register(&directory, &worker("W003", "ward-5", &clock)?).await?;
    credit_worker(&ledger, "W003", 20, &clock).await?;

    let filter = LeaderboardFilter {
        area: Some(AreaLabel::new("ward-5")?),
        role: None,
    };
    let ranked = directory.leaderboard(&filter, 1).await?;
    let ids: Vec<&str> = ranked.iter().map(|w| w.id().as_str()).collect();

    ensure!(ids == vec!["W003"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_home_returns_registered_resident(
    db: MemoryStore,
    clock: FixedClock,
) -> eyre::Result<()> {
    let directory = crate::roster::adapters::memory::InMemoryDirectory::new(db);
    let home = HomeId::canonicalize("88")?;
    let resident = Resident::register(
        ResidentId::generate(),
        home.clone(),
        AreaLabel::new("ward-1")?,
        &clock,
    );
    ResidentDirectory::register(&directory, &resident).await?;

    let found = directory.find_by_home(&home).await?;
    ensure!(found.as_ref().map(Resident::id) == Some(resident.id()));

    let missing = directory.find_by_home(&HomeId::canonicalize("99")?).await?;
    ensure!(missing.is_none());
    Ok(())
}
