//! Service orchestration tests for verification-gated completion.

use std::sync::Arc;

use crate::ledger::{
    adapters::memory::InMemoryLedger,
    domain::{AccountRef, ActivityRecord, PointBalance},
    ports::{LedgerStore, LedgerStoreResult},
    services::IncentiveLedger,
};
use crate::roster::{
    adapters::memory::InMemoryDirectory,
    domain::{AreaLabel, Worker, WorkerId, WorkerRole},
    ports::WorkerDirectory,
};
use crate::store::memory::MemoryStore;
use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{TaskDomainError, TaskKind, TaskState},
    services::{
        AssignTaskRequest, CompleteTaskRequest, TaskLifecycleError, TaskLifecycleService,
    },
};
use crate::test_support::FixedClock;
use crate::verification::{
    adapters::memory::InMemoryScanStore,
    services::{RecordScanRequest, ScanIntakeService, VerificationGate},
};
use async_trait::async_trait;
use eyre::{bail, ensure};
use mockall::mock;
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskStore, InMemoryScanStore, InMemoryLedger, FixedClock>;

struct Harness {
    db: MemoryStore,
    clock: Arc<FixedClock>,
    service: TestService,
}

impl Harness {
    fn ledger(&self) -> IncentiveLedger<InMemoryLedger, FixedClock> {
        IncentiveLedger::new(
            Arc::new(InMemoryLedger::new(self.db.clone())),
            Arc::clone(&self.clock),
        )
    }

    fn intake(&self) -> ScanIntakeService<InMemoryScanStore, InMemoryDirectory, InMemoryLedger, FixedClock> {
        ScanIntakeService::new(
            Arc::new(InMemoryScanStore::new(self.db.clone())),
            Arc::new(InMemoryDirectory::new(self.db.clone())),
            self.ledger(),
            Arc::clone(&self.clock),
        )
    }

    async fn register_worker(&self, id: &str) -> eyre::Result<()> {
        let directory = InMemoryDirectory::new(self.db.clone());
        let worker = Worker::register(
            WorkerId::new(id)?,
            WorkerRole::GarbageCollector,
            AreaLabel::new("ward-3")?,
            &*self.clock,
        );
        WorkerDirectory::register(&directory, &worker).await?;
        Ok(())
    }

    async fn worker_balance(&self, id: &str) -> eyre::Result<i64> {
        let ledger = InMemoryLedger::new(self.db.clone());
        let balance = ledger
            .balance(&AccountRef::Worker(WorkerId::new(id)?))
            .await?;
        Ok(balance.unwrap_or(PointBalance::ZERO).value())
    }
}

#[fixture]
fn harness() -> Harness {
    let db = MemoryStore::new();
    let clock = Arc::new(FixedClock::at(2025, 6, 1, 8, 0, 0));
    let tasks = Arc::new(InMemoryTaskStore::new(db.clone()));
    let scans = Arc::new(InMemoryScanStore::new(db.clone()));
    let gate = VerificationGate::new(scans, Arc::clone(&clock));
    let ledger = IncentiveLedger::new(
        Arc::new(InMemoryLedger::new(db.clone())),
        Arc::clone(&clock),
    );
    let service = TaskLifecycleService::new(tasks, gate, ledger, Arc::clone(&clock));
    Harness { db, clock, service }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_direct_creates_assigned_task_without_points(
    harness: Harness,
) -> eyre::Result<()> {
    harness.register_worker("W001").await?;

    let task = harness
        .service
        .assign_direct(AssignTaskRequest::new(
            "W001",
            TaskKind::Inspection,
            "Inspect ward 3 dustbins",
        ))
        .await?;

    ensure!(task.state() == TaskState::Assigned);
    ensure!(task.worker().as_str() == "W001");
    ensure!(harness.worker_balance("W001").await? == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_direct_rejects_blank_title(harness: Harness) {
    let result = harness
        .service
        .assign_direct(AssignTaskRequest::new("W001", TaskKind::Collection, "   "))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_credits_the_owning_worker_once(harness: Harness) -> eyre::Result<()> {
    harness.register_worker("W001").await?;
    let task = harness
        .service
        .assign_direct(AssignTaskRequest::new(
            "W001",
            TaskKind::Collection,
            "Collect ward 3 bins",
        ))
        .await?;

    let receipt = harness
        .service
        .complete(
            CompleteTaskRequest::new(task.id().as_str(), "W001").with_notes("all bins cleared"),
        )
        .await?;

    ensure!(receipt.task.state() == TaskState::Completed);
    ensure!(receipt.points_earned.value() == 10);
    ensure!(harness.worker_balance("W001").await? == 10);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_is_idempotent_at_the_error_boundary(harness: Harness) -> eyre::Result<()> {
    harness.register_worker("W001").await?;
    let task = harness
        .service
        .assign_direct(AssignTaskRequest::new(
            "W001",
            TaskKind::Collection,
            "Collect ward 3 bins",
        ))
        .await?;
    let request = CompleteTaskRequest::new(task.id().as_str(), "W001");
    harness.service.complete(request.clone()).await?;

    let second = harness.service.complete(request).await;

    ensure!(matches!(
        second,
        Err(TaskLifecycleError::NotFoundOrAlreadyCompleted(_))
    ));
    ensure!(harness.worker_balance("W001").await? == 10);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_rejects_foreign_worker(harness: Harness) -> eyre::Result<()> {
    harness.register_worker("W001").await?;
    harness.register_worker("W002").await?;
    let task = harness
        .service
        .assign_direct(AssignTaskRequest::new(
            "W001",
            TaskKind::Collection,
            "Collect ward 3 bins",
        ))
        .await?;

    let result = harness
        .service
        .complete(CompleteTaskRequest::new(task.id().as_str(), "W002"))
        .await;

    ensure!(matches!(
        result,
        Err(TaskLifecycleError::NotFoundOrAlreadyCompleted(_))
    ));
    ensure!(harness.worker_balance("W001").await? == 0);
    ensure!(harness.worker_balance("W002").await? == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_of_unknown_task_is_rejected(harness: Harness) {
    let result = harness
        .service
        .complete(CompleteTaskRequest::new("TASK_FFFFFFFF", "W001"))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::NotFoundOrAlreadyCompleted(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn home_linked_completion_requires_a_fresh_scan(harness: Harness) -> eyre::Result<()> {
    harness.register_worker("W001").await?;
    let task = harness
        .service
        .assign_direct(
            AssignTaskRequest::new("W001", TaskKind::Collection, "Collect home 42").with_home("42"),
        )
        .await?;

    let blocked = harness
        .service
        .complete(CompleteTaskRequest::new(task.id().as_str(), "W001"))
        .await;

    ensure!(matches!(
        blocked,
        Err(TaskLifecycleError::VerificationRequired(_))
    ));
    ensure!(harness.worker_balance("W001").await? == 0);

    harness
        .intake()
        .record_scan(RecordScanRequest::new("W001", "42"))
        .await?;
    let receipt = harness
        .service
        .complete(CompleteTaskRequest::new(task.id().as_str(), "W001"))
        .await?;

    ensure!(receipt.task.state() == TaskState::Completed);
    // 5 points for the scan plus the 10-point task award.
    ensure!(harness.worker_balance("W001").await? == 15);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn racing_completions_credit_exactly_once(harness: Harness) -> eyre::Result<()> {
    harness.register_worker("W001").await?;
    let task = harness
        .service
        .assign_direct(AssignTaskRequest::new(
            "W001",
            TaskKind::Collection,
            "Collect ward 3 bins",
        ))
        .await?;
    let request = CompleteTaskRequest::new(task.id().as_str(), "W001");

    let first_service = harness.service.clone();
    let second_service = harness.service.clone();
    let first_request = request.clone();
    let (first, second) = tokio::join!(
        tokio::spawn(async move { first_service.complete(first_request).await }),
        tokio::spawn(async move { second_service.complete(request).await }),
    );
    let outcomes = [first?, second?];

    let successes = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    let conflicts = outcomes
        .iter()
        .filter(|outcome| {
            matches!(
                outcome,
                Err(TaskLifecycleError::NotFoundOrAlreadyCompleted(_))
            )
        })
        .count();

    ensure!(successes == 1);
    ensure!(conflicts == 1);
    ensure!(harness.worker_balance("W001").await? == 10);
    Ok(())
}

mock! {
    Ledger {}

    #[async_trait]
    impl LedgerStore for Ledger {
        async fn credit(&self, activity: &ActivityRecord) -> LedgerStoreResult<PointBalance>;
        async fn balance(&self, account: &AccountRef) -> LedgerStoreResult<Option<PointBalance>>;
        async fn activities(
            &self,
            account: &AccountRef,
            limit: usize,
        ) -> LedgerStoreResult<Vec<ActivityRecord>>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn conflicting_completion_never_reaches_the_ledger(harness: Harness) -> eyre::Result<()> {
    harness.register_worker("W001").await?;
    let task = harness
        .service
        .assign_direct(AssignTaskRequest::new(
            "W001",
            TaskKind::Collection,
            "Collect ward 3 bins",
        ))
        .await?;
    let request = CompleteTaskRequest::new(task.id().as_str(), "W001");
    harness.service.complete(request.clone()).await?;

    let mut mock_ledger = MockLedger::new();
    mock_ledger.expect_credit().times(0);
    let strict_service = TaskLifecycleService::new(
        Arc::new(InMemoryTaskStore::new(harness.db.clone())),
        VerificationGate::new(
            Arc::new(InMemoryScanStore::new(harness.db.clone())),
            Arc::clone(&harness.clock),
        ),
        IncentiveLedger::new(Arc::new(mock_ledger), Arc::clone(&harness.clock)),
        Arc::clone(&harness.clock),
    );

    let result = strict_service.complete(request).await;
    if !matches!(
        result,
        Err(TaskLifecycleError::NotFoundOrAlreadyCompleted(_))
    ) {
        bail!("expected conflict, got {result:?}");
    }
    Ok(())
}
