//! Adapter tests for the in-memory task and blob stores.

use crate::roster::domain::WorkerId;
use crate::store::memory::MemoryStore;
use crate::task::{
    adapters::memory::{InMemoryProofBlobStore, InMemoryTaskStore},
    domain::{Priority, Task, TaskAssignment, TaskCompletion, TaskId, TaskKind, TaskState},
    ports::{ProofBlobStore, TaskStore, TaskStoreError},
};
use crate::test_support::FixedClock;
use chrono::Duration;
use eyre::ensure;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::at(2025, 6, 1, 8, 0, 0)
}

#[fixture]
fn store() -> InMemoryTaskStore {
    InMemoryTaskStore::new(MemoryStore::new())
}

fn task_for(worker: &str, title: &str, clock: &FixedClock) -> eyre::Result<Task> {
    Ok(Task::assign(
        TaskAssignment {
            id: TaskId::direct(),
            worker: WorkerId::new(worker)?,
            kind: TaskKind::Collection,
            title: title.to_owned(),
            description: None,
            home: None,
            location: None,
            priority: Priority::default(),
            award: None,
        },
        clock,
    )?)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_rejects_duplicate_task_id(
    store: InMemoryTaskStore,
    clock: FixedClock,
) -> eyre::Result<()> {
    let task = task_for("W001", "Collect ward 3 bins", &clock)?;
    store.insert(&task).await?;

    let result = store.insert(&task).await;
    ensure!(matches!(result, Err(TaskStoreError::DuplicateTask(id)) if id == *task.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_for_worker_filters_by_state_and_sorts_oldest_first(
    store: InMemoryTaskStore,
    clock: FixedClock,
) -> eyre::Result<()> {
    let worker = WorkerId::new("W001")?;
    let early = task_for("W001", "First round", &clock)?;
    store.insert(&early).await?;

    let later_clock = FixedClock(clock.0 + Duration::hours(1));
    let late = task_for("W001", "Second round", &later_clock)?;
    store.insert(&late).await?;
    store
        .insert(&task_for("W002", "Other worker", &clock)?)
        .await?;

    store
        .complete(
            late.id(),
            &worker,
            TaskCompletion {
                completed_at: clock.0 + Duration::hours(2),
                proof: None,
            },
        )
        .await?;

    let assigned = store.find_for_worker(&worker, TaskState::Assigned).await?;
    let completed = store.find_for_worker(&worker, TaskState::Completed).await?;

    ensure!(assigned.iter().map(Task::id).eq([early.id()]));
    ensure!(completed.iter().map(Task::id).eq([late.id()]));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_cas_only_transitions_the_matching_assigned_task(
    store: InMemoryTaskStore,
    clock: FixedClock,
) -> eyre::Result<()> {
    let task = task_for("W001", "Collect ward 3 bins", &clock)?;
    store.insert(&task).await?;
    let completion = TaskCompletion {
        completed_at: clock.0 + Duration::hours(1),
        proof: None,
    };

    let foreign = store
        .complete(task.id(), &WorkerId::new("W002")?, completion.clone())
        .await?;
    ensure!(foreign.is_none());

    let won = store
        .complete(task.id(), &WorkerId::new("W001")?, completion.clone())
        .await?;
    ensure!(won.is_some_and(|t| t.state() == TaskState::Completed));

    let replay = store
        .complete(task.id(), &WorkerId::new("W001")?, completion)
        .await?;
    ensure!(replay.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blob_store_round_trips_proof_photos() -> eyre::Result<()> {
    let blobs = InMemoryProofBlobStore::new();
    let reference = blobs.put(vec![0xFF, 0xD8, 0xFF]).await?;

    ensure!(reference.as_str().starts_with("PROOF_"));
    ensure!(blobs.get(&reference).await? == Some(vec![0xFF, 0xD8, 0xFF]));

    let missing = crate::task::domain::ProofBlobRef::new("PROOF_MISSING".to_owned());
    ensure!(blobs.get(&missing).await?.is_none());
    Ok(())
}
