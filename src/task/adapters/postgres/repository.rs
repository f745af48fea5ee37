//! `PostgreSQL` repository implementation for task storage.
//!
//! The completion path relies on a conditional `UPDATE … WHERE state =
//! 'assigned'` so the assigned-to-completed transition is a database-level
//! compare-and-set.

use super::models::{NewTaskRow, TaskRow};
use crate::ledger::domain::PointsAmount;
use crate::roster::domain::{HomeId, WorkerId};
use crate::store::postgres::{PgPool, schema::tasks};
use crate::task::{
    domain::{
        CompletionProof, PersistedTaskData, Priority, Task, TaskCompletion, TaskId, TaskKind,
        TaskState,
    },
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde_json::Value;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: PgPool,
}

impl PostgresTaskStore {
    /// Creates a new task store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|err| TaskStoreError::Unavailable(err.to_string()))?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let task_id = task.id().clone();
        let new_row = to_new_row(task)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskStoreError::DuplicateTask(task_id.clone())
                    }
                    _ => TaskStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let lookup_id = id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::task_id.eq(&lookup_id))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_for_worker(
        &self,
        worker: &WorkerId,
        state: TaskState,
    ) -> TaskStoreResult<Vec<Task>> {
        let lookup_worker = worker.as_str().to_owned();
        let state_value = state.as_str();
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::worker_id.eq(&lookup_worker))
                .filter(tasks::state.eq(state_value))
                .order(tasks::assigned_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn complete(
        &self,
        id: &TaskId,
        worker: &WorkerId,
        completion: TaskCompletion,
    ) -> TaskStoreResult<Option<Task>> {
        let lookup_id = id.as_str().to_owned();
        let lookup_worker = worker.as_str().to_owned();
        let proof_json = proof_to_json(completion.proof.as_ref())?;
        let completed_at = completion.completed_at;

        self.run_blocking(move |connection| {
            let row = diesel::update(
                tasks::table
                    .filter(tasks::task_id.eq(&lookup_id))
                    .filter(tasks::worker_id.eq(&lookup_worker))
                    .filter(tasks::state.eq(TaskState::Assigned.as_str())),
            )
            .set((
                tasks::state.eq(TaskState::Completed.as_str()),
                tasks::completed_at.eq(Some(completed_at)),
                tasks::proof.eq(proof_json),
            ))
            .returning(TaskRow::as_returning())
            .get_result::<TaskRow>(connection)
            .optional()
            .map_err(TaskStoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }
}

fn proof_to_json(proof: Option<&CompletionProof>) -> TaskStoreResult<Option<Value>> {
    proof
        .map(|p| serde_json::to_value(p).map_err(TaskStoreError::persistence))
        .transpose()
}

fn to_new_row(task: &Task) -> TaskStoreResult<NewTaskRow> {
    Ok(NewTaskRow {
        task_id: task.id().as_str().to_owned(),
        worker_id: task.worker().as_str().to_owned(),
        kind: task.kind().as_str().to_owned(),
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        home_id: task.home().map(|home| home.as_str().to_owned()),
        location: task.location().map(str::to_owned),
        priority: task.priority().as_str().to_owned(),
        state: task.state().as_str().to_owned(),
        award: task.award().value(),
        assigned_at: task.assigned_at(),
        completed_at: task.completed_at(),
        proof: proof_to_json(task.proof())?,
    })
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let proof = row
        .proof
        .map(serde_json::from_value::<CompletionProof>)
        .transpose()
        .map_err(TaskStoreError::persistence)?;

    let home = row
        .home_id
        .map(HomeId::canonicalize)
        .transpose()
        .map_err(TaskStoreError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::new(row.task_id).map_err(TaskStoreError::persistence)?,
        worker: WorkerId::new(row.worker_id).map_err(TaskStoreError::persistence)?,
        kind: TaskKind::try_from(row.kind.as_str()).map_err(TaskStoreError::persistence)?,
        title: row.title,
        description: row.description,
        home,
        location: row.location,
        priority: Priority::try_from(row.priority.as_str())
            .map_err(TaskStoreError::persistence)?,
        state: TaskState::try_from(row.state.as_str()).map_err(TaskStoreError::persistence)?,
        award: PointsAmount::new(row.award).map_err(TaskStoreError::persistence)?,
        assigned_at: row.assigned_at,
        completed_at: row.completed_at,
        proof,
    };
    Ok(Task::from_persisted(data))
}
