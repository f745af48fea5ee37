//! `PostgreSQL` repository implementation for the roster directory.

use super::models::{NewResidentRow, NewWorkerRow, ResidentRow, WorkerRow};
use crate::ledger::domain::PointBalance;
use crate::roster::{
    domain::{
        AreaLabel, HomeId, PersistedResidentData, PersistedWorkerData, Resident, ResidentId,
        Worker, WorkerId, WorkerRole,
    },
    ports::{DirectoryError, DirectoryResult, LeaderboardFilter, ResidentDirectory, WorkerDirectory},
};
use crate::store::postgres::{PgPool, schema::residents, schema::workers};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed worker and resident directory.
#[derive(Debug, Clone)]
pub struct PostgresDirectory {
    pool: PgPool,
}

impl PostgresDirectory {
    /// Creates a new directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DirectoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DirectoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|err| DirectoryError::Unavailable(err.to_string()))?;
            f(&mut connection)
        })
        .await
        .map_err(DirectoryError::persistence)?
    }
}

#[async_trait]
impl WorkerDirectory for PostgresDirectory {
    async fn register(&self, worker: &Worker) -> DirectoryResult<()> {
        let worker_id = worker.id().clone();
        let new_row = worker_to_new_row(worker);

        self.run_blocking(move |connection| {
            diesel::insert_into(workers::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DirectoryError::DuplicateWorker(worker_id.clone())
                    }
                    _ => DirectoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: &WorkerId) -> DirectoryResult<Option<Worker>> {
        let lookup_id = id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = workers::table
                .filter(workers::worker_id.eq(&lookup_id))
                .select(WorkerRow::as_select())
                .first::<WorkerRow>(connection)
                .optional()
                .map_err(DirectoryError::persistence)?;
            row.map(row_to_worker).transpose()
        })
        .await
    }

    async fn find_active(&self) -> DirectoryResult<Vec<Worker>> {
        self.run_blocking(|connection| {
            let rows = workers::table
                .filter(workers::is_active.eq(true))
                .select(WorkerRow::as_select())
                .load::<WorkerRow>(connection)
                .map_err(DirectoryError::persistence)?;
            rows.into_iter().map(row_to_worker).collect()
        })
        .await
    }

    async fn leaderboard(
        &self,
        filter: &LeaderboardFilter,
        limit: usize,
    ) -> DirectoryResult<Vec<Worker>> {
        let area = filter.area.as_ref().map(|area| area.as_str().to_owned());
        let role = filter.role.map(|role| role.as_str().to_owned());
        let row_limit = i64::try_from(limit).map_err(DirectoryError::persistence)?;

        self.run_blocking(move |connection| {
            let mut query = workers::table
                .filter(workers::is_active.eq(true))
                .into_boxed();
            if let Some(area_value) = area {
                query = query.filter(workers::area.eq(area_value));
            }
            if let Some(role_value) = role {
                query = query.filter(workers::role.eq(role_value));
            }
            let rows = query
                .order((workers::golden_points.desc(), workers::worker_id.asc()))
                .limit(row_limit)
                .select(WorkerRow::as_select())
                .load::<WorkerRow>(connection)
                .map_err(DirectoryError::persistence)?;
            rows.into_iter().map(row_to_worker).collect()
        })
        .await
    }
}

#[async_trait]
impl ResidentDirectory for PostgresDirectory {
    async fn register(&self, resident: &Resident) -> DirectoryResult<()> {
        let home = resident.home().clone();
        let new_row = resident_to_new_row(resident);

        self.run_blocking(move |connection| {
            diesel::insert_into(residents::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DirectoryError::DuplicateHome(home.clone())
                    }
                    _ => DirectoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_home(&self, home: &HomeId) -> DirectoryResult<Option<Resident>> {
        let lookup_home = home.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = residents::table
                .filter(residents::home_id.eq(&lookup_home))
                .select(ResidentRow::as_select())
                .first::<ResidentRow>(connection)
                .optional()
                .map_err(DirectoryError::persistence)?;
            row.map(row_to_resident).transpose()
        })
        .await
    }
}

fn worker_to_new_row(worker: &Worker) -> NewWorkerRow {
    NewWorkerRow {
        worker_id: worker.id().as_str().to_owned(),
        role: worker.role().as_str().to_owned(),
        area: worker.area().as_str().to_owned(),
        golden_points: worker.golden_points().value(),
        is_active: worker.is_active(),
        registered_at: worker.registered_at(),
    }
}

fn row_to_worker(row: WorkerRow) -> DirectoryResult<Worker> {
    let data = PersistedWorkerData {
        id: WorkerId::new(row.worker_id).map_err(DirectoryError::persistence)?,
        role: WorkerRole::try_from(row.role.as_str()).map_err(DirectoryError::persistence)?,
        area: AreaLabel::new(row.area).map_err(DirectoryError::persistence)?,
        golden_points: PointBalance::new(row.golden_points),
        active: row.is_active,
        registered_at: row.registered_at,
    };
    Ok(Worker::from_persisted(data))
}

fn resident_to_new_row(resident: &Resident) -> NewResidentRow {
    NewResidentRow {
        resident_id: resident.id().as_str().to_owned(),
        home_id: resident.home().as_str().to_owned(),
        area: resident.area().as_str().to_owned(),
        green_points: resident.green_points().value(),
        registered_at: resident.registered_at(),
    }
}

fn row_to_resident(row: ResidentRow) -> DirectoryResult<Resident> {
    let data = PersistedResidentData {
        id: ResidentId::new(row.resident_id).map_err(DirectoryError::persistence)?,
        home: HomeId::canonicalize(row.home_id).map_err(DirectoryError::persistence)?,
        area: AreaLabel::new(row.area).map_err(DirectoryError::persistence)?,
        green_points: PointBalance::new(row.green_points),
        registered_at: row.registered_at,
    };
    Ok(Resident::from_persisted(data))
}
