//! `PostgreSQL` ledger implementation with transactional credits.

use super::models::{ActivityRow, NewActivityRow};
use crate::ledger::{
    domain::{
        AccountKind, AccountRef, ActivityCategory, ActivityId, ActivityRecord, PersistedActivityData,
        PointBalance, PointsAmount,
    },
    ports::{LedgerStore, LedgerStoreError, LedgerStoreResult},
};
use crate::roster::domain::{ResidentId, WorkerId};
use crate::store::postgres::{PgPool, schema::activities, schema::residents, schema::workers};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use thiserror::Error;

/// `PostgreSQL`-backed incentive ledger.
///
/// Each credit runs as one database transaction covering the balance
/// update and the activity insert, so a crash between the two cannot
/// leave the trail and the balance disagreeing.
#[derive(Debug, Clone)]
pub struct PostgresLedger {
    pool: PgPool,
}

/// Transaction-internal error carrier.
///
/// Diesel transactions require the error type to absorb its own errors,
/// so the missing-account case rides alongside until the transaction
/// result is mapped back to [`LedgerStoreError`].
#[derive(Debug, Error)]
enum CreditTxError {
    #[error(transparent)]
    Diesel(#[from] DieselError),
    #[error("account not found")]
    UnknownAccount,
}

impl PostgresLedger {
    /// Creates a new ledger from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> LedgerStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> LedgerStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|err| LedgerStoreError::Unavailable(err.to_string()))?;
            f(&mut connection)
        })
        .await
        .map_err(LedgerStoreError::persistence)?
    }
}

#[async_trait]
impl LedgerStore for PostgresLedger {
    async fn credit(&self, activity: &ActivityRecord) -> LedgerStoreResult<PointBalance> {
        let account = activity.account().clone();
        let account_id = account.id_str().to_owned();
        let delta = activity.points().value();
        let new_row = activity_to_new_row(activity);

        self.run_blocking(move |connection| {
            let outcome = connection.transaction::<i64, CreditTxError, _>(|conn| {
                let updated = match account.kind() {
                    AccountKind::Worker => {
                        diesel::update(workers::table.filter(workers::worker_id.eq(&account_id)))
                            .set(workers::golden_points.eq(workers::golden_points + delta))
                            .returning(workers::golden_points)
                            .get_result::<i64>(conn)
                            .optional()?
                    }
                    AccountKind::Resident => diesel::update(
                        residents::table.filter(residents::resident_id.eq(&account_id)),
                    )
                    .set(residents::green_points.eq(residents::green_points + delta))
                    .returning(residents::green_points)
                    .get_result::<i64>(conn)
                    .optional()?,
                };
                let balance = updated.ok_or(CreditTxError::UnknownAccount)?;
                diesel::insert_into(activities::table)
                    .values(&new_row)
                    .execute(conn)?;
                Ok(balance)
            });
            match outcome {
                Ok(balance) => Ok(PointBalance::new(balance)),
                Err(CreditTxError::UnknownAccount) => {
                    Err(LedgerStoreError::UnknownAccount(account.clone()))
                }
                Err(CreditTxError::Diesel(err)) => Err(LedgerStoreError::persistence(err)),
            }
        })
        .await
    }

    async fn balance(&self, account: &AccountRef) -> LedgerStoreResult<Option<PointBalance>> {
        let kind = account.kind();
        let account_id = account.id_str().to_owned();

        self.run_blocking(move |connection| {
            let stored = match kind {
                AccountKind::Worker => workers::table
                    .filter(workers::worker_id.eq(&account_id))
                    .select(workers::golden_points)
                    .first::<i64>(connection)
                    .optional()
                    .map_err(LedgerStoreError::persistence)?,
                AccountKind::Resident => residents::table
                    .filter(residents::resident_id.eq(&account_id))
                    .select(residents::green_points)
                    .first::<i64>(connection)
                    .optional()
                    .map_err(LedgerStoreError::persistence)?,
            };
            Ok(stored.map(PointBalance::new))
        })
        .await
    }

    async fn activities(
        &self,
        account: &AccountRef,
        limit: usize,
    ) -> LedgerStoreResult<Vec<ActivityRecord>> {
        let kind = account.kind().as_str().to_owned();
        let account_id = account.id_str().to_owned();
        let row_limit = i64::try_from(limit).map_err(LedgerStoreError::persistence)?;

        self.run_blocking(move |connection| {
            let rows = activities::table
                .filter(activities::account_kind.eq(&kind))
                .filter(activities::account_id.eq(&account_id))
                .order(activities::recorded_at.desc())
                .limit(row_limit)
                .select(ActivityRow::as_select())
                .load::<ActivityRow>(connection)
                .map_err(LedgerStoreError::persistence)?;
            rows.into_iter().map(row_to_activity).collect()
        })
        .await
    }
}

fn activity_to_new_row(activity: &ActivityRecord) -> NewActivityRow {
    NewActivityRow {
        activity_id: activity.id().as_str().to_owned(),
        account_kind: activity.account().kind().as_str().to_owned(),
        account_id: activity.account().id_str().to_owned(),
        category: activity.category().as_str().to_owned(),
        description: activity.description().to_owned(),
        points: activity.points().value(),
        recorded_at: activity.recorded_at(),
    }
}

fn row_to_activity(row: ActivityRow) -> LedgerStoreResult<ActivityRecord> {
    let kind =
        AccountKind::try_from(row.account_kind.as_str()).map_err(LedgerStoreError::persistence)?;
    let account = match kind {
        AccountKind::Worker => AccountRef::Worker(
            WorkerId::new(row.account_id).map_err(LedgerStoreError::persistence)?,
        ),
        AccountKind::Resident => AccountRef::Resident(
            ResidentId::new(row.account_id).map_err(LedgerStoreError::persistence)?,
        ),
    };
    let data = PersistedActivityData {
        id: ActivityId::from_persisted(row.activity_id),
        account,
        category: ActivityCategory::try_from(row.category.as_str())
            .map_err(LedgerStoreError::persistence)?,
        description: row.description,
        points: PointsAmount::new(row.points).map_err(LedgerStoreError::persistence)?,
        recorded_at: row.recorded_at,
    };
    Ok(ActivityRecord::from_persisted(data))
}
