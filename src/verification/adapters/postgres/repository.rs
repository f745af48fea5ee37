//! `PostgreSQL` repository implementation for scan storage.

use super::models::{NewCollectionRow, NewScanRow, ScanRow};
use crate::roster::domain::{HomeId, WorkerId};
use crate::store::postgres::{PgPool, schema::daily_collections, schema::verification_scans};
use crate::verification::{
    domain::{CollectionMark, PersistedScanData, ScanId, VerificationScan},
    ports::{ScanStore, ScanStoreError, ScanStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed scan store.
#[derive(Debug, Clone)]
pub struct PostgresScanStore {
    pool: PgPool,
}

impl PostgresScanStore {
    /// Creates a new scan store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ScanStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ScanStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|err| ScanStoreError::Unavailable(err.to_string()))?;
            f(&mut connection)
        })
        .await
        .map_err(ScanStoreError::persistence)?
    }
}

#[async_trait]
impl ScanStore for PostgresScanStore {
    async fn insert_scan(&self, scan: &VerificationScan) -> ScanStoreResult<()> {
        let new_row = NewScanRow {
            scan_id: scan.id().as_str().to_owned(),
            worker_id: scan.worker().as_str().to_owned(),
            home_id: scan.home().as_str().to_owned(),
            scanned_at: scan.scanned_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(verification_scans::table)
                .values(&new_row)
                .execute(connection)
                .map_err(ScanStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_latest(
        &self,
        worker: &WorkerId,
        home: &HomeId,
    ) -> ScanStoreResult<Option<VerificationScan>> {
        let lookup_worker = worker.as_str().to_owned();
        let lookup_home = home.as_str().to_owned();

        self.run_blocking(move |connection| {
            let row = verification_scans::table
                .filter(verification_scans::worker_id.eq(&lookup_worker))
                .filter(verification_scans::home_id.eq(&lookup_home))
                .order(verification_scans::scanned_at.desc())
                .select(ScanRow::as_select())
                .first::<ScanRow>(connection)
                .optional()
                .map_err(ScanStoreError::persistence)?;
            row.map(row_to_scan).transpose()
        })
        .await
    }

    async fn mark_collected(&self, mark: &CollectionMark) -> ScanStoreResult<()> {
        let new_row = NewCollectionRow {
            home_id: mark.home().as_str().to_owned(),
            worker_id: mark.worker().as_str().to_owned(),
            collected_on: mark.collected_on(),
        };

        self.run_blocking(move |connection| {
            // Marking is idempotent per (home, worker, day).
            diesel::insert_into(daily_collections::table)
                .values(&new_row)
                .on_conflict_do_nothing()
                .execute(connection)
                .map_err(ScanStoreError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn row_to_scan(row: ScanRow) -> ScanStoreResult<VerificationScan> {
    let data = PersistedScanData {
        id: ScanId::from_persisted(row.scan_id),
        worker: WorkerId::new(row.worker_id).map_err(ScanStoreError::persistence)?,
        home: HomeId::canonicalize(row.home_id).map_err(ScanStoreError::persistence)?,
        scanned_at: row.scanned_at,
    };
    Ok(VerificationScan::from_persisted(data))
}
