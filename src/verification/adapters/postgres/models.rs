//! Diesel row models for scan persistence.

use crate::store::postgres::schema::{daily_collections, verification_scans};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for verification scans.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = verification_scans)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ScanRow {
    /// Scan identifier.
    pub scan_id: String,
    /// Scanning worker.
    pub worker_id: String,
    /// Scanned canonical home identifier.
    pub home_id: String,
    /// Scan timestamp.
    pub scanned_at: DateTime<Utc>,
}

/// Insert model for verification scans.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = verification_scans)]
pub struct NewScanRow {
    /// Scan identifier.
    pub scan_id: String,
    /// Scanning worker.
    pub worker_id: String,
    /// Scanned canonical home identifier.
    pub home_id: String,
    /// Scan timestamp.
    pub scanned_at: DateTime<Utc>,
}

/// Insert model for same-day collection marks.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = daily_collections)]
pub struct NewCollectionRow {
    /// Collected home.
    pub home_id: String,
    /// Collecting worker.
    pub worker_id: String,
    /// Collection date.
    pub collected_on: NaiveDate,
}
