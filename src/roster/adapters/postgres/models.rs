//! Diesel row models for roster persistence.

use crate::store::postgres::schema::{residents, workers};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for worker records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = workers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WorkerRow {
    /// Worker identifier.
    pub worker_id: String,
    /// Field role.
    pub role: String,
    /// Coarse area label.
    pub area: String,
    /// Golden-point balance.
    pub golden_points: i64,
    /// Assignment-pool eligibility flag.
    pub is_active: bool,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}

/// Insert model for worker records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = workers)]
pub struct NewWorkerRow {
    /// Worker identifier.
    pub worker_id: String,
    /// Field role.
    pub role: String,
    /// Coarse area label.
    pub area: String,
    /// Golden-point balance.
    pub golden_points: i64,
    /// Assignment-pool eligibility flag.
    pub is_active: bool,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}

/// Query result row for resident records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = residents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ResidentRow {
    /// Resident identifier.
    pub resident_id: String,
    /// Canonical home identifier.
    pub home_id: String,
    /// Coarse area label.
    pub area: String,
    /// Green-point balance.
    pub green_points: i64,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}

/// Insert model for resident records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = residents)]
pub struct NewResidentRow {
    /// Resident identifier.
    pub resident_id: String,
    /// Canonical home identifier.
    pub home_id: String,
    /// Coarse area label.
    pub area: String,
    /// Green-point balance.
    pub green_points: i64,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}
