//! Diesel row models for the activity trail.

use crate::store::postgres::schema::activities;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for activity records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ActivityRow {
    /// Activity identifier.
    pub activity_id: String,
    /// Account population discriminant.
    pub account_kind: String,
    /// Account identifier within its population.
    pub account_id: String,
    /// Event category.
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Positive point delta.
    pub points: i64,
    /// Event timestamp.
    pub recorded_at: DateTime<Utc>,
}

/// Insert model for activity records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = activities)]
pub struct NewActivityRow {
    /// Activity identifier.
    pub activity_id: String,
    /// Account population discriminant.
    pub account_kind: String,
    /// Account identifier within its population.
    pub account_id: String,
    /// Event category.
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Positive point delta.
    pub points: i64,
    /// Event timestamp.
    pub recorded_at: DateTime<Utc>,
}
