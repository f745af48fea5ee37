//! Domain model for the incentive-point ledger.
//!
//! Models validated point amounts, account references spanning both account
//! populations, and the append-only activity audit trail.

mod activity;
mod error;
mod points;

pub use activity::{
    AccountKind, AccountRef, ActivityCategory, ActivityId, ActivityRecord, ParseAccountKindError,
    ParseActivityCategoryError, PersistedActivityData,
};
pub use error::LedgerDomainError;
pub use points::{PointBalance, PointsAmount};
