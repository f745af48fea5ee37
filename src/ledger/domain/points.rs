//! Validated point amounts and account balances.

use super::LedgerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive point delta applied by a single credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsAmount(i64);

impl PointsAmount {
    /// Default golden-point award for a completed task.
    pub const TASK_AWARD_DEFAULT: Self = Self(10);

    /// Golden-point award for recording a verification scan.
    pub const SCAN_AWARD: Self = Self(5);

    /// Green-point award for a resident's verified pickup.
    pub const VERIFIED_PICKUP_AWARD: Self = Self(10);

    /// Creates a validated positive point amount.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerDomainError::NonPositiveAmount`] when the value is
    /// zero or negative.
    pub const fn new(value: i64) -> Result<Self, LedgerDomainError> {
        if value <= 0 {
            return Err(LedgerDomainError::NonPositiveAmount(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PointsAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accumulated point balance stored on a worker or resident record.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PointBalance(i64);

impl PointBalance {
    /// The zero balance every account starts from at registration.
    pub const ZERO: Self = Self(0);

    /// Creates a balance from a persisted total.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns the balance increased by one credit.
    ///
    /// Balance mutation is reserved to the ledger adapters; no other
    /// component may write balances.
    #[must_use]
    pub(crate) const fn credited(self, amount: PointsAmount) -> Self {
        Self(self.0.saturating_add(amount.value()))
    }
}

impl fmt::Display for PointBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
