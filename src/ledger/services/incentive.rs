//! Service layer for crediting incentive points.

use crate::ledger::{
    domain::{
        AccountRef, ActivityCategory, ActivityRecord, LedgerDomainError, PointBalance,
        PointsAmount,
    },
    ports::{LedgerStore, LedgerStoreError, LedgerStoreResult},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Default description attached to ad-hoc point awards.
const DEFAULT_AWARD_DESCRIPTION: &str = "completed training module";

/// Request payload for crediting a validated amount to an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditRequest {
    account: AccountRef,
    category: ActivityCategory,
    description: String,
    amount: PointsAmount,
}

impl CreditRequest {
    /// Creates a credit request.
    #[must_use]
    pub fn new(
        account: AccountRef,
        category: ActivityCategory,
        description: impl Into<String>,
        amount: PointsAmount,
    ) -> Self {
        Self {
            account,
            category,
            description: description.into(),
            amount,
        }
    }
}

/// Request payload for an ad-hoc point award.
///
/// The amount arrives unvalidated; the service rejects non-positive values
/// before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardPointsRequest {
    account: AccountRef,
    amount: i64,
    description: Option<String>,
    category: Option<ActivityCategory>,
}

impl AwardPointsRequest {
    /// Creates an award request for a raw point amount.
    #[must_use]
    pub const fn new(account: AccountRef, amount: i64) -> Self {
        Self {
            account,
            amount,
            description: None,
            category: None,
        }
    }

    /// Sets the activity description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the activity category.
    #[must_use]
    pub const fn with_category(mut self, category: ActivityCategory) -> Self {
        self.category = Some(category);
        self
    }
}

/// Service-level errors for ledger operations.
#[derive(Debug, Error)]
pub enum IncentiveLedgerError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] LedgerDomainError),
    /// Ledger store operation failed.
    #[error(transparent)]
    Store(#[from] LedgerStoreError),
}

/// Result type for ledger service operations.
pub type IncentiveLedgerResult<T> = Result<T, IncentiveLedgerError>;

/// Incentive-point crediting service.
///
/// All balance mutation in the system flows through this service; callers
/// never touch worker or resident balances directly.
#[derive(Clone)]
pub struct IncentiveLedger<L, C>
where
    L: LedgerStore,
    C: Clock + Send + Sync,
{
    store: Arc<L>,
    clock: Arc<C>,
}

impl<L, C> IncentiveLedger<L, C>
where
    L: LedgerStore,
    C: Clock + Send + Sync,
{
    /// Creates a new incentive ledger service.
    #[must_use]
    pub const fn new(store: Arc<L>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Applies one credit to an account and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`IncentiveLedgerError::Domain`] when the description is
    /// empty, or [`IncentiveLedgerError::Store`] when the account is
    /// unknown or persistence fails.
    pub async fn credit(&self, request: CreditRequest) -> IncentiveLedgerResult<PointBalance> {
        let record = ActivityRecord::record(
            request.account,
            request.category,
            request.description,
            request.amount,
            &*self.clock,
        )?;
        Ok(self.store.credit(&record).await?)
    }

    /// Applies an ad-hoc award such as a training-completion bonus.
    ///
    /// Defaults to the `training` category and a stock description when the
    /// request leaves them unset.
    ///
    /// # Errors
    ///
    /// Returns [`IncentiveLedgerError::Domain`] when the amount is not
    /// positive, or [`IncentiveLedgerError::Store`] when the account is
    /// unknown or persistence fails.
    pub async fn award(&self, request: AwardPointsRequest) -> IncentiveLedgerResult<PointBalance> {
        let amount = PointsAmount::new(request.amount)?;
        let category = request.category.unwrap_or(ActivityCategory::Training);
        let description = request
            .description
            .unwrap_or_else(|| DEFAULT_AWARD_DESCRIPTION.to_owned());
        self.credit(CreditRequest::new(request.account, category, description, amount))
            .await
    }

    /// Returns an account's stored balance.
    ///
    /// Returns `Ok(None)` when the account does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`IncentiveLedgerError::Store`] when persistence lookup
    /// fails.
    pub async fn balance(&self, account: &AccountRef) -> IncentiveLedgerResult<Option<PointBalance>> {
        let result: LedgerStoreResult<Option<PointBalance>> = self.store.balance(account).await;
        Ok(result?)
    }

    /// Returns an account's most recent activity, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`IncentiveLedgerError::Store`] when persistence lookup
    /// fails.
    pub async fn recent_activity(
        &self,
        account: &AccountRef,
        limit: usize,
    ) -> IncentiveLedgerResult<Vec<ActivityRecord>> {
        Ok(self.store.activities(account, limit).await?)
    }
}
