//! Orchestration services for the incentive-point ledger.

mod incentive;

pub use incentive::{
    AwardPointsRequest, CreditRequest, IncentiveLedger, IncentiveLedgerError,
    IncentiveLedgerResult,
};
