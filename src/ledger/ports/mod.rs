//! Port contracts for the incentive-point ledger.

pub mod store;

pub use store::{LedgerStore, LedgerStoreError, LedgerStoreResult};
