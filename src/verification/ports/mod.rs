//! Port contracts for proof-of-presence verification.

pub mod store;

pub use store::{ScanStore, ScanStoreError, ScanStoreResult};
