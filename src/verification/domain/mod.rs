//! Domain model for proof-of-presence verification.

mod scan;

pub use scan::{CollectionMark, PersistedScanData, ScanId, VerificationScan};
