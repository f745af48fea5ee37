//! Orchestration services for proof-of-presence verification.

mod gate;
mod intake;

pub use gate::{GateConfig, VerificationGate};
pub use intake::{RecordScanRequest, ScanIntakeError, ScanIntakeResult, ScanIntakeService, ScanReceipt};
