//! Proof-of-presence verification for Sarthi.
//!
//! Workers record timestamped scans at registered homes. The read side
//! ([`services::VerificationGate`]) decides whether a home-linked task may
//! complete based on scan recency; the write side
//! ([`services::ScanIntakeService`]) normalizes scan payloads, appends scan
//! and same-day collection records, and triggers the incentive credits. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
