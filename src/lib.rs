//! Sarthi: field-operations coordination core.
//!
//! This crate implements the task-assignment, verification-gated completion,
//! and dual-ledger incentive subsystem that coordinates waste-collection and
//! inspection work between a dispatcher, mobile field workers, and registered
//! residents.
//!
//! # Architecture
//!
//! Sarthi follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, hashes, etc.)
//!
//! # Modules
//!
//! - [`roster`]: Worker and resident directory
//! - [`task`]: Task aggregate and verification-gated lifecycle
//! - [`dispatch`]: Nearest-worker geo-assignment
//! - [`verification`]: Proof-of-presence scans and the completion gate
//! - [`ledger`]: Incentive-point crediting and the activity audit trail
//! - [`store`]: Shared persistence backends used by module adapters

pub mod dispatch;
mod ident;
pub mod ledger;
pub mod roster;
pub mod store;
pub mod task;
pub mod verification;

#[cfg(test)]
pub(crate) mod test_support;
