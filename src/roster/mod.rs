//! Worker and resident directory for Sarthi.
//!
//! The roster holds the two independent account populations of the incentive
//! economy: field workers (golden points) and registered residents (green
//! points). Records are created at registration time and are never hard
//! deleted; workers are deactivated instead. Point balances live on these
//! records but are mutated only through the [`crate::ledger`] module. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
