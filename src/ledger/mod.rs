//! Incentive-point ledger for Sarthi.
//!
//! The ledger is the single authority for point-balance mutation across the
//! two independent account populations: field workers (golden points) and
//! residents (green points). Every credit appends one immutable
//! [`domain::ActivityRecord`] and increases the account's stored balance by
//! the same amount as one atomic step, so that the sum of an account's
//! activity deltas always equals its balance. The module follows hexagonal
//! architecture:
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
