//! Task lifecycle management for Sarthi.
//!
//! A task is created in the `assigned` state, owned by exactly one worker,
//! and transitions once: `assigned` → `completed`. Completion of a task
//! linked to a home identifier is gated on a fresh proof-of-presence scan,
//! and a successful completion triggers exactly one golden-point credit to
//! the owning worker. The module follows hexagonal architecture:
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
