//! Geo-assignment engine for Sarthi.
//!
//! Dispatch turns a reported location into exactly one `Collection` task
//! assigned to the nearest active worker. Worker positions come from a
//! pluggable [`ports::LocationResolver`]; the production adapter derives a
//! deterministic placeholder coordinate from the worker's area label, and
//! ranking uses great-circle distance with a lexical worker-id tie-break so
//! the same inputs always pick the same worker. The module follows
//! hexagonal architecture:
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
