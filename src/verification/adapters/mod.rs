//! Adapter implementations of the verification ports.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryScanStore;
pub use postgres::PostgresScanStore;
