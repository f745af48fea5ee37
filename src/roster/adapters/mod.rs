//! Adapter implementations of the roster ports.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryDirectory;
pub use postgres::PostgresDirectory;
