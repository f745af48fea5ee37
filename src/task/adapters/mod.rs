//! Adapter implementations of the task ports.

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryProofBlobStore, InMemoryTaskStore};
pub use postgres::PostgresTaskStore;
