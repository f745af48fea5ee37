//! Shared persistence backends for module adapters.
//!
//! The in-memory backend is one process-local database shared by every
//! module's memory adapter, the same way the `PostgreSQL` adapters share one
//! connection pool. Module adapters stay thin handles over these backends.

pub mod memory;
pub mod postgres;
