//! `PostgreSQL` adapters for ledger persistence.

mod models;
mod repository;

pub use repository::PostgresLedger;
