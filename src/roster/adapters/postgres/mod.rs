//! `PostgreSQL` adapters for roster persistence.

mod models;
mod repository;

pub use repository::PostgresDirectory;
