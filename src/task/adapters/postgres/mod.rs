//! `PostgreSQL` adapters for task persistence.

mod models;
mod repository;

pub use repository::PostgresTaskStore;
