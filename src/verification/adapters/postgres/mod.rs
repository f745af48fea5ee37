//! `PostgreSQL` adapters for scan persistence.

mod models;
mod repository;

pub use repository::PostgresScanStore;
