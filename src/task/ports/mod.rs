//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod blobs;
pub mod store;

pub use blobs::{BlobStoreError, BlobStoreResult, ProofBlobStore};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
