//! Opaque blob storage port for proof photos.
//!
//! The core stores only references; the bytes live behind this contract.

use crate::task::domain::ProofBlobRef;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for blob store operations.
pub type BlobStoreResult<T> = Result<T, BlobStoreError>;

/// Proof photo storage contract: store a blob, get back a reference.
#[async_trait]
pub trait ProofBlobStore: Send + Sync {
    /// Stores a blob and returns an opaque reference to it.
    async fn put(&self, bytes: Vec<u8>) -> BlobStoreResult<ProofBlobRef>;

    /// Retrieves a blob by reference.
    ///
    /// Returns `None` when no blob is stored under the reference.
    async fn get(&self, reference: &ProofBlobRef) -> BlobStoreResult<Option<Vec<u8>>>;
}

/// Errors returned by blob store implementations.
#[derive(Debug, Clone, Error)]
pub enum BlobStoreError {
    /// The backing store is unreachable; the caller may retry.
    #[error("blob store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BlobStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
