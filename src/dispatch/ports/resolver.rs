//! Port for resolving area labels to coordinates.

use crate::dispatch::domain::GeoPoint;
use crate::roster::domain::AreaLabel;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for location resolution.
pub type ResolverResult<T> = Result<T, ResolverError>;

/// Maps a coarse area label to a representative coordinate.
///
/// Workers do not report live positions; their area label stands in for
/// their location. Implementations must be deterministic so that repeated
/// dispatch over the same roster picks the same worker.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Resolves an area label to a coordinate.
    async fn resolve(&self, area: &AreaLabel) -> ResolverResult<GeoPoint>;
}

/// Errors returned by location resolver implementations.
#[derive(Debug, Clone, Error)]
pub enum ResolverError {
    /// The resolver backend is unreachable; the caller may retry.
    #[error("location resolver unavailable: {0}")]
    Unavailable(String),

    /// Resolution failed.
    #[error("resolution error: {0}")]
    Resolution(Arc<dyn std::error::Error + Send + Sync>),
}

impl ResolverError {
    /// Wraps a resolution error.
    pub fn resolution(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Resolution(Arc::new(err))
    }
}
