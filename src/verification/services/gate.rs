//! Read-side gate deciding whether a completion is backed by a fresh scan.

use crate::roster::domain::{HomeId, WorkerId};
use crate::verification::ports::{ScanStore, ScanStoreResult};
use chrono::Duration;
use mockable::Clock;
use std::sync::Arc;

/// Tuning knobs for the verification gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateConfig {
    /// Maximum age of the latest scan for the gate to pass.
    pub freshness: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            freshness: Duration::hours(24),
        }
    }
}

/// Scan-recency check consulted before a home-linked task may complete.
///
/// The gate never consumes a scan: a single scan validates any number of
/// completions inside its freshness window.
#[derive(Clone)]
pub struct VerificationGate<S, C>
where
    S: ScanStore,
    C: Clock + Send + Sync,
{
    scans: Arc<S>,
    clock: Arc<C>,
    config: GateConfig,
}

impl<S, C> VerificationGate<S, C>
where
    S: ScanStore,
    C: Clock + Send + Sync,
{
    /// Creates a gate with the default 24-hour freshness window.
    #[must_use]
    pub fn new(scans: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(scans, clock, GateConfig::default())
    }

    /// Creates a gate with an explicit configuration.
    #[must_use]
    pub const fn with_config(scans: Arc<S>, clock: Arc<C>, config: GateConfig) -> Self {
        Self {
            scans,
            clock,
            config,
        }
    }

    /// Returns `true` when the worker's latest scan of the home is within
    /// the freshness window.
    ///
    /// A scan aged exactly the window length still passes; one second
    /// past it fails. No scan at all fails.
    ///
    /// # Errors
    ///
    /// Returns [`crate::verification::ports::ScanStoreError`] when the
    /// scan lookup fails.
    pub async fn verify(&self, worker: &WorkerId, home: &HomeId) -> ScanStoreResult<bool> {
        let Some(scan) = self.scans.find_latest(worker, home).await? else {
            return Ok(false);
        };
        let age = self.clock.utc().signed_duration_since(scan.scanned_at());
        Ok(age <= self.config.freshness)
    }
}
