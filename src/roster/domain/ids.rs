//! Identifier and validated scalar types for the roster domain.

use super::RosterDomainError;
use crate::ident::short_token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a field worker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(String);

impl WorkerId {
    /// Creates a validated worker identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyWorkerId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RosterDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(RosterDomainError::EmptyWorkerId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WorkerId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a registered resident.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResidentId(String);

impl ResidentId {
    /// Creates a validated resident identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyResidentId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RosterDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(RosterDomainError::EmptyResidentId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Creates a fresh registration-time resident identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("RES_{}", short_token(8)))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ResidentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ResidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical home/unit identifier linking residents to scan events.
///
/// The canonical form carries a `HOME` prefix. Raw scan payloads are folded
/// into this form by [`HomeId::canonicalize`], which is idempotent: feeding a
/// canonical identifier back in yields the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HomeId(String);

impl HomeId {
    const CANONICAL_PREFIX: &'static str = "HOME";

    /// Normalizes a raw payload into a canonical home identifier.
    ///
    /// Payloads already carrying the `HOME` prefix pass through unchanged;
    /// anything else is prefixed deterministically.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyHomeId`] when the payload is empty
    /// after trimming.
    pub fn canonicalize(raw: impl Into<String>) -> Result<Self, RosterDomainError> {
        let payload = raw.into();
        let normalized = payload.trim();
        if normalized.is_empty() {
            return Err(RosterDomainError::EmptyHomeId);
        }
        if normalized.starts_with(Self::CANONICAL_PREFIX) {
            return Ok(Self(normalized.to_owned()));
        }
        Ok(Self(format!("{}{normalized}", Self::CANONICAL_PREFIX)))
    }

    /// Returns the canonical identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HomeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse textual location grouping used in absence of precise coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaLabel(String);

impl AreaLabel {
    /// Creates a validated area label.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyAreaLabel`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RosterDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(RosterDomainError::EmptyAreaLabel);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AreaLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AreaLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
