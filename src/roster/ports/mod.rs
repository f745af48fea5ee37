//! Port contracts for the worker and resident roster.
//!
//! Ports define infrastructure-agnostic interfaces used by roster consumers.

pub mod directory;

pub use directory::{
    DirectoryError, DirectoryResult, LeaderboardFilter, ResidentDirectory, WorkerDirectory,
};
