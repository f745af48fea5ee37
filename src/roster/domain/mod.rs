//! Domain model for the worker and resident roster.
//!
//! The roster domain models registration-time identities, coarse location
//! labels, and the read side of point balances while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod resident;
mod worker;

pub use error::RosterDomainError;
pub use ids::{AreaLabel, HomeId, ResidentId, WorkerId};
pub use resident::{PersistedResidentData, Resident};
pub use worker::{PersistedWorkerData, Worker, WorkerRole};
