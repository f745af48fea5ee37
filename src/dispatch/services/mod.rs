//! Orchestration services for geo assignment.

mod assignment;

pub use assignment::{
    AssignNearestRequest, AssignmentReceipt, DispatchError, DispatchResult, GeoAssignmentService,
};
