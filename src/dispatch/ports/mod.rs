//! Port contracts for geo assignment.

pub mod resolver;

pub use resolver::{LocationResolver, ResolverError, ResolverResult};
