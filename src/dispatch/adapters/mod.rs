//! Adapter implementations of the dispatch ports.

pub mod area_hash;

pub use area_hash::AreaHashResolver;
