//! Domain model for geo assignment.

mod geo;

pub use geo::{EARTH_RADIUS_KM, GeoPoint, haversine_km};
