//! Geographic primitives for the Tellus globe.
//!
//! Longitude/latitude points in degrees, their projection onto a sphere of
//! arbitrary radius, and a few spherical helpers shared by the outline
//! generator and the scene.

mod geo_point;
mod surface;

pub use geo_point::{GeoOffset, GeoPoint, wrap_longitude};
pub use surface::{SurfacePoint, great_circle_distance, unit_vector};
