//! Projection of geographic points onto a sphere.
//!
//! Axis convention is Y-up: the north pole is `+Y`, longitude 0 on the
//! equator is `+X`, and longitude 90°E is `+Z`.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::GeoPoint;

/// Unit vector for a geographic point.
///
/// `x = cos(lat)·cos(lon)`, `y = sin(lat)`, `z = cos(lat)·sin(lon)`.
pub fn unit_vector(point: GeoPoint) -> DVec3 {
    let (sin_lat, cos_lat) = point.lat_rad().sin_cos();
    let (sin_lon, cos_lon) = point.lon_rad().sin_cos();
    DVec3::new(cos_lat * cos_lon, sin_lat, cos_lat * sin_lon)
}

/// Great-circle angle between two points, in radians.
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    // Clamp to avoid NaN from rounding just past ±1.
    unit_vector(a).dot(unit_vector(b)).clamp(-1.0, 1.0).acos()
}

/// A Cartesian point on (or just above) a sphere centred at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    /// Position in world units.
    pub position: DVec3,
}

impl SurfacePoint {
    /// Project a geographic point onto a sphere of `radius`.
    pub fn from_geo(point: GeoPoint, radius: f64) -> Self {
        Self {
            position: unit_vector(point) * radius,
        }
    }

    /// Distance from the origin.
    pub fn radius(&self) -> f64 {
        self.position.length()
    }

    /// Recover longitude/latitude in degrees.
    ///
    /// The origin maps to `(0, 0)`.
    pub fn to_geo(&self) -> GeoPoint {
        let r = self.radius();
        if r == 0.0 {
            return GeoPoint::new(0.0, 0.0);
        }
        let lat = (self.position.y / r).clamp(-1.0, 1.0).asin();
        let lon = self.position.z.atan2(self.position.x);
        GeoPoint::new(lon.to_degrees(), lat.to_degrees())
    }

    /// Narrow to `f32` for vertex upload.
    pub fn to_f32_array(&self) -> [f32; 3] {
        self.position.as_vec3().to_array()
    }

    /// Returns `true` if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
    }
}
