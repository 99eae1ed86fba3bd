//! Longitude/latitude points in degrees.

use serde::{Deserialize, Serialize};

/// A point on the globe as (longitude, latitude) in degrees.
///
/// Longitude is in `[-180, 180]` (east positive), latitude in `[-90, 90]`
/// (north positive). Constructors do not enforce the ranges so reference
/// tables can be written as `const` data; use [`GeoPoint::normalized`] after
/// any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in degrees.
    pub lon_deg: f64,
    /// Latitude in degrees.
    pub lat_deg: f64,
}

impl GeoPoint {
    /// Create a point from longitude and latitude in degrees.
    pub const fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }

    /// Longitude in radians.
    pub fn lon_rad(&self) -> f64 {
        self.lon_deg.to_radians()
    }

    /// Latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        self.lat_deg.to_radians()
    }

    /// Returns `true` if both coordinates are finite and inside their ranges.
    pub fn is_in_range(&self) -> bool {
        self.lon_deg.is_finite()
            && self.lat_deg.is_finite()
            && (-180.0..=180.0).contains(&self.lon_deg)
            && (-90.0..=90.0).contains(&self.lat_deg)
    }

    /// Wrap longitude into `[-180, 180]` and clamp latitude into `[-90, 90]`.
    ///
    /// Latitude is clamped rather than reflected over the pole: a drifted
    /// anchor that overshoots a pole parks on it.
    pub fn normalized(self) -> Self {
        Self {
            lon_deg: wrap_longitude(self.lon_deg),
            lat_deg: self.lat_deg.clamp(-90.0, 90.0),
        }
    }

    /// Displace the point by `offset` and normalize the result.
    pub fn offset(self, offset: GeoOffset) -> Self {
        Self::new(
            self.lon_deg + offset.dlon_deg,
            self.lat_deg + offset.dlat_deg,
        )
        .normalized()
    }
}

/// A displacement in degrees of longitude and latitude.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoOffset {
    /// Eastward displacement in degrees.
    pub dlon_deg: f64,
    /// Northward displacement in degrees.
    pub dlat_deg: f64,
}

impl GeoOffset {
    /// The zero offset.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create an offset from degree deltas.
    pub const fn new(dlon_deg: f64, dlat_deg: f64) -> Self {
        Self { dlon_deg, dlat_deg }
    }

    /// Scale both components by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.dlon_deg * factor, self.dlat_deg * factor)
    }
}

/// Wrap a longitude in degrees into `[-180, 180]`.
///
/// Values already in range are returned unchanged, so both `-180` and `180`
/// survive as written.
pub fn wrap_longitude(lon_deg: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon_deg) {
        lon_deg
    } else {
        (lon_deg + 180.0).rem_euclid(360.0) - 180.0
    }
}
