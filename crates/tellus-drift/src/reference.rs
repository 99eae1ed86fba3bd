//! Hand-authored reference point sets.
//!
//! These are illustrative sample points, not survey data.

use tellus_geo::{GeoOffset, GeoPoint};

use crate::DriftAnchor;

/// Radius of the rendered globe in world units.
pub const GLOBE_RADIUS: f64 = 2.0;

/// Outline radius as a multiple of [`GLOBE_RADIUS`]. Lifts the line off the
/// sphere so it does not z-fight with the surface.
pub const OUTLINE_LIFT: f64 = 1.01;

/// Radius the outline points are projected onto.
pub const DEFAULT_OUTLINE_RADIUS: f64 = GLOBE_RADIUS * OUTLINE_LIFT;

/// Supercontinent silhouette, walked as a closed polygon.
///
/// Identical for every age in the ancient regime.
pub const SUPERCONTINENT_OUTLINE: [GeoPoint; 6] = [
    GeoPoint::new(0.0, 0.0),
    GeoPoint::new(60.0, 20.0),
    GeoPoint::new(90.0, -10.0),
    GeoPoint::new(30.0, -40.0),
    GeoPoint::new(-60.0, -30.0),
    GeoPoint::new(-90.0, 10.0),
];

/// Present-day anchors and their full drift offsets.
///
/// The offsets point roughly back toward where each landmass sat against its
/// Gondwana neighbours: Australia west and south toward Antarctica, India
/// south across the Tethys, South America east toward Africa.
pub const MODERN_ANCHORS: [DriftAnchor; 3] = [
    DriftAnchor::new(
        "Australia",
        GeoPoint::new(135.0, -25.0),
        GeoOffset::new(-40.0, -20.0),
    ),
    DriftAnchor::new(
        "India",
        GeoPoint::new(78.0, 20.0),
        GeoOffset::new(-28.0, -55.0),
    ),
    DriftAnchor::new(
        "South America",
        GeoPoint::new(-60.0, -15.0),
        GeoOffset::new(45.0, -10.0),
    ),
];
