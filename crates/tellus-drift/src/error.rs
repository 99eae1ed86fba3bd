//! Error types for age validation and generator configuration.

use tellus_geo::GeoPoint;

use crate::Regime;

/// A raw age value that cannot be used as an [`Age`](crate::Age).
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum AgeError {
    /// NaN or infinite.
    #[error("age must be a finite number, got {0}")]
    NotFinite(f64),

    /// Below zero.
    #[error("age must not be negative, got {0} Ma")]
    Negative(f64),
}

/// Rejected [`OutlineParams`](crate::OutlineParams) or reference sets.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    /// A parameter is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The regime threshold is below zero.
    #[error("supercontinent threshold must not be negative, got {0} Ma")]
    NegativeThreshold(f64),

    /// The drift normalisation age is zero or negative.
    #[error("maximum drift age must be positive, got {0} Ma")]
    NonPositiveDriftAge(f64),

    /// The outline radius is zero or negative.
    #[error("outline radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    /// The outline would sit on or inside the globe surface.
    #[error("outline lift must be finite and greater than 1.0, got {0}")]
    OutlineBelowSurface(f64),

    /// A regime has no reference points.
    #[error("{0} reference set is empty")]
    EmptyReferenceSet(Regime),

    /// A regime has more points than an outline may carry.
    #[error("{regime} reference set has {count} points, at most {max} allowed")]
    TooManyPoints {
        /// Regime the set belongs to.
        regime: Regime,
        /// Number of points supplied.
        count: usize,
        /// Upper bound.
        max: usize,
    },

    /// A reference point lies outside the valid longitude/latitude ranges.
    #[error("{regime} reference point {index} is out of range: {point:?}")]
    PointOutOfRange {
        /// Regime the set belongs to.
        regime: Regime,
        /// Index within the set.
        index: usize,
        /// The point.
        point: GeoPoint,
    },
}
