//! Drift offsets for modern-regime anchors.
//!
//! Each anchor carries its own full-drift offset. At a given age the offset
//! is scaled by [`drift_factor`] and added to the present-day position, so
//! every coordinate moves affinely (and monotonically) with age until the
//! factor saturates at 1.

use std::borrow::Cow;

use tellus_geo::{GeoOffset, GeoPoint};

use crate::Age;

/// A present-day landmass anchor and the direction it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftAnchor {
    /// Human-readable landmass name.
    pub name: Cow<'static, str>,
    /// Present-day position.
    pub position: GeoPoint,
    /// Offset applied at full drift (factor 1).
    pub drift: GeoOffset,
}

impl DriftAnchor {
    /// Create an anchor from static data.
    pub const fn new(name: &'static str, position: GeoPoint, drift: GeoOffset) -> Self {
        Self {
            name: Cow::Borrowed(name),
            position,
            drift,
        }
    }

    /// Position of the anchor at the given drift factor.
    pub fn drifted(&self, factor: f64) -> GeoPoint {
        self.position.offset(self.drift.scaled(factor))
    }
}

/// Fraction of the full drift offset applied at `age`.
///
/// `age / max_drift_age_ma`, clamped to `[0, 1]`.
pub fn drift_factor(age: Age, max_drift_age_ma: f64) -> f64 {
    (age.ma() / max_drift_age_ma).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::REFERENCE_MAX_AGE_MA;

    #[test]
    fn test_factor_is_zero_at_present() {
        assert_eq!(drift_factor(Age::PRESENT, REFERENCE_MAX_AGE_MA), 0.0);
    }

    #[test]
    fn test_factor_is_linear_in_age() {
        assert!((drift_factor(Age::from(135), 540.0) - 0.25).abs() < 1e-12);
        assert!((drift_factor(Age::from(270), 540.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_factor_saturates() {
        assert_eq!(drift_factor(Age::from(540), 540.0), 1.0);
        assert_eq!(drift_factor(Age::from(5_000), 540.0), 1.0);
        assert_eq!(drift_factor(Age::saturating(f64::INFINITY), 540.0), 1.0);
    }

    #[test]
    fn test_drifted_at_zero_is_present_position() {
        let anchor = DriftAnchor::new(
            "test",
            GeoPoint::new(135.0, -25.0),
            GeoOffset::new(-40.0, -20.0),
        );
        assert_eq!(anchor.drifted(0.0), anchor.position);
    }

    #[test]
    fn test_drifted_at_full_applies_whole_offset() {
        let anchor = DriftAnchor::new(
            "test",
            GeoPoint::new(135.0, -25.0),
            GeoOffset::new(-40.0, -20.0),
        );
        let p = anchor.drifted(1.0);
        assert!((p.lon_deg - 95.0).abs() < 1e-12);
        assert!((p.lat_deg - -45.0).abs() < 1e-12);
    }
}
