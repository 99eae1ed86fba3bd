//! Geological age in millions of years before present.

use std::fmt;

use crate::error::AgeError;

/// Oldest age the reference timeline covers, in Ma.
///
/// Roughly the base of the Cambrian. Also the denominator of the drift
/// factor: at this age every modern anchor sits at its full drift offset.
pub const REFERENCE_MAX_AGE_MA: f64 = 540.0;

/// A finite, non-negative age in millions of years before present.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Age(f64);

impl Age {
    /// The present day.
    pub const PRESENT: Self = Self(0.0);

    /// Validate a raw age.
    ///
    /// Intended for UI boundaries that want to reject bad input instead of
    /// silently coercing it.
    pub fn new(ma: f64) -> Result<Self, AgeError> {
        if !ma.is_finite() {
            return Err(AgeError::NotFinite(ma));
        }
        if ma < 0.0 {
            return Err(AgeError::Negative(ma));
        }
        Ok(Self(ma))
    }

    /// Coerce any `f64` into an age.
    ///
    /// NaN and negative values become the present day, `+inf` becomes
    /// `f64::MAX`. Never fails, which keeps the outline generator total.
    pub fn saturating(ma: f64) -> Self {
        if ma.is_nan() || ma <= 0.0 {
            Self::PRESENT
        } else {
            Self(ma.min(f64::MAX))
        }
    }

    /// Age in Ma.
    pub fn ma(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Ma", self.0)
    }
}

impl TryFrom<f64> for Age {
    type Error = AgeError;

    fn try_from(ma: f64) -> Result<Self, Self::Error> {
        Self::new(ma)
    }
}

impl From<u32> for Age {
    fn from(ma: u32) -> Self {
        Self(f64::from(ma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_zero_and_positive() {
        assert_eq!(Age::new(0.0).unwrap(), Age::PRESENT);
        assert_eq!(Age::new(540.0).unwrap().ma(), 540.0);
        assert_eq!(Age::new(10_000.0).unwrap().ma(), 10_000.0);
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(Age::new(-1.0), Err(AgeError::Negative(v)) if v == -1.0));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(matches!(Age::new(f64::NAN), Err(AgeError::NotFinite(_))));
        assert!(matches!(Age::new(f64::INFINITY), Err(AgeError::NotFinite(_))));
    }

    #[test]
    fn test_saturating_coercions() {
        assert_eq!(Age::saturating(f64::NAN), Age::PRESENT);
        assert_eq!(Age::saturating(-5.0), Age::PRESENT);
        assert_eq!(Age::saturating(-0.0).ma().to_bits(), 0.0_f64.to_bits());
        assert_eq!(Age::saturating(f64::INFINITY).ma(), f64::MAX);
        assert_eq!(Age::saturating(123.5).ma(), 123.5);
    }

    #[test]
    fn test_display_includes_unit() {
        assert_eq!(Age::from(180).to_string(), "180 Ma");
    }

    #[test]
    fn test_ordering() {
        assert!(Age::from(179) < Age::from(180));
    }
}
