//! The outline generator.

use tellus_geo::{GeoPoint, SurfacePoint};

use crate::{
    Age, CoastlineOutline, DEFAULT_OUTLINE_RADIUS, DriftAnchor, MAX_OUTLINE_POINTS,
    MODERN_ANCHORS, ParamsError, REFERENCE_MAX_AGE_MA, Regime, SUPERCONTINENT_OUTLINE,
    SUPERCONTINENT_THRESHOLD_MA, drift_factor,
};

/// Tunable constants of the age-to-outline mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineParams {
    /// Ages at or above this draw the supercontinent, in Ma.
    pub threshold_ma: f64,
    /// Age at which modern anchors reach their full drift offset, in Ma.
    pub max_drift_age_ma: f64,
    /// Radius outline points are projected onto.
    pub radius: f64,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            threshold_ma: SUPERCONTINENT_THRESHOLD_MA,
            max_drift_age_ma: REFERENCE_MAX_AGE_MA,
            radius: DEFAULT_OUTLINE_RADIUS,
        }
    }
}

impl OutlineParams {
    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [
            ("threshold_ma", self.threshold_ma),
            ("max_drift_age_ma", self.max_drift_age_ma),
            ("radius", self.radius),
        ] {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite { name, value });
            }
        }
        if self.threshold_ma < 0.0 {
            return Err(ParamsError::NegativeThreshold(self.threshold_ma));
        }
        if self.max_drift_age_ma <= 0.0 {
            return Err(ParamsError::NonPositiveDriftAge(self.max_drift_age_ma));
        }
        if self.radius <= 0.0 {
            return Err(ParamsError::NonPositiveRadius(self.radius));
        }
        Ok(())
    }
}

/// Maps ages to coastline outlines.
///
/// Holds only immutable configuration; [`generate`](Self::generate) takes
/// `&self` and keeps no memory of earlier calls.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineGenerator {
    params: OutlineParams,
    supercontinent: Vec<GeoPoint>,
    anchors: Vec<DriftAnchor>,
}

impl Default for OutlineGenerator {
    fn default() -> Self {
        Self {
            params: OutlineParams::default(),
            supercontinent: SUPERCONTINENT_OUTLINE.to_vec(),
            anchors: MODERN_ANCHORS.to_vec(),
        }
    }
}

impl OutlineGenerator {
    /// Build a generator over the reference point sets.
    pub fn new(params: OutlineParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            params,
            ..Self::default()
        })
    }

    /// Replace the reference point sets.
    pub fn with_reference_sets(
        self,
        supercontinent: Vec<GeoPoint>,
        anchors: Vec<DriftAnchor>,
    ) -> Result<Self, ParamsError> {
        check_reference_set(Regime::Ancient, supercontinent.iter().copied())?;
        check_reference_set(Regime::Modern, anchors.iter().map(|a| a.position))?;
        Ok(Self {
            supercontinent,
            anchors,
            ..self
        })
    }

    /// The generator's parameters.
    pub fn params(&self) -> &OutlineParams {
        &self.params
    }

    /// The supercontinent polygon.
    pub fn supercontinent(&self) -> &[GeoPoint] {
        &self.supercontinent
    }

    /// The modern anchors.
    pub fn anchors(&self) -> &[DriftAnchor] {
        &self.anchors
    }

    /// Regime selected for a raw age.
    pub fn regime_for(&self, age_ma: f64) -> Regime {
        Regime::for_age(Age::saturating(age_ma), self.params.threshold_ma)
    }

    /// Build the outline for `age_ma`.
    ///
    /// Total over `f64`: the age is passed through [`Age::saturating`]
    /// first.
    pub fn generate(&self, age_ma: f64) -> CoastlineOutline {
        let age = Age::saturating(age_ma);
        let regime = Regime::for_age(age, self.params.threshold_ma);
        let radius = self.params.radius;

        let points = match regime {
            Regime::Ancient => self
                .supercontinent
                .iter()
                .map(|&p| SurfacePoint::from_geo(p, radius))
                .collect(),
            Regime::Modern => {
                let factor = drift_factor(age, self.params.max_drift_age_ma);
                self.anchors
                    .iter()
                    .map(|a| SurfacePoint::from_geo(a.drifted(factor), radius))
                    .collect()
            }
        };

        CoastlineOutline {
            age,
            regime,
            closed: regime.is_closed(),
            points,
        }
    }
}

/// Outline for `age_ma` using the reference sets and default parameters.
pub fn generate_outline(age_ma: f64) -> CoastlineOutline {
    OutlineGenerator::default().generate(age_ma)
}

fn check_reference_set(
    regime: Regime,
    points: impl ExactSizeIterator<Item = GeoPoint>,
) -> Result<(), ParamsError> {
    let count = points.len();
    if count == 0 {
        return Err(ParamsError::EmptyReferenceSet(regime));
    }
    if count > MAX_OUTLINE_POINTS {
        return Err(ParamsError::TooManyPoints {
            regime,
            count,
            max: MAX_OUTLINE_POINTS,
        });
    }
    for (index, point) in points.enumerate() {
        if !point.is_in_range() {
            return Err(ParamsError::PointOutOfRange {
                regime,
                index,
                point,
            });
        }
    }
    Ok(())
}
