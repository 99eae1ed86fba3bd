//! Age-to-coastline mapping for the Tellus globe.
//!
//! Given an age in millions of years before present, [`generate_outline`]
//! returns a handful of points just above the globe surface that sketch the
//! continents at that age. Ages at or past [`SUPERCONTINENT_THRESHOLD_MA`]
//! draw a single supercontinent silhouette; younger ages draw present-day
//! anchors pushed back along a per-anchor drift offset proportional to age.
//!
//! The mapping is a pure function of age: no state survives between calls,
//! and the same input always yields bit-identical output.

mod age;
mod drift;
mod error;
mod generator;
mod outline;
mod reference;
mod regime;

pub use age::{Age, REFERENCE_MAX_AGE_MA};
pub use drift::{DriftAnchor, drift_factor};
pub use error::{AgeError, ParamsError};
pub use generator::{OutlineGenerator, OutlineParams, generate_outline};
pub use outline::{CoastlineOutline, MAX_OUTLINE_POINTS, OutlineVertex, POSITION_STRIDE};
pub use reference::{
    DEFAULT_OUTLINE_RADIUS, GLOBE_RADIUS, MODERN_ANCHORS, OUTLINE_LIFT, SUPERCONTINENT_OUTLINE,
};
pub use regime::{Regime, SUPERCONTINENT_THRESHOLD_MA};
