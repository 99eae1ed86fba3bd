//! Scene error types.

use tellus_drift::ParamsError;

/// Rejected slider configuration or input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SliderError {
    /// `min` is above `max`.
    #[error("slider range is empty: min {min} Ma > max {max} Ma")]
    EmptyRange {
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },

    /// A step of zero would never move.
    #[error("slider step must be at least 1 Ma")]
    ZeroStep,

    /// Input does not start with an integer.
    #[error("not an age: {0:?}")]
    NotANumber(String),
}

/// Errors building or driving a [`GlobeScene`](crate::GlobeScene).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// Drift or globe settings rejected by the outline generator.
    #[error("invalid outline settings: {0}")]
    Outline(#[from] ParamsError),

    /// Timeline settings or slider input rejected.
    #[error(transparent)]
    Slider(#[from] SliderError),

    /// Globe mesh segment counts above [`MAX_SEGMENTS`](crate::MAX_SEGMENTS).
    #[error("globe mesh {width}x{height} segments exceeds the limit of {max}")]
    TooManySegments {
        /// Configured longitudinal segments.
        width: u32,
        /// Configured latitudinal segments.
        height: u32,
        /// Upper bound per axis.
        max: u32,
    },
}
