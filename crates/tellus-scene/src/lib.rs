//! Renderer-agnostic scene state for the Tellus globe.
//!
//! [`GlobeScene`] is the single context object a rendering backend owns: the
//! camera, the globe mesh, drag/spin rotation, the age slider, and the
//! coastline buffer regenerated whenever the age changes. The backend feeds
//! input events in, calls [`GlobeScene::advance_frame`] once per display
//! refresh, and pulls new outline geometry through an [`OutlineSink`].

mod camera;
mod coastline;
mod error;
mod globe_mesh;
mod rotation;
mod scene;
mod slider;
mod style;

pub use camera::Camera;
pub use coastline::{CoastlineBuffer, OutlineBounds};
pub use error::{SceneError, SliderError};
pub use globe_mesh::{GlobeMesh, MAX_SEGMENTS};
pub use rotation::GlobeRotation;
pub use scene::{FrameSnapshot, GlobeScene, OutlineSink};
pub use slider::{AgeSlider, parse_leading_integer};
pub use style::{AmbientLight, DirectionalLight, GlobeMaterial, SceneStyle, color_from_hex};
