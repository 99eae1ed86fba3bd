//! The globe scene context.

use glam::{Mat4, Vec2};
use tellus_config::Config;
use tellus_drift::{OutlineGenerator, OutlineParams, ParamsError};
use tracing::{debug, info};

use crate::{
    AgeSlider, Camera, CoastlineBuffer, GlobeMesh, GlobeRotation, MAX_SEGMENTS, SceneError,
    SceneStyle,
};

/// Receives coastline geometry whenever it changes.
///
/// Implemented by rendering backends to copy the buffer into GPU memory.
pub trait OutlineSink {
    /// Take a copy of `buffer`'s current geometry.
    fn upload_outline(&mut self, buffer: &CoastlineBuffer);
}

/// Per-frame transforms handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    /// Frames advanced so far, including this one.
    pub frame_index: u64,
    /// Globe (and coastline) object-to-world transform.
    pub model: Mat4,
    /// Camera view-projection.
    pub view_projection: Mat4,
    /// Revision of the coastline buffer at this frame.
    pub outline_revision: u64,
}

/// Everything needed to draw one globe: generator, camera, body mesh,
/// rotation, age slider, coastline buffer and style.
#[derive(Debug, Clone)]
pub struct GlobeScene {
    generator: OutlineGenerator,
    camera: Camera,
    globe: GlobeMesh,
    rotation: GlobeRotation,
    slider: AgeSlider,
    coastline: CoastlineBuffer,
    style: SceneStyle,
    uploaded_revision: Option<u64>,
    frame: u64,
}

impl GlobeScene {
    /// Build the scene and generate the outline for the initial age.
    pub fn new(config: &Config) -> Result<Self, SceneError> {
        let lift = config.globe.outline_lift;
        if !lift.is_finite() || lift <= 1.0 {
            return Err(ParamsError::OutlineBelowSurface(lift).into());
        }
        let (width_segments, height_segments) =
            (config.globe.width_segments, config.globe.height_segments);
        if width_segments > MAX_SEGMENTS || height_segments > MAX_SEGMENTS {
            return Err(SceneError::TooManySegments {
                width: width_segments,
                height: height_segments,
                max: MAX_SEGMENTS,
            });
        }
        let params = OutlineParams {
            threshold_ma: config.drift.threshold_ma,
            max_drift_age_ma: config.drift.max_drift_age_ma,
            radius: config.globe.outline_radius(),
        };
        let generator = OutlineGenerator::new(params)?;
        let slider = AgeSlider::new(&config.timeline)?;

        let aspect = if config.window.height > 0 {
            config.window.width as f32 / config.window.height as f32
        } else {
            1.0
        };
        let globe =
            GlobeMesh::uv_sphere(config.globe.radius as f32, width_segments, height_segments);
        info!(
            "Globe mesh: {} vertices, {} triangles",
            globe.vertex_count(),
            globe.triangle_count()
        );

        let mut scene = Self {
            generator,
            camera: Camera::from_config(&config.camera, aspect),
            globe,
            rotation: GlobeRotation::new(
                config.globe.drag_sensitivity,
                config.globe.spin_per_frame,
            ),
            slider,
            coastline: CoastlineBuffer::new(),
            style: SceneStyle::from_config(&config.style),
            uploaded_revision: None,
            frame: 0,
        };
        scene.regenerate();
        Ok(scene)
    }

    /// Move the slider to `age_ma`. Returns `true` if the outline was rebuilt.
    pub fn set_age(&mut self, age_ma: u32) -> bool {
        let before = self.slider.value();
        let after = self.slider.set_value(age_ma);
        if after == before {
            return false;
        }
        self.regenerate();
        true
    }

    /// Move the slider from raw text input. Returns `true` if the outline was
    /// rebuilt; unparsable input leaves the scene untouched.
    pub fn set_age_input(&mut self, input: &str) -> Result<bool, SceneError> {
        let before = self.slider.value();
        let after = self.slider.set_from_input(input)?;
        if after == before {
            return Ok(false);
        }
        self.regenerate();
        Ok(true)
    }

    /// Current age in Ma.
    pub fn age(&self) -> u32 {
        self.slider.value()
    }

    /// Text for the age label.
    pub fn label(&self) -> String {
        self.slider.label()
    }

    /// Pointer pressed at `position` (pixels).
    pub fn pointer_down(&mut self, position: Vec2) {
        self.rotation.on_pointer_down(position);
    }

    /// Pointer moved to `position` (pixels).
    pub fn pointer_move(&mut self, position: Vec2) -> bool {
        self.rotation.on_pointer_move(position)
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.rotation.on_pointer_up();
    }

    /// The output surface changed size.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let changed = self.camera.set_aspect_ratio(width as f32, height as f32);
        if changed {
            debug!("Resized to {width}x{height}");
        }
        changed
    }

    /// Apply one frame of idle spin and return the transforms to draw with.
    pub fn advance_frame(&mut self) -> FrameSnapshot {
        self.rotation.advance_frame();
        self.frame += 1;
        FrameSnapshot {
            frame_index: self.frame,
            model: self.rotation.model_matrix(),
            view_projection: self.camera.view_projection_matrix(),
            outline_revision: self.coastline.revision(),
        }
    }

    /// Hand the coastline to `sink` if it changed since the last flush.
    /// Returns `true` if an upload happened.
    pub fn flush(&mut self, sink: &mut impl OutlineSink) -> bool {
        let revision = self.coastline.revision();
        if self.coastline.is_empty() || self.uploaded_revision == Some(revision) {
            return false;
        }
        sink.upload_outline(&self.coastline);
        self.uploaded_revision = Some(revision);
        true
    }

    /// The outline generator.
    pub fn generator(&self) -> &OutlineGenerator {
        &self.generator
    }

    /// The camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The globe body mesh.
    pub fn globe(&self) -> &GlobeMesh {
        &self.globe
    }

    /// Current rotation.
    pub fn rotation(&self) -> &GlobeRotation {
        &self.rotation
    }

    /// The age slider.
    pub fn slider(&self) -> &AgeSlider {
        &self.slider
    }

    /// The current coastline geometry.
    pub fn coastline(&self) -> &CoastlineBuffer {
        &self.coastline
    }

    /// Colours and lights.
    pub fn style(&self) -> &SceneStyle {
        &self.style
    }

    /// Frames advanced so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    fn regenerate(&mut self) {
        let age = self.slider.value();
        let outline = self.generator.generate(f64::from(age));
        if self.coastline.replace(&outline) {
            debug!(
                "Outline for {} Ma: {} regime, {} points",
                age,
                outline.regime,
                outline.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tellus_drift::{Regime, generate_outline};

    #[derive(Default)]
    struct RecordingSink {
        uploads: Vec<Vec<f32>>,
    }

    impl OutlineSink for RecordingSink {
        fn upload_outline(&mut self, buffer: &CoastlineBuffer) {
            self.uploads.push(buffer.positions().to_vec());
        }
    }

    fn scene() -> GlobeScene {
        GlobeScene::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_new_scene_shows_present_day() {
        let scene = scene();
        assert_eq!(scene.age(), 0);
        assert_eq!(scene.label(), "0 Ma before present");
        assert_eq!(scene.coastline().regime(), Some(Regime::Modern));
        assert_eq!(scene.coastline().len(), 3);
        assert_eq!(scene.coastline().revision(), 1);
    }

    #[test]
    fn test_scene_outline_matches_default_generator() {
        let mut scene = scene();
        scene.set_age(90);
        let expected = generate_outline(90.0).to_position_buffer();
        assert_eq!(scene.coastline().positions(), expected.as_slice());
    }

    #[test]
    fn test_set_age_regenerates_only_on_change() {
        let mut scene = scene();
        assert!(scene.set_age(200));
        assert_eq!(scene.coastline().regime(), Some(Regime::Ancient));
        assert!(!scene.set_age(200));
        assert_eq!(scene.coastline().revision(), 2);
        // 600 clamps to 540.
        assert!(scene.set_age(600));
        assert!(!scene.set_age(540));
    }

    #[test]
    fn test_set_age_input() {
        let mut scene = scene();
        assert_eq!(scene.set_age_input("180"), Ok(true));
        assert!(scene.coastline().is_closed());
        assert!(matches!(
            scene.set_age_input("old"),
            Err(SceneError::Slider(_))
        ));
        assert_eq!(scene.age(), 180);
    }

    #[test]
    fn test_flush_uploads_once_per_revision() {
        let mut scene = scene();
        let mut sink = RecordingSink::default();
        assert!(scene.flush(&mut sink));
        assert!(!scene.flush(&mut sink));
        scene.set_age(400);
        assert!(scene.flush(&mut sink));
        assert_eq!(sink.uploads.len(), 2);
        assert_eq!(sink.uploads[1].len(), 6 * 3);
    }

    #[test]
    fn test_advance_frame_spins_globe() {
        let mut scene = scene();
        let first = scene.advance_frame();
        let second = scene.advance_frame();
        assert_eq!(first.frame_index, 1);
        assert_eq!(second.frame_index, 2);
        assert_ne!(first.model, second.model);
        assert_eq!(first.view_projection, second.view_projection);
        assert_eq!(scene.frame_count(), 2);
    }

    #[test]
    fn test_drag_rotates_globe() {
        let mut scene = scene();
        scene.pointer_down(Vec2::new(0.0, 0.0));
        assert!(scene.pointer_move(Vec2::new(0.0, 40.0)));
        scene.pointer_up();
        assert!(scene.rotation().pitch > 0.0);
        assert!(!scene.pointer_move(Vec2::new(0.0, 80.0)));
    }

    #[test]
    fn test_resize() {
        let mut scene = scene();
        assert!(scene.resize(800, 800));
        assert_eq!(scene.camera().aspect_ratio, 1.0);
        assert!(!scene.resize(800, 0));
        assert_eq!(scene.camera().aspect_ratio, 1.0);
    }

    #[test]
    fn test_invalid_drift_settings_rejected() {
        let mut config = Config::default();
        config.globe.radius = 0.0;
        assert!(matches!(
            GlobeScene::new(&config),
            Err(SceneError::Outline(_))
        ));
    }

    #[test]
    fn test_outline_lift_must_clear_globe() {
        for lift in [0.5, 1.0, f64::NAN] {
            let mut config = Config::default();
            config.globe.outline_lift = lift;
            assert!(matches!(
                GlobeScene::new(&config),
                Err(SceneError::Outline(ParamsError::OutlineBelowSurface(_)))
            ));
        }
    }

    #[test]
    fn test_outline_sits_above_globe_surface() {
        let scene = scene();
        let globe_radius = scene.globe().radius;
        for v in scene.coastline().vertices() {
            let r = glam::Vec3::from_array(v.position).length();
            assert!(r > globe_radius, "outline radius {r} not above globe {globe_radius}");
        }
    }

    #[test]
    fn test_oversized_globe_mesh_rejected() {
        let mut config = Config::default();
        config.globe.width_segments = 70_000;
        config.globe.height_segments = 70_000;
        assert_eq!(
            GlobeScene::new(&config).err(),
            Some(SceneError::TooManySegments {
                width: 70_000,
                height: 70_000,
                max: MAX_SEGMENTS,
            })
        );
        config.globe.width_segments = MAX_SEGMENTS + 1;
        config.globe.height_segments = 64;
        assert!(GlobeScene::new(&config).is_err());
    }

    #[test]
    fn test_invalid_timeline_rejected() {
        let mut config = Config::default();
        config.timeline.step_ma = 0;
        assert!(matches!(
            GlobeScene::new(&config),
            Err(SceneError::Slider(_))
        ));
    }

    #[test]
    fn test_threshold_from_config() {
        let mut config = Config::default();
        config.drift.threshold_ma = 300.0;
        config.timeline.initial_age_ma = 250;
        let scene = GlobeScene::new(&config).unwrap();
        assert_eq!(scene.coastline().regime(), Some(Regime::Modern));
    }
}
