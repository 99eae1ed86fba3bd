//! Perspective camera looking at the globe.

use glam::{Mat4, Vec3};
use tellus_config::CameraConfig;

/// A right-handed perspective camera aimed at a fixed target.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// World up direction.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance (always positive).
    pub near: f32,
    /// Far clip plane distance (always positive, > near).
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), 16.0 / 9.0)
    }
}

impl Camera {
    /// Camera on the +Z axis at `config.distance`, looking at the origin.
    pub fn from_config(config: &CameraConfig, aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, config.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: config.fov_deg.to_radians(),
            aspect_ratio,
            near: config.near,
            far: config.far,
        }
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// View-to-clip transform (depth in `[0, 1]`).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far)
    }

    /// Combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit vector from the eye toward the target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Update the aspect ratio after a resize.
    ///
    /// Returns `false` and leaves the camera untouched for degenerate sizes
    /// (minimised windows report zero height).
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) -> bool {
        let aspect = width / height;
        if width <= 0.0 || height <= 0.0 || !aspect.is_finite() {
            return false;
        }
        self.aspect_ratio = aspect;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_default_camera_looks_down_neg_z() {
        let forward = Camera::default().forward();
        assert!(forward.x.abs() < 1e-6);
        assert!(forward.y.abs() < 1e-6);
        assert!((forward.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_fov_is_45_degrees() {
        assert!((Camera::default().fov_y - FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_default_sits_five_units_out() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn test_set_aspect_ratio() {
        let mut camera = Camera::default();
        assert!(camera.set_aspect_ratio(1920.0, 1080.0));
        assert!((camera.aspect_ratio - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_sized_window_is_ignored() {
        let mut camera = Camera::default();
        let before = camera.aspect_ratio;
        assert!(!camera.set_aspect_ratio(800.0, 0.0));
        assert!(!camera.set_aspect_ratio(0.0, 600.0));
        assert_eq!(camera.aspect_ratio, before);
    }

    #[test]
    fn test_globe_centre_projects_to_screen_centre() {
        let camera = Camera::default();
        let clip = camera.view_projection_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn test_view_projection_combines_correctly() {
        let camera = Camera::default();
        let vp = camera.view_projection_matrix();
        let expected = camera.projection_matrix() * camera.view_matrix();
        assert!(vp.abs_diff_eq(expected, 1e-6));
    }
}
