//! Pointer-drag and idle-spin rotation of the globe.
//!
//! Horizontal drag turns the globe about its vertical axis, vertical drag
//! tilts it about the screen X axis. Independently of input, the globe spins
//! a small fixed angle every frame. The coastline is parented to the globe,
//! so both share [`GlobeRotation::model_matrix`].

use glam::{EulerRot, Mat4, Vec2};

/// Euler-angle rotation state for the globe.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeRotation {
    /// Rotation about X in radians.
    pub pitch: f32,
    /// Rotation about Y in radians.
    pub yaw: f32,
    drag_sensitivity: f32,
    spin_per_frame: f32,
    dragging: bool,
    last_pointer: Vec2,
}

impl GlobeRotation {
    /// Create an unrotated globe.
    ///
    /// * `drag_sensitivity` - radians per pixel of pointer movement
    /// * `spin_per_frame` - radians about Y added by each [`advance_frame`](Self::advance_frame)
    pub fn new(drag_sensitivity: f32, spin_per_frame: f32) -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            drag_sensitivity,
            spin_per_frame,
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start a drag at `position` (pixels).
    pub fn on_pointer_down(&mut self, position: Vec2) {
        self.dragging = true;
        self.last_pointer = position;
    }

    /// Pointer moved to `position` (pixels). Returns `true` if the globe turned.
    pub fn on_pointer_move(&mut self, position: Vec2) -> bool {
        if !self.dragging {
            return false;
        }
        let delta = position - self.last_pointer;
        self.last_pointer = position;
        if delta == Vec2::ZERO {
            return false;
        }
        self.yaw += delta.x * self.drag_sensitivity;
        self.pitch += delta.y * self.drag_sensitivity;
        true
    }

    /// End the drag.
    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Apply one frame of idle spin.
    pub fn advance_frame(&mut self) {
        self.yaw += self.spin_per_frame;
    }

    /// Object-to-world transform (X then Y then Z Euler order).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }
}

impl Default for GlobeRotation {
    fn default() -> Self {
        Self::new(0.01, 0.002)
    }
}
