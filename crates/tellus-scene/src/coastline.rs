//! The coastline line buffer attached to the globe.

use glam::Vec3;
use tellus_drift::{Age, CoastlineOutline, OutlineVertex, Regime};

/// Bounding volume of the current outline, refreshed on every replace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineBounds {
    /// Axis-aligned box minimum.
    pub min: Vec3,
    /// Axis-aligned box maximum.
    pub max: Vec3,
    /// Bounding-sphere centre (the box centre).
    pub center: Vec3,
    /// Bounding-sphere radius around `center`.
    pub radius: f32,
}

impl OutlineBounds {
    /// Bounds of a non-empty vertex set.
    pub fn from_vertices(vertices: &[OutlineVertex]) -> Option<Self> {
        let first = Vec3::from_array(vertices.first()?.position);
        let (min, max) = vertices
            .iter()
            .map(|v| Vec3::from_array(v.position))
            .fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        let center = (min + max) * 0.5;
        let radius = vertices
            .iter()
            .map(|v| Vec3::from_array(v.position).distance(center))
            .fold(0.0_f32, f32::max);
        Some(Self {
            min,
            max,
            center,
            radius,
        })
    }
}

/// Render-ready copy of the latest coastline outline.
///
/// The buffer starts empty. [`replace`](Self::replace) swaps the geometry
/// wholesale and bumps [`revision`](Self::revision) so a backend can tell
/// when to re-upload. An empty outline is ignored and the previous geometry
/// stays on screen.
#[derive(Debug, Clone, Default)]
pub struct CoastlineBuffer {
    vertices: Vec<OutlineVertex>,
    positions: Vec<f32>,
    segments: Vec<[u32; 2]>,
    closed: bool,
    regime: Option<Regime>,
    age: Option<Age>,
    bounds: Option<OutlineBounds>,
    revision: u64,
}

impl CoastlineBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the geometry with `outline`. Returns `false` if the outline
    /// was empty and the buffer was left alone.
    pub fn replace(&mut self, outline: &CoastlineOutline) -> bool {
        if outline.is_empty() {
            return false;
        }
        self.vertices = outline.to_vertices();
        self.positions = outline.to_position_buffer();
        self.segments = outline.segment_indices();
        self.closed = outline.closed;
        self.regime = Some(outline.regime);
        self.age = Some(outline.age);
        self.bounds = OutlineBounds::from_vertices(&self.vertices);
        self.revision += 1;
        true
    }

    /// Typed vertices.
    pub fn vertices(&self) -> &[OutlineVertex] {
        &self.vertices
    }

    /// Flat `f32` positions, three per vertex.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Line-list index pairs.
    pub fn segments(&self) -> &[[u32; 2]] {
        &self.segments
    }

    /// Whether the outline is drawn as a loop.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Regime of the current outline, if any has been loaded.
    pub fn regime(&self) -> Option<Regime> {
        self.regime
    }

    /// Age of the current outline, if any has been loaded.
    pub fn age(&self) -> Option<Age> {
        self.age
    }

    /// Bounding volume of the current outline.
    pub fn bounds(&self) -> Option<OutlineBounds> {
        self.bounds
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` before the first successful replace.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Incremented on every successful replace.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tellus_drift::{DEFAULT_OUTLINE_RADIUS, generate_outline};

    #[test]
    fn test_starts_empty() {
        let buffer = CoastlineBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.revision(), 0);
        assert!(buffer.bounds().is_none());
        assert!(buffer.regime().is_none());
    }

    #[test]
    fn test_replace_copies_outline() {
        let outline = generate_outline(250.0);
        let mut buffer = CoastlineBuffer::new();
        assert!(buffer.replace(&outline));
        assert_eq!(buffer.len(), outline.len());
        assert_eq!(buffer.positions(), outline.to_position_buffer().as_slice());
        assert_eq!(buffer.segments(), outline.segment_indices().as_slice());
        assert!(buffer.is_closed());
        assert_eq!(buffer.regime(), Some(Regime::Ancient));
        assert_eq!(buffer.revision(), 1);
    }

    #[test]
    fn test_empty_outline_keeps_previous_geometry() {
        let mut buffer = CoastlineBuffer::new();
        buffer.replace(&generate_outline(0.0));
        let before = buffer.positions().to_vec();
        let empty = CoastlineOutline {
            points: Vec::new(),
            ..generate_outline(10.0)
        };
        assert!(!buffer.replace(&empty));
        assert_eq!(buffer.positions(), before.as_slice());
        assert_eq!(buffer.revision(), 1);
    }

    #[test]
    fn test_replace_swaps_regime() {
        let mut buffer = CoastlineBuffer::new();
        buffer.replace(&generate_outline(300.0));
        assert_eq!(buffer.len(), 6);
        buffer.replace(&generate_outline(0.0));
        assert_eq!(buffer.len(), 3);
        assert!(!buffer.is_closed());
        assert_eq!(buffer.segments(), &[[0, 1], [1, 2]]);
        assert_eq!(buffer.revision(), 2);
    }

    #[test]
    fn test_bounds_enclose_vertices() {
        let mut buffer = CoastlineBuffer::new();
        buffer.replace(&generate_outline(400.0));
        let bounds = buffer.bounds().unwrap();
        for v in buffer.vertices() {
            let p = Vec3::from_array(v.position);
            assert!(p.cmpge(bounds.min - 1e-6).all() && p.cmple(bounds.max + 1e-6).all());
            assert!(p.distance(bounds.center) <= bounds.radius + 1e-5);
        }
        assert!(bounds.radius > 0.0 && bounds.radius <= 2.0 * DEFAULT_OUTLINE_RADIUS as f32);
    }

    #[test]
    fn test_single_point_bounds() {
        let v = OutlineVertex {
            position: [1.0, 2.0, 3.0],
        };
        let bounds = OutlineBounds::from_vertices(&[v]).unwrap();
        assert_eq!(bounds.center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.radius, 0.0);
        assert!(OutlineBounds::from_vertices(&[]).is_none());
    }
}
