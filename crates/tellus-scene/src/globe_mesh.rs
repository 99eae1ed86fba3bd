//! UV-sphere mesh for the globe body.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Fewest longitudinal segments that still enclose a volume.
const MIN_WIDTH_SEGMENTS: u32 = 3;
/// Fewest latitudinal segments (one ring between the poles).
const MIN_HEIGHT_SEGMENTS: u32 = 2;
/// Most segments along either axis. Keeps vertex and index counts within `u32`.
pub const MAX_SEGMENTS: u32 = 4096;

/// Triangle mesh of a latitude/longitude sphere.
///
/// Rows run from the north pole (`+Y`) to the south pole; each row has
/// `width_segments + 1` vertices so the seam gets its own UVs.
#[derive(Debug, Clone)]
pub struct GlobeMesh {
    /// Sphere radius.
    pub radius: f32,
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Outward unit normals.
    pub normals: Vec<Vec3>,
    /// Texture coordinates, `v = 1` at the north pole.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices, counter-clockwise seen from outside.
    pub indices: Vec<u32>,
}

impl GlobeMesh {
    /// Build a sphere of `radius` with the given segment counts.
    ///
    /// Segment counts below the minimum for a closed surface are raised to it;
    /// counts above [`MAX_SEGMENTS`] are lowered to it.
    pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let ws = width_segments.clamp(MIN_WIDTH_SEGMENTS, MAX_SEGMENTS);
        let hs = height_segments.clamp(MIN_HEIGHT_SEGMENTS, MAX_SEGMENTS);
        let row_len = ws + 1;

        let vertex_count = (row_len * (hs + 1)) as usize;
        let mut positions = Vec::with_capacity(vertex_count);
        let mut normals = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);

        for iy in 0..=hs {
            let v = iy as f32 / hs as f32;
            let (sin_theta, cos_theta) = (v * PI).sin_cos();
            for ix in 0..=ws {
                let u = ix as f32 / ws as f32;
                let (sin_phi, cos_phi) = (u * TAU).sin_cos();
                let normal = Vec3::new(-cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
                positions.push(normal * radius);
                normals.push(normal);
                uvs.push([u, 1.0 - v]);
            }
        }

        let mut indices = Vec::with_capacity((ws * (hs - 1) * 6) as usize);
        for iy in 0..hs {
            for ix in 0..ws {
                let a = iy * row_len + ix + 1;
                let b = iy * row_len + ix;
                let c = (iy + 1) * row_len + ix;
                let d = (iy + 1) * row_len + ix + 1;
                // Pole rows collapse to a single triangle per quad.
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != hs - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self {
            radius,
            positions,
            normals,
            uvs,
            indices,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_on_sphere() {
        let mesh = GlobeMesh::uv_sphere(2.0, 64, 64);
        for pos in &mesh.positions {
            let len = pos.length();
            assert!((len - 2.0).abs() < 1e-5, "vertex off sphere: length = {len}");
        }
    }

    #[test]
    fn test_vertex_and_triangle_counts() {
        let mesh = GlobeMesh::uv_sphere(2.0, 64, 64);
        assert_eq!(mesh.vertex_count(), 65 * 65);
        assert_eq!(mesh.triangle_count(), 64 * (2 * 64 - 2));
    }

    #[test]
    fn test_indices_valid() {
        let mesh = GlobeMesh::uv_sphere(1.0, 16, 8);
        let n = mesh.vertex_count() as u32;
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn test_normals_are_unit_and_outward() {
        let mesh = GlobeMesh::uv_sphere(2.0, 12, 6);
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!(p.dot(*n) > 0.0);
        }
    }

    #[test]
    fn test_poles_are_first_and_last_rows() {
        let mesh = GlobeMesh::uv_sphere(2.0, 8, 4);
        assert!((mesh.positions[0] - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
        let last = *mesh.positions.last().unwrap();
        assert!((last - Vec3::new(0.0, -2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_triangles_wind_outward() {
        let mesh = GlobeMesh::uv_sphere(1.0, 16, 8);
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.positions[i as usize]);
            let face_normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(face_normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_segment_limit_fits_u32_counts() {
        let row_len = u64::from(MAX_SEGMENTS) + 1;
        assert!(row_len * row_len <= u64::from(u32::MAX));
        assert!(u64::from(MAX_SEGMENTS) * u64::from(MAX_SEGMENTS - 1) * 6 <= u64::from(u32::MAX));
    }

    #[test]
    fn test_degenerate_segments_are_raised() {
        let mesh = GlobeMesh::uv_sphere(1.0, 0, 0);
        assert_eq!(mesh.vertex_count(), 4 * 3);
        assert!(mesh.triangle_count() > 0);
    }
}
