//! Coastline outlines and their vertex-buffer forms.
//!
//! An outline is handed to the renderer wholesale. Two upload shapes are
//! offered: [`CoastlineOutline::to_vertices`] for a typed `Pod` slice and
//! [`CoastlineOutline::to_position_buffer`] for a flat `f32` buffer with a
//! component stride of [`POSITION_STRIDE`].

use std::mem;

use tellus_geo::SurfacePoint;

use crate::{Age, Regime};

/// Upper bound on points in a single outline.
pub const MAX_OUTLINE_POINTS: usize = 10;

/// Components per vertex in the flat position buffer.
pub const POSITION_STRIDE: usize = 3;

/// One outline vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OutlineVertex {
    /// Position in world units.
    pub position: [f32; 3],
}

const _: () = assert!(
    mem::size_of::<OutlineVertex>() == POSITION_STRIDE * mem::size_of::<f32>(),
    "OutlineVertex size changed; update POSITION_STRIDE"
);

/// A simplified coastline for one age.
#[derive(Debug, Clone, PartialEq)]
pub struct CoastlineOutline {
    /// The (sanitised) age the outline was generated for.
    pub age: Age,
    /// The regime that produced it.
    pub regime: Regime,
    /// Whether the last point connects back to the first.
    pub closed: bool,
    /// Outline points in drawing order.
    pub points: Vec<SurfacePoint>,
}

impl CoastlineOutline {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the outline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Outline points in drawing order.
    pub fn points(&self) -> &[SurfacePoint] {
        &self.points
    }

    /// Points narrowed to `f32` vertices.
    pub fn to_vertices(&self) -> Vec<OutlineVertex> {
        self.points
            .iter()
            .map(|p| OutlineVertex {
                position: p.to_f32_array(),
            })
            .collect()
    }

    /// Flat `[x, y, z, x, y, z, ...]` buffer.
    pub fn to_position_buffer(&self) -> Vec<f32> {
        bytemuck::cast_slice::<OutlineVertex, f32>(&self.to_vertices()).to_vec()
    }

    /// Index pairs for drawing the outline as a line list.
    ///
    /// Consecutive points are joined; closed outlines with at least three
    /// points also join the last point to the first. An outline too long for
    /// `u32` indices yields no segments.
    pub fn segment_indices(&self) -> Vec<[u32; 2]> {
        let Ok(n) = u32::try_from(self.points.len()) else {
            return Vec::new();
        };
        let mut segments: Vec<[u32; 2]> = (1..n).map(|i| [i - 1, i]).collect();
        if self.closed && n >= 3 {
            segments.push([n - 1, 0]);
        }
        segments
    }
}
