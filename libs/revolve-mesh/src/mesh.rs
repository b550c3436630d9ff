//! # Mesh Buffer Bundle
//!
//! Core mesh representation: four parallel attribute/index arrays plus
//! optional per-triangle group tags, and the low-level emission primitives
//! (triangle fans, rectangles, face-normal estimation, vertex-span
//! duplication) shared by every generator.
//!
//! Buffers are allocated once at their exact final size and written in
//! place at caller-computed offsets; triangle emission advances an explicit
//! cursor so conditionally-sized regions stay contiguous.

use crate::error::MeshError;
use config::constants::{DEGENERATE_NORMAL_EPSILON, UNIT_NORMAL_TOLERANCE};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Index order for emitted triangles.
///
/// Threaded explicitly through every triangle-emitting call so that callers
/// control facing without hidden global state. The default leaves indices
/// in the order given; [`Winding::Clockwise`] swaps the last two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Winding {
    /// Emit indices as given
    #[default]
    CounterClockwise,
    /// Swap the last two indices, reversing the face
    Clockwise,
}

impl Winding {
    /// Returns the opposite winding.
    ///
    /// Caps and lateral surfaces use opposite effective windings so their
    /// normals all point away from the solid's interior.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::CounterClockwise,
        }
    }
}

/// A triangle mesh as four parallel arrays plus optional group tags.
///
/// All geometry is f64. Invariants on a fully generated bundle:
/// `positions`, `uvs` and `normals` have equal length; every index in
/// `triangles` is in range; every normal is unit length; `groups`, when
/// present, has one tag per triangle. [`MeshBuffers::validate`] checks all
/// of these.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::mesh::{MeshBuffers, Winding};
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = MeshBuffers::with_sizes(3, 1, false);
/// mesh.set_vertex(0, DVec3::ZERO, DVec2::ZERO, DVec3::Y);
/// mesh.set_vertex(1, DVec3::X, DVec2::X, DVec3::Y);
/// mesh.set_vertex(2, DVec3::Z, DVec2::Y, DVec3::Y);
/// let mut ti = 0;
/// mesh.set_triangle(&mut ti, 0, 1, 2, Winding::CounterClockwise);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Vertex positions
    pub positions: Vec<DVec3>,
    /// Texture coordinates, parallel to `positions`
    pub uvs: Vec<DVec2>,
    /// Unit vertex normals, parallel to `positions`
    pub normals: Vec<DVec3>,
    /// Triangle indices into `positions`
    pub triangles: Vec<[u32; 3]>,
    /// Optional per-triangle group tags identifying logical sub-surfaces
    pub groups: Option<Vec<u32>>,
}

impl MeshBuffers {
    /// Creates a bundle with all arrays allocated at their exact final size.
    ///
    /// Vertices and triangles are zero-initialized; the generator is
    /// responsible for overwriting every slot before the bundle is returned.
    pub fn with_sizes(vertex_count: usize, triangle_count: usize, with_groups: bool) -> Self {
        Self {
            positions: vec![DVec3::ZERO; vertex_count],
            uvs: vec![DVec2::ZERO; vertex_count],
            normals: vec![DVec3::ZERO; vertex_count],
            triangles: vec![[0; 3]; triangle_count],
            groups: with_groups.then(|| vec![0; triangle_count]),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Writes one vertex's position, texture coordinate and normal.
    ///
    /// Keeping the three attribute writes in one call is what maintains the
    /// equal-length index correspondence across the parallel arrays.
    #[inline]
    pub fn set_vertex(&mut self, index: usize, position: DVec3, uv: DVec2, normal: DVec3) {
        self.positions[index] = position;
        self.uvs[index] = uv;
        self.normals[index] = normal;
    }

    /// Writes one triangle at the cursor and advances it.
    ///
    /// [`Winding::Clockwise`] swaps the last two indices.
    #[inline]
    pub fn set_triangle(&mut self, ti: &mut usize, i0: u32, i1: u32, i2: u32, winding: Winding) {
        self.triangles[*ti] = match winding {
            Winding::CounterClockwise => [i0, i1, i2],
            Winding::Clockwise => [i0, i2, i1],
        };
        *ti += 1;
    }

    /// Tags the triangle at `ti` with a group id, if tags are allocated.
    #[inline]
    pub fn set_group(&mut self, ti: usize, group: u32) {
        if let Some(groups) = &mut self.groups {
            groups[ti] = group;
        }
    }

    /// Appends a triangle fan from a center vertex over a contiguous ring.
    ///
    /// Emits `slices - 1` triangles for an open wedge, plus the wrap-around
    /// triangle from the last ring vertex back to the first when `closed`.
    ///
    /// # Arguments
    ///
    /// * `slices` - Number of ring vertices under the fan
    /// * `center` - Index of the fan's center vertex
    /// * `ring_start` - Index of the first ring vertex
    /// * `closed` - Whether to wrap the fan into a full disc
    /// * `winding` - Index order for each fan triangle
    /// * `ti` - Triangle cursor, advanced per emitted triangle
    /// * `group` - Optional group tag for every fan triangle
    pub fn append_fan(
        &mut self,
        slices: u32,
        center: u32,
        ring_start: u32,
        closed: bool,
        winding: Winding,
        ti: &mut usize,
        group: Option<u32>,
    ) {
        let last = ring_start + slices;
        for k in ring_start..last - 1 {
            if let Some(g) = group {
                self.set_group(*ti, g);
            }
            self.set_triangle(ti, center, k + 1, k, winding);
        }
        if closed {
            if let Some(g) = group {
                self.set_group(*ti, g);
            }
            self.set_triangle(ti, center, ring_start, last - 1, winding);
        }
    }

    /// Appends a rectangle `i0-i1-i2-i3` as two triangles sharing the
    /// `i0-i2` diagonal.
    pub fn append_rectangle(
        &mut self,
        i0: u32,
        i1: u32,
        i2: u32,
        i3: u32,
        winding: Winding,
        ti: &mut usize,
        group: Option<u32>,
    ) {
        if let Some(g) = group {
            self.set_group(*ti, g);
        }
        self.set_triangle(ti, i0, i1, i2, winding);
        if let Some(g) = group {
            self.set_group(*ti, g);
        }
        self.set_triangle(ti, i0, i2, i3, winding);
    }

    /// Estimates a unit face normal from three vertex positions.
    ///
    /// Returns `DVec3::ZERO` when the three points are (numerically)
    /// collinear, so callers can detect the degenerate case and pick a
    /// different triangle.
    pub fn estimate_normal(&self, i0: u32, i1: u32, i2: u32) -> DVec3 {
        let v0 = self.positions[i0 as usize];
        let v1 = self.positions[i1 as usize];
        let v2 = self.positions[i2 as usize];
        let n = (v1 - v0).cross(v2 - v0);
        let length = n.length();
        if length < DEGENERATE_NORMAL_EPSILON {
            DVec3::ZERO
        } else {
            n / length
        }
    }

    /// Clones the vertex span `[start, start + count)` into the next
    /// `count` pre-allocated slots.
    ///
    /// Used by the generalized cylinder to duplicate interior cross-section
    /// rings so each section boundary gets independent attributes.
    pub fn duplicate_span(&mut self, start: usize, count: usize) {
        for k in 0..count {
            self.positions[start + count + k] = self.positions[start + k];
            self.uvs[start + count + k] = self.uvs[start + k];
            self.normals[start + count + k] = self.normals[start + k];
        }
    }

    /// Checks the bundle invariants.
    ///
    /// Verifies equal attribute lengths, in-range triangle indices,
    /// unit-length normals (within `UNIT_NORMAL_TOLERANCE`) and a matching
    /// group-tag count. Intended for tests and for downstream consumers
    /// that want a guarantee before exporting.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.uvs.len() != self.positions.len() || self.normals.len() != self.positions.len() {
            return Err(MeshError::AttributeLengthMismatch {
                positions: self.positions.len(),
                uvs: self.uvs.len(),
                normals: self.normals.len(),
            });
        }

        let vertex_count = self.positions.len();
        for (triangle, tri) in self.triangles.iter().enumerate() {
            for &index in tri {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfBounds {
                        triangle,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        for (index, normal) in self.normals.iter().enumerate() {
            let length = normal.length();
            if (length - 1.0).abs() > UNIT_NORMAL_TOLERANCE {
                return Err(MeshError::NonUnitNormal {
                    index,
                    length,
                    tolerance: UNIT_NORMAL_TOLERANCE,
                });
            }
        }

        if let Some(groups) = &self.groups {
            if groups.len() != self.triangles.len() {
                return Err(MeshError::GroupLengthMismatch {
                    groups: groups.len(),
                    triangles: self.triangles.len(),
                });
            }
        }

        Ok(())
    }
}
