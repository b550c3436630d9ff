//! # Cap Builder
//!
//! Emits the vertices that close a revolve at the top or bottom: a center
//! vertex on the axis and, in duplicated-vertex mode, an independent
//! boundary ring with planar-disc UVs and axial normals. The fan triangles
//! themselves come from [`MeshBuffers::append_fan`], so shared-vertex
//! generators can fan over existing ring vertices instead.

use super::{planar_disc_uv, SweepLayout};
use crate::mesh::MeshBuffers;
use glam::{DVec2, DVec3};

/// Which end of the solid a cap closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapSide {
    /// Cap at the base (normal points down the revolve axis)
    Bottom,
    /// Cap at the top (normal points up the revolve axis)
    Top,
}

impl CapSide {
    /// Outward axial normal for this cap.
    #[inline]
    pub fn normal(self) -> DVec3 {
        match self {
            CapSide::Bottom => DVec3::NEG_Y,
            CapSide::Top => DVec3::Y,
        }
    }
}

/// Writes a cap's center vertex: on the axis at height `y`, UV at the
/// middle of the disc chart, normal pointing out of the solid.
pub fn emit_cap_center(mesh: &mut MeshBuffers, index: usize, y: f64, side: CapSide) {
    mesh.set_vertex(index, DVec3::new(0.0, y, 0.0), DVec2::splat(0.5), side.normal());
}

/// Writes `layout.slices` duplicated cap-boundary vertices at `offset`.
///
/// Boundary vertices sit on the same circle as the adjacent lateral ring
/// but carry the planar-disc UV chart and the cap's axial normal — the two
/// surfaces intentionally use different charts and a hard edge.
pub fn emit_cap_ring(
    mesh: &mut MeshBuffers,
    layout: &SweepLayout,
    offset: usize,
    radius: f64,
    y: f64,
    side: CapSide,
) {
    for k in 0..layout.slices {
        let angle = layout.angle_at(k);
        let (sin_a, cos_a) = angle.sin_cos();
        mesh.set_vertex(
            offset + k as usize,
            DVec3::new(radius * cos_a, y, radius * sin_a),
            planar_disc_uv(cos_a, sin_a, 1.0),
            side.normal(),
        );
    }
}
