//! # Ring Builder
//!
//! Emits one circular cross-section of a revolved solid: positions on the
//! circle of the given radius, texture coordinates, and analytically derived
//! lateral normals.

use super::SweepLayout;
use crate::mesh::MeshBuffers;
use glam::{DVec2, DVec3};

/// Texture parameterization for a ring's vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingUv {
    /// Cylindrical unwrap: `u` runs around the sweep, `v` is the fixed
    /// axial fraction of this ring
    Cylindrical {
        /// Axial texture coordinate (height / total height)
        v: f64,
    },
    /// Planar disc projection: the ring maps onto a circle of the given
    /// fractional radius around the chart center `(0.5, 0.5)`
    PlanarDisc {
        /// Ring radius as a fraction of the chart's outer radius
        radius_fraction: f64,
    },
}

/// Maps a point on a circle to the planar disc UV chart.
///
/// The chart puts the circle center at `(0.5, 0.5)` with the boundary
/// touching the unit square at `radius_fraction == 1`.
#[inline]
pub fn planar_disc_uv(cos_a: f64, sin_a: f64, radius_fraction: f64) -> DVec2 {
    DVec2::new(
        0.5 * (1.0 + radius_fraction * cos_a),
        0.5 * (1.0 + radius_fraction * sin_a),
    )
}

/// Analytic lateral surface normal for a linearly tapered revolve.
///
/// `radius_drop` is the base-to-top radius difference; together with the
/// total height it encodes the taper slope, giving smooth normals along a
/// frustum without neighbor lookups. A zero-height solid has no defined
/// taper, so the normal falls back to the radial direction.
#[inline]
pub fn lateral_normal(cos_a: f64, sin_a: f64, radius_drop: f64, height: f64) -> DVec3 {
    if height == 0.0 {
        DVec3::new(cos_a, 0.0, sin_a).normalize()
    } else {
        DVec3::new(cos_a * height, radius_drop / height, sin_a * height).normalize()
    }
}

/// Writes one ring of `layout.ring_size` vertices starting at `offset`.
///
/// Positions revolve around the Y axis: `(r·cosθ, y, r·sinθ)`. The last
/// vertex of a seam-bearing ring lands on the exact configured end angle
/// (see [`SweepLayout::angle_at`]).
pub fn emit_ring(
    mesh: &mut MeshBuffers,
    layout: &SweepLayout,
    offset: usize,
    radius: f64,
    y: f64,
    uv: RingUv,
    radius_drop: f64,
    height: f64,
) {
    for k in 0..layout.ring_size {
        let angle = layout.angle_at(k);
        let (sin_a, cos_a) = angle.sin_cos();
        let texcoord = match uv {
            RingUv::Cylindrical { v } => DVec2::new(layout.u_at(k), v),
            RingUv::PlanarDisc { radius_fraction } => planar_disc_uv(cos_a, sin_a, radius_fraction),
        };
        mesh.set_vertex(
            offset + k as usize,
            DVec3::new(radius * cos_a, y, radius * sin_a),
            texcoord,
            lateral_normal(cos_a, sin_a, radius_drop, height),
        );
    }
}
