//! # Tests for the Revolve Builders
//!
//! Unit tests for the sweep layout, ring/cap emission, panel triangulation
//! and inner-face construction.

use super::*;
use crate::mesh::{MeshBuffers, Winding};
use approx::assert_relative_eq;
use glam::DVec3;

// =============================================================================
// SWEEP LAYOUT
// =============================================================================

#[test]
fn test_layout_full_circle_is_closed() {
    let layout = SweepLayout::new(0.0, 360.0, 16, false, true);
    assert!(layout.closed);
    assert_eq!(layout.divisions, 16);
    assert_eq!(layout.ring_size, 16);
}

#[test]
fn test_layout_closed_duplicated_adds_seam_vertex() {
    let layout = SweepLayout::new(0.0, 360.0, 16, true, true);
    assert_eq!(layout.ring_size, 17);
    // The extra vertex lands exactly on the end angle
    assert_eq!(layout.angle_at(16), 360.0_f64.to_radians());
}

#[test]
fn test_layout_open_wedge_with_extra_slice() {
    let layout = SweepLayout::new(0.0, 90.0, 4, false, true);
    assert!(!layout.closed);
    assert_eq!(layout.divisions, 3);
    assert_eq!(layout.ring_size, 4);
    // Both boundary vertices sit exactly on the configured endpoints
    assert_eq!(layout.angle_at(0), 0.0);
    assert_eq!(layout.angle_at(3), 90.0_f64.to_radians());
}

#[test]
fn test_layout_open_wedge_without_extra_slice() {
    let layout = SweepLayout::new(0.0, 90.0, 4, false, false);
    assert_eq!(layout.divisions, 4);
    // Last ring vertex stops one step short of the end angle
    let last = layout.angle_at(3);
    assert!(last < 90.0_f64.to_radians());
    assert_relative_eq!(last, 3.0 * layout.delta, epsilon = 1e-12);
}

#[test]
fn test_layout_tolerates_float_degree_range() {
    // A hair under 360 still counts as a full revolution
    let layout = SweepLayout::new(0.0, 359.995, 8, false, true);
    assert!(layout.closed);
}

#[test]
fn test_layout_u_runs_from_one_to_zero() {
    let layout = SweepLayout::new(0.0, 90.0, 5, false, true);
    assert_eq!(layout.u_at(0), 1.0);
    assert_eq!(layout.u_at(layout.divisions), 0.0);
}

// =============================================================================
// RING BUILDER
// =============================================================================

#[test]
fn test_ring_positions_on_circle() {
    let layout = SweepLayout::new(0.0, 360.0, 8, false, true);
    let mut mesh = MeshBuffers::with_sizes(8, 0, false);
    emit_ring(&mut mesh, &layout, 0, 2.0, 1.5, RingUv::Cylindrical { v: 0.5 }, 0.0, 3.0);
    for position in &mesh.positions {
        assert_relative_eq!(position.x.hypot(position.z), 2.0, epsilon = 1e-12);
        assert_eq!(position.y, 1.5);
    }
    assert_relative_eq!(mesh.uvs[0].y, 0.5, epsilon = 1e-12);
}

#[test]
fn test_ring_seam_vertex_hits_exact_end_angle() {
    // 90 degree wedge: the last vertex must land on the end angle exactly,
    // not on start + (slices - 1) * delta accumulated in floating point
    let layout = SweepLayout::new(0.0, 90.0, 16, false, true);
    let mut mesh = MeshBuffers::with_sizes(16, 0, false);
    emit_ring(&mut mesh, &layout, 0, 1.0, 0.0, RingUv::Cylindrical { v: 0.0 }, 0.0, 1.0);
    let end = 90.0_f64.to_radians();
    let last = mesh.positions[15];
    assert_eq!(last.x, end.cos());
    assert_eq!(last.z, end.sin());
}

#[test]
fn test_ring_untapered_normals_are_radial() {
    let layout = SweepLayout::new(0.0, 360.0, 8, false, true);
    let mut mesh = MeshBuffers::with_sizes(8, 0, false);
    emit_ring(&mut mesh, &layout, 0, 1.0, 0.0, RingUv::Cylindrical { v: 0.0 }, 0.0, 2.0);
    for (position, normal) in mesh.positions.iter().zip(&mesh.normals) {
        assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(normal.y, 0.0, epsilon = 1e-12);
        // Radial direction matches the vertex direction
        assert_relative_eq!(normal.x, position.x, epsilon = 1e-12);
        assert_relative_eq!(normal.z, position.z, epsilon = 1e-12);
    }
}

#[test]
fn test_ring_tapered_normals_tilt_up() {
    // Base wider than top: lateral normals gain a positive Y component
    let n = lateral_normal(1.0, 0.0, 1.0, 2.0);
    assert!(n.y > 0.0);
    assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_ring_zero_height_guard() {
    // Degenerate flat generator: no taper slope to divide by
    let n = lateral_normal(1.0, 0.0, 0.5, 0.0);
    assert_eq!(n, DVec3::X);
}

#[test]
fn test_ring_planar_disc_uv_chart() {
    let layout = SweepLayout::new(0.0, 360.0, 4, false, true);
    let mut mesh = MeshBuffers::with_sizes(4, 0, false);
    emit_ring(
        &mut mesh,
        &layout,
        0,
        1.0,
        0.0,
        RingUv::PlanarDisc { radius_fraction: 0.5 },
        0.0,
        1.0,
    );
    // Angle 0 maps half a fractional radius right of chart center
    assert_relative_eq!(mesh.uvs[0].x, 0.75, epsilon = 1e-12);
    assert_relative_eq!(mesh.uvs[0].y, 0.5, epsilon = 1e-12);
}

// =============================================================================
// CAP BUILDER
// =============================================================================

#[test]
fn test_cap_center_attributes() {
    let mut mesh = MeshBuffers::with_sizes(1, 0, false);
    emit_cap_center(&mut mesh, 0, 3.0, CapSide::Top);
    assert_eq!(mesh.positions[0], DVec3::new(0.0, 3.0, 0.0));
    assert_eq!(mesh.normals[0], DVec3::Y);
    assert_eq!(mesh.uvs[0].x, 0.5);
    assert_eq!(mesh.uvs[0].y, 0.5);
}

#[test]
fn test_cap_ring_uses_disc_chart_and_axial_normals() {
    let layout = SweepLayout::new(0.0, 360.0, 8, true, true);
    let mut mesh = MeshBuffers::with_sizes(8, 0, false);
    emit_cap_ring(&mut mesh, &layout, 0, 1.0, 0.0, CapSide::Bottom);
    for normal in &mesh.normals {
        assert_eq!(*normal, DVec3::NEG_Y);
    }
    // Angle 0 boundary vertex touches the right edge of the UV chart
    assert_relative_eq!(mesh.uvs[0].x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(mesh.uvs[0].y, 0.5, epsilon = 1e-12);
}

// =============================================================================
// PANEL TRIANGULATOR
// =============================================================================

#[test]
fn test_panels_open_strip_counts() {
    // 4 vertices per ring, 3 rings, open: 3 quads x 2 bands
    let mut mesh = MeshBuffers::with_sizes(12, 12, false);
    let mut ti = 0;
    emit_panels(&mut mesh, 0, 4, 3, false, Winding::CounterClockwise, &mut ti, None);
    assert_eq!(ti, 12);
}

#[test]
fn test_panels_closing_quad_per_band() {
    // Shared-vertex closed seam: one extra quad for each of the 2 bands
    let mut mesh = MeshBuffers::with_sizes(12, 16, false);
    let mut ti = 0;
    emit_panels(&mut mesh, 0, 4, 3, true, Winding::CounterClockwise, &mut ti, None);
    assert_eq!(ti, 16);
    // First closing quad wraps ring 0's last vertex back to its first
    assert_eq!(mesh.triangles[12], [3, 0, 4]);
    assert_eq!(mesh.triangles[13], [3, 4, 7]);
}

#[test]
fn test_panels_tag_lateral_group() {
    let mut mesh = MeshBuffers::with_sizes(8, 6, true);
    let mut ti = 0;
    emit_panels(&mut mesh, 0, 4, 2, false, Winding::CounterClockwise, &mut ti, Some(1));
    assert!(mesh.groups.as_ref().unwrap().iter().all(|&g| g == 1));
}

// =============================================================================
// INNER-FACE BUILDER
// =============================================================================

/// Builds a 2-ring wedge grid tapering to the axis, the configuration that
/// degenerates the start-seam quad's first normal triangle.
fn tip_band_mesh() -> MeshBuffers {
    let mut mesh = MeshBuffers::with_sizes(12, 4, false);
    // Ring 0 at radius 1, ring 1 collapsed onto the axis
    let angles = [0.0_f64, 90.0_f64.to_radians()];
    for (k, angle) in angles.iter().enumerate() {
        mesh.positions[k] = DVec3::new(angle.cos(), 0.0, angle.sin());
        mesh.positions[2 + k] = DVec3::new(0.0, 1.0, 0.0);
    }
    mesh
}

#[test]
fn test_inner_faces_vertex_and_triangle_counts() {
    let mut mesh = tip_band_mesh();
    let mut ti = 0;
    emit_inner_faces(
        &mut mesh,
        4,
        2,
        2,
        1.0,
        1.0,
        1.0,
        0.0,
        InnerFaceUv::Cone,
        None,
        Winding::CounterClockwise,
        &mut ti,
    );
    assert_eq!(ti, 4);
    // Axis-side vertices sit on the revolve axis
    assert_eq!(mesh.positions[4], DVec3::ZERO);
    assert_eq!(mesh.positions[5], DVec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_inner_faces_degenerate_tip_normal_reselected() {
    let mut mesh = tip_band_mesh();
    let mut ti = 0;
    emit_inner_faces(
        &mut mesh,
        4,
        2,
        2,
        1.0,
        1.0,
        1.0,
        0.0,
        InnerFaceUv::Cone,
        None,
        Winding::CounterClockwise,
        &mut ti,
    );
    // The start-seam quad's natural normal triangle collapses (its outer
    // top corner sits on the axis); the alternate triangle must supply a
    // usable normal for all four corners
    for j in 4..12 {
        assert_relative_eq!(mesh.normals[j].length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_inner_faces_cone_uv_tapers() {
    let mut mesh = tip_band_mesh();
    let mut ti = 0;
    emit_inner_faces(
        &mut mesh,
        4,
        2,
        2,
        1.0,
        1.0,
        1.0,
        0.0,
        InnerFaceUv::Cone,
        None,
        Winding::CounterClockwise,
        &mut ti,
    );
    // Bottom boundary at full width, top boundary pinched to the axis
    assert_eq!(mesh.uvs[7].x, 1.0);
    assert_eq!(mesh.uvs[6].x, 0.0);
}

#[test]
fn test_inner_faces_cylinder_uv_uniform() {
    let mut mesh = MeshBuffers::with_sizes(12, 4, false);
    let angles = [0.0_f64, 90.0_f64.to_radians()];
    for (k, angle) in angles.iter().enumerate() {
        mesh.positions[k] = DVec3::new(angle.cos(), 0.0, angle.sin());
        mesh.positions[2 + k] = DVec3::new(angle.cos(), 1.0, angle.sin());
    }
    let mut ti = 0;
    emit_inner_faces(
        &mut mesh,
        4,
        2,
        2,
        1.0,
        1.0,
        1.0,
        1.0,
        InnerFaceUv::Cylinder,
        None,
        Winding::CounterClockwise,
        &mut ti,
    );
    assert_eq!(mesh.uvs[6].x, 1.0);
    assert_eq!(mesh.uvs[7].x, 1.0);
}
