//! # Inner-Face Builder
//!
//! An open wedge with duplicated vertices leaves the angular cut visually
//! hollow: the duplicated seam vertices no longer connect to anything
//! across the gap. This builder closes the cut with explicit geometry —
//! per height band, two independent quads running from the revolve axis out
//! to the start-seam and end-seam ring vertices, each flat-shaded with a
//! normal estimated from its own corners.

use crate::mesh::{MeshBuffers, Winding};
use glam::{DVec2, DVec3};

/// Horizontal texture parameterization for inner faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InnerFaceUv {
    /// `u` spans 0 (axis) to 1 (boundary) uniformly across bands
    Cylinder,
    /// `u` spans 0 to the band's radius over the base radius, so the chart
    /// tapers with the solid
    Cone,
}

/// Emits the seam-closing faces of an open, duplicated-vertex wedge.
///
/// Assumes the lateral ring grid occupies vertices `[0, ring_size * rings)`
/// with ring `i` starting at `ring_size * i`; writes `8 * (rings - 1)`
/// fresh vertices starting at `face_start` and four triangles per band.
/// Ring radii are re-derived by linear interpolation from `base_radius` to
/// `top_radius` for the tapering UV mode.
///
/// Each quad's flat normal is estimated from its first three corners; when
/// those collapse to a zero-area triangle (a cone's tip band, where a seam
/// vertex sits on the axis), the quad's other triangle supplies the normal
/// instead.
#[allow(clippy::too_many_arguments)]
pub fn emit_inner_faces(
    mesh: &mut MeshBuffers,
    face_start: usize,
    ring_size: usize,
    rings: usize,
    v_step: f64,
    y_span: f64,
    base_radius: f64,
    top_radius: f64,
    uv_mode: InnerFaceUv,
    groups: Option<(u32, u32)>,
    winding: Winding,
    ti: &mut usize,
) {
    let radius_at = |ring: usize| {
        base_radius + (top_radius - base_radius) * ring as f64 / (rings - 1) as f64
    };

    let mut f = face_start;
    for i in 1..rings {
        let y_bottom = v_step * (i - 1) as f64;
        let y_top = v_step * i as f64;
        let v_bottom = y_bottom / y_span;
        let v_top = y_top / y_span;
        let (u_bottom, u_top) = match uv_mode {
            InnerFaceUv::Cylinder => (1.0, 1.0),
            InnerFaceUv::Cone => (
                radius_at(i - 1) / base_radius,
                radius_at(i) / base_radius,
            ),
        };

        let axis_bottom = DVec3::new(0.0, y_bottom, 0.0);
        let axis_top = DVec3::new(0.0, y_top, 0.0);

        // Start-seam quad: axis edge out to the band's first ring vertices
        mesh.positions[f] = axis_bottom;
        mesh.positions[f + 1] = axis_top;
        mesh.positions[f + 2] = mesh.positions[ring_size * i];
        mesh.positions[f + 3] = mesh.positions[ring_size * (i - 1)];
        // End-seam quad: same axis edge out to the band's last ring vertices
        mesh.positions[f + 4] = axis_top;
        mesh.positions[f + 5] = axis_bottom;
        mesh.positions[f + 6] = mesh.positions[ring_size * i - 1];
        mesh.positions[f + 7] = mesh.positions[ring_size * (i + 1) - 1];

        let fi = f as u32;
        let mut start_normal = mesh.estimate_normal(fi, fi + 1, fi + 2);
        if start_normal == DVec3::ZERO {
            start_normal = mesh.estimate_normal(fi, fi + 2, fi + 3);
        }
        let mut end_normal = mesh.estimate_normal(fi + 4, fi + 5, fi + 6);
        if end_normal == DVec3::ZERO {
            end_normal = mesh.estimate_normal(fi + 4, fi + 6, fi + 7);
        }
        for j in 0..4 {
            mesh.normals[f + j] = start_normal;
            mesh.normals[f + 4 + j] = end_normal;
        }

        mesh.uvs[f] = DVec2::new(0.0, v_bottom);
        mesh.uvs[f + 1] = DVec2::new(0.0, v_top);
        mesh.uvs[f + 2] = DVec2::new(u_top, v_top);
        mesh.uvs[f + 3] = DVec2::new(u_bottom, v_bottom);
        mesh.uvs[f + 4] = DVec2::new(0.0, v_top);
        mesh.uvs[f + 5] = DVec2::new(0.0, v_bottom);
        mesh.uvs[f + 6] = DVec2::new(u_bottom, v_bottom);
        mesh.uvs[f + 7] = DVec2::new(u_top, v_top);

        let (start_group, end_group) = match groups {
            Some((s, e)) => (Some(s), Some(e)),
            None => (None, None),
        };
        mesh.append_rectangle(fi, fi + 1, fi + 2, fi + 3, winding.reversed(), ti, start_group);
        mesh.append_rectangle(fi + 4, fi + 5, fi + 6, fi + 7, winding.reversed(), ti, end_group);

        f += 8;
    }
}
