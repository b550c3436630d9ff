//! # Capped Cylinder Generator
//!
//! A tapered cylinder closed at both ends, with group tags identifying the
//! lateral wall, both caps, and — for an open sweep — the two faces closing
//! the angular cut. The two topology modes trade watertightness against
//! per-surface texture charts: shared vertices weld caps straight onto the
//! lateral rings, duplicated vertices give every surface its own ring.

use super::{
    GROUP_BOTTOM_CAP, GROUP_END_SEAM, GROUP_LATERAL, GROUP_START_SEAM, GROUP_TOP_CAP,
};
use crate::mesh::{MeshBuffers, Winding};
use crate::revolve::{
    emit_cap_center, emit_cap_ring, emit_inner_faces, emit_panels, emit_ring, CapSide,
    InnerFaceUv, RingUv, SweepLayout,
};

/// Capped revolved solid with per-surface group tags.
///
/// Revolves around the Y axis from `y = 0` to `y = height`; radii
/// interpolate linearly between `base_radius` and `top_radius`. Every
/// triangle carries a group tag: [`GROUP_LATERAL`], [`GROUP_BOTTOM_CAP`],
/// [`GROUP_TOP_CAP`], and for open sweeps [`GROUP_START_SEAM`] /
/// [`GROUP_END_SEAM`].
///
/// With `no_shared_vertices` the caps (and, when open, the seam faces) get
/// vertices of their own, so cap discs carry a planar UV chart and hard
/// normal edges; otherwise cap fans reuse the lateral rings and the mesh is
/// watertight. Seam faces are only generated in duplicated mode — a shared
/// open sweep closes the cut with two full-height quads welded to the
/// boundary columns.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::generators::{CappedCylinder, GROUP_LATERAL};
///
/// let mesh = CappedCylinder::default().generate();
/// assert!(mesh.validate().is_ok());
/// assert!(mesh.groups.as_ref().unwrap().contains(&GROUP_LATERAL));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CappedCylinder {
    /// Radius of the bottom ring
    pub base_radius: f64,
    /// Radius of the top ring
    pub top_radius: f64,
    /// Axial extent of the solid
    pub height: f64,
    /// Sweep start angle in degrees
    pub start_angle_deg: f64,
    /// Sweep end angle in degrees
    pub end_angle_deg: f64,
    /// Number of angular slices
    pub slices: u32,
    /// Number of lateral rings along the axis (at least 2)
    pub rings: u32,
    /// Give caps and seam faces independent vertices
    pub no_shared_vertices: bool,
    /// For an open sweep, spend one slice on landing the last ring vertex
    /// exactly on the end angle
    pub add_slice_when_open: bool,
    /// Triangle index order
    pub winding: Winding,
}

impl Default for CappedCylinder {
    fn default() -> Self {
        Self {
            base_radius: 1.0,
            top_radius: 1.0,
            height: 1.0,
            start_angle_deg: 0.0,
            end_angle_deg: 360.0,
            slices: config::constants::DEFAULT_SLICES,
            rings: config::constants::DEFAULT_RINGS,
            no_shared_vertices: false,
            add_slice_when_open: true,
            winding: Winding::default(),
        }
    }
}

impl CappedCylinder {
    /// Generates the capped solid.
    pub fn generate(&self) -> MeshBuffers {
        let layout = SweepLayout::new(
            self.start_angle_deg,
            self.end_angle_deg,
            self.slices,
            self.no_shared_vertices,
            self.add_slice_when_open,
        );
        let rings = self.rings as usize;
        let ring_size = layout.ring_size as usize;
        let slices = self.slices as usize;
        let duplicated = self.no_shared_vertices;
        let open = !layout.closed;

        let quads_per_band = if layout.closed { slices } else { slices - 1 };
        let fan_size = if layout.closed { slices } else { slices - 1 };

        let mut vertex_count = ring_size * rings + 2;
        if duplicated {
            vertex_count += 2 * slices;
            if open {
                vertex_count += 8 * (rings - 1);
            }
        }
        let mut triangle_count = 2 * quads_per_band * (rings - 1) + 2 * fan_size;
        if open {
            triangle_count += if duplicated { 4 * (rings - 1) } else { 4 };
        }
        let mut mesh = MeshBuffers::with_sizes(vertex_count, triangle_count, true);

        // Lateral grid
        let radius_drop = self.base_radius - self.top_radius;
        for i in 0..rings {
            let fraction = i as f64 / (rings - 1) as f64;
            let radius = self.base_radius + (self.top_radius - self.base_radius) * fraction;
            let y = self.height * fraction;
            let v = if self.height == 0.0 { 1.0 } else { y / self.height };
            emit_ring(
                &mut mesh,
                &layout,
                ring_size * i,
                radius,
                y,
                RingUv::Cylindrical { v },
                radius_drop,
                self.height,
            );
        }

        let mut ti = 0;
        let close_seam = layout.closed && !duplicated;
        emit_panels(
            &mut mesh,
            0,
            ring_size,
            rings,
            close_seam,
            self.winding,
            &mut ti,
            Some(GROUP_LATERAL),
        );

        // Caps
        let bottom_center = ring_size * rings;
        let top_center = bottom_center + 1;
        emit_cap_center(&mut mesh, bottom_center, 0.0, CapSide::Bottom);
        emit_cap_center(&mut mesh, top_center, self.height, CapSide::Top);

        if duplicated {
            let bottom_ring = top_center + 1;
            let top_ring = bottom_ring + slices;
            emit_cap_ring(&mut mesh, &layout, bottom_ring, self.base_radius, 0.0, CapSide::Bottom);
            emit_cap_ring(
                &mut mesh,
                &layout,
                top_ring,
                self.top_radius,
                self.height,
                CapSide::Top,
            );
            mesh.append_fan(
                self.slices,
                bottom_center as u32,
                bottom_ring as u32,
                layout.closed,
                self.winding,
                &mut ti,
                Some(GROUP_BOTTOM_CAP),
            );
            mesh.append_fan(
                self.slices,
                top_center as u32,
                top_ring as u32,
                layout.closed,
                self.winding.reversed(),
                &mut ti,
                Some(GROUP_TOP_CAP),
            );

            if open {
                let y_span = if self.height == 0.0 { 1.0 } else { self.height };
                emit_inner_faces(
                    &mut mesh,
                    top_ring + slices,
                    ring_size,
                    rings,
                    self.height / (rings - 1) as f64,
                    y_span,
                    self.base_radius,
                    self.top_radius,
                    InnerFaceUv::Cylinder,
                    Some((GROUP_START_SEAM, GROUP_END_SEAM)),
                    self.winding,
                    &mut ti,
                );
            }
        } else {
            let top_ring_first = ring_size * (rings - 1);
            mesh.append_fan(
                self.slices,
                bottom_center as u32,
                0,
                layout.closed,
                self.winding,
                &mut ti,
                Some(GROUP_BOTTOM_CAP),
            );
            mesh.append_fan(
                self.slices,
                top_center as u32,
                top_ring_first as u32,
                layout.closed,
                self.winding.reversed(),
                &mut ti,
                Some(GROUP_TOP_CAP),
            );

            if open {
                // Full-height quads welded to the boundary vertex columns
                mesh.append_rectangle(
                    bottom_center as u32,
                    0,
                    top_ring_first as u32,
                    top_center as u32,
                    self.winding,
                    &mut ti,
                    Some(GROUP_START_SEAM),
                );
                mesh.append_rectangle(
                    (ring_size - 1) as u32,
                    bottom_center as u32,
                    top_center as u32,
                    (ring_size * rings - 1) as u32,
                    self.winding,
                    &mut ti,
                    Some(GROUP_END_SEAM),
                );
            }
        }
        debug_assert_eq!(ti, triangle_count);

        mesh
    }
}
