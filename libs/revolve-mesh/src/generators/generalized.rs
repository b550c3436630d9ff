//! # Generalized Cylinder Generator
//!
//! A full-revolution solid built from a vertical stack of circular
//! cross-sections, each with its own radius and height. Adjacent sections
//! are joined by quad bands, so the profile may bulge, neck or step freely.
//! Interior sections can be duplicated so each band carries independent
//! attributes at its boundary ring.

use crate::mesh::{MeshBuffers, Winding};
use crate::revolve::{emit_cap_center, emit_cap_ring, emit_panels, CapSide, SweepLayout};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// One circular cross-section of a [`GeneralizedCylinder`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularSection {
    /// Section radius
    pub radius: f64,
    /// Height of the section along the revolve axis
    pub section_y: f64,
}

impl CircularSection {
    /// Creates a section at the given radius and height.
    pub fn new(radius: f64, section_y: f64) -> Self {
        Self { radius, section_y }
    }
}

/// Full-revolution solid over a stack of circular sections.
///
/// Sections are taken bottom to top; at least two are required. With
/// `no_shared_vertices` every interior section ring is written twice, once
/// as the top of the band below and once as the bottom of the band above,
/// so bands do not share attributes across a section boundary.
///
/// After [`generate`](GeneralizedCylinder::generate), the indices of the
/// two cap-center vertices (when `capped`) are recorded on the generator so
/// callers can anchor transforms or markers to the end points.
///
/// Unlike the other generators, the horizontal texture coordinate runs
/// forward from 0 and is divided by `slices - 1`, so the chart slightly
/// overshoots `u = 1` at the seam column.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::generators::{CircularSection, GeneralizedCylinder};
///
/// let mut generator = GeneralizedCylinder {
///     sections: vec![
///         CircularSection::new(1.0, 0.0),
///         CircularSection::new(0.5, 1.0),
///         CircularSection::new(1.0, 2.0),
///     ],
///     ..Default::default()
/// };
/// let mesh = generator.generate();
/// assert!(generator.start_cap_center_index.is_some());
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralizedCylinder {
    /// Cross-sections, bottom to top (at least two)
    pub sections: Vec<CircularSection>,
    /// Number of angular slices
    pub slices: u32,
    /// Close both ends with disc fans
    pub capped: bool,
    /// Duplicate interior section rings and the seam column
    pub no_shared_vertices: bool,
    /// Triangle index order
    pub winding: Winding,
    /// Index of the bottom cap's center vertex, set by `generate`
    pub start_cap_center_index: Option<u32>,
    /// Index of the top cap's center vertex, set by `generate`
    pub end_cap_center_index: Option<u32>,
}

impl Default for GeneralizedCylinder {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            slices: config::constants::DEFAULT_SLICES,
            capped: true,
            no_shared_vertices: true,
            winding: Winding::default(),
            start_cap_center_index: None,
            end_cap_center_index: None,
        }
    }
}

impl GeneralizedCylinder {
    /// Generates the stacked solid and records the cap-center indices.
    pub fn generate(&mut self) -> MeshBuffers {
        let layout = SweepLayout::new(0.0, 360.0, self.slices, self.no_shared_vertices, false);
        let duplicated = self.no_shared_vertices;
        let ring_size = layout.ring_size as usize;
        let slices = self.slices as usize;
        let section_count = self.sections.len();
        let n_rings = if duplicated {
            2 * (section_count - 1)
        } else {
            section_count
        };

        let mut vertex_count = n_rings * ring_size;
        let mut triangle_count = (section_count - 1) * 2 * slices;
        if self.capped {
            vertex_count += 2;
            triangle_count += 2 * slices;
            if duplicated {
                vertex_count += 2 * slices;
            }
        }
        let mut mesh = MeshBuffers::with_sizes(vertex_count, triangle_count, false);

        let y_min = self.sections[0].section_y;
        let y_max = self.sections[section_count - 1].section_y;
        let y_span = if y_max == y_min { 1.0 } else { y_max - y_min };

        // Rings, duplicating interior sections so each band owns its boundary
        let mut ring = 0;
        for (i, section) in self.sections.iter().enumerate() {
            let v = (section.section_y - y_min) / y_span;
            for j in 0..layout.ring_size {
                let angle = layout.angle_at(j);
                let (sin_a, cos_a) = angle.sin_cos();
                let t = j as f64 / (self.slices - 1) as f64;
                mesh.set_vertex(
                    ring * ring_size + j as usize,
                    DVec3::new(section.radius * cos_a, section.section_y, section.radius * sin_a),
                    DVec2::new(t, v),
                    DVec3::new(cos_a, 0.0, sin_a),
                );
            }
            let interior = i > 0 && i < section_count - 1;
            if duplicated && interior {
                mesh.duplicate_span(ring * ring_size, ring_size);
                ring += 2;
            } else {
                ring += 1;
            }
        }

        let mut ti = 0;
        for band in 0..section_count - 1 {
            let base = if duplicated { 2 * band } else { band } * ring_size;
            emit_panels(&mut mesh, base, ring_size, 2, !duplicated, self.winding, &mut ti, None);
        }

        if self.capped {
            let bottom_center = n_rings * ring_size;
            let top_center = bottom_center + 1;
            let bottom = self.sections[0];
            let top = self.sections[section_count - 1];
            emit_cap_center(&mut mesh, bottom_center, bottom.section_y, CapSide::Bottom);
            emit_cap_center(&mut mesh, top_center, top.section_y, CapSide::Top);

            let (bottom_ring, top_ring) = if duplicated {
                let bottom_ring = top_center + 1;
                let top_ring = bottom_ring + slices;
                emit_cap_ring(
                    &mut mesh,
                    &layout,
                    bottom_ring,
                    bottom.radius,
                    bottom.section_y,
                    CapSide::Bottom,
                );
                emit_cap_ring(
                    &mut mesh,
                    &layout,
                    top_ring,
                    top.radius,
                    top.section_y,
                    CapSide::Top,
                );
                (bottom_ring, top_ring)
            } else {
                (0, (n_rings - 1) * ring_size)
            };
            mesh.append_fan(
                self.slices,
                bottom_center as u32,
                bottom_ring as u32,
                true,
                self.winding,
                &mut ti,
                None,
            );
            mesh.append_fan(
                self.slices,
                top_center as u32,
                top_ring as u32,
                true,
                self.winding.reversed(),
                &mut ti,
                None,
            );

            self.start_cap_center_index = Some(bottom_center as u32);
            self.end_cap_center_index = Some(top_center as u32);
        } else {
            self.start_cap_center_index = None;
            self.end_cap_center_index = None;
        }
        debug_assert_eq!(ti, triangle_count);

        mesh
    }
}
