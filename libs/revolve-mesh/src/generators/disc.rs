//! # Disc Generators
//!
//! Flat geometry in the XZ plane at `y = 0`, facing up the revolve axis:
//! a solid disc triangulated as a fan, and an annulus (punctured disc)
//! triangulated as a quad strip between two concentric rings.

use crate::mesh::{MeshBuffers, Winding};
use crate::revolve::{emit_cap_center, planar_disc_uv, CapSide, SweepLayout};
use glam::DVec3;

/// Flat solid disc, fanned from a center vertex.
///
/// Supports partial angular sweeps; an open sweep leaves a pie-slice gap.
/// UVs are the planar disc chart with the boundary touching the unit
/// square.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::generators::TrivialDisc;
///
/// let mesh = TrivialDisc::default().generate();
/// assert_eq!(mesh.vertex_count(), 33);
/// assert_eq!(mesh.triangle_count(), 32);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrivialDisc {
    /// Disc radius
    pub radius: f64,
    /// Sweep start angle in degrees
    pub start_angle_deg: f64,
    /// Sweep end angle in degrees
    pub end_angle_deg: f64,
    /// Number of angular slices
    pub slices: u32,
    /// For an open sweep, spend one slice on landing the last boundary
    /// vertex exactly on the end angle
    pub add_slice_when_open: bool,
    /// Triangle index order
    pub winding: Winding,
}

impl Default for TrivialDisc {
    fn default() -> Self {
        Self {
            radius: 1.0,
            start_angle_deg: 0.0,
            end_angle_deg: 360.0,
            slices: config::constants::DEFAULT_DISC_SLICES,
            add_slice_when_open: false,
            winding: Winding::default(),
        }
    }
}

impl TrivialDisc {
    /// Generates the disc fan.
    pub fn generate(&self) -> MeshBuffers {
        let layout = SweepLayout::new(
            self.start_angle_deg,
            self.end_angle_deg,
            self.slices,
            false,
            self.add_slice_when_open,
        );
        let slices = self.slices as usize;
        let triangle_count = if layout.closed { slices } else { slices - 1 };
        let mut mesh = MeshBuffers::with_sizes(1 + slices, triangle_count, false);

        emit_cap_center(&mut mesh, 0, 0.0, CapSide::Top);
        for k in 0..layout.slices {
            let angle = layout.angle_at(k);
            let (sin_a, cos_a) = angle.sin_cos();
            mesh.set_vertex(
                1 + k as usize,
                DVec3::new(self.radius * cos_a, 0.0, self.radius * sin_a),
                planar_disc_uv(cos_a, sin_a, 1.0),
                DVec3::Y,
            );
        }

        let mut ti = 0;
        mesh.append_fan(self.slices, 0, 1, layout.closed, self.winding, &mut ti, None);
        debug_assert_eq!(ti, triangle_count);

        mesh
    }
}

/// Flat annulus between an inner and an outer radius.
///
/// Triangulated as one quad per slice between two concentric rings. The
/// inner boundary's UVs sit at the matching fractional radius of the disc
/// chart, so the annulus samples the same chart region a [`TrivialDisc`]
/// of the outer radius would.
#[derive(Debug, Clone, PartialEq)]
pub struct PuncturedDisc {
    /// Radius of the outer boundary
    pub outer_radius: f64,
    /// Radius of the hole
    pub inner_radius: f64,
    /// Sweep start angle in degrees
    pub start_angle_deg: f64,
    /// Sweep end angle in degrees
    pub end_angle_deg: f64,
    /// Number of angular slices
    pub slices: u32,
    /// For an open sweep, spend one slice on landing the last boundary
    /// vertex exactly on the end angle
    pub add_slice_when_open: bool,
    /// Triangle index order
    pub winding: Winding,
}

impl Default for PuncturedDisc {
    fn default() -> Self {
        Self {
            outer_radius: 1.0,
            inner_radius: 0.5,
            start_angle_deg: 0.0,
            end_angle_deg: 360.0,
            slices: config::constants::DEFAULT_DISC_SLICES,
            add_slice_when_open: false,
            winding: Winding::default(),
        }
    }
}

impl PuncturedDisc {
    /// Generates the annulus.
    pub fn generate(&self) -> MeshBuffers {
        let layout = SweepLayout::new(
            self.start_angle_deg,
            self.end_angle_deg,
            self.slices,
            false,
            self.add_slice_when_open,
        );
        let slices = self.slices as usize;
        let quads = if layout.closed { slices } else { slices - 1 };
        let mut mesh = MeshBuffers::with_sizes(2 * slices, 2 * quads, false);

        let inner_fraction = self.inner_radius / self.outer_radius;
        for k in 0..layout.slices {
            let angle = layout.angle_at(k);
            let (sin_a, cos_a) = angle.sin_cos();
            mesh.set_vertex(
                k as usize,
                DVec3::new(self.inner_radius * cos_a, 0.0, self.inner_radius * sin_a),
                planar_disc_uv(cos_a, sin_a, inner_fraction),
                DVec3::Y,
            );
            mesh.set_vertex(
                slices + k as usize,
                DVec3::new(self.outer_radius * cos_a, 0.0, self.outer_radius * sin_a),
                planar_disc_uv(cos_a, sin_a, 1.0),
                DVec3::Y,
            );
        }

        let mut ti = 0;
        let s = slices as u32;
        for k in 0..s - 1 {
            mesh.append_rectangle(k, k + 1, s + k + 1, s + k, self.winding, &mut ti, None);
        }
        if layout.closed {
            mesh.append_rectangle(s - 1, 0, s, 2 * s - 1, self.winding, &mut ti, None);
        }
        debug_assert_eq!(ti, 2 * quads);

        mesh
    }
}
