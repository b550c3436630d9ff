//! # Open Cylinder Generator
//!
//! Lateral surface of a linearly tapered cylinder (a frustum side wall)
//! with no end caps. Supports partial angular sweeps, multiple height
//! rings, and an independent base and top radius for cone-like tapers.

use crate::mesh::{MeshBuffers, Winding};
use crate::revolve::{emit_panels, emit_ring, RingUv, SweepLayout};

/// Uncapped revolved side wall.
///
/// The surface revolves around the Y axis from `y = 0` to `y = height`,
/// sweeping from `start_angle_deg` to `end_angle_deg`. Radii interpolate
/// linearly from `base_radius` at the bottom ring to `top_radius` at the
/// top ring, so intermediate rings of a taper sit exactly on the frustum.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::generators::OpenCylinder;
///
/// let mesh = OpenCylinder {
///     slices: 8,
///     ..Default::default()
/// }
/// .generate();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OpenCylinder {
    /// Radius of the bottom ring
    pub base_radius: f64,
    /// Radius of the top ring
    pub top_radius: f64,
    /// Axial extent of the surface
    pub height: f64,
    /// Sweep start angle in degrees
    pub start_angle_deg: f64,
    /// Sweep end angle in degrees
    pub end_angle_deg: f64,
    /// Number of angular slices
    pub slices: u32,
    /// Number of rings along the axis (at least 2)
    pub rings: u32,
    /// Duplicate the seam vertex of a closed sweep so both sides of the
    /// seam carry independent texture coordinates
    pub no_shared_vertices: bool,
    /// For an open sweep, spend one slice on landing the last ring vertex
    /// exactly on the end angle
    pub add_slice_when_open: bool,
    /// Triangle index order
    pub winding: Winding,
}

impl Default for OpenCylinder {
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

impl OpenCylinder {
    /// Generates the lateral surface mesh.
    ///
    /// # Returns
    ///
    /// A bundle with `ring_size * rings` vertices and
    /// `2 * slices * (rings - 1)` triangles when the sweep is closed
    /// (`2 * (slices - 1) * (rings - 1)` when open). No group tags.
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

        let quads_per_band = if layout.closed {
            self.slices as usize
        } else {
            self.slices as usize - 1
        };
        let vertex_count = ring_size * rings;
        let triangle_count = 2 * quads_per_band * (rings - 1);
        let mut mesh = MeshBuffers::with_sizes(vertex_count, triangle_count, false);

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
        let close_seam = layout.closed && !self.no_shared_vertices;
        emit_panels(&mut mesh, 0, ring_size, rings, close_seam, self.winding, &mut ti, None);
        debug_assert_eq!(ti, triangle_count);

        mesh
    }
}
