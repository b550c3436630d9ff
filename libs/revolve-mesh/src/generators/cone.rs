//! # Cone Generator
//!
//! A capped cone: a revolved lateral wall tapering from `base_radius` to
//! the axis, closed by a bottom disc. Shared-vertex mode welds the tip into
//! a single apex vertex; duplicated mode keeps a full (degenerate) top ring
//! so every slice column still owns its texture seam, and closes an open
//! sweep's angular cut with explicit seam faces.

use crate::mesh::{MeshBuffers, Winding};
use crate::revolve::{
    emit_cap_center, emit_cap_ring, emit_inner_faces, emit_panels, emit_ring, CapSide,
    InnerFaceUv, RingUv, SweepLayout,
};
use glam::{DVec2, DVec3};

/// Texture parameterization of the cone's lateral surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConeUvMode {
    /// Cylindrical unwrap: `u` around the sweep, `v` up the axis
    #[default]
    SideProjected,
    /// Planar projection down the axis, shrinking with the taper so the
    /// chart follows the shape
    OnShape,
}

/// Capped cone revolved around the Y axis.
///
/// The base sits at `y = 0`, the tip at `y = height`. Intermediate ring
/// radii interpolate linearly, so the topmost duplicated ring collapses
/// exactly onto the axis.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::generators::Cone;
///
/// let mesh = Cone::default().generate();
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cone {
    /// Radius of the base ring
    pub base_radius: f64,
    /// Axial distance from base to tip
    pub height: f64,
    /// Sweep start angle in degrees
    pub start_angle_deg: f64,
    /// Sweep end angle in degrees
    pub end_angle_deg: f64,
    /// Number of angular slices
    pub slices: u32,
    /// Number of rings along the axis (at least 2)
    pub rings: u32,
    /// Keep a full degenerate tip ring instead of welding to one apex
    pub no_shared_vertices: bool,
    /// For an open sweep, spend one slice on landing the last ring vertex
    /// exactly on the end angle
    pub add_slice_when_open: bool,
    /// Lateral texture parameterization
    pub uv_mode: ConeUvMode,
    /// Triangle index order
    pub winding: Winding,
}

impl Default for Cone {
    fn default() -> Self {
        Self {
            base_radius: 1.0,
            height: 1.0,
            start_angle_deg: 0.0,
            end_angle_deg: 360.0,
            slices: config::constants::DEFAULT_SLICES,
            rings: config::constants::DEFAULT_RINGS,
            no_shared_vertices: false,
            add_slice_when_open: true,
            uv_mode: ConeUvMode::default(),
            winding: Winding::default(),
        }
    }
}

impl Cone {
    fn ring_uv(&self, radius: f64, v: f64) -> RingUv {
        match self.uv_mode {
            ConeUvMode::SideProjected => RingUv::Cylindrical { v },
            ConeUvMode::OnShape => RingUv::PlanarDisc {
                radius_fraction: radius / self.base_radius,
            },
        }
    }

    /// Generates the capped cone.
    pub fn generate(&self) -> MeshBuffers {
        let layout = SweepLayout::new(
            self.start_angle_deg,
            self.end_angle_deg,
            self.slices,
            self.no_shared_vertices,
            self.add_slice_when_open,
        );
        if self.no_shared_vertices {
            self.generate_duplicated(&layout)
        } else {
            self.generate_shared(&layout)
        }
    }

    /// Full ring grid with a degenerate tip ring.
    fn generate_duplicated(&self, layout: &SweepLayout) -> MeshBuffers {
        let rings = self.rings as usize;
        let ring_size = layout.ring_size as usize;
        let slices = self.slices as usize;
        let open = !layout.closed;

        let fan_size = if layout.closed { slices } else { slices - 1 };
        let mut vertex_count = ring_size * rings + 1 + slices;
        let mut triangle_count = 2 * (ring_size - 1) * (rings - 1) + fan_size;
        if open {
            vertex_count += 8 * (rings - 1);
            triangle_count += 4 * (rings - 1);
        }
        let mut mesh = MeshBuffers::with_sizes(vertex_count, triangle_count, false);

        for i in 0..rings {
            let fraction = i as f64 / (rings - 1) as f64;
            let radius = self.base_radius * (1.0 - fraction);
            let y = self.height * fraction;
            let v = if self.height == 0.0 { 1.0 } else { y / self.height };
            emit_ring(
                &mut mesh,
                layout,
                ring_size * i,
                radius,
                y,
                self.ring_uv(radius, v),
                self.base_radius,
                self.height,
            );
        }

        let mut ti = 0;
        emit_panels(&mut mesh, 0, ring_size, rings, false, self.winding, &mut ti, None);

        let bottom_center = ring_size * rings;
        let bottom_ring = bottom_center + 1;
        emit_cap_center(&mut mesh, bottom_center, 0.0, CapSide::Bottom);
        emit_cap_ring(&mut mesh, layout, bottom_ring, self.base_radius, 0.0, CapSide::Bottom);
        mesh.append_fan(
            self.slices,
            bottom_center as u32,
            bottom_ring as u32,
            layout.closed,
            self.winding,
            &mut ti,
            None,
        );

        if open {
            let y_span = if self.height == 0.0 { 1.0 } else { self.height };
            emit_inner_faces(
                &mut mesh,
                bottom_ring + slices,
                ring_size,
                rings,
                self.height / (rings - 1) as f64,
                y_span,
                self.base_radius,
                0.0,
                InnerFaceUv::Cone,
                None,
                self.winding,
                &mut ti,
            );
        }
        debug_assert_eq!(ti, triangle_count);

        mesh
    }

    /// Welded topology: one apex vertex instead of the tip ring.
    fn generate_shared(&self, layout: &SweepLayout) -> MeshBuffers {
        let rings = self.rings as usize;
        let ring_size = layout.ring_size as usize;
        let slices = self.slices as usize;
        let open = !layout.closed;

        let fan_size = if layout.closed { slices } else { slices - 1 };
        let quads_per_band = if layout.closed { slices } else { slices - 1 };
        let vertex_count = ring_size * (rings - 1) + 2;
        let mut triangle_count = 2 * quads_per_band * (rings - 2) + 2 * fan_size;
        if open {
            triangle_count += 2;
        }
        let mut mesh = MeshBuffers::with_sizes(vertex_count, triangle_count, false);

        // Rings stop one step short of the tip
        for i in 0..rings - 1 {
            let fraction = i as f64 / (rings - 1) as f64;
            let radius = self.base_radius * (1.0 - fraction);
            let y = self.height * fraction;
            let v = if self.height == 0.0 { 1.0 } else { y / self.height };
            emit_ring(
                &mut mesh,
                layout,
                ring_size * i,
                radius,
                y,
                self.ring_uv(radius, v),
                self.base_radius,
                self.height,
            );
        }

        let apex = ring_size * (rings - 1);
        let bottom_center = apex + 1;
        let apex_uv = match self.uv_mode {
            ConeUvMode::SideProjected => DVec2::new(0.5, 1.0),
            ConeUvMode::OnShape => DVec2::splat(0.5),
        };
        mesh.set_vertex(apex, DVec3::new(0.0, self.height, 0.0), apex_uv, DVec3::Y);
        emit_cap_center(&mut mesh, bottom_center, 0.0, CapSide::Bottom);

        let mut ti = 0;
        emit_panels(
            &mut mesh,
            0,
            ring_size,
            rings - 1,
            layout.closed,
            self.winding,
            &mut ti,
            None,
        );
        // Tip band: fan from the apex over the last real ring
        mesh.append_fan(
            self.slices,
            apex as u32,
            (ring_size * (rings - 2)) as u32,
            layout.closed,
            self.winding.reversed(),
            &mut ti,
            None,
        );
        // Bottom cap fans over the base ring directly
        mesh.append_fan(
            self.slices,
            bottom_center as u32,
            0,
            layout.closed,
            self.winding,
            &mut ti,
            None,
        );

        if open {
            // Close the angular cut with one triangle per boundary column
            mesh.set_triangle(
                &mut ti,
                bottom_center as u32,
                apex as u32,
                0,
                self.winding.reversed(),
            );
            mesh.set_triangle(
                &mut ti,
                bottom_center as u32,
                apex as u32,
                (ring_size - 1) as u32,
                self.winding,
            );
        }
        debug_assert_eq!(ti, triangle_count);

        mesh
    }
}
