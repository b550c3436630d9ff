//! # Revolve Engine
//!
//! Shared construction logic for solids of revolution:
//! - **SweepLayout**: angular parameterization of a (possibly partial) sweep
//! - **ring**: one circular cross-section's vertices, UVs and normals
//! - **cap**: top/bottom disc closure vertices
//! - **panel**: quad-strip triangulation between adjacent rings
//! - **inner_face**: faces closing the angular cut of an open wedge
//!
//! All builders write into a [`MeshBuffers`](crate::mesh::MeshBuffers) at
//! caller-supplied offsets; the generator variants own the buffers and
//! orchestrate the call sequence.

mod cap;
mod inner_face;
mod panel;
mod ring;

#[cfg(test)]
mod tests;

pub use cap::{emit_cap_center, emit_cap_ring, CapSide};
pub use inner_face::{emit_inner_faces, InnerFaceUv};
pub use panel::emit_panels;
pub use ring::{emit_ring, lateral_normal, planar_disc_uv, RingUv};

use config::constants::is_full_sweep;

/// Angular parameterization of one revolve sweep.
///
/// Derived once per generator from the configured angle range, slice count
/// and topology mode; every builder reads angles and sizing from it so the
/// seam handling stays consistent across rings, caps and inner faces.
///
/// A sweep is `closed` when it covers at least the full-circle threshold
/// (359.99°, absorbing degree/radian conversion error). For a closed sweep
/// with duplicated vertices the ring carries one extra vertex so the seam
/// gets independent attributes on both sides; for an open sweep with
/// `add_slice_when_open` the angular step divides the range into
/// `slices - 1` parts so the ring's two boundary vertices land exactly on
/// the configured endpoint angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepLayout {
    /// Whether the range covers a full revolution
    pub closed: bool,
    /// Configured slice count
    pub slices: u32,
    /// Number of angular steps the range is divided into
    pub divisions: u32,
    /// Vertices per ring under this layout
    pub ring_size: u32,
    /// Start angle in radians
    pub start_rad: f64,
    /// End angle in radians
    pub end_rad: f64,
    /// Angular step between consecutive ring vertices
    pub delta: f64,
}

impl SweepLayout {
    /// Derives the layout from a generator's angular configuration.
    pub fn new(
        start_angle_deg: f64,
        end_angle_deg: f64,
        slices: u32,
        no_shared_vertices: bool,
        add_slice_when_open: bool,
    ) -> Self {
        let closed = is_full_sweep(start_angle_deg, end_angle_deg);
        let divisions = if !closed && add_slice_when_open {
            slices - 1
        } else {
            slices
        };
        let ring_size = if no_shared_vertices && closed {
            slices + 1
        } else {
            slices
        };
        let start_rad = start_angle_deg.to_radians();
        let end_rad = end_angle_deg.to_radians();
        Self {
            closed,
            slices,
            divisions,
            ring_size,
            start_rad,
            end_rad,
            delta: (end_rad - start_rad) / divisions as f64,
        }
    }

    /// Returns the angle of vertex `k` within a ring.
    ///
    /// The final division lands on the exact configured end angle instead
    /// of `start + k * delta`, so accumulated floating-point drift cannot
    /// open a micro-gap at the seam.
    #[inline]
    pub fn angle_at(&self, k: u32) -> f64 {
        if k == self.divisions {
            self.end_rad
        } else {
            self.start_rad + k as f64 * self.delta
        }
    }

    /// Returns the horizontal texture coordinate of vertex `k`.
    ///
    /// Runs from 1 at the sweep start down to 0 at the far end of the
    /// angular range.
    #[inline]
    pub fn u_at(&self, k: u32) -> f64 {
        1.0 - k as f64 / self.divisions as f64
    }
}
