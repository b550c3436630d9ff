//! # Revolved-Solid Generators
//!
//! Procedural generators for solids of revolution around the Y axis. Each
//! generator is a plain configuration struct whose `generate` method sizes
//! a [`MeshBuffers`](crate::mesh::MeshBuffers) exactly and fills it through
//! the revolve builders:
//!
//! - [`OpenCylinder`]: lateral frustum surface, no caps
//! - [`CappedCylinder`]: frustum with end caps, seam faces and group tags
//! - [`Cone`]: capped cone with an apex instead of a top ring
//! - [`GeneralizedCylinder`]: stacked circular cross-sections
//! - [`TrivialDisc`]: flat disc fan
//! - [`PuncturedDisc`]: flat annulus between two radii
//!
//! Generators do not validate their configuration; the caller is expected
//! to supply positive radii and heights, `slices >= 3`, `rings >= 2` and a
//! non-empty angular range. Degenerate configurations produce degenerate
//! geometry rather than errors.

mod capped_cylinder;
mod cone;
mod disc;
mod generalized;
mod open_cylinder;


pub use capped_cylinder::CappedCylinder;
pub use cone::{Cone, ConeUvMode};
pub use disc::{PuncturedDisc, TrivialDisc};
pub use generalized::{CircularSection, GeneralizedCylinder};
pub use open_cylinder::OpenCylinder;

/// Group tag for lateral (side) surface triangles.
pub const GROUP_LATERAL: u32 = 1;
/// Group tag for bottom-cap triangles.
pub const GROUP_BOTTOM_CAP: u32 = 2;
/// Group tag for top-cap triangles.
pub const GROUP_TOP_CAP: u32 = 3;
/// Group tag for the face closing an open wedge at its start angle.
pub const GROUP_START_SEAM: u32 = 4;
/// Group tag for the face closing an open wedge at its end angle.
pub const GROUP_END_SEAM: u32 = 5;
