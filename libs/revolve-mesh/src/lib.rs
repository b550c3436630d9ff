//! # Revolve Mesh
//!
//! Procedural triangle-mesh generation for solids of revolution: cylinders
//! (open or capped), cones, stacked-section generalized cylinders, and flat
//! discs, all revolved around the Y axis with support for partial angular
//! sweeps.
//!
//! Meshes come out as a [`MeshBuffers`] bundle of parallel arrays —
//! positions, texture coordinates, unit normals and triangle indices, plus
//! optional per-triangle group tags — sized exactly for the configured
//! topology. Generators are plain structs: fill in the fields (or take
//! [`Default`]) and call `generate`.
//!
//! ```rust
//! use revolve_mesh::generators::CappedCylinder;
//! use revolve_mesh::Winding;
//!
//! let mesh = CappedCylinder {
//!     base_radius: 2.0,
//!     top_radius: 1.0,
//!     height: 3.0,
//!     winding: Winding::Clockwise,
//!     ..Default::default()
//! }
//! .generate();
//! assert!(mesh.validate().is_ok());
//! ```

pub mod error;
pub mod generators;
pub mod mesh;
pub mod revolve;

pub use error::MeshError;
pub use generators::{
    CappedCylinder, CircularSection, Cone, ConeUvMode, GeneralizedCylinder, OpenCylinder,
    PuncturedDisc, TrivialDisc,
};
pub use mesh::{MeshBuffers, Winding};
