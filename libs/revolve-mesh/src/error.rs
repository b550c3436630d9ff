//! # Mesh Errors
//!
//! Error types for mesh-bundle consistency checks.
//!
//! Generation itself is infallible for documented-valid parameters (see the
//! generator docs for the caller contract); these errors are produced by
//! [`crate::mesh::MeshBuffers::validate`], which downstream consumers and
//! tests use to verify a bundle before handing it to mesh I/O.

use thiserror::Error;

/// Errors reported by mesh-bundle validation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The parallel vertex-attribute arrays have diverging lengths
    #[error("attribute length mismatch: {positions} positions, {uvs} uvs, {normals} normals")]
    AttributeLengthMismatch {
        /// Number of positions in the bundle
        positions: usize,
        /// Number of texture coordinates in the bundle
        uvs: usize,
        /// Number of normals in the bundle
        normals: usize,
    },

    /// A triangle references a vertex index outside the position array
    #[error("triangle {triangle} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfBounds {
        /// Offending triangle index
        triangle: usize,
        /// Offending vertex index
        index: u32,
        /// Number of vertices in the bundle
        vertex_count: usize,
    },

    /// A normal is not unit length within tolerance
    #[error("normal {index} has length {length}, expected 1 within {tolerance}")]
    NonUnitNormal {
        /// Offending normal index
        index: usize,
        /// Measured length
        length: f64,
        /// Allowed deviation from 1
        tolerance: f64,
    },

    /// The group-tag array does not match the triangle array in length
    #[error("group tag count {groups} does not match triangle count {triangles}")]
    GroupLengthMismatch {
        /// Number of group tags
        groups: usize,
        /// Number of triangles
        triangles: usize,
    },
}
