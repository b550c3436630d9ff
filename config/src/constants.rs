//! # Configuration Constants
//!
//! Centralized constants for the revolve-mesh pipeline. All precision
//! tolerances and default tessellation parameters are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Sweep**: Angular-range thresholds for revolved solids
//! - **Resolution**: Default subdivision counts

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance for treating a computed face normal as degenerate.
///
/// A cross product whose length falls below this value comes from a
/// (numerically) zero-area triangle, and normalizing it would produce an
/// arbitrary direction. Face-normal estimation reports such triangles as
/// degenerate instead.
pub const DEGENERATE_NORMAL_EPSILON: f64 = 1e-10;

/// Tolerance for unit-length normal checks.
///
/// Output normals are unit vectors within this tolerance. Looser than
/// [`EPSILON`] because normals accumulate error from trigonometric
/// evaluation and normalization.
///
/// # Example
///
/// ```rust
/// use config::constants::UNIT_NORMAL_TOLERANCE;
///
/// let length: f64 = 1.0 + 3e-6;
/// assert!((length - 1.0).abs() < UNIT_NORMAL_TOLERANCE);
/// ```
pub const UNIT_NORMAL_TOLERANCE: f64 = 1e-5;

// =============================================================================
// SWEEP CONSTANTS
// =============================================================================

/// Minimum angular range (in degrees) treated as a full revolution.
///
/// Degree/radian conversion leaves floating-point residue, so a sweep is
/// considered closed when it covers at least this many degrees rather
/// than exactly 360. Anything smaller is an open wedge with two exposed
/// seam edges.
///
/// # Example
///
/// ```rust
/// use config::constants::FULL_SWEEP_MIN_ANGLE_DEG;
///
/// let closed = (360.0_f64 - 0.0) >= FULL_SWEEP_MIN_ANGLE_DEG;
/// assert!(closed);
/// let wedge = (90.0_f64 - 0.0) >= FULL_SWEEP_MIN_ANGLE_DEG;
/// assert!(!wedge);
/// ```
pub const FULL_SWEEP_MIN_ANGLE_DEG: f64 = 359.99;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of slices (angular subdivisions) for revolved solids.
///
/// Matches the cylinder/cone generator defaults: 16 panels around a full
/// revolution.
pub const DEFAULT_SLICES: u32 = 16;

/// Default number of rings (axial cross-sections) for revolved solids.
///
/// Two rings produce a single band of lateral panels: one ring at the
/// base and one at the top.
pub const DEFAULT_RINGS: u32 = 2;

/// Default number of slices for flat disc primitives.
///
/// Discs default finer than cylinders because the fan silhouette is the
/// only thing that hides the polygonal approximation.
pub const DEFAULT_DISC_SLICES: u32 = 32;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if an angular range (in degrees) covers a full revolution.
///
/// # Example
///
/// ```rust
/// use config::constants::is_full_sweep;
///
/// assert!(is_full_sweep(0.0, 360.0));
/// assert!(is_full_sweep(-180.0, 180.0));
/// assert!(!is_full_sweep(0.0, 90.0));
/// ```
#[inline]
pub fn is_full_sweep(start_angle_deg: f64, end_angle_deg: f64) -> bool {
    (end_angle_deg - start_angle_deg) >= FULL_SWEEP_MIN_ANGLE_DEG
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
