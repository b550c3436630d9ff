//! # Config Crate
//!
//! Centralized configuration constants for the revolve-mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, FULL_SWEEP_MIN_ANGLE_DEG, DEFAULT_SLICES};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Use the sweep threshold to classify angular ranges
//! let closed = (360.0 - 0.0) >= FULL_SWEEP_MIN_ANGLE_DEG;
//! assert!(closed);
//! assert_eq!(DEFAULT_SLICES, 16);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants, no platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
