//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_unit_normal_tolerance_looser_than_epsilon() {
    assert!(
        UNIT_NORMAL_TOLERANCE >= EPSILON,
        "UNIT_NORMAL_TOLERANCE should be >= EPSILON"
    );
}

#[test]
fn test_degenerate_normal_epsilon_is_small() {
    assert!(DEGENERATE_NORMAL_EPSILON > 0.0);
    assert!(DEGENERATE_NORMAL_EPSILON < 1e-6);
}

// =============================================================================
// SWEEP TESTS
// =============================================================================

#[test]
fn test_full_sweep_threshold_below_360() {
    // The threshold absorbs degree/radian round-trip error, so it must sit
    // strictly below 360 but close enough to reject real wedges.
    assert!(FULL_SWEEP_MIN_ANGLE_DEG < 360.0);
    assert!(FULL_SWEEP_MIN_ANGLE_DEG > 359.0);
}

#[test]
fn test_is_full_sweep_exact_circle() {
    assert!(is_full_sweep(0.0, 360.0));
}

#[test]
fn test_is_full_sweep_offset_range() {
    assert!(is_full_sweep(-180.0, 180.0));
    assert!(is_full_sweep(90.0, 450.0));
}

#[test]
fn test_is_full_sweep_rejects_wedge() {
    assert!(!is_full_sweep(0.0, 90.0));
    assert!(!is_full_sweep(0.0, 359.0));
}

#[test]
fn test_is_full_sweep_tolerates_rounding() {
    // A range that lost a hair to float conversion still counts as closed.
    assert!(is_full_sweep(0.0, 359.995));
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_slices_at_least_three() {
    // A ring needs at least 3 points to enclose area
    assert!(DEFAULT_SLICES >= 3);
}

#[test]
fn test_default_rings_at_least_two() {
    // One band of lateral panels needs a base ring and a top ring
    assert!(DEFAULT_RINGS >= 2);
}

#[test]
fn test_default_disc_slices_finer_than_cylinder() {
    assert!(DEFAULT_DISC_SLICES >= DEFAULT_SLICES);
}

// =============================================================================
// APPROX_EQUAL TESTS
// =============================================================================

#[test]
fn test_approx_equal_same_values() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(0.0, 0.0));
    assert!(approx_equal(-5.5, -5.5));
}

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(1.0, 1.0 - large_diff));
}

#[test]
fn test_approx_equal_different_values() {
    assert!(!approx_equal(1.0, 2.0));
    assert!(!approx_equal(0.0, 1.0));
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_exact_zero() {
    assert!(approx_zero(0.0));
}

#[test]
fn test_approx_zero_within_epsilon() {
    let small = EPSILON / 2.0;
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_outside_epsilon() {
    assert!(!approx_zero(0.1));
    assert!(!approx_zero(-0.1));
}
