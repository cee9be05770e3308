//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

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

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_detail_is_usable() {
    assert!(DEFAULT_DETAIL >= 1, "detail must allow at least one step");
}

#[test]
fn test_default_bagel_detail_is_usable() {
    assert!(DEFAULT_BAGEL_DETAIL >= 1);
}

// =============================================================================
// DIMENSION TESTS
// =============================================================================

#[test]
fn test_default_dimensions_are_positive() {
    assert!(DEFAULT_RADIUS > 0.0);
    assert!(DEFAULT_HEIGHT > 0.0);
    assert!(DEFAULT_MOBIUS_RADIUS > 0.0);
    assert!(DEFAULT_BAGEL_MAJOR_RADIUS > 0.0);
    assert!(DEFAULT_BAGEL_MINOR_RADIUS > 0.0);
}

// =============================================================================
// ARROW PROPORTION TESTS
// =============================================================================

#[test]
fn test_arrow_ratios_partition_height() {
    assert_eq!(ARROW_HEAD_HEIGHT_RATIO + ARROW_BODY_HEIGHT_RATIO, 1.0);
}

#[test]
fn test_arrow_head_is_wider_than_body() {
    assert!(ARROW_HEAD_RADIUS_RATIO > 1.0);
}
