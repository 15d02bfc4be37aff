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

#[test]
fn test_degenerate_area_epsilon_larger_than_epsilon() {
    assert!(
        DEGENERATE_AREA_EPSILON >= EPSILON,
        "DEGENERATE_AREA_EPSILON should be >= EPSILON"
    );
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_segments_forms_polygon() {
    assert!(DEFAULT_SEGMENTS >= 3);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_limits_exceed_defaults() {
    assert!(MAX_PROFILE_SEGMENTS >= DEFAULT_SEGMENTS);
    assert!(MAX_RADIAL_SEGMENTS >= DEFAULT_SEGMENTS);
}

#[test]
fn test_blade_limit_covers_realistic_range() {
    // Realistic diffusers use up to ~30 blades
    assert!(MAX_BLADE_COUNT >= 30);
}

// =============================================================================
// PART DESIGN TESTS
// =============================================================================

#[test]
fn test_volute_expansion_widens_spiral() {
    assert!(VOLUTE_EXPANSION > 0.0);
    assert!(VOLUTE_EXPANSION < 1.0);
}

#[test]
fn test_blade_profile_is_sampled() {
    assert!(BLADE_PROFILE_POINTS >= 2);
    assert!(BLADE_CHORD_WIDTH > 0.0);
}

#[test]
fn test_blade_sweep_is_moderate() {
    assert!(BLADE_SWEEP_ANGLE > 0.0);
    assert!(BLADE_SWEEP_ANGLE < std::f64::consts::FRAC_PI_2);
}
