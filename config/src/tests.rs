//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and the build configuration.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_degenerate_area_epsilon_is_small_and_positive() {
    assert!(DEGENERATE_AREA_EPSILON > 0.0);
    assert!(
        DEGENERATE_AREA_EPSILON < 1e-6,
        "threshold must not reject real faces"
    );
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_arch_steps_default() {
    assert_eq!(ARCH_STEPS, 32);
}

#[test]
fn test_min_arch_steps_describes_a_curve() {
    // Springing point and apex
    assert_eq!(MIN_ARCH_STEPS, 2);
}

#[test]
fn test_default_steps_within_bounds() {
    assert!((MIN_ARCH_STEPS..=MAX_ARCH_STEPS).contains(&ARCH_STEPS));
}

// =============================================================================
// BUILD CONFIG TESTS
// =============================================================================

#[test]
fn test_default_build_config_is_valid() {
    let cfg = BuildConfig::default();
    assert_eq!(BuildConfig::new(cfg.floor_height, cfg.arch_steps), Ok(cfg));
}

#[test]
fn test_build_config_rejects_bad_floor_height() {
    assert_eq!(
        BuildConfig::new(0.0, ARCH_STEPS).unwrap_err(),
        ConfigError::InvalidFloorHeight(0.0)
    );
    assert!(BuildConfig::new(-4.0, ARCH_STEPS).is_err());
    assert!(BuildConfig::new(f64::NAN, ARCH_STEPS).is_err());
    assert!(BuildConfig::new(f64::INFINITY, ARCH_STEPS).is_err());
}

#[test]
fn test_build_config_rejects_bad_steps() {
    assert_eq!(
        BuildConfig::new(DEFAULT_FLOOR_HEIGHT, 1).unwrap_err(),
        ConfigError::InvalidArchSteps(1)
    );
    assert_eq!(
        BuildConfig::new(DEFAULT_FLOOR_HEIGHT, MAX_ARCH_STEPS + 1).unwrap_err(),
        ConfigError::InvalidArchSteps(MAX_ARCH_STEPS + 1)
    );
}

#[test]
fn test_config_error_display() {
    let message = ConfigError::InvalidArchSteps(1).to_string();
    assert!(message.contains("arch_steps"));
}
