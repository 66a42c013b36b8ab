//! # Configuration Constants
//!
//! Centralized constants for the arcade geometry kernel. Tessellation
//! parameters and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Degenerate-triangle threshold
//! - **Resolution**: Arch profile sampling and its bounds
//! - **Layout**: Defaults used by the building drivers

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum triangle area accepted by mesh validation.
///
/// Triangles whose doubled area falls below this value are reported as
/// degenerate by `Mesh::validate`.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_AREA_EPSILON;
///
/// let doubled_area = 1e-9;
/// assert!(doubled_area < DEGENERATE_AREA_EPSILON);
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-8;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Number of samples taken over the quarter circle of an arch profile.
///
/// The samples are spaced uniformly over `[0, π/2]`, both end points
/// included, so an arch emits `STEPS - 1` ruled segments per side.
///
/// # Example
///
/// ```rust
/// use config::constants::ARCH_STEPS;
///
/// let segments = ARCH_STEPS - 1;
/// assert_eq!(segments, 31);
/// ```
pub const ARCH_STEPS: u32 = 32;

/// Smallest step count that still describes a curve (springing point and apex).
///
/// # Example
///
/// ```rust
/// use config::constants::{ARCH_STEPS, MIN_ARCH_STEPS};
///
/// assert!(ARCH_STEPS >= MIN_ARCH_STEPS);
/// ```
pub const MIN_ARCH_STEPS: u32 = 2;

/// Upper bound on the arch step count.
///
/// Safety limit to prevent excessive tessellation.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_ARCH_STEPS;
///
/// let requested: u32 = 50_000;
/// let steps = requested.min(MAX_ARCH_STEPS);
/// assert_eq!(steps, MAX_ARCH_STEPS);
/// ```
pub const MAX_ARCH_STEPS: u32 = 4096;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Height of one storey when a driver stacks several floors of arcades.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FLOOR_HEIGHT;
///
/// let base_of_second_floor = 1.0 * DEFAULT_FLOOR_HEIGHT;
/// assert_eq!(base_of_second_floor, 4.0);
/// ```
pub const DEFAULT_FLOOR_HEIGHT: f64 = 4.0;

// =============================================================================
// BUILD CONFIGURATION
// =============================================================================

/// Immutable snapshot of the settings a driver build runs with.
///
/// # Examples
/// ```
/// use config::constants::BuildConfig;
/// let config = BuildConfig::default();
/// assert_eq!(config.floor_height, 4.0);
/// assert_eq!(config.arch_steps, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildConfig {
    /// Vertical distance between stacked floors.
    pub floor_height: f64,
    /// Samples per quarter circle for arch profiles.
    pub arch_steps: u32,
}

impl BuildConfig {
    /// Builds a configuration, rejecting a non-positive floor height and step
    /// counts outside `MIN_ARCH_STEPS..=MAX_ARCH_STEPS`.
    ///
    /// # Examples
    /// ```
    /// use config::constants::BuildConfig;
    /// let cfg = BuildConfig::new(3.5, 24).expect("valid config");
    /// assert_eq!(cfg.arch_steps, 24);
    /// ```
    pub fn new(floor_height: f64, arch_steps: u32) -> Result<Self, ConfigError> {
        if floor_height <= 0.0 || !floor_height.is_finite() {
            return Err(ConfigError::InvalidFloorHeight(floor_height));
        }
        if !(MIN_ARCH_STEPS..=MAX_ARCH_STEPS).contains(&arch_steps) {
            return Err(ConfigError::InvalidArchSteps(arch_steps));
        }
        Ok(Self {
            floor_height,
            arch_steps,
        })
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            floor_height: DEFAULT_FLOOR_HEIGHT,
            arch_steps: ARCH_STEPS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the floor height is zero, negative or not finite.
    InvalidFloorHeight(f64),
    /// Raised when the arch step count cannot describe a curve or is too large.
    InvalidArchSteps(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFloorHeight(value) => {
                write!(f, "floor height must be positive: {value}")
            }
            ConfigError::InvalidArchSteps(value) => {
                write!(
                    f,
                    "arch_steps must be in {MIN_ARCH_STEPS}..={MAX_ARCH_STEPS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
