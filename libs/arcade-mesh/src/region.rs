//! # Regions
//!
//! Axis-aligned bounds handed to the solid builders.

use crate::error::BuildError;
use serde::{Deserialize, Serialize};

/// A closed range `[min, max]` on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Length of the interval (negative if inverted).
    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the interval.
    #[inline]
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Returns true if both ends are finite and `min < max`.
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    /// Rejects intervals that are not proper, naming the axis in the error.
    pub(crate) fn check(&self, axis: &str) -> Result<(), BuildError> {
        if self.is_proper() {
            Ok(())
        } else {
            Err(BuildError::invalid(format!(
                "{axis} range must be finite with min < max: [{}, {}]",
                self.min, self.max
            )))
        }
    }
}

/// Bounds of a box or arch.
///
/// # Example
///
/// ```rust
/// use arcade_mesh::Region;
///
/// let region = Region::new(0.0, 1.0, 0.0, 2.0, 0.0, 1.0);
/// assert_eq!(region.y.center(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Region {
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64, zmin: f64, zmax: f64) -> Self {
        Self {
            x: Interval::new(xmin, xmax),
            y: Interval::new(ymin, ymax),
            z: Interval::new(zmin, zmax),
        }
    }

    /// Unit cube `[0, 1]³`.
    pub const UNIT: Region = Region::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0);

    /// Volume of the region.
    pub fn volume(&self) -> f64 {
        self.x.length() * self.y.length() * self.z.length()
    }

    /// Checks that every axis is finite and non-empty.
    pub fn validate(&self) -> Result<(), BuildError> {
        self.x.check("x")?;
        self.y.check("y")?;
        self.z.check("z")
    }
}
