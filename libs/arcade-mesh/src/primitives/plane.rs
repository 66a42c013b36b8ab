//! # Oriented Planes
//!
//! Axis-aligned rectangles whose untransformed normal points along a fixed
//! direction. Each builder takes the two ranges orthogonal to its axis and the
//! fixed coordinate on that axis.
//!
//! The positive and negative builders of one axis swap their left and right
//! corners, which is what flips the normal; a box built from all six faces
//! therefore faces outward everywhere.

use crate::emit::emit_rectangle;
use crate::error::BuildError;
use crate::region::Interval;
use crate::scene::SceneSink;
use crate::transform::Transformation;
use crate::Point3;

/// Rectangle at `x` facing +x.
pub fn plane_x_pos<S: SceneSink + ?Sized>(
    sink: &mut S,
    y: Interval,
    z: Interval,
    x: f64,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    emit_rectangle(
        sink,
        Point3::new(x, y.max, z.max),
        Point3::new(x, y.max, z.min),
        Point3::new(x, y.min, z.max),
        Point3::new(x, y.min, z.min),
        transform,
    )
}

/// Rectangle at `x` facing -x.
pub fn plane_x_neg<S: SceneSink + ?Sized>(
    sink: &mut S,
    y: Interval,
    z: Interval,
    x: f64,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    emit_rectangle(
        sink,
        Point3::new(x, y.max, z.min),
        Point3::new(x, y.max, z.max),
        Point3::new(x, y.min, z.min),
        Point3::new(x, y.min, z.max),
        transform,
    )
}

/// Rectangle at `y` facing +y.
pub fn plane_y_pos<S: SceneSink + ?Sized>(
    sink: &mut S,
    x: Interval,
    z: Interval,
    y: f64,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    emit_rectangle(
        sink,
        Point3::new(x.max, y, z.min),
        Point3::new(x.max, y, z.max),
        Point3::new(x.min, y, z.min),
        Point3::new(x.min, y, z.max),
        transform,
    )
}

/// Rectangle at `y` facing -y.
pub fn plane_y_neg<S: SceneSink + ?Sized>(
    sink: &mut S,
    x: Interval,
    z: Interval,
    y: f64,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    emit_rectangle(
        sink,
        Point3::new(x.max, y, z.max),
        Point3::new(x.max, y, z.min),
        Point3::new(x.min, y, z.max),
        Point3::new(x.min, y, z.min),
        transform,
    )
}

/// Rectangle at `z` facing +z.
pub fn plane_z_pos<S: SceneSink + ?Sized>(
    sink: &mut S,
    x: Interval,
    y: Interval,
    z: f64,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    emit_rectangle(
        sink,
        Point3::new(x.min, y.max, z),
        Point3::new(x.max, y.max, z),
        Point3::new(x.min, y.min, z),
        Point3::new(x.max, y.min, z),
        transform,
    )
}

/// Rectangle at `z` facing -z.
pub fn plane_z_neg<S: SceneSink + ?Sized>(
    sink: &mut S,
    x: Interval,
    y: Interval,
    z: f64,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    emit_rectangle(
        sink,
        Point3::new(x.max, y.max, z),
        Point3::new(x.min, y.max, z),
        Point3::new(x.max, y.min, z),
        Point3::new(x.min, y.min, z),
        transform,
    )
}
