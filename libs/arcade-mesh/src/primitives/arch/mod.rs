//! # Arch Primitive
//!
//! Tessellates the solid around a round-topped opening.
//!
//! The region spans the opening in y and the curved part in z; the solid is
//! extruded along x. The opening is half an ellipse centred on the
//! springing line (`z = zmin`) with semi-axes `(ymax - ymin) / 2` and
//! `zmax - zmin`, so a region of width `2r` and height `r` gives a
//! semicircular arch of radius `r`. What remains of the bounding box (the two
//! spandrels) is emitted as:
//!
//! - flat walls at `ymax` (+y) and `ymin` (-y), and a flat cap at `zmax` (+z)
//! - a ruled roof joining the profile at `xmin` to the profile at `xmax`
//! - end caps at both x ends, fanned from the upper corners
//!   `(x, ymax, zmax)` and `(x, ymin, zmax)` to successive profile samples


use crate::emit::emit_triangle;
use crate::error::BuildError;
use crate::primitives::plane::{plane_y_neg, plane_y_pos, plane_z_pos};
use crate::region::Region;
use crate::scene::SceneSink;
use crate::transform::Transformation;
use crate::Point3;
use config::constants::{ARCH_STEPS, MAX_ARCH_STEPS, MIN_ARCH_STEPS};
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

/// Sampled arch profile in the `(y, z)` plane.
///
/// Both curves run from the springing line (index 0) to the apex (last
/// index), sampled at `angle_i = (π/2) · i / (steps - 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchProfile {
    /// Samples running from `(ymax, zmin)` up to the apex.
    pub left: Vec<DVec2>,
    /// Samples running from `(ymin, zmin)` up to the apex.
    pub right: Vec<DVec2>,
}

/// Samples the quarter-ellipse profiles of an arch.
///
/// # Example
///
/// ```rust
/// use arcade_mesh::{arch_profile, Region};
///
/// let profile = arch_profile(&Region::new(0.0, 1.0, 0.0, 2.0, 0.0, 1.0), 32).unwrap();
/// assert_eq!(profile.left[0].to_array(), [2.0, 0.0]);
/// assert_eq!(profile.right[0].to_array(), [0.0, 0.0]);
/// ```
pub fn arch_profile(region: &Region, steps: u32) -> Result<ArchProfile, BuildError> {
    region.validate()?;
    if !(MIN_ARCH_STEPS..=MAX_ARCH_STEPS).contains(&steps) {
        return Err(BuildError::invalid(format!(
            "arch steps must be in {MIN_ARCH_STEPS}..={MAX_ARCH_STEPS}: {steps}"
        )));
    }

    let cy = region.y.center();
    let ry = region.y.length() / 2.0;
    let rz = region.z.length();
    let last = f64::from(steps - 1);

    let (left, right): (Vec<DVec2>, Vec<DVec2>) = (0..steps)
        .map(|i| {
            let angle = FRAC_PI_2 * f64::from(i) / last;
            let (sin, cos) = angle.sin_cos();
            let z = region.z.min + rz * sin;
            (DVec2::new(cy + ry * cos, z), DVec2::new(cy - ry * cos, z))
        })
        .unzip();

    Ok(ArchProfile { left, right })
}

/// Emits an arch with the default resolution of [`ARCH_STEPS`] samples.
///
/// # Example
///
/// ```rust
/// use arcade_mesh::{make_arch, MemoryScene, Region};
///
/// let mut scene = MemoryScene::new();
/// make_arch(&mut scene, Region::new(0.0, 1.0, 0.0, 2.0, 0.0, 1.0), None).unwrap();
/// // 3 flat planes + 8 triangles per profile segment
/// assert_eq!(scene.object_count(), 3 + 8 * 31);
/// ```
pub fn make_arch<S: SceneSink + ?Sized>(
    sink: &mut S,
    region: Region,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    make_arch_with_steps(sink, region, ARCH_STEPS, transform)
}

/// Emits an arch sampled with `steps` points per profile curve.
///
/// Rejects, before emitting anything, a region with an empty or non-finite
/// axis (which covers a non-positive radius) and `steps` outside
/// `MIN_ARCH_STEPS..=MAX_ARCH_STEPS`.
pub fn make_arch_with_steps<S: SceneSink + ?Sized>(
    sink: &mut S,
    region: Region,
    steps: u32,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    let profile = arch_profile(&region, steps)?;
    tracing::debug!(?region, steps, "make_arch");

    let Region { x, y, z } = region;

    plane_y_pos(sink, x, z, y.max, transform)?;
    plane_y_neg(sink, x, z, y.min, transform)?;
    plane_z_pos(sink, x, y, z.max, transform)?;

    let at = |depth: f64, sample: DVec2| Point3::new(depth, sample.x, sample.y);
    let corner_left = |depth: f64| Point3::new(depth, y.max, z.max);
    let corner_right = |depth: f64| Point3::new(depth, y.min, z.max);

    for (l, r) in profile.left.windows(2).zip(profile.right.windows(2)) {
        let (fl0, fl1) = (at(x.max, l[0]), at(x.max, l[1]));
        let (bl0, bl1) = (at(x.min, l[0]), at(x.min, l[1]));
        let (fr0, fr1) = (at(x.max, r[0]), at(x.max, r[1]));
        let (br0, br1) = (at(x.min, r[0]), at(x.min, r[1]));

        // Roof
        emit_triangle(sink, fl0, fl1, bl0, transform)?;
        emit_triangle(sink, bl0, fl1, bl1, transform)?;
        emit_triangle(sink, fr0, br0, fr1, transform)?;
        emit_triangle(sink, br0, br1, fr1, transform)?;

        // End caps
        emit_triangle(sink, corner_left(x.min), bl0, bl1, transform)?;
        emit_triangle(sink, corner_left(x.max), fl1, fl0, transform)?;
        emit_triangle(sink, corner_right(x.min), br1, br0, transform)?;
        emit_triangle(sink, corner_right(x.max), fr0, fr1, transform)?;
    }

    Ok(())
}
