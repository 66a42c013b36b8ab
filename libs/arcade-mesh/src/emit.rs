//! # Primitive Emitters
//!
//! Turns a handful of points into one mesh and hands it to the sink.
//!
//! Winding rule: triangles are given counter-clockwise as seen from outside.
//! A mirroring transformation would turn that into clockwise, so the second
//! and third index of every triangle are swapped whenever
//! `transform.mirrors()` is true.

use crate::error::BuildError;
use crate::scene::SceneSink;
use crate::transform::Transformation;
use crate::Point3;

/// Transforms `vertices`, compensates winding, and emits one mesh object.
///
/// Every index must refer to an entry of `vertices`; otherwise nothing is
/// emitted and `InvalidParameter` is returned.
pub fn emit_mesh<S: SceneSink + ?Sized>(
    sink: &mut S,
    vertices: &[Point3],
    triangles: &[[u32; 3]],
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    if let Some((n, face)) = triangles
        .iter()
        .enumerate()
        .find(|(_, face)| face.iter().any(|&i| i as usize >= vertices.len()))
    {
        return Err(BuildError::invalid(format!(
            "face {n} {face:?} indexes past {} vertices",
            vertices.len()
        )));
    }

    let transform = Transformation::resolve(transform);

    let transformed: Vec<Point3> = vertices.iter().map(|v| transform.apply(*v)).collect();
    if let Some(bad) = transformed.iter().find(|v| !v.is_finite()) {
        return Err(BuildError::non_finite("emitted vertex", *bad));
    }

    let faces: Vec<[u32; 3]> = if transform.mirrors() {
        triangles.iter().map(|&[a, b, c]| [a, c, b]).collect()
    } else {
        triangles.to_vec()
    };

    tracing::trace!(
        vertices = transformed.len(),
        triangles = faces.len(),
        mirrored = transform.mirrors(),
        "emit mesh"
    );

    let handle = sink.create_mesh(&transformed, &faces)?;
    sink.create_object(handle)
}

/// Emits a single triangle `(a, b, c)`.
///
/// # Example
///
/// ```rust
/// use arcade_mesh::{emit_triangle, MemoryScene, Transformation};
/// use glam::DVec3;
///
/// let mut scene = MemoryScene::new();
/// emit_triangle(&mut scene, DVec3::ZERO, DVec3::X, DVec3::Y, Some(&Transformation::SwapXY)).unwrap();
/// assert_eq!(scene.meshes()[0].triangle(0), [0, 2, 1]);
/// ```
pub fn emit_triangle<S: SceneSink + ?Sized>(
    sink: &mut S,
    a: Point3,
    b: Point3,
    c: Point3,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    emit_mesh(sink, &[a, b, c], &[[0, 1, 2]], transform)
}

/// Emits a quad as two triangles sharing the `upper_left`–`lower_right`
/// diagonal: `(ul, ll, lr)` and `(ul, lr, ur)`.
pub fn emit_rectangle<S: SceneSink + ?Sized>(
    sink: &mut S,
    upper_left: Point3,
    upper_right: Point3,
    lower_left: Point3,
    lower_right: Point3,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    emit_mesh(
        sink,
        &[upper_left, upper_right, lower_left, lower_right],
        &[[0, 2, 3], [0, 3, 1]],
        transform,
    )
}
