//! # Box Primitive
//!
//! Closed rectangular solid assembled from the six oriented planes.

use crate::error::BuildError;
use crate::primitives::plane::{
    plane_x_neg, plane_x_pos, plane_y_neg, plane_y_pos, plane_z_neg, plane_z_pos,
};
use crate::region::Region;
use crate::scene::SceneSink;
use crate::transform::Transformation;

/// Emits a box filling `region`.
///
/// Six meshes, one per face, each with four vertices and two triangles.
/// Vertices are not shared between faces.
///
/// # Arguments
///
/// * `sink` - Scene that receives the six faces
/// * `region` - Bounds of the box; every axis must satisfy `min < max`
/// * `transform` - Applied to every vertex; identity if `None`
///
/// # Example
///
/// ```rust
/// use arcade_mesh::{make_box, MemoryScene, Region};
///
/// let mut scene = MemoryScene::new();
/// make_box(&mut scene, Region::new(0.0, 2.0, 0.0, 3.0, 0.0, 4.0), None).unwrap();
/// assert_eq!(scene.vertex_count(), 24);
/// assert!((scene.signed_volume() - 24.0).abs() < 1e-9);
/// ```
pub fn make_box<S: SceneSink + ?Sized>(
    sink: &mut S,
    region: Region,
    transform: Option<&Transformation>,
) -> Result<(), BuildError> {
    region.validate()?;
    tracing::debug!(?region, "make_box");

    let Region { x, y, z } = region;

    plane_x_pos(sink, y, z, x.max, transform)?;
    plane_x_neg(sink, y, z, x.min, transform)?;

    plane_y_pos(sink, x, z, y.max, transform)?;
    plane_y_neg(sink, x, z, y.min, transform)?;

    plane_z_pos(sink, x, y, z.max, transform)?;
    plane_z_neg(sink, x, y, z.min, transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::MemoryScene;
    use crate::Point3;
    use approx::assert_relative_eq;

    fn build(region: Region, transform: Option<&Transformation>) -> MemoryScene {
        let mut scene = MemoryScene::new();
        make_box(&mut scene, region, transform).unwrap();
        scene
    }

    /// Every triangle's normal points away from the box centre.
    fn assert_outward(scene: &MemoryScene, centre: Point3) {
        for mesh in scene.object_meshes() {
            for i in 0..mesh.triangle_count() {
                let [a, b, c] = mesh.triangle_positions(i);
                let centroid = (a + b + c) / 3.0;
                assert!(
                    mesh.face_normal(i).dot(centroid - centre) > 0.0,
                    "inward triangle at {centroid}"
                );
            }
        }
    }

    #[test]
    fn test_unit_box_counts() {
        let scene = build(Region::UNIT, None);
        assert_eq!(scene.object_count(), 6);
        assert_eq!(scene.triangle_count(), 12);
        assert_eq!(scene.vertex_count(), 24);
    }

    #[test]
    fn test_unit_box_coordinates_are_corners() {
        let scene = build(Region::UNIT, Some(&Transformation::Identity));
        for v in scene.merged().vertices() {
            for c in v.to_array() {
                assert!(c == 0.0 || c == 1.0, "unexpected coordinate {c}");
            }
        }
    }

    #[test]
    fn test_box_faces_outward() {
        let region = Region::new(1.0, 3.0, -2.0, 0.0, 5.0, 6.0);
        let scene = build(region, None);
        assert_outward(&scene, Point3::new(2.0, -1.0, 5.5));
        assert_relative_eq!(scene.signed_volume(), region.volume(), epsilon = 1e-9);
    }

    #[test]
    fn test_box_faces_outward_under_mirroring() {
        let region = Region::new(1.0, 3.0, -2.0, 0.0, 5.0, 6.0);
        for t in [
            Transformation::SwapXY,
            Transformation::SwapXZ,
            Transformation::compose(Transformation::SwapYZ, Transformation::SwapXY),
        ] {
            let scene = build(region, Some(&t));
            assert_outward(&scene, t.apply(Point3::new(2.0, -1.0, 5.5)));
            assert_relative_eq!(scene.signed_volume(), region.volume(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_box_bounding_box() {
        let scene = build(Region::new(0.0, 10.0, 0.0, 20.0, 0.0, 30.0), None);
        let (min, max) = scene.merged().bounding_box();
        assert_eq!(min, Point3::ZERO);
        assert_eq!(max, Point3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_box_validates() {
        let scene = build(Region::UNIT, None);
        assert!(scene.object_meshes().all(|m| m.validate()));
    }

    #[test]
    fn test_box_invalid_extent() {
        let mut scene = MemoryScene::new();
        let result = make_box(&mut scene, Region::new(0.0, 0.0, 0.0, 1.0, 0.0, 1.0), None);
        assert!(matches!(result, Err(BuildError::InvalidParameter { .. })));
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_box_inverted_extent() {
        let mut scene = MemoryScene::new();
        assert!(make_box(&mut scene, Region::new(0.0, 1.0, 1.0, -1.0, 0.0, 1.0), None).is_err());
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_box_non_finite_extent() {
        let mut scene = MemoryScene::new();
        assert!(make_box(&mut scene, Region::new(0.0, f64::NAN, 0.0, 1.0, 0.0, 1.0), None).is_err());
    }
}
