//! # Mesh
//!
//! The vertex list and index triples of one emission, as a scene sink
//! receives them. Queries here are read-only and serve tests, the OBJ
//! writer and the scene summaries.

use crate::transform::Transformation;
use crate::Point3;
use config::constants::DEGENERATE_AREA_EPSILON;

/// Three indices into a mesh's vertex list, wound counter-clockwise as seen
/// from outside.
pub type Face = [u32; 3];

/// One emitted mesh.
///
/// # Example
///
/// ```rust
/// use arcade_mesh::Mesh;
/// use glam::DVec3;
///
/// let mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
/// assert_eq!(mesh.face_normal(0), DVec3::Z);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3>,
    triangles: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty mesh with room for the given number of vertices and faces.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    pub fn from_parts(vertices: Vec<Point3>, triangles: Vec<Face>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[Face] {
        &self.triangles
    }

    /// Index triple of face `index`.
    #[inline]
    pub fn triangle(&self, index: usize) -> Face {
        self.triangles[index]
    }

    /// Corner positions of face `index`, in winding order.
    pub fn triangle_positions(&self, index: usize) -> [Point3; 3] {
        self.triangles[index].map(|i| self.vertices[i as usize])
    }

    /// Right-hand-rule unit normal of face `index`; zero when degenerate.
    pub fn face_normal(&self, index: usize) -> Point3 {
        let [a, b, c] = self.triangle_positions(index);
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Component-wise `(min, max)` over all vertices; both zero when empty.
    pub fn bounding_box(&self) -> (Point3, Point3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (Point3::ZERO, Point3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
    }

    /// Signed volume enclosed by the faces (divergence theorem).
    ///
    /// Summed over every mesh of one solid this gives the solid's volume,
    /// positive when all faces point outward, even though the meshes share
    /// no vertices.
    pub fn signed_volume(&self) -> f64 {
        let six_v: f64 = (0..self.triangles.len())
            .map(|i| {
                let [a, b, c] = self.triangle_positions(i);
                a.dot(b.cross(c))
            })
            .sum();
        six_v / 6.0
    }

    /// Copy of the mesh mapped through `transform`, with winding compensated
    /// the way the emitters do it.
    pub fn transformed(&self, transform: &Transformation) -> Mesh {
        let mirrored = transform.mirrors();
        Mesh {
            vertices: self.vertices.iter().map(|v| transform.apply(*v)).collect(),
            triangles: self
                .triangles
                .iter()
                .map(|&[a, b, c]| if mirrored { [a, c, b] } else { [a, b, c] })
                .collect(),
        }
    }

    /// Appends `other`, offsetting its indices. Vertices are not welded.
    pub fn merge(&mut self, other: &Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.triangles
            .extend(other.triangles.iter().map(|face| face.map(|i| i + base)));
    }

    /// True when every coordinate is finite and every face references three
    /// distinct in-range vertices spanning at least `DEGENERATE_AREA_EPSILON`.
    pub fn validate(&self) -> bool {
        if !self.vertices.iter().all(|v| v.is_finite()) {
            return false;
        }
        let len = self.vertices.len() as u32;
        self.triangles.iter().enumerate().all(|(n, &[a, b, c])| {
            let indices_ok = a < len && b < len && c < len && a != b && b != c && a != c;
            indices_ok && self.doubled_area(n) >= DEGENERATE_AREA_EPSILON
        })
    }

    fn doubled_area(&self, index: usize) -> f64 {
        let [a, b, c] = self.triangle_positions(index);
        (b - a).cross(c - a).length()
    }
}
