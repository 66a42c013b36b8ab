//! # Scene Sink
//!
//! The only boundary of the kernel. Builders hand every mesh they produce to
//! a [`SceneSink`] supplied by the caller; nothing is read back.
//!
//! [`MemoryScene`] is a recording sink used by tests, exporters and the CLI.
//! [`build_atomically`] stages a build in a `MemoryScene` so a failing build
//! leaves the real sink untouched.

use crate::error::BuildError;
use crate::mesh::Mesh;
use crate::Point3;

/// Host scene that receives emitted meshes.
pub trait SceneSink {
    /// Identifies a mesh created in the host.
    type Handle;

    /// Creates a mesh from a vertex list and index triples.
    fn create_mesh(
        &mut self,
        vertices: &[Point3],
        faces: &[[u32; 3]],
    ) -> Result<Self::Handle, BuildError>;

    /// Registers a previously created mesh as an object in the scene.
    fn create_object(&mut self, mesh: Self::Handle) -> Result<(), BuildError>;

    /// Removes all objects and meshes.
    fn clear_scene(&mut self) -> Result<(), BuildError>;
}

/// Index of a mesh inside a [`MemoryScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// In-memory scene that records every mesh and object in call order.
///
/// # Example
///
/// ```rust
/// use arcade_mesh::{make_box, MemoryScene, Region};
///
/// let mut scene = MemoryScene::new();
/// make_box(&mut scene, Region::UNIT, None).unwrap();
/// assert_eq!(scene.object_count(), 6);
/// assert_eq!(scene.triangle_count(), 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    meshes: Vec<Mesh>,
    objects: Vec<MeshId>,
}

impl MemoryScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// All meshes created so far, in creation order.
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Registered objects, in registration order.
    pub fn objects(&self) -> &[MeshId] {
        &self.objects
    }

    /// Returns the mesh behind a handle.
    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0)
    }

    /// Iterates over the meshes of registered objects.
    pub fn object_meshes(&self) -> impl Iterator<Item = &Mesh> + '_ {
        self.objects.iter().filter_map(|id| self.mesh(*id))
    }

    /// Number of registered objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Total vertices over all registered objects.
    pub fn vertex_count(&self) -> usize {
        self.object_meshes().map(Mesh::vertex_count).sum()
    }

    /// Total triangles over all registered objects.
    pub fn triangle_count(&self) -> usize {
        self.object_meshes().map(Mesh::triangle_count).sum()
    }

    /// Total signed volume over all registered objects.
    pub fn signed_volume(&self) -> f64 {
        self.object_meshes().map(Mesh::signed_volume).sum()
    }

    /// Concatenates all registered objects into one mesh (no welding).
    pub fn merged(&self) -> Mesh {
        let mut merged = Mesh::with_capacity(self.vertex_count(), self.triangle_count());
        for mesh in self.object_meshes() {
            merged.merge(mesh);
        }
        merged
    }

    /// Re-emits every registered object into another sink, in order.
    pub fn replay_into<S: SceneSink + ?Sized>(&self, sink: &mut S) -> Result<(), BuildError> {
        for mesh in self.object_meshes() {
            let handle = sink.create_mesh(mesh.vertices(), mesh.triangles())?;
            sink.create_object(handle)?;
        }
        Ok(())
    }
}

impl SceneSink for MemoryScene {
    type Handle = MeshId;

    fn create_mesh(
        &mut self,
        vertices: &[Point3],
        faces: &[[u32; 3]],
    ) -> Result<MeshId, BuildError> {
        let id = MeshId(self.meshes.len());
        self.meshes
            .push(Mesh::from_parts(vertices.to_vec(), faces.to_vec()));
        Ok(id)
    }

    fn create_object(&mut self, mesh: MeshId) -> Result<(), BuildError> {
        if mesh.0 >= self.meshes.len() {
            return Err(BuildError::sink(format!("unknown mesh handle {}", mesh.0)));
        }
        self.objects.push(mesh);
        Ok(())
    }

    fn clear_scene(&mut self) -> Result<(), BuildError> {
        self.meshes.clear();
        self.objects.clear();
        Ok(())
    }
}

/// Runs `build` against a staging scene and replays it into `sink` only if
/// the whole build succeeds.
///
/// # Example
///
/// ```rust
/// use arcade_mesh::{build_atomically, make_box, MemoryScene, Region};
///
/// let mut scene = MemoryScene::new();
/// let result = build_atomically(&mut scene, |staging| {
///     make_box(staging, Region::UNIT, None)?;
///     make_box(staging, Region::new(0.0, 1.0, 0.0, 1.0, 1.0, 1.0), None)
/// });
/// assert!(result.is_err());
/// assert_eq!(scene.object_count(), 0);
/// ```
pub fn build_atomically<S, F>(sink: &mut S, build: F) -> Result<(), BuildError>
where
    S: SceneSink + ?Sized,
    F: FnOnce(&mut MemoryScene) -> Result<(), BuildError>,
{
    let mut staging = MemoryScene::new();
    build(&mut staging)?;
    tracing::trace!(objects = staging.object_count(), "replaying staged build");
    staging.replay_into(sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point3> {
        vec![Point3::ZERO, Point3::X, Point3::Y]
    }

    #[test]
    fn test_memory_scene_records_in_order() {
        let mut scene = MemoryScene::new();
        let a = scene.create_mesh(&triangle(), &[[0, 1, 2]]).unwrap();
        let b = scene.create_mesh(&triangle(), &[[0, 2, 1]]).unwrap();
        scene.create_object(b).unwrap();
        scene.create_object(a).unwrap();

        assert_eq!(scene.objects(), &[MeshId(1), MeshId(0)]);
        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.triangle_count(), 2);
        assert_eq!(scene.vertex_count(), 6);
    }

    #[test]
    fn test_unregistered_mesh_not_counted() {
        let mut scene = MemoryScene::new();
        scene.create_mesh(&triangle(), &[[0, 1, 2]]).unwrap();
        assert_eq!(scene.meshes().len(), 1);
        assert_eq!(scene.triangle_count(), 0);
    }

    #[test]
    fn test_unknown_handle_rejected() {
        let mut scene = MemoryScene::new();
        let err = scene.create_object(MeshId(3)).unwrap_err();
        assert!(matches!(err, BuildError::Sink { .. }));
    }

    #[test]
    fn test_clear_scene() {
        let mut scene = MemoryScene::new();
        let id = scene.create_mesh(&triangle(), &[[0, 1, 2]]).unwrap();
        scene.create_object(id).unwrap();
        scene.clear_scene().unwrap();
        assert!(scene.meshes().is_empty());
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_replay_into_copies_objects() {
        let mut source = MemoryScene::new();
        let id = source.create_mesh(&triangle(), &[[0, 1, 2]]).unwrap();
        source.create_object(id).unwrap();

        let mut target = MemoryScene::new();
        source.replay_into(&mut target).unwrap();
        assert_eq!(target.meshes(), source.meshes());
    }

    #[test]
    fn test_build_atomically_commits_on_success() {
        let mut scene = MemoryScene::new();
        build_atomically(&mut scene, |staging| {
            let id = staging.create_mesh(&triangle(), &[[0, 1, 2]])?;
            staging.create_object(id)
        })
        .unwrap();
        assert_eq!(scene.object_count(), 1);
    }

    #[test]
    fn test_build_atomically_discards_on_failure() {
        let mut scene = MemoryScene::new();
        let result = build_atomically(&mut scene, |staging| {
            let id = staging.create_mesh(&triangle(), &[[0, 1, 2]])?;
            staging.create_object(id)?;
            Err(BuildError::invalid("late failure"))
        });
        assert!(result.is_err());
        assert_eq!(scene.object_count(), 0);
        assert!(scene.meshes().is_empty());
    }

    #[test]
    fn test_merged_offsets_indices() {
        let mut scene = MemoryScene::new();
        for _ in 0..2 {
            let id = scene.create_mesh(&triangle(), &[[0, 1, 2]]).unwrap();
            scene.create_object(id).unwrap();
        }
        let merged = scene.merged();
        assert_eq!(merged.triangles(), &[[0, 1, 2], [3, 4, 5]]);
    }
}
