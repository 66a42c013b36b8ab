//! # OBJ Export
//!
//! Writes a recorded scene as Wavefront OBJ text. Each registered object
//! becomes an `o object_<n>` group; vertex indices are global and 1-based as
//! the format requires. Triangle winding is written unchanged.

use crate::error::BuildError;
use crate::scene::MemoryScene;
use std::io::Write;

/// Writes every registered object of `scene` to `writer`.
///
/// # Example
///
/// ```rust
/// use arcade_mesh::{emit_triangle, write_obj, MemoryScene};
/// use glam::DVec3;
///
/// let mut scene = MemoryScene::new();
/// emit_triangle(&mut scene, DVec3::ZERO, DVec3::X, DVec3::Y, None).unwrap();
///
/// let mut out = Vec::new();
/// write_obj(&scene, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("o object_0\n"));
/// assert!(text.contains("f 1 2 3\n"));
/// ```
pub fn write_obj<W: Write>(scene: &MemoryScene, mut writer: W) -> Result<(), BuildError> {
    let mut offset = 1usize;

    for (n, mesh) in scene.object_meshes().enumerate() {
        writeln!(writer, "o object_{n}")?;
        for v in mesh.vertices() {
            writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for &[a, b, c] in mesh.triangles() {
            writeln!(
                writer,
                "f {} {} {}",
                offset + a as usize,
                offset + b as usize,
                offset + c as usize
            )?;
        }
        offset += mesh.vertex_count();
    }

    writer.flush()?;
    tracing::debug!(
        objects = scene.object_count(),
        vertices = offset - 1,
        "wrote obj"
    );
    Ok(())
}
