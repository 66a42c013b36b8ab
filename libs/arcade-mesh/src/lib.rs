//! # Arcade Mesh
//!
//! Procedural triangle meshes for architectural solids: boxes, round arches
//! and rows of pillars and arches.
//!
//! ## Architecture
//!
//! ```text
//! layout (rows) → primitives (box, arch) → planes → emit → SceneSink
//! ```
//!
//! Every builder takes an explicit [`SceneSink`] and an optional
//! [`Transformation`]. Nothing is read back from the sink, so the kernel has
//! no state of its own. Geometry is always authored in one canonical
//! orientation and re-oriented by axis swaps; emitters compensate winding so
//! faces keep pointing outward.
//!
//! ## Usage
//!
//! ```rust
//! use arcade_mesh::{make_arch_sequence, Arcade, Axis, Interval, MemoryScene};
//!
//! let mut scene = MemoryScene::new();
//! let arcade = Arcade::new(3, 1.0, 2.0, 1.0, 1.0);
//! make_arch_sequence(&mut scene, Axis::Y, &arcade, Interval::new(0.0, 1.0), 0.0, None)?;
//! assert!(scene.signed_volume() > 0.0);
//! # Ok::<(), arcade_mesh::BuildError>(())
//! ```

pub mod emit;
pub mod error;
pub mod export;
pub mod layout;
pub mod mesh;
pub mod primitives;
pub mod region;
pub mod scene;
pub mod transform;

/// Position in model space.
pub type Point3 = glam::DVec3;

pub use emit::{emit_mesh, emit_rectangle, emit_triangle};
pub use error::BuildError;
pub use export::write_obj;
pub use layout::{make_arch_sequence, make_arches_x, make_arches_y, Arcade, Axis};
pub use mesh::{Face, Mesh};
pub use primitives::{arch_profile, make_arch, make_arch_with_steps, make_box, ArchProfile};
pub use region::{Interval, Region};
pub use scene::{build_atomically, MemoryScene, MeshId, SceneSink};
pub use transform::Transformation;
