//! # Primitives
//!
//! Oriented planes and the solids assembled from them (box, arch).

pub mod arch;
pub mod cuboid;
pub mod plane;

pub use arch::{arch_profile, make_arch, make_arch_with_steps, ArchProfile};
pub use cuboid::make_box;
pub use plane::{plane_x_neg, plane_x_pos, plane_y_neg, plane_y_pos, plane_z_neg, plane_z_pos};
