//! # Config Crate
//!
//! Centralized configuration constants for the arcade geometry kernel.
//! Tessellation resolution, numeric tolerances and build defaults are
//! defined here so the kernel and its drivers agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ARCH_STEPS, MIN_ARCH_STEPS};
//!
//! // Arch tessellation falls back to the default resolution
//! let requested: Option<u32> = None;
//! let steps = requested.unwrap_or(ARCH_STEPS);
//! assert!(steps >= MIN_ARCH_STEPS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values, usable from every crate in the workspace

pub mod constants;

#[cfg(test)]
mod tests;
