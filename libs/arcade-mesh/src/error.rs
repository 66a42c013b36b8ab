//! # Build Errors
//!
//! Error types for geometry construction.

use glam::DVec3;
use thiserror::Error;

/// Errors that can occur while building geometry.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A NaN or infinite coordinate reached an emitter
    #[error("Non-finite coordinate in {context}: {point}")]
    NonFinite { context: &'static str, point: DVec3 },

    /// Structurally invalid builder parameters
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// The scene sink refused a mesh or object
    #[error("Scene sink failed: {message}")]
    Sink { message: String },

    /// Export target could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// Creates a non-finite coordinate error.
    pub fn non_finite(context: &'static str, point: DVec3) -> Self {
        Self::NonFinite { context, point }
    }

    /// Creates an invalid parameter error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a sink failure error.
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }
}
