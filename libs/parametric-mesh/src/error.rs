//! # Mesh Errors
//!
//! Error types for surface sampling and geometry capture.

use thiserror::Error;

/// Errors that can occur during surface sampling and capture.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A sampler parameter is out of its valid domain
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A cap plane is parallel to the fixed projection axis
    #[error("Singular projection: {message}")]
    SingularProjection { message: String },

    /// A recorder operation was issued in the wrong capture state
    #[error("Capture state: {message}")]
    CaptureState { message: String },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a singular projection error.
    pub fn singular_projection(message: impl Into<String>) -> Self {
        Self::SingularProjection {
            message: message.into(),
        }
    }

    /// Creates a capture state error.
    pub fn capture_state(message: impl Into<String>) -> Self {
        Self::CaptureState {
            message: message.into(),
        }
    }
}
