//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use thiserror::Error;

/// Errors that can occur during mesh generation.
///
/// Every error is detected synchronously at the point of construction,
/// before any geometry is built. Out-of-domain parameters are rejected,
/// never clamped: a silently "fixed" dimension produces a plausible-looking
/// but dimensionally wrong part.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A numeric input violates its documented domain
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A profile has fewer than 3 distinct points
    #[error("Degenerate profile: {message}")]
    DegenerateProfile { message: String },

    /// Bevel parameters would self-intersect the extruded solid
    #[error("Invalid bevel: {message}")]
    InvalidBevelSpec { message: String },

    /// Segment or ring count below the minimum for a non-degenerate shape
    #[error("Unsupported segment count: {message}")]
    UnsupportedSegmentCount { message: String },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a degenerate profile error.
    pub fn degenerate_profile(message: impl Into<String>) -> Self {
        Self::DegenerateProfile {
            message: message.into(),
        }
    }

    /// Creates an invalid bevel error.
    pub fn invalid_bevel(message: impl Into<String>) -> Self {
        Self::InvalidBevelSpec {
            message: message.into(),
        }
    }

    /// Creates an unsupported segment count error.
    pub fn unsupported_segments(message: impl Into<String>) -> Self {
        Self::UnsupportedSegmentCount {
            message: message.into(),
        }
    }
}
