//! Custom error types for projection handling

use std::fmt;

/// Projection-specific error types
#[derive(Debug)]
pub enum ProjError {
    /// A projection definition could not be constructed from an identifier
    UnresolvableProjection(String, String),
    /// Geometry shape tag outside the supported set
    UnsupportedGeometryKind(String),
    /// Identifier rejected by strict normalization
    InvalidIdentifier(String),
    /// The general projection capability failed on a point
    TransformFailed(String),
}

impl fmt::Display for ProjError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjError::UnresolvableProjection(id, detail) =>
                write!(f, "Unresolvable projection {}: {}", id, detail),
            ProjError::UnsupportedGeometryKind(kind) =>
                write!(f, "Unsupported geometry kind: {}", kind),
            ProjError::InvalidIdentifier(raw) =>
                write!(f, "Invalid projection identifier: {}", raw),
            ProjError::TransformFailed(detail) =>
                write!(f, "Coordinate transform failed: {}", detail),
        }
    }
}

impl std::error::Error for ProjError {}

/// Result type for projection operations
pub type ProjResult<T> = Result<T, ProjError>;
