//! Error types for sphere-mesh.
//!
//! Errors fall into two families. Configuration errors mean the caller asked
//! for something that has no valid sphere mesh (too few circles, a
//! non-positive radius). Internal consistency errors mean the generator
//! produced a node or element count that disagrees with the closed-form
//! formula; they indicate a defect in the index arithmetic and are never
//! corrected silently. The remaining variants belong to the file writers.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while generating or writing a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },

    /// A generated quantity disagrees with its closed-form value.
    #[error("internal consistency error: {what} is {actual}, expected {expected}")]
    InternalConsistency {
        /// What was counted or checked.
        what: &'static str,
        /// The value required by the closed-form formula.
        expected: usize,
        /// The value actually produced.
        actual: usize,
    },

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has duplicate vertex indices (degenerate triangle).
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error saving mesh to file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Create an internal consistency error.
    pub fn inconsistent(what: &'static str, expected: usize, actual: usize) -> Self {
        MeshError::InternalConsistency {
            what,
            expected,
            actual,
        }
    }

    /// Whether this error was caused by invalid user input.
    pub fn is_configuration(&self) -> bool {
        matches!(self, MeshError::InvalidParameter { .. })
    }

    /// Whether this error signals a defect in mesh construction itself.
    pub fn is_internal(&self) -> bool {
        matches!(self, MeshError::InternalConsistency { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_message() {
        let err = MeshError::invalid_param("num_points_per_circle", 2, "must be at least 3");
        assert!(err.is_configuration());
        assert!(!err.is_internal());
        assert_eq!(
            err.to_string(),
            "invalid parameter: num_points_per_circle = 2 (must be at least 3)"
        );
    }

    #[test]
    fn test_inconsistent_message() {
        let err = MeshError::inconsistent("element count", 16, 15);
        assert!(err.is_internal());
        assert!(!err.is_configuration());
        assert_eq!(
            err.to_string(),
            "internal consistency error: element count is 15, expected 16"
        );
    }
}
