//! Centralized error handling for rorca
//!
//! This module provides structured error types so that every failure carries
//! the offending dimension or variable name, enabling callers to diagnose
//! malformed model output without digging through generic error strings.

use std::fmt;

/// Main error type for rorca operations
#[derive(Debug)]
pub enum RorcaError {
    /// A required dimension is missing from the dataset
    MissingDimension { dim: String },

    /// A dimension exists but is too short for the requested operation
    DimensionTooShort {
        dim: String,
        len: usize,
        required: usize,
    },

    /// Variable or coordinate not found in the dataset
    VariableNotFound { var: String },

    /// A variable's extent along a dimension disagrees with the dataset
    ExtentMismatch {
        var: String,
        dim: String,
        expected: usize,
        actual: usize,
    },

    /// A variable's array rank does not match its dimension list
    RankMismatch {
        var: String,
        listed: usize,
        actual: usize,
    },

    /// A source variable carries a non-singleton dimension the target has no use for
    UnexpectedDims { var: String, dim: String, len: usize },

    /// Mesh-mask variables match none of the known schema variants
    UnknownMeshMaskSchema { probed: Vec<String> },

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Generic error for anything without a dedicated variant
    Generic(String),
}

impl fmt::Display for RorcaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RorcaError::MissingDimension { dim } => {
                write!(f, "Required dimension '{}' not found in dataset", dim)
            }
            RorcaError::DimensionTooShort { dim, len, required } => write!(
                f,
                "Dimension '{}' has extent {} but at least {} is required",
                dim, len, required
            ),
            RorcaError::VariableNotFound { var } => {
                write!(f, "Variable '{}' not found in dataset", var)
            }
            RorcaError::ExtentMismatch {
                var,
                dim,
                expected,
                actual,
            } => write!(
                f,
                "Variable '{}' has extent {} along '{}' but the dataset registers {}",
                var, actual, dim, expected
            ),
            RorcaError::RankMismatch { var, listed, actual } => write!(
                f,
                "Variable '{}' lists {} dimension(s) but its array has rank {}",
                var, listed, actual
            ),
            RorcaError::UnexpectedDims { var, dim, len } => write!(
                f,
                "Variable '{}' has unexpected non-singleton dimension '{}' of extent {}",
                var, dim, len
            ),
            RorcaError::UnknownMeshMaskSchema { probed } => write!(
                f,
                "Mesh mask matches no known schema; probed for variables [{}]",
                probed.join(", ")
            ),
            RorcaError::ArrayError(e) => write!(f, "Array error: {}", e),
            RorcaError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RorcaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RorcaError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ndarray::ShapeError> for RorcaError {
    fn from(error: ndarray::ShapeError) -> Self {
        RorcaError::ArrayError(error)
    }
}

impl From<String> for RorcaError {
    fn from(error: String) -> Self {
        RorcaError::Generic(error)
    }
}

impl From<&str> for RorcaError {
    fn from(error: &str) -> Self {
        RorcaError::Generic(error.to_string())
    }
}

/// Result type alias for rorca operations
pub type Result<T> = std::result::Result<T, RorcaError>;
