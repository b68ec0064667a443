//! Error types for resampling operations.
//!
//! Per-voxel missing samples are not errors; they are carried by
//! [`SampledVolume`](crate::volume::SampledVolume). The variants here are the
//! failures a caller can act on.

use thiserror::Error;

/// Main error type for volume resampling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResampleError {
    /// The linear part of a transform is singular or non-finite.
    #[error("Invalid transform: {0}")]
    InvalidTransform(String),

    /// A requested volume size has a zero-length axis.
    #[error("Invalid dimensions: {dims:?}, every axis must be at least 1")]
    InvalidDimensions { dims: [usize; 3] },

    /// Mean fill was requested but every resampled voxel is missing.
    #[error("Empty result: no valid sample to compute a fill mean from")]
    EmptyResult,

    /// Voxel data length does not match the volume dimensions.
    #[error("Shape mismatch: expected {expected} samples, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Tensor data could not be converted into voxel values.
    #[error("Tensor conversion error: {0}")]
    TensorConversion(String),
}

/// Result type for resampling operations.
pub type Result<T> = std::result::Result<T, ResampleError>;

impl ResampleError {
    /// Create an invalid transform error.
    pub fn invalid_transform(msg: impl Into<String>) -> Self {
        Self::InvalidTransform(msg.into())
    }

    /// Create a tensor conversion error.
    pub fn tensor_conversion(msg: impl Into<String>) -> Self {
        Self::TensorConversion(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ResampleError::invalid_transform("singular");
        assert!(matches!(err, ResampleError::InvalidTransform(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ResampleError::invalid_transform("singular");
        assert_eq!(err.to_string(), "Invalid transform: singular");

        let err = ResampleError::InvalidDimensions { dims: [0, 4, 4] };
        assert!(err.to_string().contains("[0, 4, 4]"));
    }

    #[test]
    fn test_shape_mismatch() {
        let err = ResampleError::ShapeMismatch { expected: 64, actual: 63 };
        let err_str = err.to_string();
        assert!(err_str.contains("expected 64"));
        assert!(err_str.contains("got 63"));
    }
}
