//! Error types for mosaic-transform

use thiserror::Error;

/// Errors that can occur during estimation, warping, or stitching
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] mosaic_core::Error),

    /// Singular matrix (non-invertible)
    ///
    /// Estimation reports this for degenerate correspondences (collinear
    /// or duplicate points); inversion reports it for rank-deficient
    /// homographies.
    #[error("singular transformation matrix")]
    SingularMatrix,

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
