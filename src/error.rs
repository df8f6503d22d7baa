//! Error types for matrix construction

use thiserror::Error;

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised when a matrix cannot be built from the given inputs
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MatrixError {
    /// Projection volume has no extent along some axis
    #[error("Invalid projection volume: {reason}")]
    InvalidVolume { reason: &'static str },

    /// Perspective clip planes must lie in front of the eye
    #[error("Invalid clip distance: near = {near}, far = {far} (both must be positive)")]
    InvalidDistance { near: f32, far: f32 },

    /// Too few operands for a matrix product
    #[error("Invalid argument count: expected at least {expected} matrices, got {actual}")]
    InvalidArgumentCount { expected: usize, actual: usize },

    /// Packed array does not hold a whole number of matrices
    #[error("Invalid packed length: {len} values is not a multiple of 16")]
    PackedLength { len: usize },

    /// Look-at direction is zero or parallel to the up vector
    #[error(
        "Degenerate view basis: eye and target coincide or up is parallel to the view direction"
    )]
    DegenerateBasis,
}
