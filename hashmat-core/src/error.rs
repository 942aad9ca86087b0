//! Error types for sparse matrix store operations

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A row or column count that is not strictly positive
    InvalidDimension,
    /// Row or column index outside the matrix dimensions
    OutOfRange,
    /// Operation requires a square matrix
    NotSquare,
    /// Store configuration violates a threshold or capacity constraint
    InvalidConfig,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MatrixError::InvalidDimension => "Matrix dimensions must be strictly positive",
            MatrixError::OutOfRange => "Index out of range",
            MatrixError::NotSquare => "Matrix is not square",
            MatrixError::InvalidConfig => "Invalid store configuration",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

