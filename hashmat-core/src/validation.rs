//! Dimension and index validation for sparse matrix stores
//!
//! Pure checks with no allocation. Every store operation runs these
//! before touching its table, so a failed check never mutates state.

use crate::MatrixError;

/// Validate a requested dimension and convert it to `usize`
///
/// Accepts any integer type; zero, negative and unrepresentable values
/// are rejected with `InvalidDimension`.
pub fn validate_dimension<D: TryInto<usize>>(dimension: D) -> Result<usize, MatrixError> {
    match dimension.try_into() {
        Ok(0) | Err(_) => Err(MatrixError::InvalidDimension),
        Ok(n) => Ok(n),
    }
}

/// Validate a (row, column) position against matrix dimensions
pub const fn validate_position(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<(), MatrixError> {
    if row >= rows || col >= cols {
        return Err(MatrixError::OutOfRange);
    }
    Ok(())
}

/// Validate a single index against one dimension
pub const fn validate_index(index: usize, bound: usize) -> Result<(), MatrixError> {
    if index >= bound {
        return Err(MatrixError::OutOfRange);
    }
    Ok(())
}

/// Validate that a matrix has a main diagonal
pub const fn validate_square(rows: usize, cols: usize) -> Result<(), MatrixError> {
    if rows != cols {
        return Err(MatrixError::NotSquare);
    }
    Ok(())
}

/// Validate a density threshold, which must lie strictly between 0 and 1
pub fn validate_ratio(ratio: f64) -> Result<f64, MatrixError> {
    if ratio > 0.0 && ratio < 1.0 {
        Ok(ratio)
    } else {
        Err(MatrixError::InvalidConfig)
    }
}
