//! Core matrix abstraction traits
//!
//! These traits describe a logical `rows × cols` grid of [`Scalar`]
//! values in which every cell that was never written reads as [`EMPTY`].

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::{validate_square, Result, Scalar, EMPTY};

/// Read access to a sparse matrix
pub trait SparseMatrix {
    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get the element at the specified position
    ///
    /// Returns [`EMPTY`] for cells that hold no data and `OutOfRange`
    /// if the position lies outside the matrix.
    fn get(&self, row: usize, col: usize) -> Result<Scalar>;

    /// Get number of non-empty elements stored
    fn nnz(&self) -> usize;
}

/// Write access to a sparse matrix
pub trait SparseMatrixMut: SparseMatrix {
    /// Write `value` at the specified position
    ///
    /// Writing [`EMPTY`] deletes the cell. Returns the value previously
    /// held by an overwritten or deleted cell, `EMPTY` when deleting a
    /// cell that held nothing, and `value` itself when a fresh cell is
    /// written.
    fn put(&mut self, row: usize, col: usize, value: Scalar) -> Result<Scalar>;

    /// Write `value` to every cell of the main diagonal, top to bottom
    ///
    /// Fails with `NotSquare` before any write if rows and columns differ.
    fn set_main_diagonal(&mut self, value: Scalar) -> Result<()> {
        let (rows, cols) = self.dimensions();
        validate_square(rows, cols)?;
        for k in 0..rows {
            self.put(k, k, value)?;
        }
        Ok(())
    }

    /// Delete the element at the specified position, returning its value
    fn remove(&mut self, row: usize, col: usize) -> Result<Scalar> {
        self.put(row, col, EMPTY)
    }
}

/// Extension trait for row/column operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Get all non-empty `(col, value)` pairs in a row, in column order
    fn row(&self, row_index: usize) -> Result<Vec<(usize, Scalar)>>;

    /// Get all non-empty `(row, value)` pairs in a column, in row order
    fn column(&self, col_index: usize) -> Result<Vec<(usize, Scalar)>>;
}
