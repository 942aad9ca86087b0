//! Abstract interfaces for sparse matrix stores
//!
//! Traits are pure interfaces; the only provided behaviour is built on
//! top of the required methods.

pub mod matrix;

pub use matrix::{SparseMatrix, SparseMatrixMut};
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
