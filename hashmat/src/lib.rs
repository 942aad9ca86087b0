//! hashmat - Sparse integer matrix on an open-addressing hash table
//!
//! This library stores the non-empty cells of a fixed-size integer matrix
//! in a power-of-two hash table keyed by (row, column), using triangular
//! probing, tombstone deletion, tombstone compaction and capacity doubling.
//!
//! ## Architecture
//!
//! - **hashmat-core**: scalar domain, errors, validation, hashing and probe
//!   arithmetic, and the abstract matrix traits (no_std, no allocation)
//! - **hashmat**: the table and the [`SparseStore`] built on it
//!
//! ## Quick Start
//!
//! ```rust
//! use hashmat::{SparseStore, EMPTY};
//!
//! fn example() -> hashmat::Result<()> {
//!     let mut matrix = SparseStore::new(4, 4)?;
//!     matrix.put(1, 2, 42)?;
//!     matrix.set_main_diagonal(7)?;
//!
//!     assert_eq!(matrix.get(1, 2)?, 42);
//!     assert_eq!(matrix.get(3, 3)?, 7);
//!     assert_eq!(matrix.get(0, 1)?, EMPTY);
//!
//!     // Writing EMPTY deletes the cell and returns what it held
//!     assert_eq!(matrix.put(1, 2, EMPTY)?, 42);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Cost model
//!
//! Reads are expected O(1). Writes are amortized O(1): any write may
//! trigger a rebuild of the whole table. A store is a single-owner value
//! with no internal synchronization.

// Re-export core abstractions
pub use hashmat_core::{
    // Core traits
    MatrixOperations, SparseMatrix, SparseMatrixMut,
    // Scalar domain
    Scalar, EMPTY,
    // Error handling
    MatrixError, Result,
    // Occupancy
    TableStats,
};

pub mod config;
mod slot;
pub mod store;
mod table;

pub use config::StoreConfig;
pub use store::SparseStore;
