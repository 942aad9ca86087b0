//! Sparse matrix store backed by an open-addressing table
//!
//! [`SparseStore`] keeps only the non-empty cells of a `rows × cols`
//! integer matrix. Every write runs through [`SparseStore::put`], which
//! also decides when the table grows (live density reached the load
//! threshold) or compacts (tombstone density passed the deleted
//! threshold). Either rebuild costs O(capacity), so `put` is amortized
//! rather than worst-case O(1).

use crate::config::StoreConfig;
use crate::table::{Lookup, Table};
use hashmat_core::{
    initial_capacity, validate_dimension, validate_index, validate_position, MatrixError,
    MatrixOperations, Result, Scalar, SparseMatrix, SparseMatrixMut, TableStats, EMPTY,
};
use std::vec::Vec;

/// Sparse integer matrix with hashed (row, column) storage
#[derive(Debug, Clone)]
pub struct SparseStore {
    rows: usize,
    cols: usize,
    table: Table,
    config: StoreConfig,
    initial_capacity: usize,
}

impl SparseStore {
    /// Create an empty `rows × cols` store with the default configuration
    ///
    /// Fails with `InvalidDimension` if either dimension is zero, negative
    /// or too large to index.
    pub fn new<D: TryInto<usize>>(rows: D, cols: D) -> Result<Self> {
        Self::with_config(rows, cols, StoreConfig::default())
    }

    /// Create an empty `rows × cols` store with explicit maintenance parameters
    pub fn with_config<D: TryInto<usize>>(rows: D, cols: D, config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let rows = validate_dimension(rows)?;
        let cols = validate_dimension(cols)?;
        let capacity = initial_capacity(rows, cols, config.min_capacity)
            .ok_or(MatrixError::InvalidDimension)?;

        tracing::trace!(rows, cols, capacity, "created sparse store");

        Ok(Self {
            rows,
            cols,
            table: Table::with_capacity(capacity),
            config,
            initial_capacity: capacity,
        })
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Number of non-empty cells
    pub fn nnz(&self) -> usize {
        self.table.len()
    }

    /// Whether every cell is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current number of table slots
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Occupancy counters of the backing table
    pub fn stats(&self) -> TableStats {
        self.table.stats()
    }

    /// Maintenance parameters this store was built with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Read cell `(row, col)`, or [`EMPTY`] if it holds nothing
    pub fn get(&self, row: usize, col: usize) -> Result<Scalar> {
        validate_position(row, col, self.rows, self.cols)?;
        Ok(self.table.get(row, col).unwrap_or(EMPTY))
    }

    /// Write `value` to cell `(row, col)`
    ///
    /// Writing [`EMPTY`] deletes the cell and returns its previous value,
    /// or `EMPTY` if there was nothing to delete. Overwriting a cell
    /// returns its previous value. Filling an empty cell returns `value`.
    pub fn put(&mut self, row: usize, col: usize, value: Scalar) -> Result<Scalar> {
        validate_position(row, col, self.rows, self.cols)?;

        if value == EMPTY {
            return Ok(self.delete(row, col));
        }

        match self.table.locate(row, col) {
            Lookup::Found(index) => Ok(self.table.overwrite(index, value)),
            Lookup::Vacant(index) => {
                self.table.occupy(index, row, col, value);
                if self.table.stats().load_ratio() >= self.config.load_ratio_threshold {
                    self.grow();
                }
                Ok(value)
            }
            Lookup::Full => unreachable!(
                "no vacant slot among {} for ({row}, {col})",
                self.table.capacity()
            ),
        }
    }

    /// Write `value` to every cell of the main diagonal
    ///
    /// Fails with `NotSquare`, before writing anything, unless the store
    /// has as many rows as columns.
    pub fn set_main_diagonal(&mut self, value: Scalar) -> Result<()> {
        SparseMatrixMut::set_main_diagonal(self, value)
    }

    /// Every non-empty cell as `(row, col, value)`, ordered by row then column
    pub fn triples(&self) -> Vec<(usize, usize, Scalar)> {
        let mut triples: Vec<_> = self.table.entries().collect();
        triples.sort_unstable_by_key(|&(row, col, _)| (row, col));
        triples
    }

    /// Empty every cell and shrink the table back to its initial capacity
    pub fn clear(&mut self) {
        self.table = Table::with_capacity(self.initial_capacity);
    }

    fn delete(&mut self, row: usize, col: usize) -> Scalar {
        let Some(index) = self.table.find(row, col) else {
            return EMPTY;
        };
        let old = self.table.vacate(index);
        if self.table.stats().deleted_ratio() > self.config.deleted_ratio_threshold {
            self.table.compact();
        }
        old
    }

    fn grow(&mut self) {
        let live = self.table.len() as f64;
        let mut capacity = self.table.capacity();
        // A single doubling is enough unless the load threshold is tiny
        loop {
            capacity = match capacity.checked_mul(2) {
                Some(doubled) => doubled,
                None => panic!("sparse store capacity overflow"),
            };
            if live / (capacity as f64) < self.config.load_ratio_threshold {
                break;
            }
        }
        self.table.grow(capacity);
    }

    fn line(&self, select: impl Fn(usize, usize) -> Option<usize>) -> Vec<(usize, Scalar)> {
        let mut line: Vec<_> = self
            .table
            .entries()
            .filter_map(|(row, col, value)| select(row, col).map(|index| (index, value)))
            .collect();
        line.sort_unstable_by_key(|&(index, _)| index);
        line
    }
}

impl SparseMatrix for SparseStore {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn get(&self, row: usize, col: usize) -> Result<Scalar> {
        SparseStore::get(self, row, col)
    }

    fn nnz(&self) -> usize {
        SparseStore::nnz(self)
    }
}

impl SparseMatrixMut for SparseStore {
    fn put(&mut self, row: usize, col: usize, value: Scalar) -> Result<Scalar> {
        SparseStore::put(self, row, col, value)
    }
}

impl MatrixOperations for SparseStore {
    fn row(&self, row_index: usize) -> Result<Vec<(usize, Scalar)>> {
        validate_index(row_index, self.rows)?;
        Ok(self.line(|row, col| (row == row_index).then_some(col)))
    }

    fn column(&self, col_index: usize) -> Result<Vec<(usize, Scalar)>> {
        validate_index(col_index, self.cols)?;
        Ok(self.line(|row, col| (col == col_index).then_some(row)))
    }
}
