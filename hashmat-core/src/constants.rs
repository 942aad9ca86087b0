//! Scalar domain and table maintenance constants

/// Element type stored in the matrix
pub type Scalar = i64;

/// Value of every cell that has never been written
///
/// Writing `EMPTY` to a cell deletes it.
pub const EMPTY: Scalar = 0;

/// Smallest table capacity a store is ever created with
pub const MIN_CAPACITY: usize = 4;

/// Live density at which an insert doubles the table
pub const LOAD_RATIO_THRESHOLD: f64 = 0.75;

/// Tombstone density above which a delete compacts the table
pub const DELETED_RATIO_THRESHOLD: f64 = 0.33;
