#![cfg_attr(not(test), no_std)]

//! hashmat core - sparse matrix store definitions
//!
//! This crate provides the scalar domain, error type, validation, and the
//! hashing and probing arithmetic shared by open-addressing sparse matrix
//! stores. Nothing here allocates unless the `alloc` feature is enabled.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod constants;
pub mod error;
pub mod probe;
pub mod stats;
pub mod traits;
pub mod validation;

pub use constants::*;
pub use error::*;
pub use probe::{hash_position, initial_capacity, ProbeSequence};
pub use stats::TableStats;
pub use traits::*;
pub use validation::*;
