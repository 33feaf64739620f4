//! # Linear algebra primitives
//!
//! An offset-indexed vector and an upper-triangular matrix built from it.

pub use error::Error;
pub use matrix::TriangularMatrix;
pub use vector::Sequence;

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

/// Largest number of values in a `Sequence`.
pub const MAX_SEQUENCE_SIZE: usize = 100_000_000;
/// Largest number of rows (and columns) of a `TriangularMatrix`.
pub const MAX_MATRIX_SIZE: usize = 10_000;
/// Length of a `Sequence`, and size of a `TriangularMatrix`, when created without specifying one.
pub const DEFAULT_LENGTH: usize = 10;
