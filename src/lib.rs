//! # Offset-indexed vectors and upper-triangular matrices
//!
//! A `Sequence` is a fixed length vector whose indices start at an arbitrary offset. A
//! `TriangularMatrix` stores only the upper triangle of a square matrix: row `i` is a `Sequence`
//! of length `n - i` starting at index `i`.
//!
//! ```
//! use utmatrix::data::linear_algebra::TriangularMatrix;
//! use utmatrix::data::linear_algebra::traits::ElementWise;
//!
//! let mut a = TriangularMatrix::<i32>::new(3)?;
//! a[0][2] = 4;
//! a[2][2] = 1;
//! let sum = a.try_add(&a)?;
//! assert_eq!(sum.to_string(), "0 0 8\n0 0\n2\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![warn(missing_docs)]

pub mod data;
pub mod io;
