//! # Errors of the linear algebra primitives
//!
//! Every violated precondition of a vector or matrix operation is reported with one of the
//! variants below, carrying the values that caused it.
use thiserror::Error;

/// Problems encountered while creating, indexing or combining vectors and matrices.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum Error {
    /// A length (or, for matrices, a number of rows) is zero or exceeds the capacity ceiling.
    #[error("invalid length {length}, should be between 1 and {max}")]
    InvalidLength {
        /// The length that was requested.
        length: usize,
        /// Largest length allowed for this kind of structure.
        max: usize,
    },
    /// The start index is so large that not all logical indices can be represented.
    #[error("invalid start index {start_index} for a vector of length {length}")]
    InvalidStartIndex {
        /// The start index that was requested.
        start_index: usize,
        /// Length of the vector that was requested.
        length: usize,
    },
    /// An index falls outside of `[start_index, start_index + length)`.
    #[error("index {index} out of range for start index {start_index} and length {length}")]
    IndexOutOfRange {
        /// The index that was accessed.
        index: usize,
        /// First valid index.
        start_index: usize,
        /// Number of valid indices.
        length: usize,
    },
    /// Operands of an element-wise operation have different lengths.
    #[error("shapes don't match: length {left} versus length {right}")]
    ShapeMismatch {
        /// Length of the left-hand side.
        left: usize,
        /// Length of the right-hand side.
        right: usize,
    },
}
