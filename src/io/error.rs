//! # Error reporting for reading of vectors and matrices
//!
//! Reading stops at the first problem; the error describes where in the token stream it occurred.
use std::io;

use thiserror::Error;

/// A `ReadError` is created when values couldn't be read into an existing vector or matrix.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
    /// The input ran out of tokens before the structure was filled.
    ///
    /// The contained `position` is the number of tokens that were successfully read.
    #[error("unexpected end of input after {position} values")]
    UnexpectedEnd {
        /// Number of tokens read before the input ended.
        position: usize,
    },
    /// A token could not be parsed as the element type.
    #[error("could not parse \"{token}\" (value {position}) as an element")]
    Parse {
        /// The offending token.
        token: String,
        /// Zero-based index of the token in the stream.
        position: usize,
    },
}
