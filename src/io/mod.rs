//! # Reading of vectors and matrices
//!
//! The text format is minimal: values are separated by any amount of whitespace, including
//! newlines. The shape of the structure being read is known in advance, so no lengths are stored in
//! the input.
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::io::error::ReadError;

pub mod error;

/// Whitespace separated values read lazily, line by line, from a buffered reader.
///
/// A single `Tokens` instance can be shared between consecutive reads, such that for example all
/// rows of a matrix are read from the same stream without losing values that were on the same line.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    position: usize,
}

impl<R: BufRead> Tokens<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            position: 0,
        }
    }

    /// Number of values parsed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Parse the next token as a `T`.
    ///
    /// # Errors
    ///
    /// If the reader fails, runs out of tokens, or the token isn't a valid `T`.
    pub fn next_value<T: FromStr>(&mut self) -> Result<T, ReadError> {
        let token = self.next_token()?
            .ok_or(ReadError::UnexpectedEnd { position: self.position })?;
        let value = token.parse()
            .map_err(|_| ReadError::Parse { token, position: self.position })?;
        self.position += 1;

        Ok(value)
    }

    fn next_token(&mut self) -> Result<Option<String>, ReadError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }

        Ok(self.pending.pop_front())
    }
}
