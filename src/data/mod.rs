//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures; reading them from text lives in `io`.

pub mod linear_algebra;
