//! # Offset-indexed vector
//!
//! A `Sequence` wraps a `Vec` such that it has a fixed length, chosen at creation, and is indexed
//! starting at an arbitrary offset rather than at zero. All access is bounds-checked against that
//! offset.
//!
//! Sequences of sequences are sequences too; element-wise operations recurse into the nested
//! values through the `ElementWise` trait.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io::BufRead;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};
use std::str::FromStr;

use itertools::Itertools;
use num_traits::Zero;

use crate::data::linear_algebra::{DEFAULT_LENGTH, MAX_SEQUENCE_SIZE};
use crate::data::linear_algebra::error::Error;
use crate::data::linear_algebra::traits::{Element, ElementWise};
use crate::io::error::ReadError;
use crate::io::Tokens;

/// Fixed length vector with valid indices `[start_index, start_index + len)`.
///
/// Owns its values; cloning copies all of them.
#[derive(Debug, Eq, PartialEq)]
pub struct Sequence<T> {
    data: Vec<T>,
    start_index: usize,
}

impl<T> Sequence<T> {
    /// Create a vector filled with zeros.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of values, at least one and at most `MAX_SEQUENCE_SIZE`.
    /// * `start_index`: Index of the first value.
    ///
    /// # Errors
    ///
    /// `Error::InvalidLength` for a bad length, `Error::InvalidStartIndex` if the last index would
    /// not be representable.
    pub fn new(len: usize, start_index: usize) -> Result<Self, Error>
    where
        T: Zero + Clone,
    {
        Self::check_shape(len, start_index)?;

        Ok(Self { data: vec![T::zero(); len], start_index })
    }

    /// Wrap existing values.
    ///
    /// # Arguments
    ///
    /// * `values`: Values in index order, the first one will be at `start_index`.
    /// * `start_index`: Index of the first value.
    ///
    /// # Errors
    ///
    /// The same as those of `Sequence::new`, with the length being that of `values`.
    pub fn from_values(values: Vec<T>, start_index: usize) -> Result<Self, Error> {
        Self::check_shape(values.len(), start_index)?;

        Ok(Self { data: values, start_index })
    }

    fn check_shape(len: usize, start_index: usize) -> Result<(), Error> {
        if len == 0 || len > MAX_SEQUENCE_SIZE {
            Err(Error::InvalidLength { length: len, max: MAX_SEQUENCE_SIZE })
        } else if start_index.checked_add(len).is_none() {
            Err(Error::InvalidStartIndex { start_index, length: len })
        } else {
            Ok(())
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether there are no values; never the case for a successfully created vector.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Index of the first value.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Value at logical index `index`.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` if `index` is below the start index, or at or beyond the start
    /// index plus the length.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let position = self.position(index)?;
        Ok(&self.data[position])
    }

    /// Mutable value at logical index `index`.
    ///
    /// # Errors
    ///
    /// See `Sequence::get`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let position = self.position(index)?;
        Ok(&mut self.data[position])
    }

    fn position(&self, index: usize) -> Result<usize, Error> {
        index.checked_sub(self.start_index)
            .filter(|&position| position < self.data.len())
            .ok_or(Error::IndexOutOfRange {
                index,
                start_index: self.start_index,
                length: self.data.len(),
            })
    }

    /// Iterate over the values in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the values in index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// The values in index order; position `0` holds the value at the start index.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn map(&self, f: impl Fn(&T) -> T) -> Self {
        Self { data: self.data.iter().map(f).collect(), start_index: self.start_index }
    }

    fn check_same_len<S>(&self, other: &Sequence<S>) -> Result<(), Error> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(Error::ShapeMismatch { left: self.len(), right: other.len() })
        }
    }

    /// Overwrite all values with values read from `tokens`, in index order.
    ///
    /// Exactly `self.len()` values are consumed. When an error occurs, the values before the
    /// failing one have already been overwritten.
    ///
    /// # Errors
    ///
    /// If the tokens run out or one of them is not a valid `T`.
    pub fn read_from<R: BufRead>(&mut self, tokens: &mut Tokens<R>) -> Result<(), ReadError>
    where
        T: FromStr,
    {
        for value in &mut self.data {
            *value = tokens.next_value()?;
        }

        Ok(())
    }

    /// Overwrite all values with values read from a string.
    ///
    /// # Errors
    ///
    /// See `Sequence::read_from`.
    pub fn read_str(&mut self, text: &str) -> Result<(), ReadError>
    where
        T: FromStr,
    {
        self.read_from(&mut Tokens::new(text.as_bytes()))
    }
}

impl<T: Element> Sequence<T> {
    /// Add `value` to every element.
    pub fn add_scalar(&self, value: &T) -> Self {
        self.map(|v| v.clone() + value.clone())
    }

    /// Subtract `value` from every element.
    pub fn sub_scalar(&self, value: &T) -> Self {
        self.map(|v| v.clone() - value.clone())
    }

    /// Multiply every element with `value`.
    pub fn mul_scalar(&self, value: &T) -> Self {
        self.map(|v| v.clone() * value.clone())
    }

    /// Inner product.
    ///
    /// Start indices are not compared, values are matched by position.
    ///
    /// # Errors
    ///
    /// `Error::ShapeMismatch` if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<T, Error> {
        self.check_same_len(other)?;

        Ok(self.data.iter()
            .zip_eq(&other.data)
            .fold(T::zero(), |total, (left, right)| total + left.clone() * right.clone()))
    }
}

impl<T: Zero + Clone> Default for Sequence<T> {
    fn default() -> Self {
        Self { data: vec![T::zero(); DEFAULT_LENGTH], start_index: 0 }
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone(), start_index: self.start_index }
    }

    /// Take over the shape and values of `source`.
    ///
    /// Existing storage is reused when the lengths are equal.
    fn clone_from(&mut self, source: &Self) {
        if self.len() != source.len() {
            log::debug!("Reallocating sequence from length {} to {}", self.len(), source.len());
            self.data = source.data.clone();
        } else {
            self.data.clone_from_slice(&source.data);
        }
        self.start_index = source.start_index;
    }
}

impl<T: ElementWise> ElementWise for Sequence<T> {
    /// Pairwise sum, with the start index of `self`.
    fn try_add(&self, rhs: &Self) -> Result<Self, Error> {
        self.combine(rhs, T::try_add)
    }

    /// Pairwise difference, with the start index of `self`.
    fn try_sub(&self, rhs: &Self) -> Result<Self, Error> {
        self.combine(rhs, T::try_sub)
    }
}

impl<T: ElementWise> Sequence<T> {
    fn combine(
        &self,
        rhs: &Self,
        operation: impl Fn(&T, &T) -> Result<T, Error>,
    ) -> Result<Self, Error> {
        self.check_same_len(rhs)?;

        let data = self.data.iter()
            .zip_eq(&rhs.data)
            .map(|(left, right)| operation(left, right))
            .collect::<Result<_, _>>()?;

        Ok(Self { data, start_index: self.start_index })
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    /// # Panics
    ///
    /// If `index` is out of range, see `Sequence::get` for a fallible version.
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    /// # Panics
    ///
    /// If `index` is out of range, see `Sequence::get_mut` for a fallible version.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Element> Add<T> for &Sequence<T> {
    type Output = Sequence<T>;

    fn add(self, rhs: T) -> Self::Output {
        self.add_scalar(&rhs)
    }
}

impl<T: Element> Sub<T> for &Sequence<T> {
    type Output = Sequence<T>;

    fn sub(self, rhs: T) -> Self::Output {
        self.sub_scalar(&rhs)
    }
}

impl<T: Element> Mul<T> for &Sequence<T> {
    type Output = Sequence<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.mul_scalar(&rhs)
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Values separated by a single space, without a trailing newline.
impl<T: Display> Display for Sequence<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().format(" "))
    }
}
