//! # Upper-triangular matrix
//!
//! Only the values on and above the diagonal are stored. The matrix is a `Sequence` of rows where
//! row `i` is itself a `Sequence` of length `n - i` starting at index `i`. Column indices are
//! therefore the same as they would be in a full square matrix, but accessing a value below the
//! diagonal is an indexing error.
//!
//! Comparison, assignment, addition and subtraction are those of the row `Sequence`.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io::BufRead;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use num_traits::Zero;

use crate::data::linear_algebra::{DEFAULT_LENGTH, MAX_MATRIX_SIZE};
use crate::data::linear_algebra::error::Error;
use crate::data::linear_algebra::traits::ElementWise;
use crate::data::linear_algebra::vector::Sequence;
use crate::io::error::ReadError;
use crate::io::Tokens;

/// Square matrix of which only the upper triangle, including the diagonal, is represented.
#[derive(Debug)]
pub struct TriangularMatrix<T> {
    rows: Sequence<Sequence<T>>,
}

impl<T> TriangularMatrix<T> {
    /// Create a matrix filled with zeros.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of rows and columns, at least one and at most `MAX_MATRIX_SIZE`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidLength` if the size is out of range.
    pub fn new(size: usize) -> Result<Self, Error>
    where
        T: Zero + Clone,
    {
        if size == 0 || size > MAX_MATRIX_SIZE {
            return Err(Error::InvalidLength { length: size, max: MAX_MATRIX_SIZE });
        }

        let rows = (0..size)
            .map(|i| Sequence::new(size - i, i))
            .collect::<Result<Vec<_>, _>>()?;
        log::trace!("Created triangular matrix of size {}", size);

        Ok(Self { rows: Sequence::from_values(rows, 0)? })
    }

    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Row `i`, with valid indices `i..size`.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` if there is no row `i`.
    pub fn row(&self, i: usize) -> Result<&Sequence<T>, Error> {
        self.rows.get(i)
    }

    /// Mutable row `i`.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` if there is no row `i`.
    pub fn row_mut(&mut self, i: usize) -> Result<&mut Sequence<T>, Error> {
        self.rows.get_mut(i)
    }

    /// Value at coordinate (`i`, `j`).
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` if there is no row `i` or if `j` is not a column of that row, which
    /// includes all `j < i`.
    pub fn get(&self, i: usize, j: usize) -> Result<&T, Error> {
        self.rows.get(i)?.get(j)
    }

    /// Mutable value at coordinate (`i`, `j`).
    ///
    /// # Errors
    ///
    /// See `TriangularMatrix::get`.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T, Error> {
        self.rows.get_mut(i)?.get_mut(j)
    }

    /// Whether the rows follow the triangular pattern.
    ///
    /// This always holds for matrices created with `TriangularMatrix::new`, but not necessarily for
    /// those converted from an arbitrary `Sequence` of rows.
    pub fn is_upper_triangular(&self) -> bool {
        let size = self.size();

        self.rows.start_index() == 0 && self.rows.iter()
            .enumerate()
            .all(|(i, row)| row.start_index() == i && row.len() == size - i)
    }

    /// Give up the matrix structure.
    pub fn into_rows(self) -> Sequence<Sequence<T>> {
        self.rows
    }

    /// Overwrite all values with values read from `tokens`, row by row.
    ///
    /// # Errors
    ///
    /// If the tokens run out or one of them is not a valid `T`.
    pub fn read_from<R: BufRead>(&mut self, tokens: &mut Tokens<R>) -> Result<(), ReadError>
    where
        T: FromStr,
    {
        for row in self.rows.iter_mut() {
            row.read_from(tokens)?;
        }

        Ok(())
    }

    /// Overwrite all values with values read from a string.
    ///
    /// # Errors
    ///
    /// See `TriangularMatrix::read_from`.
    pub fn read_str(&mut self, text: &str) -> Result<(), ReadError>
    where
        T: FromStr,
    {
        self.read_from(&mut Tokens::new(text.as_bytes()))
    }
}

/// Rows are used as they are, their shapes are not checked.
impl<T> From<Sequence<Sequence<T>>> for TriangularMatrix<T> {
    fn from(rows: Sequence<Sequence<T>>) -> Self {
        Self { rows }
    }
}

impl<T: Zero + Clone> Default for TriangularMatrix<T> {
    fn default() -> Self {
        match Self::new(DEFAULT_LENGTH) {
            Ok(matrix) => matrix,
            Err(error) => unreachable!("default size should be valid: {}", error),
        }
    }
}

impl<T: Clone> Clone for TriangularMatrix<T> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<T: PartialEq> PartialEq for TriangularMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.rows.iter().eq(other.rows.iter())
    }
}

impl<T: Eq> Eq for TriangularMatrix<T> {}

impl<T: ElementWise> ElementWise for TriangularMatrix<T> {
    fn try_add(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(Self { rows: self.rows.try_add(&rhs.rows)? })
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(Self { rows: self.rows.try_sub(&rhs.rows)? })
    }
}

impl<T> Index<usize> for TriangularMatrix<T> {
    type Output = Sequence<T>;

    /// # Panics
    ///
    /// If there is no row `i`, see `TriangularMatrix::row` for a fallible version.
    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}

impl<T> IndexMut<usize> for TriangularMatrix<T> {
    /// # Panics
    ///
    /// If there is no row `i`, see `TriangularMatrix::row_mut` for a fallible version.
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.rows[i]
    }
}

/// One row per line, each followed by a newline.
impl<T: Display> Display for TriangularMatrix<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use relp_num::RB;
    use relp_num::RationalBig;

    use crate::data::linear_algebra::{MAX_MATRIX_SIZE, Sequence};
    use crate::data::linear_algebra::error::Error;
    use crate::data::linear_algebra::matrix::TriangularMatrix;
    use crate::data::linear_algebra::traits::ElementWise;

    fn constant(size: usize, value: i32) -> TriangularMatrix<i32> {
        let mut m = TriangularMatrix::new(size).unwrap();
        for i in 0..size {
            for j in i..size {
                m[i][j] = value;
            }
        }
        m
    }

    #[test]
    fn new() {
        let m = TriangularMatrix::<i32>::new(4).unwrap();
        assert_eq!(m.size(), 4);
        assert!(m.is_upper_triangular());
        for i in 0..4 {
            let row = m.row(i).unwrap();
            assert_eq!(row.len(), 4 - i);
            assert_eq!(row.start_index(), i);
            for j in i..4 {
                assert_eq!(m.get(i, j), Ok(&0));
            }
        }

        assert_eq!(TriangularMatrix::<i32>::default().size(), 10);
    }

    #[test]
    fn new_invalid_size() {
        assert_eq!(
            TriangularMatrix::<i32>::new(0),
            Err(Error::InvalidLength { length: 0, max: MAX_MATRIX_SIZE }),
        );
        assert_eq!(
            TriangularMatrix::<i32>::new(MAX_MATRIX_SIZE + 1),
            Err(Error::InvalidLength { length: MAX_MATRIX_SIZE + 1, max: MAX_MATRIX_SIZE }),
        );
    }

    #[test]
    fn get_set() {
        let mut m = TriangularMatrix::<i32>::new(4).unwrap();
        m[0][0] = 4;
        assert_eq!(m[0][0], 4);
        *m.get_mut(2, 3).unwrap() = 5;
        assert_eq!(m.get(2, 3), Ok(&5));
        m.row_mut(1).unwrap()[1] = 6;
        assert_eq!(m.to_string(), "4 0 0 0\n6 0 0\n0 5\n0\n");
    }

    #[test]
    fn out_of_bounds() {
        let mut m = TriangularMatrix::<i32>::new(4).unwrap();
        // Below the diagonal
        assert_eq!(m.get(2, 1), Err(Error::IndexOutOfRange { index: 1, start_index: 2, length: 2 }));
        // Beyond the last column
        assert_eq!(m.get(2, 4), Err(Error::IndexOutOfRange { index: 4, start_index: 2, length: 2 }));
        // No such row
        assert!(m.row(4).is_err());
        assert!(m.get_mut(4, 4).is_err());

        let mut m = TriangularMatrix::<i32>::new(1).unwrap();
        assert!(m.get_mut(0, 1).is_err());
    }

    #[test]
    #[should_panic]
    fn index_below_diagonal() {
        let mut m = TriangularMatrix::<i32>::new(3).unwrap();
        m[1][0] = 1;
    }

    #[test]
    fn clone_has_own_memory() {
        let m = constant(5, 1);
        let mut copy = m.clone();
        assert_eq!(copy, m);
        assert_ne!(&copy[0][0] as *const i32, &m[0][0] as *const i32);

        copy[3][4] = 8;
        assert_eq!(m[3][4], 1);
        assert_ne!(copy, m);
    }

    #[test]
    fn clone_from_equal_size() {
        let mut m = TriangularMatrix::<i32>::new(4).unwrap();
        let source = constant(4, 3);
        m.clone_from(&source);
        assert_eq!(m, source);
    }

    #[test]
    fn clone_from_different_size() {
        let mut m = TriangularMatrix::<i32>::new(4).unwrap();
        let source = constant(5, 2);
        m.clone_from(&source);
        assert_eq!(m.size(), 5);
        assert!(m.is_upper_triangular());
        assert_eq!(m, source);

        let mut m = constant(5, 2);
        m.clone_from(&constant(2, 7));
        assert_eq!(m.size(), 2);
        assert_eq!(m.to_string(), "7 7\n7\n");
    }

    #[test]
    fn equality() {
        let m = constant(4, 1);
        assert_eq!(m, m);
        assert_eq!(m, constant(4, 1));
        assert_ne!(m, constant(4, 2));
        assert_ne!(TriangularMatrix::<i32>::new(4).unwrap(), TriangularMatrix::new(5).unwrap());
        assert_ne!(TriangularMatrix::<i32>::new(5).unwrap(), TriangularMatrix::new(4).unwrap());
    }

    #[test]
    fn add_sub() {
        let ones = constant(5, 1);
        let twos = constant(5, 2);
        assert_eq!(twos.try_add(&ones), Ok(constant(5, 3)));
        assert_eq!(twos.try_sub(&ones), Ok(constant(5, 1)));
        // Operands are not changed
        assert_eq!(twos, constant(5, 2));
    }

    #[test]
    fn add_sub_mismatch() {
        let small = TriangularMatrix::<i32>::new(4).unwrap();
        let large = TriangularMatrix::<i32>::new(5).unwrap();
        assert_eq!(small.try_add(&large), Err(Error::ShapeMismatch { left: 4, right: 5 }));
        assert_eq!(large.try_sub(&small), Err(Error::ShapeMismatch { left: 5, right: 4 }));
    }

    #[test]
    fn rationals() {
        let mut m = TriangularMatrix::<RationalBig>::new(2).unwrap();
        m[0][1] = RB!(1, 3);
        m[1][1] = RB!(-2);
        let doubled = m.try_add(&m).unwrap();
        assert_eq!(doubled.get(0, 1), Ok(&RB!(2, 3)));
        assert_eq!(doubled.try_sub(&m), Ok(m));
    }

    #[test]
    fn from_rows() {
        let rows = Sequence::from_values(vec![
            Sequence::from_values(vec![1, 2], 0).unwrap(),
            Sequence::from_values(vec![3], 1).unwrap(),
        ], 0).unwrap();
        let m = TriangularMatrix::from(rows.clone());
        assert!(m.is_upper_triangular());
        assert_eq!(m.to_string(), "1 2\n3\n");
        assert_eq!(m.into_rows(), rows);

        // Shapes are taken as they are
        let rows = Sequence::from_values(vec![
            Sequence::from_values(vec![1, 2, 3], 0).unwrap(),
            Sequence::from_values(vec![4], 0).unwrap(),
        ], 0).unwrap();
        let m = TriangularMatrix::from(rows);
        assert!(!m.is_upper_triangular());
        assert_eq!(m.get(1, 0), Ok(&4));
        assert!(m.get(1, 1).is_err());
    }

    #[test]
    fn read() {
        let mut m = TriangularMatrix::<i32>::new(3).unwrap();
        m.read_str("1 2 3\n4 5\n6").unwrap();
        assert_eq!(m.to_string(), "1 2 3\n4 5\n6\n");

        // Rows don't need to be on their own line
        let mut other = TriangularMatrix::<i32>::new(3).unwrap();
        other.read_str("1 2 3 4 5 6").unwrap();
        assert_eq!(other, m);

        assert!(other.read_str("1 2 3\n4 5").is_err());
    }
}
