//! # Traits for elements of vectors and matrices
//!
//! Two levels of requirements are distinguished:
//!
//! * The values stored at the bottom of a structure need to form something close to a ring: there
//! is an additive identity, and values can be added, subtracted and multiplied.
//! * Everything that can be combined element-wise, which includes the values themselves but also
//! vectors of them. Combining two vectors can fail when their shapes don't match, so this second
//! level is fallible.
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;
use relp_num::{Rational32, Rational64, RationalBig};

use crate::data::linear_algebra::error::Error;

/// Value stored in a `Sequence`.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Element:
    Clone +
    PartialEq +
    Debug +
    Zero + // Additive identity
    Add<Output=Self> +
    Sub<Output=Self> +
    Mul<Output=Self> +
{
}
impl<T> Element for T
where
    T: Clone + PartialEq + Debug + Zero + Add<Output=T> + Sub<Output=T> + Mul<Output=T>,
{
}

/// Values that can be added and subtracted pairwise.
///
/// For plain numbers this never fails. For containers, the shapes of both operands need to match
/// and the operation is applied recursively to the contained values.
pub trait ElementWise: Sized {
    /// Add `rhs` to `self`, creating a new value.
    ///
    /// # Errors
    ///
    /// `Error::ShapeMismatch` if the operands (or values nested inside of them) don't have the
    /// same length.
    fn try_add(&self, rhs: &Self) -> Result<Self, Error>;
    /// Subtract `rhs` from `self`, creating a new value.
    ///
    /// # Errors
    ///
    /// `Error::ShapeMismatch` if the operands (or values nested inside of them) don't have the
    /// same length.
    fn try_sub(&self, rhs: &Self) -> Result<Self, Error>;
}

macro_rules! element_wise_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl ElementWise for $t {
                fn try_add(&self, rhs: &Self) -> Result<Self, Error> {
                    Ok(self.clone() + rhs.clone())
                }

                fn try_sub(&self, rhs: &Self) -> Result<Self, Error> {
                    Ok(self.clone() - rhs.clone())
                }
            }
        )*
    };
}

element_wise_by_value!(i8, i16, i32, i64, i128, isize);
element_wise_by_value!(u8, u16, u32, u64, u128, usize);
element_wise_by_value!(f32, f64);
element_wise_by_value!(Rational32, Rational64, RationalBig);
