use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Magnitude and tolerance of a numeric element.
pub trait Tolerance: Sized {
    /// Absolute value.
    fn magnitude(&self) -> Self;

    /// Largest magnitude treated as zero by the tolerant comparisons.
    /// Exact types return zero.
    fn epsilon() -> Self;

    /// The element representing the integer `n`.
    fn from_count(n: usize) -> Self;
}

pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
    + Tolerance
{
    /// Magnitude not above `tol`.
    fn is_negligible_within(&self, tol: &Self) -> bool {
        self.magnitude() <= *tol
    }

    /// Magnitude not above the element epsilon.
    fn is_negligible(&self) -> bool {
        self.is_negligible_within(&Self::epsilon())
    }
}

impl<T> Element for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::fmt::Debug
        + Tolerance
{
}

/// Elements with exact division, as needed by the elimination routines.
/// Integer types are excluded since their division truncates.
///
/// ```compile_fail
/// use rust_linalg::matrix::matrix::Matrix;
///
/// let a = Matrix::<i64>::from_list(vec![vec![2, 1], vec![3, 1]]).unwrap();
/// let _ = a.determinant();
/// ```
pub trait Field: Element {}

impl Field for f64 {}
impl Field for f32 {}

macro_rules! impl_tolerance_float {
    ($type:ty, $eps:expr) => {
        impl Tolerance for $type {
            fn magnitude(&self) -> $type {
                self.abs()
            }

            fn epsilon() -> $type {
                $eps
            }

            fn from_count(n: usize) -> $type {
                n as $type
            }
        }
    };
}

macro_rules! impl_tolerance_int {
    ($type:ty) => {
        impl Tolerance for $type {
            fn magnitude(&self) -> $type {
                self.abs()
            }

            fn epsilon() -> $type {
                0
            }

            fn from_count(n: usize) -> $type {
                n as $type
            }
        }
    };
}

impl_tolerance_float!(f64, 1e-10);
impl_tolerance_float!(f32, 1e-5);
impl_tolerance_int!(i32);
impl_tolerance_int!(i64);

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negligible() {
        assert!(1e-12f64.is_negligible());
        assert!((-1e-12f64).is_negligible());
        assert!(!1e-3f64.is_negligible());
        assert!(1e-3f64.is_negligible_within(&1e-2));

        assert!(0i64.is_negligible());
        assert!(!(-1i64).is_negligible());
        assert_eq!(<i32 as Tolerance>::from_count(7), 7);
    }
}
