use log::debug;

use crate::error::AlgebraError;
use crate::matrix::matrix::{concatenate, Matrix};
use crate::matrix::triangularize::Position;
use crate::rings::element::{Element, Field};
use crate::utils::power_by;

impl<T: Element> Matrix<T> {
    fn require_square(&self) -> Result<usize, AlgebraError> {
        if !self.is_square() {
            return Err(AlgebraError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.rows())
    }

    pub fn trace(&self) -> Result<T, AlgebraError> {
        let n = self.require_square()?;
        Ok((0..n).map(|i| self.at(i, i)).sum())
    }
}

impl<T: Field> Matrix<T> {
    /// Product of the diagonal after forward elimination on a copy.
    /// A column without a non-zero pivot candidate gives zero right away.
    pub fn determinant(&self) -> Result<T, AlgebraError> {
        let n = self.require_square()?;
        let mut a = self.copy();

        for j in 0..n.saturating_sub(1) {
            let Some(k) = (j..n).find(|&k| !a.at(k, j).is_zero()) else {
                debug!("determinant: zero column {}", j);
                return Ok(T::zero());
            };
            if k != j {
                a.add_row_into(k, j, j..n);
            }

            let pivot = a.at(j, j);
            for i in j + 1..n {
                let factor = a.at(i, j) / pivot.clone();
                a.sub_scaled_row(j, i, &factor, j..n);
            }
        }

        Ok((0..n).fold(T::one(), |acc, i| acc * a.at(i, i)))
    }

    /// Square with a non-zero determinant.
    pub fn is_invertible(&self) -> bool {
        self.determinant().map_or(false, |d| !d.is_zero())
    }

    /// Gauss-Jordan reduction of `[A | I]`; the right half is the inverse.
    pub fn inverse(&self) -> Result<Matrix<T>, AlgebraError> {
        let n = self.require_square()?;
        let mut aug = concatenate(self, &Matrix::identity(n)?, false)?;
        aug.triangularize_in_place(Position::Upper, None)?;

        for j in 0..n {
            let pivot = aug.at(j, j);
            if pivot.is_zero() {
                debug!("inverse: zero pivot at {}", j);
                return Err(AlgebraError::Singular { pivot: j });
            }
            aug.div_row(j, &pivot, j..2 * n);
            for i in 0..j {
                let factor = aug.at(i, j);
                aug.sub_scaled_row(j, i, &factor, j..2 * n);
            }
        }

        aug.submatrix(.., n..)
    }

    /// Integer power; negative exponents invert first.
    pub fn power(&self, p: i64) -> Result<Matrix<T>, AlgebraError> {
        let n = self.require_square()?;
        let base = if p < 0 { self.inverse()? } else { self.copy() };

        // shapes agree, so the products cannot fail
        let mul = |a: &Matrix<T>, b: &Matrix<T>| match a * b {
            Ok(c) => c,
            Err(_) => unreachable!("square matrices of the same size"),
        };
        Ok(power_by(&base, p.unsigned_abs(), Matrix::identity(n)?, mul))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
