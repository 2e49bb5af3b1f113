use log::trace;
use std::ops::Range;
use std::str::FromStr;

use crate::error::AlgebraError;
use crate::matrix::matrix::Matrix;
use crate::rings::element::Field;

/// Which triangle is kept by [`Matrix::triangularize_in_place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Zeros below the diagonal.
    #[default]
    Upper,
    /// Zeros above the diagonal, which is aligned to the bottom-right corner.
    Lower,
}

impl FromStr for Position {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, AlgebraError> {
        match s {
            "upper" => Ok(Position::Upper),
            "lower" => Ok(Position::Lower),
            _ => Err(AlgebraError::InvalidArgument(format!(
                "'pos' must be 'upper' or 'lower', got {:?}",
                s
            ))),
        }
    }
}

/// Rectangular region of a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl Bounds {
    pub fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Bounds { rows, cols }
    }

    fn check(&self, shape: (usize, usize)) -> Result<(), AlgebraError> {
        let fits = |r: &Range<usize>, len: usize| r.start < r.end && r.end <= len;
        if fits(&self.rows, shape.0) && fits(&self.cols, shape.1) {
            Ok(())
        } else {
            Err(AlgebraError::Bounds {
                rows: self.rows.clone(),
                cols: self.cols.clone(),
                shape,
            })
        }
    }
}

impl<T: Field> Matrix<T> {
    /// Reduces the matrix, or the region `bounds`, to triangular form in place.
    ///
    /// A zero pivot is fixed by adding into the pivot row the first row (in the
    /// processing direction) with a non-zero entry in the pivot column. When
    /// there is none the pivot is skipped. Cells outside `bounds` are left
    /// untouched.
    pub fn triangularize_in_place(
        &mut self,
        pos: Position,
        bounds: Option<Bounds>,
    ) -> Result<(), AlgebraError> {
        let bounds = match bounds {
            Some(b) => {
                b.check(self.shape())?;
                b
            }
            None => Bounds::new(0..self.rows(), 0..self.cols()),
        };

        let Bounds { rows, cols } = bounds;
        let pivots = (rows.len() - 1).min(cols.len());

        for t in 0..pivots {
            let (pivot_row, pivot_col, candidates, targets, span) = match pos {
                Position::Upper => {
                    let r = rows.start + t;
                    let c = cols.start + t;
                    (
                        r,
                        c,
                        (r..rows.end).collect::<Vec<_>>(),
                        (r + 1..rows.end).collect::<Vec<_>>(),
                        c..cols.end,
                    )
                }
                Position::Lower => {
                    let r = rows.end - 1 - t;
                    let c = cols.end - 1 - t;
                    (
                        r,
                        c,
                        (rows.start..=r).rev().collect::<Vec<_>>(),
                        (rows.start..r).rev().collect::<Vec<_>>(),
                        cols.start..c + 1,
                    )
                }
            };

            let Some(k) = candidates
                .into_iter()
                .find(|&k| !self.at(k, pivot_col).is_zero())
            else {
                trace!("triangularize: zero column {} for pivot row {}", pivot_col, pivot_row);
                continue;
            };
            if k != pivot_row {
                trace!("triangularize: adding row {} into pivot row {}", k, pivot_row);
                self.add_row_into(k, pivot_row, span.clone());
            }

            let pivot = self.at(pivot_row, pivot_col);
            for i in targets {
                let factor = self.at(i, pivot_col) / pivot.clone();
                self.sub_scaled_row(pivot_row, i, &factor, span.clone());
            }
        }
        Ok(())
    }
}

/// Copying variant of [`Matrix::triangularize_in_place`]; `a` is untouched.
pub fn triangularize<T: Field>(
    a: &Matrix<T>,
    pos: Position,
    bounds: Option<Bounds>,
) -> Result<Matrix<T>, AlgebraError> {
    let mut a = a.copy();
    a.triangularize_in_place(pos, bounds)?;
    Ok(a)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
