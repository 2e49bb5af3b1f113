use log::{debug, trace};

use crate::error::AlgebraError;
use crate::matrix::matrix::{concatenate, Matrix};
use crate::rings::element::Field;

/// Complete solution set of `Ax = b`.
///
/// Every solution is `particular` plus a linear combination of the
/// `homogeneous` vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionSet<T> {
    pub solvable: bool,
    /// `n x 1`, present iff `solvable`.
    pub particular: Option<Matrix<T>>,
    /// Basis of the kernel of `A`, present iff `solvable` and the solution is
    /// not unique.
    pub homogeneous: Option<Vec<Matrix<T>>>,
}

impl<T> SolutionSet<T> {
    fn inconsistent() -> Self {
        SolutionSet {
            solvable: false,
            particular: None,
            homogeneous: None,
        }
    }

    pub fn is_unique(&self) -> bool {
        self.solvable && self.homogeneous.is_none()
    }

    /// Dimension of the affine solution space, `None` when there is no solution.
    pub fn dimension(&self) -> Option<usize> {
        self.solvable
            .then(|| self.homogeneous.as_ref().map_or(0, |h| h.len()))
    }
}

/// Solves `Ax = b` for an `m x n` matrix `A` and an `m x 1` vector `b`.
///
/// Runs a Gauss-Jordan reduction of `[A | b]` where a column with no
/// non-zero pivot candidate becomes a free column. A row left without a pivot
/// must reduce to a negligible right-hand side, else the system is reported as
/// not `solvable` (not as an error).
pub fn solve_linear<T: Field>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<SolutionSet<T>, AlgebraError> {
    if b.rows() != a.rows() || b.cols() != 1 {
        return Err(AlgebraError::ShapeMismatch {
            op: "solve_linear",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let (rows, cols) = a.shape();
    let last = cols;
    let mut ab = concatenate(a, b, false)?;

    let mut free_cols = vec![];
    let mut unit_cols = vec![];

    for j in 0..cols {
        let start_row = j - free_cols.len();
        let found = (start_row..rows).find(|&k| !ab.at(k, j).is_zero());
        let Some(k) = found else {
            trace!("solve_linear: column {} is free", j);
            free_cols.push(j);
            continue;
        };
        if k != start_row {
            // This is faster than exchanging two rows
            ab.add_row_into(k, start_row, j..last + 1);
        }

        let pivot = ab.at(start_row, j);
        ab.div_row(start_row, &pivot, j..last + 1);

        for i in (0..rows).filter(|&i| i != start_row) {
            let factor = ab.at(i, j);
            if !factor.is_zero() {
                ab.sub_scaled_row(start_row, i, &factor, j..last + 1);
            }
        }
        unit_cols.push(j);
    }

    let rank = unit_cols.len();
    if let Some(i) = (rank..rows).find(|&i| !ab.at(i, last).is_negligible()) {
        debug!(
            "solve_linear: inconsistent system, row {} reduces to 0 = {}",
            i,
            ab.at(i, last)
        );
        return Ok(SolutionSet::inconsistent());
    }

    let mut particular = Matrix::new(cols, 1)?;
    for (k, &i) in unit_cols.iter().enumerate() {
        particular[(i, 0)] = ab.at(k, last);
    }

    let homogeneous = free_cols
        .iter()
        .map(|&j| {
            let mut h = Matrix::new(cols, 1)?;
            h[(j, 0)] = T::one();
            for (k, &i) in unit_cols.iter().enumerate() {
                h[(i, 0)] = -ab.at(k, j);
            }
            Ok(h)
        })
        .collect::<Result<Vec<Matrix<T>>, AlgebraError>>()?;

    debug!(
        "solve_linear: rank {}, {} free columns",
        rank,
        homogeneous.len()
    );
    Ok(SolutionSet {
        solvable: true,
        particular: Some(particular),
        homogeneous: (!homogeneous.is_empty()).then_some(homogeneous),
    })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
