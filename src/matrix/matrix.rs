use itertools::Itertools;
use std::fmt;
use std::ops;
use std::ops::Range;

use crate::error::AlgebraError;
use crate::matrix::matrix_index::{Index, Selection, Shape};
use crate::rings::element::Element;

/// Dense rectangular matrix stored row by row.
///
/// The shape is fixed at construction: every constructor checks that the
/// input fits it, so all later operations can rely on `cells.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Matrix<T> {
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.cols)
    }

    /// Applies `f` to every element.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Matrix { rows, cols, cells }
    }
}

impl<T: Element> Matrix<T> {
    /// Builds a matrix from its rows. All rows must have the same, non-zero length.
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Self, AlgebraError> {
        let cols = lines.first().ok_or(AlgebraError::EmptyMatrix)?.len();
        if cols == 0 {
            return Err(AlgebraError::EmptyMatrix);
        }
        if let Some((row, line)) = lines.iter().find_position(|l| l.len() != cols) {
            return Err(AlgebraError::NotRectangular {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        Ok(Matrix {
            rows: lines.len(),
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    /// A `1 x n` row vector.
    pub fn from_row(values: Vec<T>) -> Result<Self, AlgebraError> {
        Self::with_shape((1, values.len()), values)
    }

    /// Lays out `values` row by row into `shape`.
    pub fn with_shape(shape: impl Into<Shape>, values: Vec<T>) -> Result<Self, AlgebraError> {
        let Shape { rows, cols } = shape.into();
        if rows == 0 || cols == 0 {
            return Err(AlgebraError::EmptyMatrix);
        }
        if values.len() != rows * cols {
            return Err(AlgebraError::ElementCountMismatch {
                expected: rows * cols,
                found: values.len(),
            });
        }
        Ok(Matrix {
            rows,
            cols,
            cells: values,
        })
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.rows_iter().map(|line| line.to_vec()).collect()
    }

    /// `rows x cols` zeros. A zero dimension gives `EmptyMatrix`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, AlgebraError> {
        Self::with_shape((rows, cols), (0..(rows * cols)).map(|_| T::zero()).collect())
    }

    pub fn identity(n: usize) -> Result<Self, AlgebraError> {
        Self::with_shape(
            (n, n),
            (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        )
    }

    /// Deep copy of the storage.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// # Panics
    /// If `(row, col)` is outside the matrix; see [`Matrix::get`].
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T, AlgebraError> {
        let (r, c) = self.check(row, col)?;
        Ok(&self.cells[r * self.cols + c])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), AlgebraError> {
        let (r, c) = self.check(row, col)?;
        self.cells[r * self.cols + c] = value;
        Ok(())
    }

    fn check(&self, row: usize, col: usize) -> Result<(usize, usize), AlgebraError> {
        let r = Index::Single(row).resolve(self.rows)?;
        let c = Index::Single(col).resolve(self.cols)?;
        Ok((r.start, c.start))
    }

    /// Selects cells by a pair of axis indices; the kind of result follows
    /// the index variants (single/single gives a scalar, single/range a vector,
    /// range/range a block).
    pub fn select(
        &self,
        rows: impl Into<Index>,
        cols: impl Into<Index>,
    ) -> Result<Selection<T>, AlgebraError> {
        let (rows, cols) = (rows.into(), cols.into());
        let r = rows.resolve(self.rows)?;
        let c = cols.resolve(self.cols)?;

        Ok(match (rows.is_single(), cols.is_single()) {
            (true, true) => Selection::Scalar(self.at(r.start, c.start)),
            (false, false) => Selection::Block(self.block(r, c)),
            _ => Selection::Vector(self.block(r, c)),
        })
    }

    /// Same cells as [`Matrix::select`], always returned as a matrix.
    pub fn submatrix(
        &self,
        rows: impl Into<Index>,
        cols: impl Into<Index>,
    ) -> Result<Matrix<T>, AlgebraError> {
        let r = rows.into().resolve(self.rows)?;
        let c = cols.into().resolve(self.cols)?;
        Ok(self.block(r, c))
    }

    pub fn row_vector(&self, row: usize) -> Result<Matrix<T>, AlgebraError> {
        self.submatrix(row, ..)
    }

    pub fn column_vector(&self, col: usize) -> Result<Matrix<T>, AlgebraError> {
        self.submatrix(.., col)
    }

    fn block(&self, rows: Range<usize>, cols: Range<usize>) -> Matrix<T> {
        let (n, m) = (rows.len(), cols.len());
        Matrix {
            rows: n,
            cols: m,
            cells: rows
                .flat_map(|i| cols.clone().map(move |j| (i, j)))
                .map(|(i, j)| self.at(i, j))
                .collect(),
        }
    }

    /// Writes `values`, in row-major order, into the selected cells.
    pub fn assign<I>(
        &mut self,
        rows: impl Into<Index>,
        cols: impl Into<Index>,
        values: I,
    ) -> Result<(), AlgebraError>
    where
        I: IntoIterator<Item = T>,
    {
        let r = rows.into().resolve(self.rows)?;
        let c = cols.into().resolve(self.cols)?;
        let values: Vec<T> = values.into_iter().collect();
        if values.len() != r.len() * c.len() {
            return Err(AlgebraError::ElementCountMismatch {
                expected: r.len() * c.len(),
                found: values.len(),
            });
        }

        let positions = r.flat_map(|i| c.clone().map(move |j| (i, j)));
        for ((i, j), value) in positions.zip(values) {
            self.cells[i * self.cols + j] = value;
        }
        Ok(())
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    /// Square with every off-diagonal magnitude not above `tol`.
    pub fn is_diag(&self, tol: &T) -> bool {
        self.is_square()
            && (0..self.rows)
                .cartesian_product(0..self.cols)
                .filter(|(i, j)| i != j)
                .all(|(i, j)| self.cells[i * self.cols + j].is_negligible_within(tol))
    }

    pub fn is_diag_eps(&self) -> bool {
        self.is_diag(&T::epsilon())
    }

    /// The value `x` of a matrix equal to `x * I`.
    pub fn to_scalar(&self) -> Result<T, AlgebraError> {
        if !self.is_square() {
            return Err(AlgebraError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !self.is_diag_eps() {
            return Err(AlgebraError::NonDiagonal);
        }

        let diag = self.at(0, 0);
        if (1..self.rows).any(|i| self.cells[i * self.cols + i] != diag) {
            return Err(AlgebraError::NonUniformDiagonal);
        }
        Ok(diag)
    }

    /// Same shape and elementwise differences not above `tol`.
    pub fn approx_eq(&self, other: &Matrix<T>, tol: &T) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| (a.clone() - b.clone()).is_negligible_within(tol))
    }

    // Row operations used by the elimination routines, limited to `cols`.

    /// `row[dst] += row[src]`
    pub(crate) fn add_row_into(&mut self, src: usize, dst: usize, cols: Range<usize>) {
        for l in cols {
            let value = self.at(dst, l) + self.at(src, l);
            self.cells[dst * self.cols + l] = value;
        }
    }

    /// `row[dst] -= factor * row[src]`
    pub(crate) fn sub_scaled_row(&mut self, src: usize, dst: usize, factor: &T, cols: Range<usize>) {
        for l in cols {
            let value = self.at(dst, l) - factor.clone() * self.at(src, l);
            self.cells[dst * self.cols + l] = value;
        }
    }

    /// `row[row] /= value`
    pub(crate) fn div_row(&mut self, row: usize, value: &T, cols: Range<usize>) {
        for l in cols {
            let v = self.at(row, l) / value.clone();
            self.cells[row * self.cols + l] = v;
        }
    }
}

impl<T> ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "index out of range");
        &self.cells[row * self.cols + col]
    }
}

impl<T> ops::IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "index out of range");
        &mut self.cells[row * self.cols + col]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .cells
            .chunks(self.cols)
            .map(|line| format!("[{}]", line.iter().join(", ")))
            .join(", ");
        write!(f, "({},{}) Matrix\n[{}]", self.rows, self.cols, body)
    }
}

/// `n x n` identity.
pub fn eye<T: Element>(n: usize) -> Result<Matrix<T>, AlgebraError> {
    Matrix::identity(n)
}

/// `n x m` matrix of zeros.
pub fn zeros<T: Element>(n: usize, m: usize) -> Result<Matrix<T>, AlgebraError> {
    Matrix::new(n, m)
}

/// Joins `a` and `b` side by side, or `b` below `a` when `vertical`.
pub fn concatenate<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    vertical: bool,
) -> Result<Matrix<T>, AlgebraError> {
    let mismatch = || AlgebraError::ShapeMismatch {
        op: "concatenate",
        lhs: a.shape(),
        rhs: b.shape(),
    };

    if vertical {
        if a.cols != b.cols {
            return Err(mismatch());
        }
        return Ok(Matrix {
            rows: a.rows + b.rows,
            cols: a.cols,
            cells: a.cells.iter().chain(b.cells.iter()).cloned().collect(),
        });
    }

    if a.rows != b.rows {
        return Err(mismatch());
    }
    Ok(Matrix {
        rows: a.rows,
        cols: a.cols + b.cols,
        cells: a
            .rows_iter()
            .zip(b.rows_iter())
            .flat_map(|(l, r)| l.iter().chain(r.iter()).cloned())
            .collect(),
    })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
