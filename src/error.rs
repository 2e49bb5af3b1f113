use std::ops::Range;

use thiserror::Error;

use crate::matrix::matrix_index::Index;

/// Errors raised by matrix and polynomial operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Operand shapes do not fit the requested operation.
    #[error("Shape mismatch in {op}: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("Matrix of shape {rows}x{cols} is not square")]
    NotSquare { rows: usize, cols: usize },

    /// A nested input had rows of different lengths.
    #[error("The shape of a matrix shall be rectangular: row {row} has {found} elements, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("The number of the elements ({found}) cannot fit the shape ({expected} expected)")]
    ElementCountMismatch { expected: usize, found: usize },

    #[error("A matrix needs at least one row and one column")]
    EmptyMatrix,

    #[error("Bounds out of range: rows {rows:?}, cols {cols:?} for shape {shape:?}")]
    Bounds {
        rows: Range<usize>,
        cols: Range<usize>,
        shape: (usize, usize),
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A zero pivot was met while inverting.
    #[error("The matrix is not invertible (zero pivot at {pivot})")]
    Singular { pivot: usize },

    #[error("Cannot convert a non-diagonal matrix into a scalar")]
    NonDiagonal,

    #[error("Cannot convert a matrix that has different diagonal values into a scalar")]
    NonUniformDiagonal,

    #[error("Index {index:?} out of range for an axis of length {len}")]
    IndexOutOfRange { index: Index, len: usize },

    /// The operation is not provided for these operands; callers may fall back
    /// to another path.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
