use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::AlgebraError;

use super::matrix::Matrix;

/// Selection on one axis: a single position or a contiguous range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Index {
    Single(usize),
    Range(Range<usize>),
    /// Open range `lo..`, ending at the axis length.
    Tail(usize),
}

impl Index {
    /// Resolves the selection against an axis of length `len`.
    pub fn resolve(&self, len: usize) -> Result<Range<usize>, AlgebraError> {
        let range = match self {
            Index::Single(i) => *i..*i + 1,
            Index::Range(r) => r.clone(),
            Index::Tail(lo) => *lo..len,
        };
        if range.start >= range.end || range.end > len {
            return Err(AlgebraError::IndexOutOfRange {
                index: self.clone(),
                len,
            });
        }
        Ok(range)
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Index::Single(_))
    }
}

impl From<usize> for Index {
    fn from(i: usize) -> Index {
        Index::Single(i)
    }
}

impl From<Range<usize>> for Index {
    fn from(r: Range<usize>) -> Index {
        Index::Range(r)
    }
}

impl From<RangeFrom<usize>> for Index {
    fn from(r: RangeFrom<usize>) -> Index {
        Index::Tail(r.start)
    }
}

impl From<RangeTo<usize>> for Index {
    fn from(r: RangeTo<usize>) -> Index {
        Index::Range(0..r.end)
    }
}

impl From<RangeFull> for Index {
    fn from(_: RangeFull) -> Index {
        Index::Tail(0)
    }
}

/// Explicit shape for flat input: a single `n` is an `n x 1` column vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl From<usize> for Shape {
    fn from(n: usize) -> Shape {
        Shape { rows: n, cols: 1 }
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Shape {
        Shape { rows, cols }
    }
}

/// Result of a (row, column) selection, by combination of index variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    Scalar(T),
    /// One axis single, the other a range: `1 x k` or `k x 1`.
    Vector(Matrix<T>),
    Block(Matrix<T>),
}

impl<T> Selection<T> {
    pub fn into_matrix(self) -> Option<Matrix<T>> {
        match self {
            Selection::Scalar(_) => None,
            Selection::Vector(m) | Selection::Block(m) => Some(m),
        }
    }

    pub fn into_scalar(self) -> Option<T> {
        match self {
            Selection::Scalar(x) => Some(x),
            _ => None,
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Index::from(2).resolve(3).unwrap(), 2..3);
        assert_eq!(Index::from(1..3).resolve(3).unwrap(), 1..3);
        assert_eq!(Index::from(1..).resolve(4).unwrap(), 1..4);
        assert_eq!(Index::from(..2).resolve(4).unwrap(), 0..2);
        assert_eq!(Index::from(..).resolve(4).unwrap(), 0..4);

        assert_eq!(
            Index::from(3).resolve(3),
            Err(AlgebraError::IndexOutOfRange {
                index: Index::Single(3),
                len: 3
            })
        );
        assert!(Index::from(1..5).resolve(3).is_err());
        assert!(Index::from(2..2).resolve(3).is_err());
    }

    #[test]
    fn test_shape() {
        assert_eq!(Shape::from(4), Shape { rows: 4, cols: 1 });
        assert_eq!(Shape::from((2, 3)), Shape { rows: 2, cols: 3 });
    }
}
