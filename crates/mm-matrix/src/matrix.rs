use std::fmt;
use std::ops::{Add, Index, Mul};

use num_traits::{One, Zero};

use crate::error::{MatrixError, Result};

/// Numeric types a [`Matrix`] can hold.
///
/// Blanket-implemented for every type with the required arithmetic, which
/// covers the primitive integers and floats. `Send + Sync` is needed because
/// the parallel strategies share operands across worker threads.
pub trait Element:
    Copy
    + Send
    + Sync
    + fmt::Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Mul<Output = Self>
    + 'static
{
}

impl<T> Element for T where
    T: Copy
        + Send
        + Sync
        + fmt::Debug
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + Mul<Output = T>
        + 'static
{
}

/// A dense, rectangular matrix.
///
/// Holds contiguous row-major data. Every constructor enforces at least one
/// row and one column, so a `Matrix` value is always a valid operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> Matrix<T> {
    /// Build a matrix from nested rows.
    ///
    /// # Errors
    /// `EmptyMatrix` if there are no rows or the first row is empty,
    /// `RaggedRow` if any row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(MatrixError::EmptyMatrix {
                rows: n_rows,
                cols: n_cols,
            });
        }

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrixError::RaggedRow {
                    row: i,
                    expected: n_cols,
                    got: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Matrix {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Build a matrix from flat row-major data.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        check_shape(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MatrixError::DataLength {
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Build a matrix by evaluating `f(i, j)` for every cell in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        check_shape(rows, cols)?;
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        check_shape(rows, cols)?;
        Ok(Matrix {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        })
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Multiply every element by `c`.
    pub fn scale(&self, c: T) -> Self {
        Matrix {
            data: self.data.iter().map(|&v| v * c).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns the element at `(i, j)`, or `None` if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Copy the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }
}

impl<T> Matrix<T> {
    /// Wrap a buffer produced by a multiplier. The caller guarantees the shape.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Matrix { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the underlying row-major data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

fn check_shape(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::EmptyMatrix { rows, cols });
    }
    Ok(())
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::RaggedRow {
                row: 1,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            Matrix::<i32>::from_rows(vec![]),
            Err(MatrixError::EmptyMatrix { rows: 0, cols: 0 })
        ));
        assert!(matches!(
            Matrix::<i32>::from_rows(vec![vec![], vec![]]),
            Err(MatrixError::EmptyMatrix { rows: 2, cols: 0 })
        ));
        assert!(Matrix::<f32>::zeros(0, 3).is_err());
        assert!(Matrix::<f32>::identity(0).is_err());
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::DataLength {
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn test_identity_and_zeros() {
        let id = Matrix::<i64>::identity(3).unwrap();
        assert_eq!(id.to_rows(), vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);

        let z = Matrix::<f64>::zeros(2, 3).unwrap();
        assert!(z.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = Matrix::from_vec(1, 2, vec![7u32, 8]).unwrap();
        assert_eq!(m.get(0, 1), Some(8));
        assert_eq!(m.get(1, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let m = Matrix::from_vec(1, 2, vec![7u32, 8]).unwrap();
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_scale() {
        let m = Matrix::from_rows(vec![vec![1, -2], vec![3, 0]]).unwrap();
        assert_eq!(m.scale(3).to_rows(), vec![vec![3, -6], vec![9, 0]]);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "[1, 2]\n[3, 4]");
    }
}
