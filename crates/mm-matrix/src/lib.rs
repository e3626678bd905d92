//! `mm-matrix` - dense matrix multiplication with interchangeable parallel
//! decompositions.
//!
//! This crate provides:
//! - A `Matrix` type with owned, row-major storage
//! - A `Multiplier` trait and four implementations: `Sequential`,
//!   `RowParallel` (one thread per output row), `CellParallel` (one thread
//!   per output cell) and `Chunked` (bounded threads over row ranges)
//! - Static partition plans that hand each worker an exclusive slice of the
//!   result, and a join barrier that surfaces worker panics as errors
//!
//! ## Usage
//!
//! ```
//! use mm_matrix::{multiply_cell_parallel, multiply_row_parallel, multiply_sequential, Matrix};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
//!
//! let r = multiply_sequential(&a, &b).unwrap();
//! assert_eq!(r.to_rows(), vec![vec![19, 22], vec![43, 50]]);
//! assert_eq!(multiply_row_parallel(&a, &b).unwrap(), r);
//! assert_eq!(multiply_cell_parallel(&a, &b).unwrap(), r);
//! ```

pub mod error;
pub mod join;
pub mod matrix;
pub mod multiplier;
pub mod partition;
pub mod strategies;

// Re-export primary types at the crate root for convenience.
pub use error::{MatrixError, Result};
pub use matrix::{Element, Matrix};
pub use multiplier::{Multiplier, Strategy};
pub use partition::{Plan, Span};
pub use strategies::{CellParallel, Chunked, RowParallel, Sequential};

/// `R = A * B` on the calling thread.
pub fn multiply_sequential<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    Sequential.multiply(a, b)
}

/// `R = A * B` with one worker thread per row of `R`.
pub fn multiply_row_parallel<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    RowParallel.multiply(a, b)
}

/// `R = A * B` with one worker thread per element of `R`.
pub fn multiply_cell_parallel<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    CellParallel.multiply(a, b)
}

/// `R = A * B` with one worker thread per available CPU, each over a range
/// of rows.
pub fn multiply_chunked<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    Chunked::default().multiply(a, b)
}
