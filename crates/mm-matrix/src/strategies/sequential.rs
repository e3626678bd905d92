use crate::error::Result;
use crate::matrix::{Element, Matrix};
use crate::multiplier::Multiplier;

use super::check_dims;

/// Single-threaded triple-loop multiplication.
///
/// Iterates `i`, then `j`, then `k`, entirely on the caller's thread. This is
/// the correctness baseline the parallel strategies are compared against.
/// Arithmetic faults (e.g. integer overflow in debug builds) panic on the
/// caller's thread rather than being converted into an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl Sequential {
    pub fn new() -> Self {
        Sequential
    }
}

impl Multiplier for Sequential {
    fn name(&self) -> &str {
        "sequential"
    }

    fn multiply<T: Element>(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        check_dims(a, b)?;

        let (m, n, p) = (a.rows(), a.cols(), b.cols());
        let a_data = a.as_slice();
        let b_data = b.as_slice();
        let mut c = vec![T::zero(); m * p];
        for i in 0..m {
            for j in 0..p {
                let mut sum = T::zero();
                for k in 0..n {
                    sum = sum + a_data[i * n + k] * b_data[k * p + j];
                }
                c[i * p + j] = sum;
            }
        }
        Ok(Matrix::from_parts(m, p, c))
    }
}
