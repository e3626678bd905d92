use crate::error::Result;
use crate::matrix::{Element, Matrix};
use crate::multiplier::Multiplier;
use crate::partition::Plan;

use super::{check_dims, run_plan};

/// One worker thread per output row.
///
/// Spawns `rows(A)` threads; thread `i` owns row `i` of the result and
/// computes all of its columns. No pooling: large inputs oversubscribe the
/// machine on purpose.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowParallel;

impl RowParallel {
    pub fn new() -> Self {
        RowParallel
    }
}

impl Multiplier for RowParallel {
    fn name(&self) -> &str {
        "row"
    }

    fn multiply<T: Element>(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        check_dims(a, b)?;
        let plan = Plan::by_row(a.rows(), b.cols());
        run_plan(a, b, &plan, "mm-row")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    #[test]
    fn test_matmul_basic() {
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let c = RowParallel.multiply(&a, &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn test_single_row() {
        let a = Matrix::from_vec(1, 3, vec![1, 2, 3]).unwrap();
        let b = Matrix::from_vec(3, 1, vec![4, 5, 6]).unwrap();
        let c = RowParallel.multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), (1, 1));
        assert_eq!(c[(0, 0)], 32);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::<i32>::zeros(2, 3).unwrap();
        let b = Matrix::<i32>::zeros(2, 3).unwrap();
        assert!(matches!(
            RowParallel.multiply(&a, &b),
            Err(MatrixError::DimensionMismatch {
                cols_a: 3,
                rows_b: 2
            })
        ));
    }
}
