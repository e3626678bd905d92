use crate::error::Result;
use crate::matrix::{Element, Matrix};
use crate::multiplier::Multiplier;
use crate::partition::Plan;

use super::{check_dims, run_plan};

/// One worker thread per output cell.
///
/// Spawns `rows(A) * cols(B)` threads, each writing exactly one element. The
/// finest possible decomposition; kept as the high-overhead end of the
/// comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellParallel;

impl CellParallel {
    pub fn new() -> Self {
        CellParallel
    }
}

impl Multiplier for CellParallel {
    fn name(&self) -> &str {
        "cell"
    }

    fn multiply<T: Element>(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        check_dims(a, b)?;
        let plan = Plan::by_cell(a.rows(), b.cols());
        run_plan(a, b, &plan, "mm-cell")
    }
}
