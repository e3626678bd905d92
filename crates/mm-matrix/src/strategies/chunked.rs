use std::num::NonZeroUsize;
use std::thread;

use crate::error::Result;
use crate::matrix::{Element, Matrix};
use crate::multiplier::Multiplier;
use crate::partition::Plan;

use super::{check_dims, run_plan};

/// Bounded variant of [`RowParallel`](super::RowParallel).
///
/// Splits the output rows into at most `workers` contiguous, balanced ranges
/// and runs one thread per range. Assignment is static; there is no
/// work-stealing and no pool kept between calls.
#[derive(Debug, Clone, Copy)]
pub struct Chunked {
    workers: NonZeroUsize,
}

impl Chunked {
    pub fn new(workers: NonZeroUsize) -> Self {
        Chunked { workers }
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    /// One worker per available CPU, falling back to a single worker.
    pub fn default_workers() -> NonZeroUsize {
        thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
    }
}

impl Default for Chunked {
    fn default() -> Self {
        Self::new(Self::default_workers())
    }
}

impl Multiplier for Chunked {
    fn name(&self) -> &str {
        "chunked"
    }

    fn multiply<T: Element>(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        check_dims(a, b)?;
        let plan = Plan::by_chunk(a.rows(), b.cols(), self.workers.get());
        run_plan(a, b, &plan, "mm-chunk")
    }
}
