//! The multiplication strategies and the pieces they share.
//!
//! Every strategy computes `R[i][j]` as a left-to-right sum over increasing
//! `k`, starting from zero, so floating-point results agree bit for bit
//! across strategies.

pub mod cell;
pub mod chunked;
pub mod row;
pub mod sequential;

use std::thread;

use crate::error::{MatrixError, Result};
use crate::join::join_all;
use crate::matrix::{Element, Matrix};
use crate::partition::{carve, Plan};

pub use cell::CellParallel;
pub use chunked::Chunked;
pub use row::RowParallel;
pub use sequential::Sequential;

/// Reject operands whose inner dimensions disagree.
///
/// Runs before the result is allocated or any task is spawned.
pub fn check_dims<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            cols_a: a.cols(),
            rows_b: b.rows(),
        });
    }
    Ok(())
}

/// `sum_k A[i][k] * B[k][j]`, accumulated in increasing `k`.
#[inline]
pub(crate) fn dot<T: Element>(a: &Matrix<T>, b: &Matrix<T>, i: usize, j: usize) -> T {
    let p = b.cols();
    let b_data = b.as_slice();
    let mut acc = T::zero();
    for (k, &a_ik) in a.row(i).iter().enumerate() {
        acc = acc + a_ik * b_data[k * p + j];
    }
    acc
}

/// Fill `out`, which holds flat result indices `start..start + out.len()`.
fn fill_span<T: Element>(a: &Matrix<T>, b: &Matrix<T>, start: usize, out: &mut [T]) {
    let p = b.cols();
    for (offset, cell) in out.iter_mut().enumerate() {
        let idx = start + offset;
        *cell = dot(a, b, idx / p, idx % p);
    }
}

/// Dispatch one scoped thread per span of `plan`, then wait for all of them.
///
/// Each thread receives the exclusive slice [`carve`] produced for its span.
/// The result is only wrapped and returned after the barrier succeeds.
fn run_plan<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    plan: &Plan,
    label: &str,
) -> Result<Matrix<T>> {
    let (m, p) = (a.rows(), b.cols());
    let mut data = vec![T::zero(); m * p];
    let parts = carve(&mut data, plan)?;

    thread::scope(|s| {
        let mut handles = Vec::with_capacity(parts.len());
        for (task, (span, out)) in plan.spans().iter().zip(parts).enumerate() {
            let start = span.start;
            let spawned = thread::Builder::new()
                .name(format!("{}-{}", label, task))
                .spawn_scoped(s, move || fill_span(a, b, start, out));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    // Drain the threads that did start before reporting.
                    let _ = join_all(handles);
                    return Err(MatrixError::SpawnFailed(e));
                }
            }
        }
        join_all(handles)
    })?;

    Ok(Matrix::from_parts(m, p, data))
}
