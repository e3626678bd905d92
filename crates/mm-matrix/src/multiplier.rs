use std::fmt::{self, Debug};
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::{MatrixError, Result};
use crate::matrix::{Element, Matrix};
use crate::strategies::{CellParallel, Chunked, RowParallel, Sequential};

/// A way of computing `R = A * B`.
///
/// Implementations differ only in how the work is decomposed; for the same
/// operands they all return the same matrix.
pub trait Multiplier: Send + Sync + Debug {
    /// Short name used in reports (e.g. "sequential", "row").
    fn name(&self) -> &str;

    /// Multiply `a` (m x n) by `b` (n x p), returning a fresh m x p matrix.
    ///
    /// Neither operand is modified.
    ///
    /// # Errors
    /// `DimensionMismatch` if `a.cols() != b.rows()`, detected before any
    /// work is dispatched. Parallel strategies also return `TaskFailure` if a
    /// worker panics and `SpawnFailed` if the OS refuses a thread; in both
    /// cases no partial result is returned.
    fn multiply<T: Element>(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>>;
}

/// Runtime selection between the available multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    RowParallel,
    CellParallel,
    Chunked(NonZeroUsize),
}

impl Strategy {
    /// The three strategies being compared, plus the bounded variant sized to
    /// the machine.
    pub fn all() -> Vec<Strategy> {
        vec![
            Strategy::Sequential,
            Strategy::RowParallel,
            Strategy::CellParallel,
            Strategy::Chunked(Chunked::default_workers()),
        ]
    }
}

impl Multiplier for Strategy {
    fn name(&self) -> &str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::RowParallel => "row",
            Strategy::CellParallel => "cell",
            Strategy::Chunked(_) => "chunked",
        }
    }

    fn multiply<T: Element>(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        match self {
            Strategy::Sequential => Sequential.multiply(a, b),
            Strategy::RowParallel => RowParallel.multiply(a, b),
            Strategy::CellParallel => CellParallel.multiply(a, b),
            Strategy::Chunked(n) => Chunked::new(*n).multiply(a, b),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Chunked(n) => write!(f, "chunked:{}", n),
            other => write!(f, "{}", other.name()),
        }
    }
}

impl FromStr for Strategy {
    type Err = MatrixError;

    /// Accepts `sequential`, `row`, `cell`, `chunked` (one worker per CPU) and
    /// `chunked:<n>`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s {
            "sequential" | "seq" => Ok(Strategy::Sequential),
            "row" => Ok(Strategy::RowParallel),
            "cell" => Ok(Strategy::CellParallel),
            "chunked" => Ok(Strategy::Chunked(Chunked::default_workers())),
            _ => {
                let workers = s
                    .strip_prefix("chunked:")
                    .and_then(|n| n.parse::<NonZeroUsize>().ok())
                    .ok_or_else(|| MatrixError::UnknownStrategy(s.to_string()))?;
                Ok(Strategy::Chunked(workers))
            }
        }
    }
}
