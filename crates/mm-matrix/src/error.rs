use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("dimension mismatch: cols(A)={cols_a} but rows(B)={rows_b}")]
    DimensionMismatch { cols_a: usize, rows_b: usize },
    #[error("worker task {task} failed: {message}")]
    TaskFailure { task: usize, message: String },
    #[error("failed to spawn worker thread: {0}")]
    SpawnFailed(#[from] std::io::Error),
    #[error("partition does not cover [0, {total}) exactly: {reason}")]
    InvalidPartition { total: usize, reason: String },
    #[error("matrix must have at least one row and one column, got {rows}x{cols}")]
    EmptyMatrix { rows: usize, cols: usize },
    #[error("row {row} has length {got}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("unknown strategy: {0:?}")]
    UnknownStrategy(String),
    #[error("data length {got} does not match shape (expected {expected})")]
    DataLength { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
