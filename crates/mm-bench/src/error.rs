use mm_matrix::MatrixError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),
    #[error("invalid value for {name}: {value:?}")]
    InvalidArgument { name: String, value: String },
    #[error("unexpected extra argument: {0:?}")]
    UnexpectedArgument(String),
    #[error("results differ from the sequential baseline: {0:?}")]
    Mismatch(Vec<String>),
}

pub type Result<T> = std::result::Result<T, BenchError>;
