pub mod generator;

pub use generator::{MatrixGenerator, DEFAULT_RANGE};
