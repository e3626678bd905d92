use std::ops::RangeInclusive;

use mm_matrix::{Element, Matrix, Result};
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Value range used by [`MatrixGenerator::generate_default`].
pub const DEFAULT_RANGE: RangeInclusive<i64> = 1..=10;

/// Produces matrices of uniformly distributed values.
///
/// Backed by a seeded `StdRng`, so two generators built with the same seed
/// yield the same sequence of matrices.
pub struct MatrixGenerator {
    seed: u64,
    rng: StdRng,
}

impl MatrixGenerator {
    /// Create a generator with the given seed for reproducibility.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy. The chosen seed is still
    /// recorded and available from [`seed`](Self::seed).
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A `rows x cols` matrix with every element drawn from `range`.
    ///
    /// # Errors
    /// `EmptyMatrix` if either dimension is zero.
    pub fn generate<T>(&mut self, rows: usize, cols: usize, range: RangeInclusive<T>) -> Result<Matrix<T>>
    where
        T: Element + SampleUniform + PartialOrd,
    {
        let rng = &mut self.rng;
        Matrix::from_fn(rows, cols, |_, _| rng.gen_range(range.clone()))
    }

    /// A `rows x cols` matrix of integers in [`DEFAULT_RANGE`].
    pub fn generate_default(&mut self, rows: usize, cols: usize) -> Result<Matrix<i64>> {
        self.generate(rows, cols, DEFAULT_RANGE)
    }

    /// Restart the sequence from the original seed.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}
