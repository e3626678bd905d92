use std::num::NonZeroUsize;
use std::str::FromStr;

use mm_matrix::Strategy;

use crate::error::{BenchError, Result};

pub const ENV_SEED: &str = "MM_SEED";
pub const ENV_WORKERS: &str = "MM_WORKERS";
pub const ENV_STRATEGIES: &str = "MM_STRATEGIES";

/// Settings for one benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Rows of A (and of the result).
    pub rows_a: usize,
    /// Columns of A, which is also the row count of B.
    pub cols_a: usize,
    /// Columns of B (and of the result).
    pub cols_b: usize,
    /// Generator seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Strategies to time, in order.
    pub strategies: Vec<Strategy>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            rows_a: 100,
            cols_a: 100,
            cols_b: 100,
            seed: None,
            strategies: Strategy::all(),
        }
    }
}

impl BenchConfig {
    /// Build the config from the process arguments and environment.
    pub fn from_env() -> Result<BenchConfig> {
        Self::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Parse positional `[rows_a] [cols_a] [cols_b]` arguments, then apply
    /// the `MM_SEED`, `MM_STRATEGIES` and `MM_WORKERS` overrides read through
    /// `env`.
    pub fn parse<I, F>(args: I, env: F) -> Result<BenchConfig>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = BenchConfig::default();
        let mut args = args.into_iter();

        let dims = [
            ("rows_a", &mut config.rows_a),
            ("cols_a", &mut config.cols_a),
            ("cols_b", &mut config.cols_b),
        ];
        for (name, slot) in dims {
            let Some(arg) = args.next() else { break };
            *slot = parse_value::<NonZeroUsize>(name, &arg)?.get();
        }
        if let Some(extra) = args.next() {
            return Err(BenchError::UnexpectedArgument(extra));
        }

        if let Some(seed) = env(ENV_SEED) {
            config.seed = Some(parse_value(ENV_SEED, &seed)?);
        }

        if let Some(list) = env(ENV_STRATEGIES) {
            config.strategies = list
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| parse_value::<Strategy>(ENV_STRATEGIES, s))
                .collect::<Result<Vec<_>>>()?;
            if config.strategies.is_empty() {
                return Err(invalid(ENV_STRATEGIES, &list));
            }
        }

        if let Some(workers) = env(ENV_WORKERS) {
            let n = parse_value::<NonZeroUsize>(ENV_WORKERS, &workers)?;
            for s in &mut config.strategies {
                if let Strategy::Chunked(w) = s {
                    *w = n;
                }
            }
        }

        Ok(config)
    }
}

fn parse_value<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| invalid(name, value))
}

fn invalid(name: &str, value: &str) -> BenchError {
    BenchError::InvalidArgument {
        name: name.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<BenchConfig> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BenchConfig::parse(args.iter().map(|s| s.to_string()), |k| env.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = parse(&[], &[]).unwrap();
        assert_eq!((c.rows_a, c.cols_a, c.cols_b), (100, 100, 100));
        assert_eq!(c.seed, None);
        assert_eq!(c.strategies, Strategy::all());
    }

    #[test]
    fn test_positional_dims() {
        let c = parse(&["3", "4"], &[]).unwrap();
        assert_eq!((c.rows_a, c.cols_a, c.cols_b), (3, 4, 100));

        let c = parse(&["3", "4", "5"], &[]).unwrap();
        assert_eq!((c.rows_a, c.cols_a, c.cols_b), (3, 4, 5));
    }

    #[test]
    fn test_rejects_bad_dims() {
        assert!(matches!(
            parse(&["0"], &[]),
            Err(BenchError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse(&["ten"], &[]),
            Err(BenchError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse(&["1", "2", "3", "4"], &[]),
            Err(BenchError::UnexpectedArgument(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let c = parse(
            &[],
            &[
                (ENV_SEED, "42"),
                (ENV_STRATEGIES, "row, cell,chunked"),
                (ENV_WORKERS, "3"),
            ],
        )
        .unwrap();
        assert_eq!(c.seed, Some(42));
        assert_eq!(
            c.strategies,
            vec![
                Strategy::RowParallel,
                Strategy::CellParallel,
                Strategy::Chunked(NonZeroUsize::new(3).unwrap()),
            ]
        );
    }

    #[test]
    fn test_env_rejects_bad_values() {
        assert!(parse(&[], &[(ENV_SEED, "-1")]).is_err());
        assert!(parse(&[], &[(ENV_STRATEGIES, "row,diagonal")]).is_err());
        assert!(parse(&[], &[(ENV_STRATEGIES, " , ")]).is_err());
        assert!(parse(&[], &[(ENV_WORKERS, "0")]).is_err());
    }
}
