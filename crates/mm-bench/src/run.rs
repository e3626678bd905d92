use mm_gen::MatrixGenerator;
use mm_matrix::{multiply_sequential, Multiplier, Plan, Strategy};
use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::report::{Report, ReportRow};
use crate::timing::timed;

/// Number of worker threads `strategy` spawns for an `m x p` result.
pub fn task_count(strategy: &Strategy, m: usize, p: usize) -> usize {
    match strategy {
        Strategy::Sequential => 0,
        Strategy::RowParallel => Plan::by_row(m, p).len(),
        Strategy::CellParallel => Plan::by_cell(m, p).len(),
        Strategy::Chunked(n) => Plan::by_chunk(m, p, n.get()).len(),
    }
}

/// Generate operands, time every configured strategy and compare each result
/// with the sequential baseline.
pub fn run(config: &BenchConfig) -> Result<Report> {
    let mut generator = match config.seed {
        Some(seed) => MatrixGenerator::new(seed),
        None => MatrixGenerator::from_entropy(),
    };
    let (m, n, p) = (config.rows_a, config.cols_a, config.cols_b);
    info!(m, n, p, seed = generator.seed(), "generating operands");

    let a = generator.generate_default(m, n)?;
    let b = generator.generate_default(n, p)?;
    let baseline = multiply_sequential(&a, &b)?;
    debug!("baseline computed");

    let mut report = Report::new((m, n, p), generator.seed());
    for strategy in &config.strategies {
        let label = strategy.to_string();
        let result = timed(&label, || strategy.multiply(&a, &b));
        let product = result.value?;
        let matches_baseline = product == baseline;
        if !matches_baseline {
            warn!(strategy = %label, "result differs from sequential baseline");
        }
        report.push(ReportRow {
            strategy: label,
            tasks: task_count(strategy, m, p),
            elapsed: result.elapsed,
            matches_baseline,
        });
    }
    Ok(report)
}
