use mm_bench::{run, BenchConfig, BenchError};
use tracing::error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = match BenchConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: mm-bench [rows_a] [cols_a] [cols_b]");
            eprintln!("Environment:");
            eprintln!("  MM_SEED=<u64>           fixed generator seed");
            eprintln!("  MM_STRATEGIES=<list>    comma list of sequential,row,cell,chunked[:n]");
            eprintln!("  MM_WORKERS=<n>          worker count for chunked");
            std::process::exit(2);
        }
    };

    let report = run(&config)?;
    println!("{}", report);

    let mismatches = report.mismatches();
    if !mismatches.is_empty() {
        let err = BenchError::Mismatch(mismatches);
        error!("{}", err);
        return Err(err.into());
    }
    Ok(())
}
