//! `mm-bench` - timing harness and driver for the `mm-matrix` strategies.
//!
//! Generates random operands with `mm-gen`, runs each configured strategy
//! once under a wall-clock timer and checks every result against the
//! sequential baseline.

pub mod config;
pub mod error;
pub mod report;
pub mod run;
pub mod timing;

pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use report::{Report, ReportRow};
pub use run::{run, task_count};
pub use timing::{timed, Timed};
