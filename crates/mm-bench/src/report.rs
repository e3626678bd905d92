use std::fmt;
use std::time::Duration;

/// One timed strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub strategy: String,
    /// Worker threads the strategy spawned (0 for the sequential baseline).
    pub tasks: usize,
    pub elapsed: Duration,
    pub matches_baseline: bool,
}

/// Timings for a single set of operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub shape: (usize, usize, usize),
    pub seed: u64,
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(shape: (usize, usize, usize), seed: u64) -> Self {
        Report {
            shape,
            seed,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Names of the strategies whose result differed from the baseline.
    pub fn mismatches(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|r| !r.matches_baseline)
            .map(|r| r.strategy.clone())
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, n, p) = self.shape;
        writeln!(f, "A: {}x{}  B: {}x{}  seed: {}", m, n, n, p, self.seed)?;
        writeln!(f, "{}", "-".repeat(64))?;
        writeln!(
            f,
            "{:<14} {:>8} {:>14} {:>10} {:>10}",
            "Strategy", "Tasks", "Time (ms)", "Speedup", "Matches"
        )?;
        writeln!(f, "{}", "-".repeat(64))?;

        let baseline = self.rows.first().map(|r| r.elapsed.as_secs_f64());
        for row in &self.rows {
            let secs = row.elapsed.as_secs_f64();
            let speedup = match baseline {
                Some(b) if secs > 0.0 => b / secs,
                _ => 1.0,
            };
            writeln!(
                f,
                "{:<14} {:>8} {:>14.3} {:>9.2}x {:>10}",
                row.strategy,
                row.tasks,
                secs * 1000.0,
                speedup,
                if row.matches_baseline { "yes" } else { "NO" }
            )?;
        }
        write!(f, "{}", "-".repeat(64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, ms: u64, ok: bool) -> ReportRow {
        ReportRow {
            strategy: name.to_string(),
            tasks: 4,
            elapsed: Duration::from_millis(ms),
            matches_baseline: ok,
        }
    }

    #[test]
    fn test_mismatches() {
        let mut r = Report::new((2, 2, 2), 1);
        r.push(row("sequential", 10, true));
        r.push(row("row", 5, false));
        r.push(row("cell", 20, true));
        assert_eq!(r.mismatches(), vec!["row".to_string()]);
    }

    #[test]
    fn test_display_table() {
        let mut r = Report::new((3, 4, 5), 7);
        r.push(row("sequential", 10, true));
        r.push(row("row", 5, true));
        let text = r.to_string();
        assert!(text.starts_with("A: 3x4  B: 4x5  seed: 7"));
        assert!(text.contains("sequential"));
        assert!(text.contains("2.00x"));
        assert!(!text.contains("NO"));
    }
}
