use std::time::{Duration, Instant};

use tracing::info;

/// The value a timed closure returned and how long it took.
#[derive(Debug)]
pub struct Timed<R> {
    pub value: R,
    pub elapsed: Duration,
}

/// Run `f` once and measure its wall-clock duration.
pub fn timed<R>(label: &str, f: impl FnOnce() -> R) -> Timed<R> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    info!(
        label,
        elapsed_us = elapsed.as_micros() as u64,
        "timed call finished"
    );
    Timed { value, elapsed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_value() {
        let t = timed("sum", || (1..=10).sum::<u32>());
        assert_eq!(t.value, 55);
    }

    #[test]
    fn test_measures_elapsed() {
        let t = timed("sleep", || std::thread::sleep(Duration::from_millis(20)));
        assert!(t.elapsed >= Duration::from_millis(20));
    }
}
