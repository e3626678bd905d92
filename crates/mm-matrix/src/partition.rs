//! Static work partitions over a result buffer.
//!
//! A [`Plan`] assigns every flat index of an `m x p` result to exactly one
//! [`Span`]. [`carve`] turns a plan into one exclusive `&mut [T]` per span, so
//! each worker owns its write target outright and the result needs no lock.

use crate::error::{MatrixError, Result};

/// A contiguous run of flat result indices written by a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// True if the two spans share at least one index.
    pub fn intersects(&self, other: &Span) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// An ordered assignment of result indices to tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    spans: Vec<Span>,
    total: usize,
}

impl Plan {
    /// One span per output row.
    pub fn by_row(m: usize, p: usize) -> Self {
        let spans = (0..m).map(|i| Span { start: i * p, len: p }).collect();
        Plan {
            spans,
            total: m * p,
        }
    }

    /// One span per output cell.
    pub fn by_cell(m: usize, p: usize) -> Self {
        let spans = (0..m * p).map(|idx| Span { start: idx, len: 1 }).collect();
        Plan {
            spans,
            total: m * p,
        }
    }

    /// At most `workers` spans of whole rows. Row counts differ by at most one,
    /// with the longer chunks first.
    pub fn by_chunk(m: usize, p: usize, workers: usize) -> Self {
        let workers = workers.clamp(1, m.max(1));
        let base = m / workers;
        let extra = m % workers;

        let mut spans = Vec::with_capacity(workers);
        let mut row = 0;
        for w in 0..workers {
            let n_rows = base + usize::from(w < extra);
            if n_rows == 0 {
                continue;
            }
            spans.push(Span {
                start: row * p,
                len: n_rows * p,
            });
            row += n_rows;
        }

        Plan {
            spans,
            total: m * p,
        }
    }

    /// Build a plan from explicit spans. Nothing is checked until [`carve`].
    pub fn from_spans(spans: Vec<Span>, total: usize) -> Self {
        Plan { spans, total }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Number of tasks this plan dispatches.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Size of the buffer the plan covers.
    pub fn total(&self) -> usize {
        self.total
    }

    /// True when no two spans intersect and together they cover `[0, total)`.
    ///
    /// Order-independent; compares every pair, so it is meant for tests and
    /// diagnostics rather than the dispatch path.
    pub fn is_disjoint_cover(&self) -> bool {
        for (n, a) in self.spans.iter().enumerate() {
            if a.len == 0 || a.end() > self.total {
                return false;
            }
            if self.spans[n + 1..].iter().any(|b| a.intersects(b)) {
                return false;
            }
        }
        let covered: usize = self.spans.iter().map(|s| s.len).sum();
        covered == self.total
    }
}

/// Split `buf` into one exclusive slice per span of `plan`.
///
/// The plan must list non-empty spans in ascending order, each starting where
/// the previous one ended, and end exactly at `buf.len()`.
pub fn carve<'a, T>(buf: &'a mut [T], plan: &Plan) -> Result<Vec<&'a mut [T]>> {
    let invalid = |reason: String| MatrixError::InvalidPartition {
        total: plan.total,
        reason,
    };

    if buf.len() != plan.total {
        return Err(invalid(format!("buffer has length {}", buf.len())));
    }

    let mut parts = Vec::with_capacity(plan.spans.len());
    let mut rest = buf;
    let mut cursor = 0;
    for span in &plan.spans {
        if span.start != cursor {
            return Err(invalid(format!(
                "span at {} does not start at {}",
                span.start, cursor
            )));
        }
        if span.len == 0 || span.len > rest.len() {
            return Err(invalid(format!(
                "span at {} has length {} with {} remaining",
                span.start,
                span.len,
                rest.len()
            )));
        }
        let (head, tail) = rest.split_at_mut(span.len);
        parts.push(head);
        rest = tail;
        cursor = span.end();
    }

    if !rest.is_empty() {
        return Err(invalid(format!("{} trailing indices unassigned", rest.len())));
    }
    Ok(parts)
}
