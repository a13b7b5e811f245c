//! 16x16 accumulator for the byte-entropy histogram.
//!
//! Rows are entropy bins, columns are nibble buckets. Partial accumulators
//! from disjoint window sets can be merged in any order.

use crate::entropy::core::SubHistogram;
use crate::{COARSE_BUCKETS, ENTROPY_BINS, ENTROPY_HISTOGRAM_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator {
    rows: [[u64; COARSE_BUCKETS]; ENTROPY_BINS],
    windows: usize,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            rows: [[0; COARSE_BUCKETS]; ENTROPY_BINS],
            windows: 0,
        }
    }

    /// Adds one window's coarse histogram into row `bin`.
    #[inline]
    pub fn add_window(&mut self, bin: usize, counts: &SubHistogram) {
        debug_assert!(bin < ENTROPY_BINS, "entropy bin {bin} out of range");
        for (cell, &count) in self.rows[bin].iter_mut().zip(counts) {
            *cell += count;
        }
        self.windows += 1;
    }

    /// Folds another partial accumulator into this one.
    pub fn merge(mut self, other: Self) -> Self {
        for (row, other_row) in self.rows.iter_mut().zip(&other.rows) {
            for (cell, &count) in row.iter_mut().zip(other_row) {
                *cell += count;
            }
        }
        self.windows += other.windows;
        self
    }

    /// Number of windows added, including merged ones.
    pub fn windows(&self) -> usize {
        self.windows
    }

    /// Sum of all cells.
    pub fn total(&self) -> u64 {
        self.rows.iter().flatten().sum()
    }

    pub fn row(&self, bin: usize) -> &[u64; COARSE_BUCKETS] {
        &self.rows[bin]
    }

    /// Row-major flattening: row 0's sixteen cells first.
    pub fn flatten(&self) -> [u64; ENTROPY_HISTOGRAM_LEN] {
        let mut out = [0u64; ENTROPY_HISTOGRAM_LEN];
        for (chunk, row) in out.chunks_exact_mut(COARSE_BUCKETS).zip(&self.rows) {
            chunk.copy_from_slice(row);
        }
        out
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}
