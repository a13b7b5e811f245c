//! Overlapping window scan over a byte buffer.
//!
//! Windows are `WINDOW` bytes long and start every `STEP` bytes. Bytes past
//! the last full window are never scanned. A buffer shorter than one window
//! is scanned as a single short window covering all of it.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::{STEP, WINDOW};

/// Window boundaries for a buffer of a given length, computed by index
/// arithmetic alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlan {
    data_len: usize,
    count: usize,
}

impl WindowPlan {
    pub fn new(data_len: usize) -> Self {
        let count = if data_len < WINDOW {
            1
        } else {
            1 + (data_len - WINDOW) / STEP
        };
        Self { data_len, count }
    }

    /// Number of windows. Always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True when the buffer is shorter than one window.
    #[inline]
    pub fn is_short(&self) -> bool {
        self.data_len < WINDOW
    }

    /// Byte range of window `k`, or `None` past the last window.
    #[inline]
    pub fn range(&self, k: usize) -> Option<Range<usize>> {
        if k >= self.count {
            return None;
        }
        if self.is_short() {
            return Some(0..self.data_len);
        }
        let start = k * STEP;
        Some(start..start + WINDOW)
    }

    /// Total bytes across all windows, counting overlapped bytes once per
    /// window. The flattened entropy histogram sums to this value.
    pub fn scanned_bytes(&self) -> usize {
        if self.is_short() {
            self.data_len
        } else {
            self.count * WINDOW
        }
    }

    /// Bytes at the tail of the buffer that no window covers.
    pub fn dropped_bytes(&self) -> usize {
        if self.is_short() {
            0
        } else {
            self.data_len - ((self.count - 1) * STEP + WINDOW)
        }
    }
}

/// Iterator over the windows of a buffer, as borrowed slices.
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    data: &'a [u8],
    plan: WindowPlan,
    next: usize,
}

impl<'a> Windows<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            plan: WindowPlan::new(data.len()),
            next: 0,
        }
    }
}

impl<'a> Iterator for Windows<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let range = self.plan.range(self.next)?;
        self.next += 1;
        Some(&self.data[range])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}

impl FusedIterator for Windows<'_> {}

/// Returns the windows scanned for `data`.
pub fn windows(data: &[u8]) -> Windows<'_> {
    Windows::new(data)
}
