//! Plain byte-value histogram.

use crate::BYTE_COUNT;

/// Counts the occurrences of every byte value in `data`.
///
/// Index `v` of the result holds the number of bytes equal to `v`; the
/// counts always sum to `data.len()`.
#[inline]
pub fn byte_histogram(data: &[u8]) -> [u64; BYTE_COUNT] {
    let mut counts = [0u64; BYTE_COUNT];
    for &byte in data {
        counts[byte as usize] += 1;
    }
    counts
}
