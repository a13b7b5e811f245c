//! Per-window entropy binning.
//!
//! A window is reduced to a 16-bucket histogram of its high nibbles. The
//! Shannon entropy of that coarse histogram is doubled to bring it back to
//! the 0..=8 bit scale of a full byte alphabet, then cut into sixteen
//! half-bit bins.

use crate::{COARSE_BUCKETS, ENTROPY_BINS, WINDOW};

/// Counts of high nibbles (`byte >> 4`) within one window.
pub type SubHistogram = [u64; COARSE_BUCKETS];

/// Builds the coarse nibble histogram of a window.
#[inline]
pub fn coarse_histogram(window: &[u8]) -> SubHistogram {
    let mut counts = [0u64; COARSE_BUCKETS];
    for &byte in window {
        counts[(byte >> 4) as usize] += 1;
    }
    counts
}

/// Doubled Shannon entropy of a coarse histogram, with every bucket
/// normalized by `denominator` rather than by the histogram total.
///
/// Probabilities are single precision and the per-bucket terms are summed
/// in double precision; the result is narrowed back to `f32`. Empty
/// buckets are skipped.
#[inline]
pub fn coarse_entropy(counts: &SubHistogram, denominator: usize) -> f32 {
    let denominator = denominator as f32;
    let mut h = 0.0f64;
    for &count in counts {
        if count == 0 {
            continue;
        }
        let p = f64::from(count as f32 / denominator);
        h -= p * p.log2();
    }
    (h * 2.0) as f32
}

/// Maps a doubled entropy in bits to a half-bit bin in `0..ENTROPY_BINS`.
///
/// Exactly 8.0 bits lands on the upper edge and is folded into the last bin.
#[inline]
pub fn bin_for_entropy(entropy: f32) -> usize {
    let bin = (entropy * 2.0) as usize;
    bin.min(ENTROPY_BINS - 1)
}

/// Computes the entropy bin and coarse histogram for one window.
///
/// The denominator is always the nominal `WINDOW` length, including for the
/// single short window of a buffer smaller than `WINDOW`. Short windows
/// therefore report a lower entropy than their contents would on their own.
#[inline]
pub fn entropy_bin(window: &[u8]) -> (usize, SubHistogram) {
    let counts = coarse_histogram(window);
    let bin = bin_for_entropy(coarse_entropy(&counts, WINDOW));
    (bin, counts)
}
