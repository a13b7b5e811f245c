//! Byte-entropy histogram.
//!
//! The buffer is scanned with overlapping windows (`window = 2048`,
//! `step = 1024`). Each window's high nibbles are counted into 16 buckets,
//! the entropy of that coarse distribution picks one of 16 half-bit bins,
//! and the bucket counts are added into that bin's row of a 16x16 matrix.
//! The matrix is flattened row-major into 256 values.
//!
//! - [`window`]: window boundaries and the borrowed-slice iterator
//! - [`core`]: coarse histogram, entropy and binning for one window
//! - [`accumulator`]: the 16x16 matrix and partial-sum merging
//! - [`histogram`]: sequential, parallel and bounded drivers
//!
//! # Example
//!
//! ```
//! use bytestats::entropy::{byte_entropy_histogram, windows};
//!
//! let data = vec![0u8; 4096];
//! assert_eq!(windows(&data).len(), 3);
//!
//! let hist = byte_entropy_histogram(&data);
//! assert_eq!(hist[0], 3 * 2048);
//! ```

pub mod accumulator;
pub mod core;
pub mod histogram;
pub mod window;

pub use self::accumulator::Accumulator;
pub use self::core::{bin_for_entropy, coarse_entropy, coarse_histogram, entropy_bin, SubHistogram};
pub use self::histogram::{
    byte_entropy_histogram, byte_entropy_histogram_cancellable, byte_entropy_histogram_par,
    byte_entropy_histogram_with_config,
};
pub use self::window::{windows, WindowPlan, Windows};
