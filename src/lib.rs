//! Byte-level statistical fingerprints of raw binary buffers.
//!
//! Two fixed-size feature vectors are derived from any byte slice:
//!
//! - [`byte_histogram`]: 256 byte-value occurrence counts
//! - [`byte_entropy_histogram`]: 256 values from a 16x16 matrix of local
//!   entropy bin by high-nibble bucket, computed over overlapping windows
//!
//! Both functions are pure and total: they never fail, never perform I/O and
//! keep no state between calls. Loading the buffer and consuming the vectors
//! are the caller's business.

pub mod config;
pub mod entropy;
pub mod error;
pub mod features;
pub mod histogram;
pub mod logging;
#[cfg(feature = "python-ext")]
pub mod python_bindings;
pub mod timeout;

pub use config::StatsConfig;
pub use entropy::{
    byte_entropy_histogram, byte_entropy_histogram_cancellable, byte_entropy_histogram_par,
    byte_entropy_histogram_with_config,
};
pub use error::{BytestatsError, Result};
pub use features::ByteStats;
pub use histogram::byte_histogram;

/// Number of distinct byte values.
pub const BYTE_COUNT: usize = 256;
/// Length of one entropy window in bytes.
pub const WINDOW: usize = 2048;
/// Offset between the starts of consecutive windows.
pub const STEP: usize = 1024;
/// Buckets of the coarse (high-nibble) histogram.
pub const COARSE_BUCKETS: usize = 16;
/// Half-bit entropy bins spanning 0..=8 bits.
pub const ENTROPY_BINS: usize = 16;
/// Length of the flattened byte-entropy histogram.
pub const ENTROPY_HISTOGRAM_LEN: usize = ENTROPY_BINS * COARSE_BUCKETS;

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// Python extension module.
#[cfg(feature = "python-ext")]
#[pymodule]
fn bytestats(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register_python_bindings(m)
}
