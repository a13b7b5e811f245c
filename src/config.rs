//! Execution configuration for histogram extraction.
//!
//! The windowing constants are fixed; this only controls how the work is
//! scheduled and bounded.

use serde::{Deserialize, Serialize};

use crate::error::{BytestatsError, Result};
use crate::timeout::DEFAULT_CHECK_INTERVAL;

/// Buffers at least this large are scanned in parallel by default (4 MiB).
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4 * 1024 * 1024;

/// Scheduling configuration for [`crate::byte_entropy_histogram_with_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Minimum buffer length (bytes) for the parallel driver. 0 disables it.
    pub parallel_threshold: usize,
    /// Wall-clock budget for one buffer. `None` means unbounded.
    pub time_budget_secs: Option<u64>,
    /// Windows processed between two deadline checks.
    pub check_interval: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            time_budget_secs: None,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }
}

impl StatsConfig {
    /// Configuration that always runs on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: 0,
            ..Self::default()
        }
    }

    /// Returns a copy with the given time budget.
    pub fn with_time_budget(mut self, seconds: u64) -> Self {
        self.time_budget_secs = Some(seconds);
        self
    }

    /// Whether a buffer of `len` bytes should take the parallel path.
    pub fn use_parallel(&self, len: usize) -> bool {
        self.parallel_threshold != 0 && len >= self.parallel_threshold
    }

    pub fn validate(&self) -> Result<()> {
        if self.check_interval == 0 {
            return Err(BytestatsError::InvalidInput(
                "check_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
