//! Feature vectors for one buffer.
//!
//! [`ByteStats`] bundles the byte histogram and the byte-entropy histogram
//! of a buffer, the pair handed to downstream classifiers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::StatsConfig;
use crate::entropy::{
    byte_entropy_histogram, byte_entropy_histogram_cancellable, byte_entropy_histogram_with_config,
    WindowPlan,
};
use crate::error::{BytestatsError, Result};
use crate::histogram::byte_histogram;
use crate::timeout::with_timeout;
use crate::{BYTE_COUNT, ENTROPY_HISTOGRAM_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteStats {
    /// Occurrences of each byte value.
    pub histogram: Vec<u64>,
    /// Flattened 16x16 entropy-bin by nibble matrix.
    pub byte_entropy: Vec<u64>,
}

impl ByteStats {
    pub fn compute(data: &[u8]) -> Self {
        debug!(len = data.len(), "extracting byte statistics");
        Self {
            histogram: byte_histogram(data).to_vec(),
            byte_entropy: byte_entropy_histogram(data).to_vec(),
        }
    }

    /// Computes both vectors under `config`.
    ///
    /// Fails with [`BytestatsError::InvalidInput`] when `config` does not
    /// validate and with [`BytestatsError::Timeout`] when the time budget
    /// runs out.
    pub fn compute_with_config(data: &[u8], config: &StatsConfig) -> Result<Self> {
        let byte_entropy = byte_entropy_histogram_with_config(data, config)?;
        Ok(Self {
            histogram: byte_histogram(data).to_vec(),
            byte_entropy: byte_entropy.to_vec(),
        })
    }

    /// Computes both vectors on the blocking thread pool.
    ///
    /// With a time budget, the scan is signalled to stop when the budget
    /// runs out and the call returns [`BytestatsError::Timeout`].
    pub async fn compute_async(data: Bytes, config: &StatsConfig) -> Result<Self> {
        config.validate()?;

        let cancel = Arc::new(AtomicBool::new(false));
        let task_cancel = Arc::clone(&cancel);
        let task_config = StatsConfig {
            time_budget_secs: None,
            ..config.clone()
        };
        let handle = tokio::task::spawn_blocking(move || -> Result<Self> {
            let byte_entropy =
                byte_entropy_histogram_cancellable(&data, &task_config, &task_cancel)?;
            Ok(Self {
                histogram: byte_histogram(&data).to_vec(),
                byte_entropy: byte_entropy.to_vec(),
            })
        });
        let joined = async move {
            match handle.await {
                Ok(result) => result,
                Err(e) => Err(BytestatsError::Internal(format!(
                    "histogram task failed: {e}"
                ))),
            }
        };

        match config.time_budget_secs {
            None => joined.await,
            Some(seconds) => {
                let result = with_timeout(seconds, "byte_stats", joined).await;
                if result.is_err() {
                    cancel.store(true, Ordering::Relaxed);
                }
                result
            }
        }
    }

    /// Checks vector lengths and the sum invariants against the length of
    /// the buffer the vectors were computed from.
    pub fn is_consistent(&self, data_len: usize) -> bool {
        self.histogram.len() == BYTE_COUNT
            && self.byte_entropy.len() == ENTROPY_HISTOGRAM_LEN
            && self.histogram.iter().sum::<u64>() == data_len as u64
            && self.byte_entropy.iter().sum::<u64>()
                == WindowPlan::new(data_len).scanned_bytes() as u64
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let stats: Self = serde_json::from_str(s)?;
        if stats.histogram.len() != BYTE_COUNT || stats.byte_entropy.len() != ENTROPY_HISTOGRAM_LEN
        {
            return Err(BytestatsError::InvalidInput(format!(
                "expected {} + {} values, got {} + {}",
                BYTE_COUNT,
                ENTROPY_HISTOGRAM_LEN,
                stats.histogram.len(),
                stats.byte_entropy.len()
            )));
        }
        Ok(stats)
    }
}
