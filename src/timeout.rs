//! Time budgets for histogram computations.
//!
//! Large buffers produce many windows. A [`Deadline`] bounds the wall-clock
//! time spent scanning one buffer and [`with_timeout`] bounds an async
//! computation; either way an exhausted budget is reported as an error and
//! never as a truncated histogram.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use tracing::{debug, error, warn};

use crate::error::{BytestatsError, Result};

/// Default number of windows between two clock reads
pub const DEFAULT_CHECK_INTERVAL: usize = 1024;

/// Awaits `future` for at most `seconds`.
pub async fn with_timeout<T, F>(seconds: u64, operation: &str, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    debug!(operation, budget_secs = seconds, "starting bounded operation");

    match tokio::time::timeout(Duration::from_secs(seconds), future).await {
        Ok(result) => result,
        Err(_) => {
            error!(operation, budget_secs = seconds, "operation timed out");
            Err(BytestatsError::Timeout { seconds })
        }
    }
}

/// Wall-clock budget shared by every worker scanning one buffer.
///
/// Each processed window calls [`Deadline::tick`]; the clock is only read
/// on every `check_interval`-th tick across all workers.
#[derive(Debug)]
pub struct Deadline {
    start: Instant,
    limit: Duration,
    check_interval: usize,
    ticks: AtomicUsize,
    operation: &'static str,
}

impl Deadline {
    pub fn new(seconds: u64, operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            limit: Duration::from_secs(seconds),
            check_interval: DEFAULT_CHECK_INTERVAL,
            ticks: AtomicUsize::new(0),
            operation,
        }
    }

    /// Sets how many ticks pass between two clock reads.
    pub fn with_check_interval(mut self, interval: usize) -> Self {
        self.check_interval = interval.max(1);
        self
    }

    /// Counts one window and fails if the deadline has passed.
    pub fn tick(&self) -> Result<()> {
        let n = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        if !n.is_multiple_of(self.check_interval) {
            return Ok(());
        }

        let elapsed = self.start.elapsed();
        if elapsed > self.limit {
            error!(
                operation = self.operation,
                windows = n,
                ?elapsed,
                "time budget exhausted"
            );
            return Err(BytestatsError::Timeout {
                seconds: self.limit.as_secs(),
            });
        }
        if elapsed > self.limit / 2 && n.is_multiple_of(self.check_interval * 10) {
            warn!(
                operation = self.operation,
                windows = n,
                ?elapsed,
                "past half of the time budget"
            );
        }
        Ok(())
    }

    /// Windows counted so far.
    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::Relaxed)
    }
}
