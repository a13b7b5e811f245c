//! Byte-entropy histogram drivers.
//!
//! Every driver scans the same windows and produces the same 256 values;
//! they differ only in scheduling and in whether the scan can be abandoned.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::config::StatsConfig;
use crate::entropy::accumulator::Accumulator;
use crate::entropy::core::entropy_bin;
use crate::entropy::window::{windows, WindowPlan};
use crate::error::{BytestatsError, Result};
use crate::timeout::Deadline;
use crate::ENTROPY_HISTOGRAM_LEN;

/// Computes the 256-value byte-entropy histogram of `data`.
///
/// Entry `bin * 16 + nibble` sums, over every window whose entropy falls in
/// `bin`, the number of bytes in that window with high nibble `nibble`.
pub fn byte_entropy_histogram(data: &[u8]) -> [u64; ENTROPY_HISTOGRAM_LEN] {
    let plan = WindowPlan::new(data.len());
    debug!(
        len = data.len(),
        windows = plan.len(),
        "computing byte-entropy histogram"
    );

    let mut acc = Accumulator::new();
    for window in windows(data) {
        let (bin, counts) = entropy_bin(window);
        trace!(bin, len = window.len(), "window binned");
        acc.add_window(bin, &counts);
    }

    finish(&acc, &plan)
}

/// Same result as [`byte_entropy_histogram`], with windows spread across
/// the rayon thread pool and the partial accumulators merged at the end.
pub fn byte_entropy_histogram_par(data: &[u8]) -> [u64; ENTROPY_HISTOGRAM_LEN] {
    let plan = WindowPlan::new(data.len());
    debug!(
        len = data.len(),
        windows = plan.len(),
        "computing byte-entropy histogram in parallel"
    );

    let acc = (0..plan.len())
        .into_par_iter()
        .filter_map(|k| plan.range(k))
        .fold(Accumulator::new, |mut acc, range| {
            let (bin, counts) = entropy_bin(&data[range]);
            acc.add_window(bin, &counts);
            acc
        })
        .reduce(Accumulator::new, Accumulator::merge);

    finish(&acc, &plan)
}

/// Computes the histogram under `config`, choosing the parallel driver for
/// large buffers and enforcing the time budget if one is set.
///
/// An exhausted budget yields [`BytestatsError::Timeout`]; no partial
/// histogram is ever returned.
pub fn byte_entropy_histogram_with_config(
    data: &[u8],
    config: &StatsConfig,
) -> Result<[u64; ENTROPY_HISTOGRAM_LEN]> {
    run(data, config, None)
}

/// Like [`byte_entropy_histogram_with_config`], but stops with
/// [`BytestatsError::Cancelled`] once `cancel` is set.
pub fn byte_entropy_histogram_cancellable(
    data: &[u8],
    config: &StatsConfig,
    cancel: &AtomicBool,
) -> Result<[u64; ENTROPY_HISTOGRAM_LEN]> {
    run(data, config, Some(cancel))
}

fn run(
    data: &[u8],
    config: &StatsConfig,
    cancel: Option<&AtomicBool>,
) -> Result<[u64; ENTROPY_HISTOGRAM_LEN]> {
    config.validate()?;

    let plan = WindowPlan::new(data.len());
    if config.time_budget_secs.is_none() && cancel.is_none() {
        return Ok(if config.use_parallel(data.len()) {
            byte_entropy_histogram_par(data)
        } else {
            byte_entropy_histogram(data)
        });
    }

    debug!(
        len = data.len(),
        windows = plan.len(),
        budget_secs = ?config.time_budget_secs,
        parallel = config.use_parallel(data.len()),
        "computing bounded byte-entropy histogram"
    );

    let deadline = config.time_budget_secs.map(|seconds| {
        Deadline::new(seconds, "byte_entropy_histogram").with_check_interval(config.check_interval)
    });

    let acc = if config.use_parallel(data.len()) {
        scan_parallel(data, &plan, deadline.as_ref(), cancel)
    } else {
        scan_sequential(data, &plan, deadline.as_ref(), cancel)
    }
    .inspect_err(|e| warn!(error = %e, "byte-entropy histogram abandoned"))?;

    Ok(finish(&acc, &plan))
}

fn scan_sequential(
    data: &[u8],
    plan: &WindowPlan,
    deadline: Option<&Deadline>,
    cancel: Option<&AtomicBool>,
) -> Result<Accumulator> {
    let mut acc = Accumulator::new();
    for window in windows(data) {
        if let Some(deadline) = deadline {
            deadline.tick()?;
        }
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(BytestatsError::Cancelled {
                windows_done: acc.windows(),
                windows_total: plan.len(),
            });
        }
        let (bin, counts) = entropy_bin(window);
        acc.add_window(bin, &counts);
    }
    Ok(acc)
}

fn scan_parallel(
    data: &[u8],
    plan: &WindowPlan,
    deadline: Option<&Deadline>,
    cancel: Option<&AtomicBool>,
) -> Result<Accumulator> {
    let done = AtomicUsize::new(0);

    (0..plan.len())
        .into_par_iter()
        .filter_map(|k| plan.range(k))
        .try_fold(Accumulator::new, |mut acc, range| {
            if let Some(deadline) = deadline {
                deadline.tick()?;
            }
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                return Err(BytestatsError::Cancelled {
                    windows_done: done.load(Ordering::Relaxed),
                    windows_total: plan.len(),
                });
            }
            let (bin, counts) = entropy_bin(&data[range]);
            acc.add_window(bin, &counts);
            done.fetch_add(1, Ordering::Relaxed);
            Ok(acc)
        })
        .try_reduce(Accumulator::new, |a, b| Ok(a.merge(b)))
}

fn finish(acc: &Accumulator, plan: &WindowPlan) -> [u64; ENTROPY_HISTOGRAM_LEN] {
    debug_assert_eq!(acc.windows(), plan.len());
    debug_assert_eq!(acc.total(), plan.scanned_bytes() as u64);
    acc.flatten()
}
