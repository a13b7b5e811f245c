//! Time budgets and cancellation never yield partial histograms.

use std::sync::atomic::AtomicBool;

use bytes::Bytes;
use bytestats::{
    byte_entropy_histogram, byte_entropy_histogram_cancellable, byte_entropy_histogram_with_config,
    ByteStats, BytestatsError, StatsConfig,
};

use crate::common::pseudo_random;

const LARGE: usize = 64 * 1024 * 1024;

fn every_window_checked(config: StatsConfig) -> StatsConfig {
    StatsConfig {
        check_interval: 1,
        ..config
    }
}

#[test]
fn test_exhausted_budget_is_an_error_sequential() {
    let data = vec![0x5au8; LARGE];
    let config = every_window_checked(StatsConfig::sequential().with_time_budget(0));
    let result = byte_entropy_histogram_with_config(&data, &config);
    assert!(matches!(result, Err(BytestatsError::Timeout { seconds: 0 })));
}

#[test]
fn test_exhausted_budget_is_an_error_parallel() {
    let data = vec![0x5au8; LARGE];
    let config = StatsConfig {
        parallel_threshold: 1,
        ..StatsConfig::default()
    }
    .with_time_budget(0);
    let result = byte_entropy_histogram_with_config(&data, &config);
    assert!(matches!(result, Err(BytestatsError::Timeout { seconds: 0 })));
}

#[test]
fn test_generous_budget_matches_unbounded() {
    let data = pseudo_random(512 * 1024, 1);
    let config = every_window_checked(StatsConfig::sequential().with_time_budget(600));
    assert_eq!(
        byte_entropy_histogram_with_config(&data, &config).unwrap(),
        byte_entropy_histogram(&data)
    );
}

#[test]
fn test_preset_cancel_flag() {
    let data = pseudo_random(16 * 1024, 2);
    let cancel = AtomicBool::new(true);
    let result = byte_entropy_histogram_cancellable(&data, &StatsConfig::sequential(), &cancel);
    assert!(matches!(
        result,
        Err(BytestatsError::Cancelled {
            windows_done: 0,
            windows_total: 15
        })
    ));
}

#[tokio::test]
async fn test_async_budget_exhaustion() {
    let data = Bytes::from(vec![0x5au8; LARGE]);
    let config = StatsConfig::sequential().with_time_budget(0);
    let result = ByteStats::compute_async(data, &config).await;
    assert!(matches!(result, Err(BytestatsError::Timeout { seconds: 0 })));
}

#[tokio::test]
async fn test_async_without_budget() {
    let data = pseudo_random(100_000, 3);
    let expected = ByteStats::compute(&data);
    let stats = ByteStats::compute_async(Bytes::from(data), &StatsConfig::default())
        .await
        .unwrap();
    assert_eq!(stats, expected);
}
