//! Length, sum and placement properties of both feature vectors.

use bytestats::entropy::WindowPlan;
use bytestats::{byte_entropy_histogram, byte_histogram, ENTROPY_HISTOGRAM_LEN, STEP, WINDOW};

use crate::common::{byte_cycle, mixed_binary, pseudo_random};

#[test]
fn test_vector_lengths_for_any_size() {
    for len in [0usize, 1, 15, 2047, 2048, 2049, 3072, 100_000] {
        let data = pseudo_random(len, len as u64);
        assert_eq!(byte_histogram(&data).len(), 256);
        assert_eq!(byte_entropy_histogram(&data).len(), ENTROPY_HISTOGRAM_LEN);
    }
}

#[test]
fn test_byte_histogram_sums_to_length() {
    for len in [0usize, 1, 1000, 65_537] {
        let data = pseudo_random(len, 99);
        assert_eq!(byte_histogram(&data).iter().sum::<u64>(), len as u64);
    }
}

#[test]
fn test_repeated_byte_histogram() {
    let data = vec![0xc3u8; 777];
    let hist = byte_histogram(&data);
    assert_eq!(hist[0xc3], 777);
    assert_eq!(hist.iter().filter(|&&c| c != 0).count(), 1);
}

#[test]
fn test_constant_window_goes_to_row_zero() {
    for v in [0x00u8, 0x0f, 0x41, 0xff] {
        let out = byte_entropy_histogram(&vec![v; WINDOW]);
        let col = (v >> 4) as usize;
        assert_eq!(out[col], WINDOW as u64, "value {v:#x}");
        assert_eq!(out.iter().sum::<u64>(), WINDOW as u64);
    }
}

#[test]
fn test_uniform_window_goes_to_row_fifteen() {
    let out = byte_entropy_histogram(&byte_cycle(WINDOW));
    for (i, &c) in out.iter().enumerate() {
        let expected = if i >= 15 * 16 { 128 } else { 0 };
        assert_eq!(c, expected, "index {i}");
    }
}

#[test]
fn test_short_buffer_sum_is_its_length() {
    for len in [0usize, 1, 500, WINDOW - 1] {
        let out = byte_entropy_histogram(&pseudo_random(len, 5));
        assert_eq!(out.iter().sum::<u64>(), len as u64);
    }
}

#[test]
fn test_sum_counts_each_window_once() {
    let data = mixed_binary();
    let plan = WindowPlan::new(data.len());
    let out = byte_entropy_histogram(&data);
    assert_eq!(out.iter().sum::<u64>(), (plan.len() * WINDOW) as u64);
    assert!(plan.len() > 1);
}

#[test]
fn test_transition_window_bin() {
    // Windows: all zeros, half zeros and half cycle, full cycle.
    let mut data = vec![0u8; WINDOW];
    data.extend(byte_cycle(WINDOW));
    let out = byte_entropy_histogram(&data);

    let mut expected = [0u64; ENTROPY_HISTOGRAM_LEN];
    expected[0] = WINDOW as u64;
    // Middle window: 1024 zeros + 1024 cycle bytes, about 5.66 bits.
    expected[11 * 16] = 1024 + 64;
    for col in 1..16 {
        expected[11 * 16 + col] = 64;
    }
    for col in 0..16 {
        expected[15 * 16 + col] = 128;
    }
    assert_eq!(out, expected);
}

#[test]
fn test_tail_shorter_than_step_is_ignored() {
    let base = pseudo_random(WINDOW + 3 * STEP, 17);
    let mut extended = base.clone();
    extended.extend(pseudo_random(STEP - 1, 18));
    assert_eq!(byte_entropy_histogram(&base), byte_entropy_histogram(&extended));

    extended.push(0);
    assert_ne!(
        byte_entropy_histogram(&base).iter().sum::<u64>(),
        byte_entropy_histogram(&extended).iter().sum::<u64>()
    );
}
