//! Repeated and parallel runs produce identical output.

use bytestats::{byte_entropy_histogram, byte_entropy_histogram_par, byte_histogram, ByteStats};

use crate::common::{mixed_binary, pseudo_random};

#[test]
fn test_repeated_calls_are_identical() {
    let data = mixed_binary();
    assert_eq!(byte_histogram(&data), byte_histogram(&data));
    assert_eq!(byte_entropy_histogram(&data), byte_entropy_histogram(&data));
}

#[test]
fn test_parallel_driver_matches_sequential() {
    for len in [0usize, 100, 2048, 3 * 1024 * 1024 + 17] {
        let data = pseudo_random(len, 0xdead);
        assert_eq!(
            byte_entropy_histogram_par(&data),
            byte_entropy_histogram(&data),
            "len {len}"
        );
    }
}

#[test]
fn json_output_is_stable_for_same_input() -> anyhow::Result<()> {
    let data = mixed_binary();
    let j1 = ByteStats::compute(&data).to_json_string()?;
    let j2 = ByteStats::compute(&data).to_json_string()?;
    assert_eq!(j1, j2);

    let back = ByteStats::from_json_str(&j1)?;
    assert!(back.is_consistent(data.len()));
    Ok(())
}
