#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let stats = bytestats::ByteStats::compute(data);
    assert!(stats.is_consistent(data.len()));
    assert_eq!(
        bytestats::byte_entropy_histogram_par(data).to_vec(),
        stats.byte_entropy
    );
});
