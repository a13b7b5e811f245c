//! Shared buffer generators for integration tests.

/// Deterministic pseudo-random bytes (LCG, high byte of the state).
pub fn pseudo_random(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng.wrapping_mul(1664525).wrapping_add(1013904223);
            (rng >> 24) as u8
        })
        .collect()
}

/// `0..=255` repeated until `len` bytes.
pub fn byte_cycle(len: usize) -> Vec<u8> {
    (0..=255u8).cycle().take(len).collect()
}

/// A PE-like layout: low-entropy header, text-like body, random tail.
pub fn mixed_binary() -> Vec<u8> {
    let mut data = b"MZ\x90\x00\x03\x00\x00\x00".to_vec();
    data.resize(4096, 0);
    data.extend(b"push rbp; mov rbp, rsp; call qword ptr [rip+0x2f]; ".repeat(400));
    data.extend(pseudo_random(48 * 1024, 0x5eed));
    data
}
