/// A named input payload.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Deterministic pseudo-random bytes (xorshift), so runs are comparable.
pub fn pseudo_random(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state.to_le_bytes()[0]
        })
        .collect()
}

pub fn synthetic_datasets() -> Vec<Dataset> {
    [("random_64", 64), ("random_4k", 4096), ("random_64k", 65536)]
        .into_iter()
        .map(|(name, len)| Dataset {
            name: name.to_string(),
            bytes: pseudo_random(len, 0x9e37_79b9_7f4a_7c15),
        })
        .collect()
}

/// The small datasets only, for `BENCH_FAST` runs.
pub fn fast_datasets() -> Vec<Dataset> {
    synthetic_datasets()
        .into_iter()
        .filter(|d| d.bytes.len() <= 4096)
        .collect()
}
