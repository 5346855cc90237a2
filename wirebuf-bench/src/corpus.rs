//! Deterministic sample data for benchmarks.
//!
//! Benchmarks must see the same byte streams on every run, so all
//! generators here are seeded and allocation-free in the hot path.

/// Instrument-style identifiers used by the key benchmarks.
pub const SYMBOLS: &[&str] = &[
    "EURUSD", "GBPUSD", "USDJPY", "AUDUSD", "USDCHF", "NZDUSD", "USDCAD", "EURGBP",
];

/// Small deterministic generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Xorshift {
    state: u64,
}

impl Xorshift {
    /// Creates a generator from a nonzero seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    /// Returns the next pseudo-random value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Generates `len` deterministic payload bytes from `seed`.
#[must_use]
pub fn payload(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xorshift::new(seed);
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        let word = rng.next_u64().to_le_bytes();
        let take = word.len().min(len - out.len());
        out.extend_from_slice(&word[..take]);
    }
    out
}

/// Generates `count` deterministic 64-bit values from `seed`.
#[must_use]
pub fn values(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = Xorshift::new(seed);
    (0..count).map(|_| rng.next_u64()).collect()
}
