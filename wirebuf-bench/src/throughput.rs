//! Throughput accounting for encode/decode loops.

use std::time::{Duration, Instant};

/// Result of a throughput run.
#[derive(Debug, Clone)]
pub struct ThroughputResult {
    /// Total records processed.
    pub records: u64,
    /// Total bytes processed.
    pub bytes: u64,
    /// Total duration.
    pub duration: Duration,
}

impl ThroughputResult {
    /// Returns records per second.
    #[must_use]
    pub fn records_per_second(&self) -> f64 {
        self.records as f64 / self.duration.as_secs_f64()
    }

    /// Returns bytes per second.
    #[must_use]
    pub fn bytes_per_second(&self) -> f64 {
        self.bytes as f64 / self.duration.as_secs_f64()
    }

    /// Returns megabytes per second.
    #[must_use]
    pub fn mb_per_second(&self) -> f64 {
        self.bytes_per_second() / (1024.0 * 1024.0)
    }
}

/// Times `record_count` invocations of an encode or decode step.
///
/// The step reports the number of bytes it produced or consumed, so
/// framed records of varying size are accounted exactly rather than
/// assuming a fixed record width.
pub fn run_throughput<F>(record_count: u64, mut step: F) -> ThroughputResult
where
    F: FnMut() -> usize,
{
    let start = Instant::now();

    let mut bytes = 0u64;
    for _ in 0..record_count {
        bytes += step() as u64;
    }

    ThroughputResult {
        records: record_count,
        bytes,
        duration: start.elapsed(),
    }
}
