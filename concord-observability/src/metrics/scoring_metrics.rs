//! Scorer throughput and malformed-candidate counts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Default)]
pub struct ScoringMetrics {
    batches: AtomicU64,
    candidates_scored: AtomicU64,
    malformed: AtomicU64,
    elapsed_micros: AtomicU64,
}

impl ScoringMetrics {
    pub fn record_batch(&self, scored: usize, malformed: usize, elapsed: Duration) {
        self.batches.fetch_add(1, Ordering::Relaxed);
        self.candidates_scored
            .fetch_add(scored as u64, Ordering::Relaxed);
        self.malformed.fetch_add(malformed as u64, Ordering::Relaxed);
        self.elapsed_micros
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
    }

    /// Candidates scored per second across all batches.
    pub fn throughput(&self) -> f64 {
        let micros = self.elapsed_micros.load(Ordering::Relaxed);
        if micros == 0 {
            return 0.0;
        }
        self.candidates_scored.load(Ordering::Relaxed) as f64 / (micros as f64 / 1e6)
    }

    pub fn snapshot(&self) -> ScoringSnapshot {
        ScoringSnapshot {
            batches: self.batches.load(Ordering::Relaxed),
            candidates_scored: self.candidates_scored.load(Ordering::Relaxed),
            malformed: self.malformed.load(Ordering::Relaxed),
            throughput_per_sec: self.throughput(),
        }
    }
}

/// Serializable scorer metrics view.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringSnapshot {
    pub batches: u64,
    pub candidates_scored: u64,
    pub malformed: u64,
    pub throughput_per_sec: f64,
}
