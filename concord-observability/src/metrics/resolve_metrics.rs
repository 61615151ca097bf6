//! Harmony-score distribution and conflict-resolution failure rate.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Histogram bucket upper bounds for harmony scores.
const BUCKET_BOUNDS: [f64; 5] = [0.25, 0.5, 0.75, 0.9, 1.0];

/// Resolver metrics: harmony distribution plus failure counts.
#[derive(Debug, Default)]
pub struct ResolveMetrics {
    buckets: [AtomicU64; 5],
    resolutions: AtomicU64,
    failures: AtomicU64,
    harmony_sum_micros: AtomicU64,
}

impl ResolveMetrics {
    pub fn record_harmony(&self, score: f64) {
        let clamped = score.clamp(0.0, 1.0);
        let idx = BUCKET_BOUNDS
            .iter()
            .position(|&b| clamped <= b)
            .unwrap_or(BUCKET_BOUNDS.len() - 1);
        self.buckets[idx].fetch_add(1, Ordering::Relaxed);
        self.resolutions.fetch_add(1, Ordering::Relaxed);
        self.harmony_sum_micros
            .fetch_add((clamped * 1e6) as u64, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Share of resolution attempts that failed.
    pub fn failure_rate(&self) -> f64 {
        let ok = self.resolutions.load(Ordering::Relaxed);
        let failed = self.failures.load(Ordering::Relaxed);
        let total = ok + failed;
        if total == 0 {
            return 0.0;
        }
        failed as f64 / total as f64
    }

    /// Mean harmony over successful resolutions.
    pub fn avg_harmony(&self) -> f64 {
        let n = self.resolutions.load(Ordering::Relaxed);
        if n == 0 {
            return 0.0;
        }
        self.harmony_sum_micros.load(Ordering::Relaxed) as f64 / 1e6 / n as f64
    }

    pub fn snapshot(&self) -> ResolveSnapshot {
        ResolveSnapshot {
            harmony_buckets: std::array::from_fn(|i| self.buckets[i].load(Ordering::Relaxed)),
            resolutions: self.resolutions.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            failure_rate: self.failure_rate(),
            avg_harmony: self.avg_harmony(),
        }
    }
}

/// Serializable resolver metrics view.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveSnapshot {
    /// Counts per bucket: ≤0.25, ≤0.5, ≤0.75, ≤0.9, ≤1.0.
    pub harmony_buckets: [u64; 5],
    pub resolutions: u64,
    pub failures: u64,
    pub failure_rate: f64,
    pub avg_harmony: f64,
}
