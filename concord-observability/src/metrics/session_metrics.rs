//! Cache hit rate and session-store degradation counts.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

#[derive(Debug, Default)]
pub struct SessionMetrics {
    hits: AtomicU64,
    misses: AtomicU64,
    put_failures: AtomicU64,
}

impl SessionMetrics {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_put_failure(&self) {
        self.put_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        if total == 0 {
            return 0.0;
        }
        hits as f64 / total as f64
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            put_failures: self.put_failures.load(Ordering::Relaxed),
            hit_rate: self.hit_rate(),
        }
    }
}

/// Serializable session/cache metrics view.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub put_failures: u64,
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_rate_over_hits_and_misses() {
        let m = SessionMetrics::default();
        m.record_hit();
        m.record_hit();
        m.record_miss();
        assert!((m.hit_rate() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_metrics_have_zero_rate() {
        let m = SessionMetrics::default();
        assert_eq!(m.hit_rate(), 0.0);
    }
}
