//! Central metrics registry.
//!
//! [`MetricsCollector`] owns all domain-specific collectors, records
//! through atomics so the engine can report via `&self`, and exposes a
//! serializable [`MetricsSnapshot`] for the monitoring collaborator.

pub mod resolve_metrics;
pub mod scoring_metrics;
pub mod session_metrics;

pub use resolve_metrics::{ResolveMetrics, ResolveSnapshot};
pub use scoring_metrics::{ScoringMetrics, ScoringSnapshot};
pub use session_metrics::{SessionMetrics, SessionSnapshot};

use std::time::Duration;

use serde::Serialize;

use concord_core::traits::IMetricsSink;

/// Central metrics registry.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    pub resolve: ResolveMetrics,
    pub scoring: ScoringMetrics,
    pub session: SessionMetrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point-in-time snapshot of all collectors.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            resolve: self.resolve.snapshot(),
            scoring: self.scoring.snapshot(),
            session: self.session.snapshot(),
        }
    }
}

impl IMetricsSink for MetricsCollector {
    fn record_harmony(&self, score: f64) {
        self.resolve.record_harmony(score);
    }

    fn record_resolution_failure(&self) {
        self.resolve.record_failure();
    }

    fn record_scored_batch(&self, scored: usize, malformed: usize, elapsed: Duration) {
        self.scoring.record_batch(scored, malformed, elapsed);
    }

    fn record_cache_hit(&self) {
        self.session.record_hit();
    }

    fn record_cache_miss(&self) {
        self.session.record_miss();
    }

    fn record_cache_put_failure(&self) {
        self.session.record_put_failure();
    }
}

/// Serializable view of all metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub resolve: ResolveSnapshot,
    pub scoring: ScoringSnapshot,
    pub session: SessionSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_records_flow_into_snapshot() {
        let collector = MetricsCollector::new();
        collector.record_harmony(0.8);
        collector.record_resolution_failure();
        collector.record_scored_batch(100, 2, Duration::from_millis(50));
        collector.record_cache_hit();
        collector.record_cache_miss();

        let snap = collector.snapshot();
        assert_eq!(snap.resolve.resolutions, 1);
        assert_eq!(snap.resolve.failures, 1);
        assert_eq!(snap.scoring.candidates_scored, 100);
        assert_eq!(snap.scoring.malformed, 2);
        assert_eq!(snap.session.hits, 1);
        assert_eq!(snap.session.misses, 1);
    }

    #[test]
    fn snapshot_serializes() {
        let collector = MetricsCollector::new();
        collector.record_harmony(0.9);
        let json = serde_json::to_value(collector.snapshot()).unwrap();
        assert!(json["resolve"]["avg_harmony"].is_number());
    }
}
