use std::time::Duration;

/// Observability sink consumed by an external monitoring collaborator.
///
/// The engine reports through this seam; the no-op default keeps metrics
/// strictly optional.
pub trait IMetricsSink: Send + Sync {
    /// A policy was resolved with this harmony score.
    fn record_harmony(&self, score: f64);

    /// Resolution failed (harmony below minimum).
    fn record_resolution_failure(&self);

    /// A scoring batch finished.
    fn record_scored_batch(&self, scored: usize, malformed: usize, elapsed: Duration);

    fn record_cache_hit(&self);

    fn record_cache_miss(&self);

    fn record_cache_put_failure(&self);
}
