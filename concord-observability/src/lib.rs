//! # concord-observability
//!
//! Metrics collectors implementing the engine's sink seam, plus tracing
//! subscriber setup. Consumed by an external monitoring collaborator via
//! serializable snapshots.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{MetricsCollector, MetricsSnapshot};
pub use tracing_setup::init_tracing;
