/// Concord system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tolerance for normalized objective weight sums.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Epsilon used when comparing computed scores for tie-breaking.
pub const SCORE_EPSILON: f64 = 1e-9;

/// Maximum running-aggregate size retained per session.
pub const MAX_SESSION_AGGREGATE: usize = 1000;

/// Number of next-action suggestions emitted per report.
pub const MAX_NEXT_ACTIONS: usize = 5;

/// Harmony below this value triggers a "relax an objective" suggestion.
pub const LOW_HARMONY_HINT: f64 = 0.7;
