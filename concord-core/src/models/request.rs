//! The request surface.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One recommendation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendRequest {
    /// Free-text user intent.
    pub intent: String,
    /// Explicit objective weight overrides, name → weight. Names outside
    /// the registered vocabulary are rejected.
    pub overrides: HashMap<String, f64>,
    /// Thread id for session continuity. `None` means request-scoped state.
    pub session_id: Option<String>,
    /// Parallelism budget for the scorer. `None` means available
    /// parallelism.
    pub parallelism: Option<usize>,
    /// Result-size cap. `None` means the configured default.
    pub max_results: Option<usize>,
}

impl RecommendRequest {
    pub fn from_intent(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Self::default()
        }
    }
}
