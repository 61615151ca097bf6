//! Per-request diagnostics carried into the final report.

use serde::{Deserialize, Serialize};

/// Non-fatal conditions observed while serving a request. Nothing in the
/// pipeline may drop a candidate or degrade a collaborator without
/// recording one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A candidate was skipped because its metric vector was unusable.
    MalformedCandidate {
        candidate_id: String,
        expected_dims: usize,
        actual_dims: usize,
    },
    /// The session store degraded to request-scoped state.
    CacheUnavailable { reason: String },
    /// A stage hit its deadline; partial results were kept.
    Timeout { stage: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MalformedCandidate {
                candidate_id,
                expected_dims,
                actual_dims,
            } => write!(
                f,
                "malformed candidate {candidate_id}: expected {expected_dims} metric \
                 dimensions, got {actual_dims}"
            ),
            Diagnostic::CacheUnavailable { reason } => {
                write!(f, "session store unavailable ({reason}); request-scoped state used")
            }
            Diagnostic::Timeout { stage } => {
                write!(f, "{stage} deadline hit; partial results kept")
            }
        }
    }
}
