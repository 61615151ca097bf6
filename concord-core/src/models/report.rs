//! The materialized output of one request.

use serde::{Deserialize, Serialize};

use super::Diagnostic;

/// One ranked entry of the final result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate_id: String,
    pub score: f64,
    /// 1-based rank.
    pub rank: usize,
}

/// Structured, actionable output: ranked candidates, an explanation of
/// which conflicts were resolved and how, and suggested next actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub intent: String,
    pub top: Vec<RankedCandidate>,
    /// Human-readable lines describing each resolved conflict and the
    /// overall harmony.
    pub explanation: Vec<String>,
    pub harmony_score: f64,
    pub next_actions: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}
