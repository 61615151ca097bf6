//! Candidates and their scored signatures.

use serde::{Deserialize, Serialize};

/// A raw recommendation candidate: an id plus one scalar metric per
/// scoring dimension, supplied by an external candidate source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub metrics: Vec<f64>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, metrics: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            metrics,
        }
    }
}

/// The scored representation of one candidate under a given policy.
///
/// Never mutated after scoring; re-scoring creates a new signature.
/// `computed_score` is a deterministic function of (policy, metrics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSignature {
    pub candidate_id: String,
    /// Raw metric vector, one scalar per scoring dimension.
    pub metrics: Vec<f64>,
    pub computed_score: f64,
    /// 1-based rank; 0 until assigned by ranking/aggregation.
    pub rank: usize,
}

impl CandidateSignature {
    /// Basis index of this candidate's strongest metric dimension
    /// (lowest index wins exact ties).
    pub fn strongest_dimension(&self) -> usize {
        let mut best = 0;
        for (i, &m) in self.metrics.iter().enumerate() {
            if m > self.metrics[best] {
                best = i;
            }
        }
        best
    }
}
