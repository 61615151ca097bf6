//! ResolvedPolicy: the single coherent scoring policy of one request.

use serde::{Deserialize, Serialize};

use crate::objective::ObjectiveName;

/// One request's resolved scoring policy: a signed weight vector over the
/// fixed scoring-dimension basis, a tie-break order, and a harmony score.
///
/// Immutable after creation. Scoring units share it read-only, so no
/// locking is ever needed around a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPolicy {
    /// One signed weight per basis dimension (`ObjectiveName::ALL` order).
    /// Minimize-direction objectives carry negative sign; absent objectives
    /// carry zero.
    pub weights: Vec<f64>,
    /// Requested objectives ordered by original weight descending, ties
    /// broken by basis order.
    pub tie_break: Vec<ObjectiveName>,
    /// Confidence in [0, 1] that the policy balances all requested
    /// objectives. 1.0 when the request had no registered conflicts.
    pub harmony_score: f64,
}

impl ResolvedPolicy {
    /// Number of scoring dimensions.
    pub fn dimensions(&self) -> usize {
        self.weights.len()
    }

    /// Weight assigned to a specific objective.
    pub fn weight_of(&self, name: ObjectiveName) -> f64 {
        self.weights[name.basis_index()]
    }

    /// Position of an objective in the tie-break order; `usize::MAX` for
    /// objectives outside the request.
    pub fn tie_break_position(&self, name: ObjectiveName) -> usize {
        self.tie_break
            .iter()
            .position(|&o| o == name)
            .unwrap_or(usize::MAX)
    }

    /// Content fingerprint keying the per-candidate signature cache.
    /// Identical policies always produce identical fingerprints.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for w in &self.weights {
            hasher.update(&w.to_le_bytes());
        }
        for o in &self.tie_break {
            hasher.update(o.as_str().as_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}
