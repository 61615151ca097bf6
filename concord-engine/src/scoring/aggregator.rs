//! Result aggregator: merge signature batches into one ranked sequence.
//!
//! Implemented as a max-by-key reduction over candidate id. The reduction
//! is commutative and idempotent, so incremental batches may arrive in any
//! order, repeatedly, and the final ranked sequence is the same.

use std::collections::HashMap;

use concord_core::models::{CandidateSignature, ResolvedPolicy};

use super::sort_and_rank;

/// Merge any number of signature batches: dedupe by candidate id keeping
/// the highest computed score, rank under the policy's ordering, truncate
/// to `cap`.
pub fn aggregate<I>(policy: &ResolvedPolicy, batches: I, cap: usize) -> Vec<CandidateSignature>
where
    I: IntoIterator<Item = Vec<CandidateSignature>>,
{
    let mut best: HashMap<String, CandidateSignature> = HashMap::new();
    for batch in batches {
        for sig in batch {
            match best.get(&sig.candidate_id) {
                Some(existing) if existing.computed_score >= sig.computed_score => {}
                _ => {
                    best.insert(sig.candidate_id.clone(), sig);
                }
            }
        }
    }

    let mut merged: Vec<CandidateSignature> = best.into_values().collect();
    sort_and_rank(policy, &mut merged);
    merged.truncate(cap);
    merged
}
