//! Parallel candidate scoring and batch aggregation.

pub mod aggregator;
pub mod scorer;

use std::cmp::Ordering;

use concord_core::constants::SCORE_EPSILON;
use concord_core::models::{CandidateSignature, ResolvedPolicy};
use concord_core::objective::ObjectiveName;

/// Total ranking order shared by the scorer and the aggregator.
///
/// Scores are compared in epsilon buckets; inside a bucket the candidate
/// whose strongest metric dimension sits earlier in the policy's tie-break
/// order wins, and candidate id decides the rest. The order is total, so
/// sorting is deterministic regardless of parallelism.
pub(crate) fn ranking_cmp(
    policy: &ResolvedPolicy,
    a: &CandidateSignature,
    b: &CandidateSignature,
) -> Ordering {
    let bucket_a = score_bucket(a.computed_score);
    let bucket_b = score_bucket(b.computed_score);
    bucket_b
        .total_cmp(&bucket_a)
        .then_with(|| tie_position(policy, a).cmp(&tie_position(policy, b)))
        .then_with(|| a.candidate_id.cmp(&b.candidate_id))
}

/// Sort descending under the ranking order and assign 1-based ranks.
pub(crate) fn sort_and_rank(policy: &ResolvedPolicy, signatures: &mut [CandidateSignature]) {
    signatures.sort_by(|a, b| ranking_cmp(policy, a, b));
    for (i, sig) in signatures.iter_mut().enumerate() {
        sig.rank = i + 1;
    }
}

// Kept in f64: rounding merges scores within epsilon of each other, and
// above 2^53 (where rounding is the identity) the comparison degrades to
// a plain score comparison instead of saturating.
fn score_bucket(score: f64) -> f64 {
    (score / SCORE_EPSILON).round()
}

fn tie_position(policy: &ResolvedPolicy, sig: &CandidateSignature) -> usize {
    let strongest = ObjectiveName::ALL[sig.strongest_dimension()];
    policy.tie_break_position(strongest)
}
