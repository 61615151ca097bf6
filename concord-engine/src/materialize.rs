//! Output materializer: ranked sequence + policy → structured report.
//!
//! Pure transformation; never mutates its inputs.

use concord_core::constants::{LOW_HARMONY_HINT, MAX_NEXT_ACTIONS};
use concord_core::models::{
    CandidateSignature, Diagnostic, RankedCandidate, RecommendationReport, ResolvedPolicy,
};
use concord_core::objective::ConflictPair;

/// Build the final report from the ranked sequence, the resolved policy,
/// and everything observed along the way.
pub fn materialize(
    intent: &str,
    policy: &ResolvedPolicy,
    conflicts: &[ConflictPair],
    ranked: &[CandidateSignature],
    diagnostics: Vec<Diagnostic>,
) -> RecommendationReport {
    let top: Vec<RankedCandidate> = ranked
        .iter()
        .map(|sig| RankedCandidate {
            candidate_id: sig.candidate_id.clone(),
            score: sig.computed_score,
            rank: sig.rank,
        })
        .collect();

    let mut explanation = Vec::with_capacity(conflicts.len() + 1);
    for conflict in conflicts {
        explanation.push(format!(
            "balanced '{}' against '{}' ({} conflict): resolved weights {:.2} / {:.2}",
            conflict.first,
            conflict.second,
            conflict.severity,
            policy.weight_of(conflict.first),
            policy.weight_of(conflict.second),
        ));
    }
    if conflicts.is_empty() {
        explanation.push("no conflicting objectives detected".to_string());
    }
    explanation.push(format!(
        "harmony score {:.2} across {} objective(s)",
        policy.harmony_score,
        policy.tie_break.len()
    ));

    let mut next_actions: Vec<String> = top
        .iter()
        .take(MAX_NEXT_ACTIONS)
        .map(|c| {
            format!(
                "inspect candidate '{}' (rank {}, score {:.2})",
                c.candidate_id, c.rank, c.score
            )
        })
        .collect();
    if policy.harmony_score < LOW_HARMONY_HINT && !conflicts.is_empty() {
        next_actions.push(
            "relax one objective of each conflicting pair to raise harmony".to_string(),
        );
    }
    if top.is_empty() {
        next_actions.push("broaden the intent or supply more candidates".to_string());
    }

    RecommendationReport {
        intent: intent.to_string(),
        top,
        explanation,
        harmony_score: policy.harmony_score,
        next_actions,
        diagnostics,
    }
}
