//! Candidate scorer: parallel fan-out over the candidate set.
//!
//! Every scoring unit is independent and side-effect-free; it reads only
//! the shared immutable policy, so no locking is involved and the fan-out
//! may run in any order. The final sort restores a single deterministic
//! ranking whatever the parallelism budget was.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::warn;

use concord_core::models::{Candidate, CandidateSignature, Diagnostic, ResolvedPolicy};

use super::sort_and_rank;

/// Cooperative cancellation handle for an in-flight scoring batch.
///
/// Cancellation stops issuing further work; signatures already produced
/// stay usable by the aggregator.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Result of one scoring batch.
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    /// Ranked signatures, best first.
    pub signatures: Vec<CandidateSignature>,
    /// Malformed-candidate and timeout diagnostics.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether the batch was cancelled before completing.
    pub cancelled: bool,
}

enum Unit {
    Scored(CandidateSignature),
    Malformed(Diagnostic),
    Skipped,
}

/// Score a candidate batch under a resolved policy.
///
/// `parallelism` bounds the worker pool. A candidate with the wrong metric
/// dimensionality (or non-finite metrics) is skipped and recorded as a
/// `MalformedCandidate` diagnostic; it never aborts the batch. Passing the
/// deadline stops issuing work and tags the outcome with a `Timeout`
/// diagnostic.
pub fn score_batch(
    policy: &ResolvedPolicy,
    candidates: &[Candidate],
    parallelism: usize,
    cancel: &CancelToken,
    deadline: Option<Instant>,
) -> ScoreOutcome {
    let units: Vec<Unit> = match rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism.max(1))
        .build()
    {
        Ok(pool) => pool.install(|| {
            candidates
                .par_iter()
                .map(|c| score_one(policy, c, cancel, deadline))
                .collect()
        }),
        Err(e) => {
            warn!(error = %e, "scorer pool unavailable; scoring serially");
            candidates
                .iter()
                .map(|c| score_one(policy, c, cancel, deadline))
                .collect()
        }
    };

    let mut signatures = Vec::with_capacity(candidates.len());
    let mut diagnostics = Vec::new();
    let mut skipped = 0usize;
    for unit in units {
        match unit {
            Unit::Scored(sig) => signatures.push(sig),
            Unit::Malformed(diag) => diagnostics.push(diag),
            Unit::Skipped => skipped += 1,
        }
    }

    let deadline_hit = deadline.is_some_and(|d| Instant::now() >= d);
    if skipped > 0 && deadline_hit && !cancel.is_cancelled() {
        diagnostics.push(Diagnostic::Timeout {
            stage: "scorer".to_string(),
        });
    }

    sort_and_rank(policy, &mut signatures);

    ScoreOutcome {
        signatures,
        diagnostics,
        cancelled: cancel.is_cancelled(),
    }
}

fn score_one(
    policy: &ResolvedPolicy,
    candidate: &Candidate,
    cancel: &CancelToken,
    deadline: Option<Instant>,
) -> Unit {
    if cancel.is_cancelled() || deadline.is_some_and(|d| Instant::now() >= d) {
        return Unit::Skipped;
    }

    let expected = policy.dimensions();
    if candidate.metrics.len() != expected || candidate.metrics.iter().any(|m| !m.is_finite()) {
        return Unit::Malformed(Diagnostic::MalformedCandidate {
            candidate_id: candidate.id.clone(),
            expected_dims: expected,
            actual_dims: candidate.metrics.len(),
        });
    }

    let score: f64 = policy
        .weights
        .iter()
        .zip(&candidate.metrics)
        .map(|(w, m)| w * m)
        .sum();

    Unit::Scored(CandidateSignature {
        candidate_id: candidate.id.clone(),
        metrics: candidate.metrics.clone(),
        computed_score: score,
        rank: 0,
    })
}
