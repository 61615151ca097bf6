//! RecommendEngine: orchestrates the full pipeline.
//!
//! extract → detect → resolve → score (parallel fan-out) → aggregate →
//! materialize, with the session store consulted and updated at the stage
//! boundaries. Store failures degrade to request-scoped state; they are
//! never fatal to the request.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use concord_core::config::EngineConfig;
use concord_core::constants::MAX_SESSION_AGGREGATE;
use concord_core::errors::{ConcordResult, SessionError};
use concord_core::models::{
    Candidate, CandidateSignature, Diagnostic, RecommendRequest, RecommendationReport, Session,
};
use concord_core::traits::{ICandidateSource, IMetricsSink, ISessionStore, ISignatureCache};

use crate::conflict;
use crate::extract::Extractor;
use crate::materialize;
use crate::scoring::scorer::{self, CancelToken};
use crate::scoring::aggregator;

/// The main recommendation engine.
pub struct RecommendEngine<'a> {
    store: &'a dyn ISessionStore,
    signature_cache: Option<&'a dyn ISignatureCache>,
    metrics: Option<Arc<dyn IMetricsSink>>,
    extractor: Extractor,
    config: EngineConfig,
}

impl<'a> RecommendEngine<'a> {
    pub fn new(store: &'a dyn ISessionStore, config: EngineConfig) -> Self {
        Self {
            store,
            signature_cache: None,
            metrics: None,
            extractor: Extractor::new(),
            config,
        }
    }

    /// Attach a long-TTL per-candidate signature cache.
    pub fn with_signature_cache(mut self, cache: &'a dyn ISignatureCache) -> Self {
        self.signature_cache = Some(cache);
        self
    }

    /// Attach a metrics sink.
    pub fn with_metrics(mut self, metrics: Arc<dyn IMetricsSink>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Serve one request.
    pub fn recommend(
        &self,
        request: &RecommendRequest,
        source: &dyn ICandidateSource,
    ) -> ConcordResult<RecommendationReport> {
        self.recommend_with_cancel(request, source, &CancelToken::new())
    }

    /// Serve one request with a cooperative cancellation token for the
    /// scoring batch. Signatures produced before cancellation still
    /// aggregate.
    pub fn recommend_with_cancel(
        &self,
        request: &RecommendRequest,
        source: &dyn ICandidateSource,
        cancel: &CancelToken,
    ) -> ConcordResult<RecommendationReport> {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();

        // Stage 1: extract objectives. Validation errors return directly;
        // no session state has been touched yet.
        let objectives = self.extractor.extract(&request.intent, &request.overrides)?;
        debug!(objectives = objectives.len(), intent = %request.intent, "extracted objectives");

        // Stage 2: detect conflicts (empty is a success state).
        let conflicts = conflict::detect(&objectives);
        debug!(conflicts = conflicts.len(), "conflict detection complete");

        // Stage 3: resolve into a single policy.
        let policy = match conflict::resolve(&objectives, &conflicts, self.config.min_harmony) {
            Ok(policy) => policy,
            Err(e) => {
                if let Some(m) = &self.metrics {
                    m.record_resolution_failure();
                }
                return Err(e.into());
            }
        };
        if let Some(m) = &self.metrics {
            m.record_harmony(policy.harmony_score);
        }
        info!(
            harmony = policy.harmony_score,
            conflicts = conflicts.len(),
            "policy resolved"
        );

        // Session lookup happens only after input validation passed.
        let session_ttl = Duration::from_secs(self.config.session_ttl_secs);
        let (mut session, persist) = self.load_session(request, &mut diagnostics);

        // Stage 4: score the candidate set, probing the signature cache
        // first where one is attached.
        let mut candidates: Vec<Candidate> =
            Vec::with_capacity(source.len_hint().unwrap_or(0));
        candidates.extend(source.candidates());

        let fingerprint = policy.fingerprint();
        let mut cached: Vec<CandidateSignature> = Vec::new();
        let to_score: Vec<Candidate> = match self.signature_cache {
            Some(cache) => candidates
                .into_iter()
                .filter(|c| {
                    if let Some(sig) = cache.get(&fingerprint, &c.id) {
                        if let Some(m) = &self.metrics {
                            m.record_cache_hit();
                        }
                        cached.push(sig);
                        false
                    } else {
                        if let Some(m) = &self.metrics {
                            m.record_cache_miss();
                        }
                        true
                    }
                })
                .collect(),
            None => candidates,
        };

        let parallelism = request
            .parallelism
            .unwrap_or_else(|| self.config.effective_parallelism());
        let deadline = self
            .config
            .scorer_deadline_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        let started = Instant::now();
        let outcome = scorer::score_batch(&policy, &to_score, parallelism, cancel, deadline);
        let elapsed = started.elapsed();

        let malformed = outcome
            .diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::MalformedCandidate { .. }))
            .count();
        if let Some(m) = &self.metrics {
            m.record_scored_batch(outcome.signatures.len(), malformed, elapsed);
        }
        info!(
            scored = outcome.signatures.len(),
            cached = cached.len(),
            malformed,
            cancelled = outcome.cancelled,
            ?elapsed,
            "scoring batch complete"
        );

        if let Some(cache) = self.signature_cache {
            for sig in &outcome.signatures {
                cache.put(&fingerprint, sig);
            }
        }
        diagnostics.extend(outcome.diagnostics);

        // Stage 5: aggregate with the session's running aggregate.
        let previous = std::mem::take(&mut session.aggregate);
        let merged = aggregator::aggregate(
            &policy,
            vec![previous, cached, outcome.signatures],
            MAX_SESSION_AGGREGATE,
        );

        // Stage 6: update and persist the session.
        session.policy = Some(policy.clone());
        session.aggregate = merged.clone();
        session.touch(chrono::Duration::seconds(self.config.session_ttl_secs as i64));
        if persist {
            if let Err(e) = self.with_retry(|| self.store.put_session(&session, session_ttl)) {
                warn!(error = %e, "session persist failed; continuing with request-scoped state");
                if let Some(m) = &self.metrics {
                    m.record_cache_put_failure();
                }
                diagnostics.push(Diagnostic::CacheUnavailable {
                    reason: e.to_string(),
                });
            }
        }

        // Stage 7: materialize the report from the top of the aggregate.
        let cap = request.max_results.unwrap_or(self.config.max_results);
        let top = &merged[..cap.min(merged.len())];
        Ok(materialize::materialize(
            &request.intent,
            &policy,
            &conflicts,
            top,
            diagnostics,
        ))
    }

    /// Fetch or create the request's session. A store failure (after one
    /// retry) degrades to an ephemeral session and records a diagnostic.
    fn load_session(
        &self,
        request: &RecommendRequest,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> (Session, bool) {
        let ttl = chrono::Duration::seconds(self.config.session_ttl_secs as i64);
        match &request.session_id {
            None => (Session::ephemeral(), false),
            Some(id) => match self.with_retry(|| self.store.get_session(id)) {
                Ok(Some(session)) => (session, true),
                Ok(None) => (Session::new(id.clone(), ttl), true),
                Err(e) => {
                    warn!(session_id = %id, error = %e, "session load failed; degrading");
                    diagnostics.push(Diagnostic::CacheUnavailable {
                        reason: e.to_string(),
                    });
                    (Session::new(id.clone(), ttl), false)
                }
            },
        }
    }

    /// One retry with backoff for transient store errors.
    fn with_retry<T>(
        &self,
        op: impl Fn() -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        match op() {
            Ok(v) => Ok(v),
            Err(first) => {
                debug!(error = %first, "store call failed; retrying after backoff");
                std::thread::sleep(Duration::from_millis(self.config.retry_backoff_ms));
                op()
            }
        }
    }
}
