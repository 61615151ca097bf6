//! Session: persisted continuity state for a conversation thread.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{CandidateSignature, ResolvedPolicy};

/// Continuity state for a sequence of related requests.
///
/// Created on the first request of a thread, updated on each subsequent
/// request, evicted after TTL or on explicit close. The store owns
/// sessions; the engine only reads/writes through the store contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    /// Policy resolved by the most recent request in this thread.
    pub policy: Option<ResolvedPolicy>,
    /// Running aggregate of the best signature seen per candidate.
    pub aggregate: Vec<CandidateSignature>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub queries_made: u64,
}

impl Session {
    /// Create a new session with the given TTL.
    pub fn new(session_id: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            policy: None,
            aggregate: Vec::new(),
            created_at: now,
            expires_at: now + ttl,
            queries_made: 0,
        }
    }

    /// Request-scoped session used when no thread id was supplied or the
    /// store is unavailable. Never persisted.
    pub fn ephemeral() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), Duration::zero())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Record a served request and push expiry out by the TTL.
    pub fn touch(&mut self, ttl: Duration) {
        self.queries_made += 1;
        self.expires_at = Utc::now() + ttl;
    }
}
