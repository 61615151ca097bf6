//! MemorySessionStore: concurrent per-session access via DashMap.
//!
//! DashMap's per-key entry locks serialize writes to one session while
//! leaving distinct sessions fully independent, which is exactly the
//! single-writer-per-session guarantee the store contract requires.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use concord_core::errors::SessionError;
use concord_core::models::Session;
use concord_core::traits::ISessionStore;

/// Thread-safe in-memory session store.
///
/// An in-process store has no I/O to time out; the `SessionError` surface
/// exists for remote-backed implementations of the same contract.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Arc<DashMap<String, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-evicted) sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Mutate one session in place under its entry lock. Returns false if
    /// the session does not exist.
    pub fn update_session(&self, session_id: &str, f: impl FnOnce(&mut Session)) -> bool {
        match self.sessions.get_mut(session_id) {
            Some(mut entry) => {
                f(&mut entry);
                true
            }
            None => false,
        }
    }

    /// Explicitly close a session before its TTL.
    pub fn close_session(&self, session_id: &str) -> Option<Session> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }
}

impl ISessionStore for MemorySessionStore {
    fn get_session(&self, session_id: &str) -> Result<Option<Session>, SessionError> {
        let session = self.sessions.get(session_id).map(|r| r.clone());
        // An expired-but-not-yet-evicted session reads as not found.
        Ok(session.filter(|s| !s.is_expired(Utc::now())))
    }

    fn put_session(&self, session: &Session, ttl: Duration) -> Result<(), SessionError> {
        let mut stored = session.clone();
        stored.expires_at = Utc::now()
            + chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::days(365_000));
        self.sessions.insert(stored.session_id.clone(), stored);
        Ok(())
    }

    fn evict_expired(&self) -> Result<usize, SessionError> {
        let now = Utc::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, s| !s.is_expired(now));
        let evicted = before - self.sessions.len();
        if evicted > 0 {
            debug!(evicted, "evicted expired sessions");
        }
        Ok(evicted)
    }
}
