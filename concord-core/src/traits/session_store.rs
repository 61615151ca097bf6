use std::time::Duration;

use crate::errors::SessionError;
use crate::models::Session;

/// Session/cache store contract.
///
/// Any key-value or relational store satisfying this contract can back
/// sessions. Implementations must serialize writes per session id;
/// distinct sessions are fully independent. Store I/O is the only part of
/// the pipeline allowed to suspend, and it must honor its own timeout;
/// callers treat `Unavailable`/`Timeout` as degradable, never fatal.
pub trait ISessionStore: Send + Sync {
    /// Fetch a session. `Ok(None)` means not found (a success state).
    fn get_session(&self, session_id: &str) -> Result<Option<Session>, SessionError>;

    /// Persist a session with the given TTL, replacing any previous state.
    fn put_session(&self, session: &Session, ttl: Duration) -> Result<(), SessionError>;

    /// Drop all expired sessions; returns how many were evicted.
    fn evict_expired(&self) -> Result<usize, SessionError>;
}
