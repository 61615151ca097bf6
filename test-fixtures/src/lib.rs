//! Shared fixtures: deterministic candidate generation and
//! failure-injection session-store doubles used across the workspace.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use concord_core::errors::SessionError;
use concord_core::models::{Candidate, Session};
use concord_core::objective::ObjectiveName;
use concord_core::traits::ISessionStore;

/// Deterministic pseudo-random walk (splitmix64). Same seed, same stream.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Generate `n` candidates with full-basis metric vectors in [0, 1),
/// deterministically from `seed`.
pub fn candidate_set(seed: u64, n: usize) -> Vec<Candidate> {
    let mut state = seed;
    (0..n)
        .map(|i| {
            let metrics = (0..ObjectiveName::BASIS_LEN)
                .map(|_| (splitmix64(&mut state) >> 11) as f64 / (1u64 << 53) as f64)
                .collect();
            Candidate::new(format!("repo-{seed}-{i:04}"), metrics)
        })
        .collect()
}

/// Session store that always fails. Degradation-path fixture.
#[derive(Default)]
pub struct UnavailableSessionStore;

impl ISessionStore for UnavailableSessionStore {
    fn get_session(&self, _session_id: &str) -> Result<Option<Session>, SessionError> {
        Err(SessionError::Unavailable {
            reason: "store offline".to_string(),
        })
    }

    fn put_session(&self, _session: &Session, _ttl: Duration) -> Result<(), SessionError> {
        Err(SessionError::Unavailable {
            reason: "store offline".to_string(),
        })
    }

    fn evict_expired(&self) -> Result<usize, SessionError> {
        Err(SessionError::Unavailable {
            reason: "store offline".to_string(),
        })
    }
}

/// Session store whose writes time out while reads succeed (empty).
/// Exercises the persist-failure path in isolation.
#[derive(Default)]
pub struct PutTimeoutSessionStore {
    put_attempts: AtomicU64,
}

impl PutTimeoutSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `put_session` was attempted (includes retries).
    pub fn put_attempts(&self) -> u64 {
        self.put_attempts.load(Ordering::Relaxed)
    }
}

impl ISessionStore for PutTimeoutSessionStore {
    fn get_session(&self, _session_id: &str) -> Result<Option<Session>, SessionError> {
        Ok(None)
    }

    fn put_session(&self, _session: &Session, _ttl: Duration) -> Result<(), SessionError> {
        self.put_attempts.fetch_add(1, Ordering::Relaxed);
        Err(SessionError::Timeout { elapsed_ms: 250 })
    }

    fn evict_expired(&self) -> Result<usize, SessionError> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_set_is_deterministic() {
        assert_eq!(candidate_set(42, 10), candidate_set(42, 10));
        assert_ne!(candidate_set(42, 10), candidate_set(43, 10));
    }

    #[test]
    fn candidates_have_full_basis_metrics() {
        for c in candidate_set(7, 5) {
            assert_eq!(c.metrics.len(), ObjectiveName::BASIS_LEN);
            assert!(c.metrics.iter().all(|m| (0.0..1.0).contains(m)));
        }
    }
}
