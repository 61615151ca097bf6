//! Long-TTL candidate-signature cache backed by moka.
//!
//! Keys combine the policy fingerprint with the candidate id: scoring is
//! deterministic in (policy, metrics), so a cached signature is valid for
//! any later request resolving to the identical policy.

use std::time::Duration;

use moka::sync::Cache;

use concord_core::models::CandidateSignature;
use concord_core::traits::ISignatureCache;

/// The long cache tier (hours to a day) of the store contract.
pub struct SignatureCache {
    cache: Cache<String, CandidateSignature>,
}

impl SignatureCache {
    /// Create a cache bounded by entry count with the given TTL.
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    /// Approximate number of cached signatures.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    fn key(fingerprint: &str, candidate_id: &str) -> String {
        format!("{fingerprint}:{candidate_id}")
    }
}

impl ISignatureCache for SignatureCache {
    fn get(&self, fingerprint: &str, candidate_id: &str) -> Option<CandidateSignature> {
        self.cache.get(&Self::key(fingerprint, candidate_id))
    }

    fn put(&self, fingerprint: &str, signature: &CandidateSignature) {
        self.cache
            .insert(Self::key(fingerprint, &signature.candidate_id), signature.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(id: &str, score: f64) -> CandidateSignature {
        CandidateSignature {
            candidate_id: id.into(),
            metrics: vec![score; 3],
            computed_score: score,
            rank: 0,
        }
    }

    #[test]
    fn insert_and_get_by_fingerprint() {
        let cache = SignatureCache::new(100, Duration::from_secs(3600));
        cache.put("fp-1", &sig("repo-a", 0.8));
        let hit = cache.get("fp-1", "repo-a").unwrap();
        assert_eq!(hit.computed_score, 0.8);
    }

    #[test]
    fn different_policy_fingerprint_misses() {
        let cache = SignatureCache::new(100, Duration::from_secs(3600));
        cache.put("fp-1", &sig("repo-a", 0.8));
        assert!(cache.get("fp-2", "repo-a").is_none());
    }

    #[test]
    fn clear_empties_cache() {
        let cache = SignatureCache::new(100, Duration::from_secs(3600));
        cache.put("fp-1", &sig("repo-a", 0.8));
        cache.clear();
        assert!(cache.get("fp-1", "repo-a").is_none());
    }
}
