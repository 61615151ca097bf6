use crate::models::CandidateSignature;

/// Long-TTL per-candidate signature cache, keyed by policy fingerprint.
///
/// A signature cached under a fingerprint is valid for any request that
/// resolves to the identical policy, since scoring is deterministic in
/// (policy, metrics).
pub trait ISignatureCache: Send + Sync {
    fn get(&self, fingerprint: &str, candidate_id: &str) -> Option<CandidateSignature>;

    fn put(&self, fingerprint: &str, signature: &CandidateSignature);
}
