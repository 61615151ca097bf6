//! Trait seams to external collaborators.

mod candidate_source;
mod metrics;
mod session_store;
mod signature_cache;

pub use candidate_source::{ICandidateSource, VecCandidateSource};
pub use metrics::IMetricsSink;
pub use session_store::ISessionStore;
pub use signature_cache::ISignatureCache;
