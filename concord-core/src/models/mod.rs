//! Shared model types passed between pipeline stages.

mod candidate;
mod diagnostics;
mod policy;
mod report;
mod request;
mod session;

pub use candidate::{Candidate, CandidateSignature};
pub use diagnostics::Diagnostic;
pub use policy::ResolvedPolicy;
pub use report::{RankedCandidate, RecommendationReport};
pub use request::RecommendRequest;
pub use session::Session;
