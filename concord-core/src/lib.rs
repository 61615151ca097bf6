//! # concord-core
//!
//! Foundation crate for the Concord recommendation engine.
//! Defines the objective vocabulary, conflict registry, policies, sessions,
//! errors, config, and the trait seams every other crate depends on.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod objective;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{EngineConfig, Preset};
pub use errors::{ConcordError, ConcordResult, ResolveError, SessionError};
pub use models::{
    Candidate, CandidateSignature, Diagnostic, RecommendRequest, RecommendationReport,
    ResolvedPolicy, Session,
};
pub use objective::{ConflictPair, Direction, Objective, ObjectiveName, ObjectiveSet, Severity};
