//! # concord-session
//!
//! Store-contract implementations: a DashMap-backed in-memory session
//! store and a moka-backed long-TTL candidate-signature cache.

pub mod signature_cache;
pub mod store;

pub use signature_cache::SignatureCache;
pub use store::MemorySessionStore;
