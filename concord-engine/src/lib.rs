//! # concord-engine
//!
//! The conflict-aware recommendation pipeline:
//! extract → detect conflicts → resolve policy → score candidates in
//! parallel → aggregate → materialize, with the session store consulted at
//! the stage boundaries.

pub mod conflict;
pub mod engine;
pub mod extract;
pub mod materialize;
pub mod scoring;

pub use engine::RecommendEngine;
pub use extract::Extractor;
pub use scoring::scorer::CancelToken;
