//! Error taxonomy.
//!
//! Input-validation errors (`ResolveError`) return directly to the caller;
//! infra errors (`SessionError`) are retried once at the store boundary and
//! then degrade to request-scoped state instead of failing the request.

mod resolve_error;
mod session_error;

pub use resolve_error::ResolveError;
pub use session_error::SessionError;

/// Top-level error for the Concord engine.
#[derive(Debug, thiserror::Error)]
pub enum ConcordError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

pub type ConcordResult<T> = Result<T, ConcordError>;
