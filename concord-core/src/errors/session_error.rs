/// Session-store infra errors. Transient; never fatal to a request.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("session store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("session store timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },
}
