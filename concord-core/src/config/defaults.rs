//! Default configuration values.

/// Minimum acceptable harmony score for a resolved policy.
pub const DEFAULT_MIN_HARMONY: f64 = 0.5;

/// Default result-size cap.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Session TTL: the short-lived per-request tier (minutes).
pub const DEFAULT_SESSION_TTL_SECS: u64 = 900;

/// Signature-cache TTL: the long-lived per-candidate tier (hours to a day).
pub const DEFAULT_SIGNATURE_TTL_SECS: u64 = 86_400;

/// Base backoff before the single store retry.
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 50;
