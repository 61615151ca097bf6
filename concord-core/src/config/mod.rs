//! Engine configuration.
//!
//! One flat config struct with named presets. The presets replace the
//! original system's stacked "processing level" classes with concrete
//! numeric parameters.

pub mod defaults;

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Engine configuration. All fields have defaults; TOML overrides are
/// partial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Scorer worker budget. 0 means available parallelism.
    pub parallelism: usize,
    /// Resolution fails below this harmony score.
    pub min_harmony: f64,
    /// Result-size cap after aggregation.
    pub max_results: usize,
    /// Scorer batch deadline. `None` disables the deadline.
    pub scorer_deadline_ms: Option<u64>,
    /// Session TTL (short cache tier).
    pub session_ttl_secs: u64,
    /// Per-candidate signature cache TTL (long cache tier).
    pub signature_ttl_secs: u64,
    /// Backoff before the single store retry.
    pub retry_backoff_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Preset::Balanced.config()
    }
}

impl EngineConfig {
    /// Load from a TOML string; missing fields fall back to defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Effective scorer worker count.
    pub fn effective_parallelism(&self) -> usize {
        if self.parallelism > 0 {
            self.parallelism
        } else {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        }
    }
}

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Single-threaded, strict harmony bar, small result set.
    Minimal,
    /// Production defaults.
    Balanced,
    /// Wide fan-out, permissive harmony bar, large result set.
    Maximal,
}

impl Preset {
    pub fn config(self) -> EngineConfig {
        let base = EngineConfig {
            parallelism: 0,
            min_harmony: defaults::DEFAULT_MIN_HARMONY,
            max_results: defaults::DEFAULT_MAX_RESULTS,
            scorer_deadline_ms: None,
            session_ttl_secs: defaults::DEFAULT_SESSION_TTL_SECS,
            signature_ttl_secs: defaults::DEFAULT_SIGNATURE_TTL_SECS,
            retry_backoff_ms: defaults::DEFAULT_RETRY_BACKOFF_MS,
        };
        match self {
            Preset::Minimal => EngineConfig {
                parallelism: 1,
                min_harmony: 0.7,
                max_results: 5,
                ..base
            },
            Preset::Balanced => base,
            Preset::Maximal => EngineConfig {
                parallelism: 16,
                min_harmony: defaults::DEFAULT_MIN_HARMONY,
                max_results: 50,
                scorer_deadline_ms: Some(5_000),
                ..base
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_balanced() {
        assert_eq!(EngineConfig::default(), Preset::Balanced.config());
    }

    #[test]
    fn partial_toml_overrides_keep_defaults() {
        let cfg = EngineConfig::from_toml_str("min_harmony = 0.8\nmax_results = 3\n").unwrap();
        assert_eq!(cfg.min_harmony, 0.8);
        assert_eq!(cfg.max_results, 3);
        assert_eq!(cfg.session_ttl_secs, defaults::DEFAULT_SESSION_TTL_SECS);
    }

    #[test]
    fn presets_differ_where_it_matters() {
        assert_eq!(Preset::Minimal.config().parallelism, 1);
        assert!(Preset::Minimal.config().min_harmony > Preset::Balanced.config().min_harmony);
        assert!(Preset::Maximal.config().max_results > Preset::Balanced.config().max_results);
    }

    #[test]
    fn effective_parallelism_never_zero() {
        let cfg = EngineConfig::default();
        assert!(cfg.effective_parallelism() >= 1);
    }
}
