//! Objective extraction: intent text → validated, normalized objective set.
//!
//! Extraction is keyword classification against a hardcoded per-objective
//! vocabulary; no language model is involved. Pure function of the input.

use std::collections::HashMap;

use concord_core::errors::ResolveError;
use concord_core::objective::{Objective, ObjectiveName, ObjectiveSet};

/// Keyword vocabulary per objective. A keyword hit anywhere in the
/// lowercased intent counts; the inferred weight is the matched fraction
/// of the objective's vocabulary.
const PATTERNS: &[(ObjectiveName, &[&str])] = &[
    (
        ObjectiveName::Breadth,
        &["comprehensive", "everything", "all ", "broad", "ecosystem", "full coverage"],
    ),
    (
        ObjectiveName::Precision,
        &["precise", "exact", "specific", "laser", "focused", "pinpoint"],
    ),
    (
        ObjectiveName::Speed,
        &["fast", "instant", "quick", "immediately", "real-time", "low latency"],
    ),
    (
        ObjectiveName::Thoroughness,
        &["thorough", "exhaustive", "deep", "complete", "in-depth", "rigorous"],
    ),
    (
        ObjectiveName::Simplicity,
        &["simple", "easy", "intuitive", "minimal", "lightweight", "straightforward"],
    ),
    (
        ObjectiveName::Security,
        &["security", "secure", "audit", "vulnerability", "protection", "safe"],
    ),
    (
        ObjectiveName::Innovation,
        &["innovative", "cutting-edge", "advanced", "novel", "breakthrough", "modern"],
    ),
    (
        ObjectiveName::Stability,
        &["stable", "mature", "reliable", "production", "battle-tested", "proven"],
    ),
    (
        ObjectiveName::Community,
        &["popular", "maintained", "active", "community", "contributors", "widely used"],
    ),
    (
        ObjectiveName::Documentation,
        &["documentation", "documented", "tutorial", "guide", "examples", "readme"],
    ),
    (
        ObjectiveName::Integration,
        &["integrate", "integration", "api", "sdk", "library", "plugin"],
    ),
];

/// Turns a raw intent string plus optional explicit overrides into a
/// validated objective set whose weights sum to 1.0.
pub struct Extractor {
    patterns: &'static [(ObjectiveName, &'static [&'static str])],
}

impl Extractor {
    pub fn new() -> Self {
        Self { patterns: PATTERNS }
    }

    /// Extract objectives. Unknown or invalid override entries are
    /// rejected; an intent matching nothing falls back to a single
    /// general-relevance objective.
    pub fn extract(
        &self,
        intent: &str,
        overrides: &HashMap<String, f64>,
    ) -> Result<ObjectiveSet, ResolveError> {
        let mut set = ObjectiveSet::new();

        let intent_lower = intent.to_lowercase();
        for &(name, keywords) in self.patterns {
            let matched = keywords
                .iter()
                .filter(|kw| intent_lower.contains(*kw))
                .count();
            if matched > 0 {
                let weight = matched as f64 / keywords.len() as f64;
                set.insert(Objective::inferred(name, weight));
            }
        }

        // Overrides are validated against the closed vocabulary; duplicate
        // names merge by max weight like everything else. Validation walks
        // the names in sorted order so the reported error does not depend
        // on map iteration order.
        let mut entries: Vec<(&String, &f64)> = overrides.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (raw_name, &weight) in entries {
            let name = ObjectiveName::parse(raw_name).ok_or_else(|| {
                ResolveError::UnknownObjective {
                    name: raw_name.clone(),
                }
            })?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(ResolveError::InvalidWeight {
                    name: raw_name.clone(),
                    weight,
                });
            }
            set.insert(Objective::explicit(name, weight.min(1.0)));
        }

        if set.is_empty() || set.iter().all(|o| o.weight == 0.0) {
            set.insert(Objective::inferred(ObjectiveName::Relevance, 1.0));
        }

        set.normalize();
        Ok(set)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
