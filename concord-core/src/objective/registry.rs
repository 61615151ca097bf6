//! Static conflict registry.
//!
//! Pairs of objectives known to trade off against each other, each with a
//! pre-registered severity. The registry is immutable at runtime; extending
//! it means editing `CONFLICTS`.

use serde::{Deserialize, Serialize};

use super::ObjectiveName;

/// How strongly a pair of objectives trades off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    Hard,
}

impl Severity {
    /// How far each competing weight is pulled toward the pair midpoint
    /// during harmonization.
    pub fn pull_strength(self) -> f64 {
        match self {
            Severity::Low => 0.25,
            Severity::Moderate => 0.5,
            Severity::Hard => 0.75,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered pair of objectives known to trade off.
///
/// Registered with `first` on the lower basis index; `matches` treats the
/// pair as unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPair {
    pub first: ObjectiveName,
    pub second: ObjectiveName,
    pub severity: Severity,
}

impl ConflictPair {
    pub const fn new(first: ObjectiveName, second: ObjectiveName, severity: Severity) -> Self {
        Self {
            first,
            second,
            severity,
        }
    }

    /// Whether this pair covers the given unordered objective pair.
    pub fn matches(&self, a: ObjectiveName, b: ObjectiveName) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

/// The registered trade-offs. Wanting everything and wanting it precise,
/// fast, and simple are the canonical contradictions this engine exists
/// to reconcile.
pub const CONFLICTS: &[ConflictPair] = &[
    ConflictPair::new(ObjectiveName::Breadth, ObjectiveName::Precision, Severity::Hard),
    ConflictPair::new(ObjectiveName::Speed, ObjectiveName::Thoroughness, Severity::Hard),
    ConflictPair::new(ObjectiveName::Breadth, ObjectiveName::Speed, Severity::Moderate),
    ConflictPair::new(
        ObjectiveName::Thoroughness,
        ObjectiveName::Simplicity,
        Severity::Moderate,
    ),
    ConflictPair::new(
        ObjectiveName::Innovation,
        ObjectiveName::Stability,
        Severity::Moderate,
    ),
    ConflictPair::new(ObjectiveName::Speed, ObjectiveName::Security, Severity::Low),
];

/// Look up the registered severity between two objectives, if any.
pub fn severity_between(a: ObjectiveName, b: ObjectiveName) -> Option<Severity> {
    CONFLICTS
        .iter()
        .find(|p| p.matches(a, b))
        .map(|p| p.severity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_pairs_are_basis_ordered_and_distinct() {
        for (i, pair) in CONFLICTS.iter().enumerate() {
            assert!(
                pair.first.basis_index() < pair.second.basis_index(),
                "{}/{} out of order",
                pair.first,
                pair.second
            );
            for other in &CONFLICTS[i + 1..] {
                assert!(
                    !other.matches(pair.first, pair.second),
                    "duplicate registration for {}/{}",
                    pair.first,
                    pair.second
                );
            }
        }
    }

    #[test]
    fn lookup_is_order_independent() {
        assert_eq!(
            severity_between(ObjectiveName::Precision, ObjectiveName::Breadth),
            Some(Severity::Hard)
        );
        assert_eq!(
            severity_between(ObjectiveName::Breadth, ObjectiveName::Precision),
            Some(Severity::Hard)
        );
        assert_eq!(
            severity_between(ObjectiveName::Breadth, ObjectiveName::Community),
            None
        );
    }
}
