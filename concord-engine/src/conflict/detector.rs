//! Conflict detector: flags registered trade-offs present in a request.

use concord_core::objective::{registry, ConflictPair, ObjectiveSet};

/// Walk all unordered pairs of present objectives and return those found
/// in the static conflict registry. An empty result is a success state.
///
/// The output is sorted canonically by (name pair, severity) so that
/// harmonization always processes conflicts in the same order.
/// Harmonization steps touching a shared objective are not associative,
/// so the order must be fixed.
pub fn detect(objectives: &ObjectiveSet) -> Vec<ConflictPair> {
    let present: Vec<_> = objectives.iter().map(|o| o.name).collect();

    let mut detected = Vec::new();
    for (i, &a) in present.iter().enumerate() {
        for &b in &present[i + 1..] {
            if let Some(severity) = registry::severity_between(a, b) {
                // Basis order of (a, b) is already canonical: `present`
                // iterates an ObjectiveSet, which is basis-sorted.
                detected.push(ConflictPair::new(a, b, severity));
            }
        }
    }

    detected.sort_by_key(|p| (p.first, p.second, p.severity));
    detected
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_core::objective::{Objective, ObjectiveName, Severity};

    fn set_of(names: &[ObjectiveName]) -> ObjectiveSet {
        names
            .iter()
            .map(|&n| Objective::inferred(n, 0.5))
            .collect()
    }

    #[test]
    fn detects_registered_pair() {
        let conflicts = detect(&set_of(&[ObjectiveName::Breadth, ObjectiveName::Precision]));
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, Severity::Hard);
    }

    #[test]
    fn no_conflicts_is_empty_not_error() {
        let conflicts = detect(&set_of(&[ObjectiveName::Security, ObjectiveName::Community]));
        assert!(conflicts.is_empty());
    }

    #[test]
    fn canonical_order_is_stable() {
        // Speed conflicts with thoroughness (hard), breadth (moderate),
        // and security (low).
        let set = set_of(&[
            ObjectiveName::Speed,
            ObjectiveName::Thoroughness,
            ObjectiveName::Breadth,
            ObjectiveName::Security,
        ]);
        let a = detect(&set);
        let b = detect(&set);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(a[0].first, ObjectiveName::Breadth);
    }
}
