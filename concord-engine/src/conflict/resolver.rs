//! Conflict resolver: harmonizes competing objective weights into one
//! coherent scoring policy.
//!
//! For each detected conflict both weights are pulled toward their shared
//! midpoint, scaled by severity: the harder the conflict, the less either
//! extreme may dominate. The midpoint pull preserves each pair's combined
//! mass, so a normalized input stays normalized.
//!
//! Harmonization steps touching a shared objective are not associative,
//! so conflicts must arrive in the detector's canonical order; given that,
//! resolution is fully deterministic.

use std::collections::HashMap;

use concord_core::errors::ResolveError;
use concord_core::models::ResolvedPolicy;
use concord_core::objective::{ConflictPair, ObjectiveName, ObjectiveSet};

/// Resolve a normalized objective set and its detected conflicts into a
/// `ResolvedPolicy`, or fail with `UnresolvableConflict` when the harmony
/// product falls below `min_harmony`.
pub fn resolve(
    objectives: &ObjectiveSet,
    conflicts: &[ConflictPair],
    min_harmony: f64,
) -> Result<ResolvedPolicy, ResolveError> {
    let mut weights: HashMap<ObjectiveName, f64> =
        objectives.iter().map(|o| (o.name, o.weight)).collect();

    let mut harmony = 1.0_f64;
    for conflict in conflicts {
        let w_a = weights.get(&conflict.first).copied().unwrap_or(0.0);
        let w_b = weights.get(&conflict.second).copied().unwrap_or(0.0);

        let strength = conflict.severity.pull_strength();
        let midpoint = (w_a + w_b) / 2.0;
        let h_a = w_a + (midpoint - w_a) * strength;
        let h_b = w_b + (midpoint - w_b) * strength;
        weights.insert(conflict.first, h_a);
        weights.insert(conflict.second, h_b);

        // Residual imbalance blends the pair's contested mass with its
        // residual gap; an evenly-split hard conflict still costs harmony.
        let contested = strength * (h_a + h_b) / 2.0;
        let residual_gap = (1.0 - strength) * (h_a - h_b).abs();
        let component = (1.0 - (contested + residual_gap)).clamp(0.0, 1.0);
        harmony *= component;
    }

    if harmony < min_harmony {
        return Err(ResolveError::UnresolvableConflict {
            pairs: conflicts.iter().map(|c| (c.first, c.second)).collect(),
            harmony,
            minimum: min_harmony,
        });
    }

    // Tie-break order: original weight descending, basis order on ties.
    let mut tie_break: Vec<_> = objectives.iter().collect();
    tie_break.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.basis_index().cmp(&b.name.basis_index()))
    });
    let tie_break: Vec<ObjectiveName> = tie_break.into_iter().map(|o| o.name).collect();

    let mut vector = vec![0.0; ObjectiveName::BASIS_LEN];
    for objective in objectives.iter() {
        let harmonized = weights.get(&objective.name).copied().unwrap_or(0.0);
        vector[objective.name.basis_index()] = harmonized * objective.direction.sign();
    }

    Ok(ResolvedPolicy {
        weights: vector,
        tie_break,
        harmony_score: harmony,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::detector::detect;
    use concord_core::objective::{Objective, Severity};

    fn normalized_set(entries: &[(ObjectiveName, f64)]) -> ObjectiveSet {
        let mut set: ObjectiveSet = entries
            .iter()
            .map(|&(n, w)| Objective::inferred(n, w))
            .collect();
        set.normalize();
        set
    }

    #[test]
    fn zero_conflicts_yields_perfect_harmony() {
        let set = normalized_set(&[
            (ObjectiveName::Security, 0.6),
            (ObjectiveName::Community, 0.4),
        ]);
        let policy = resolve(&set, &[], 0.5).unwrap();
        assert_eq!(policy.harmony_score, 1.0);
        assert!((policy.weight_of(ObjectiveName::Security) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn hard_conflict_shrinks_weight_gap() {
        let set = normalized_set(&[
            (ObjectiveName::Breadth, 0.8),
            (ObjectiveName::Precision, 0.2),
        ]);
        let conflicts = detect(&set);
        assert_eq!(conflicts[0].severity, Severity::Hard);
        let pre_gap = 0.8 - 0.2;
        let policy = resolve(&set, &conflicts, 0.0).unwrap();
        let post_gap =
            (policy.weight_of(ObjectiveName::Breadth) - policy.weight_of(ObjectiveName::Precision))
                .abs();
        assert!(post_gap < pre_gap);
    }

    #[test]
    fn harmonization_preserves_total_weight() {
        let set = normalized_set(&[
            (ObjectiveName::Breadth, 0.5),
            (ObjectiveName::Precision, 0.3),
            (ObjectiveName::Security, 0.2),
        ]);
        let conflicts = detect(&set);
        let policy = resolve(&set, &conflicts, 0.0).unwrap();
        let total: f64 = policy.weights.iter().sum();
        assert!((total - 1.0).abs() < 1e-9, "total was {total}");
    }

    #[test]
    fn balanced_hard_conflict_lands_in_expected_harmony_band() {
        // breadth 0.9 + precision 0.9 normalizes to 0.5 / 0.5.
        let set = normalized_set(&[
            (ObjectiveName::Breadth, 0.9),
            (ObjectiveName::Precision, 0.9),
        ]);
        let conflicts = detect(&set);
        let policy = resolve(&set, &conflicts, 0.5).unwrap();
        assert!(policy.harmony_score > 0.5 && policy.harmony_score < 0.9);
        let gap = (policy.weight_of(ObjectiveName::Breadth)
            - policy.weight_of(ObjectiveName::Precision))
        .abs();
        assert!(gap < 0.2);
    }

    #[test]
    fn below_minimum_harmony_fails_with_pairs() {
        let set = normalized_set(&[
            (ObjectiveName::Breadth, 0.9),
            (ObjectiveName::Precision, 0.9),
        ]);
        let conflicts = detect(&set);
        let err = resolve(&set, &conflicts, 0.95).unwrap_err();
        match err {
            ResolveError::UnresolvableConflict { pairs, harmony, minimum } => {
                assert_eq!(pairs, vec![(ObjectiveName::Breadth, ObjectiveName::Precision)]);
                assert!(harmony < minimum);
            }
            other => panic!("expected UnresolvableConflict, got {other:?}"),
        }
    }

    #[test]
    fn tie_break_orders_by_original_weight_then_basis() {
        let set = normalized_set(&[
            (ObjectiveName::Security, 0.4),
            (ObjectiveName::Breadth, 0.3),
            (ObjectiveName::Community, 0.3),
        ]);
        let policy = resolve(&set, &[], 0.5).unwrap();
        assert_eq!(
            policy.tie_break,
            vec![
                ObjectiveName::Security,
                ObjectiveName::Breadth,
                ObjectiveName::Community
            ]
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let set = normalized_set(&[
            (ObjectiveName::Breadth, 0.5),
            (ObjectiveName::Precision, 0.3),
            (ObjectiveName::Speed, 0.2),
        ]);
        let conflicts = detect(&set);
        let a = resolve(&set, &conflicts, 0.0).unwrap();
        let b = resolve(&set, &conflicts, 0.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}
