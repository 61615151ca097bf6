use std::collections::HashMap;

use concord_core::objective::{Objective, ObjectiveName, ObjectiveSet};
use concord_engine::scoring::aggregator;
use concord_engine::scoring::scorer::{self, CancelToken};
use concord_engine::{conflict, Extractor};
use proptest::prelude::*;
use test_fixtures::candidate_set;

/// Objectives with no registered conflict between any pair.
const INDEPENDENT: [ObjectiveName; 4] = [
    ObjectiveName::Community,
    ObjectiveName::Documentation,
    ObjectiveName::Integration,
    ObjectiveName::Relevance,
];

fn arb_overrides() -> impl Strategy<Value = HashMap<String, f64>> {
    prop::collection::hash_map(
        (0..ObjectiveName::BASIS_LEN).prop_map(|i| ObjectiveName::ALL[i].as_str().to_string()),
        0.001f64..1.0,
        1..6,
    )
}

proptest! {
    #[test]
    fn extracted_weights_always_sum_to_one(overrides in arb_overrides()) {
        let set = Extractor::new().extract("", &overrides).unwrap();
        let sum: f64 = set.iter().map(|o| o.weight).sum();
        prop_assert!((sum - 1.0).abs() <= 1e-9, "sum was {}", sum);
    }

    #[test]
    fn independent_objectives_resolve_at_full_harmony(
        weights in prop::collection::vec(0.01f64..1.0, 4)
    ) {
        let mut set: ObjectiveSet = INDEPENDENT
            .iter()
            .zip(&weights)
            .map(|(&name, &w)| Objective::inferred(name, w))
            .collect();
        set.normalize();
        let conflicts = conflict::detect(&set);
        prop_assert!(conflicts.is_empty());
        let policy = conflict::resolve(&set, &conflicts, 0.5).unwrap();
        prop_assert_eq!(policy.harmony_score, 1.0);
    }

    #[test]
    fn hard_conflict_never_widens_the_gap(a in 0.05f64..1.0, b in 0.05f64..1.0) {
        let mut set = ObjectiveSet::new();
        set.insert(Objective::explicit(ObjectiveName::Breadth, a));
        set.insert(Objective::explicit(ObjectiveName::Precision, b));
        set.normalize();
        let pre_gap = (set.get(ObjectiveName::Breadth).unwrap().weight
            - set.get(ObjectiveName::Precision).unwrap().weight)
            .abs();

        let conflicts = conflict::detect(&set);
        prop_assert_eq!(conflicts.len(), 1);
        if let Ok(policy) = conflict::resolve(&set, &conflicts, 0.0) {
            let post_gap = (policy.weight_of(ObjectiveName::Breadth)
                - policy.weight_of(ObjectiveName::Precision))
                .abs();
            prop_assert!(post_gap <= pre_gap + 1e-12);
            if pre_gap > 1e-9 {
                prop_assert!(post_gap < pre_gap);
            }
            prop_assert!(policy.harmony_score >= 0.0 && policy.harmony_score <= 1.0);
        }
    }

    #[test]
    fn aggregation_is_idempotent_and_order_independent(
        seed in 0u64..1000,
        n in 1usize..60,
    ) {
        let mut set = ObjectiveSet::new();
        set.insert(Objective::inferred(ObjectiveName::Relevance, 1.0));
        set.normalize();
        let policy = conflict::resolve(&set, &[], 0.5).unwrap();

        let candidates = candidate_set(seed, n);
        let outcome =
            scorer::score_batch(&policy, &candidates, 1, &CancelToken::new(), None);
        let sigs = outcome.signatures;

        let forward = aggregator::aggregate(
            &policy,
            vec![sigs.clone(), sigs.clone()],
            usize::MAX,
        );
        let mut reversed_sigs = sigs.clone();
        reversed_sigs.reverse();
        let backward =
            aggregator::aggregate(&policy, vec![reversed_sigs], usize::MAX);
        let once = aggregator::aggregate(&policy, vec![sigs], usize::MAX);

        prop_assert_eq!(&forward, &once);
        prop_assert_eq!(&forward, &backward);
    }
}
