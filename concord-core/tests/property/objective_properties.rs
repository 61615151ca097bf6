use concord_core::objective::{Objective, ObjectiveName, ObjectiveSet};
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = ObjectiveName> {
    (0..ObjectiveName::BASIS_LEN).prop_map(|i| ObjectiveName::ALL[i])
}

proptest! {
    #[test]
    fn normalized_weights_sum_to_one(
        entries in prop::collection::vec((arb_name(), 0.001f64..1.0), 1..8)
    ) {
        let mut set: ObjectiveSet = entries
            .into_iter()
            .map(|(name, w)| Objective::inferred(name, w))
            .collect();
        set.normalize();
        let sum: f64 = set.iter().map(|o| o.weight).sum();
        prop_assert!((sum - 1.0).abs() <= 1e-9, "sum was {}", sum);
    }

    #[test]
    fn merge_keeps_max_weight(name in arb_name(), a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let mut set = ObjectiveSet::new();
        set.insert(Objective::inferred(name, a));
        set.insert(Objective::inferred(name, b));
        prop_assert_eq!(set.len(), 1);
        let merged = set.get(name).unwrap();
        prop_assert_eq!(merged.weight, a.max(b));
    }

    #[test]
    fn normalization_preserves_weight_ordering(
        entries in prop::collection::vec(0.001f64..1.0, 2..=12)
    ) {
        let mut set: ObjectiveSet = entries
            .iter()
            .enumerate()
            .map(|(i, &w)| Objective::inferred(ObjectiveName::ALL[i], w))
            .collect();
        let before: Vec<(ObjectiveName, f64)> =
            set.iter().map(|o| (o.name, o.weight)).collect();
        set.normalize();
        for window in before.windows(2) {
            let (a, wa) = window[0];
            let (b, wb) = window[1];
            let na = set.get(a).unwrap().weight;
            let nb = set.get(b).unwrap().weight;
            if wa > wb {
                prop_assert!(na > nb);
            }
        }
    }
}
