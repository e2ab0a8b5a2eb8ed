use std::collections::HashMap;

use praxis_core::dimensions::DimensionRegistry;
use praxis_core::ids::ProtocolId;
use praxis_core::unit::UnitValue;
use praxis_scoring::{AggregationRule, FitModel};
use proptest::prelude::*;

/// Build a model with `dims` dimensions, one scale per dimension, and one
/// protocol weighting every dimension.
fn uniform_model(dims: usize, weights: &[f64], rule: AggregationRule) -> FitModel {
    let names: Vec<String> = (0..dims).map(|i| format!("dim{i}")).collect();
    let registry = DimensionRegistry::new(names.clone());
    let mut model = FitModel::new(registry, rule);
    for name in &names {
        model.map_scale(format!("scale_{name}"), &[name.as_str()]).unwrap();
    }
    let rows: Vec<(&str, f64)> = names
        .iter()
        .zip(weights)
        .map(|(n, w)| (n.as_str(), *w))
        .collect();
    model.set_protocol(ProtocolId(1), &rows).unwrap();
    model
}

fn arb_rule() -> impl Strategy<Value = AggregationRule> {
    prop_oneof![Just(AggregationRule::Sum), Just(AggregationRule::Mean)]
}

proptest! {
    #[test]
    fn ppf_and_contrib_stay_in_unit_bounds(
        weights in prop::collection::vec(0.0f64..=2.0, 1..6),
        values in prop::collection::vec(0.0f64..=1.0, 1..6),
        rule in arb_rule(),
    ) {
        let dims = weights.len().min(values.len());
        let model = uniform_model(dims, &weights[..dims], rule);
        let assessments: HashMap<String, UnitValue> = (0..dims)
            .map(|i| (format!("scale_dim{i}"), UnitValue::new(values[i])))
            .collect();

        let scores = model.evaluate(ProtocolId(1), &assessments);
        prop_assert!((0.0..=1.0).contains(&scores.ppf.value()));
        prop_assert_eq!(scores.contrib.len(), dims);
        for c in &scores.contrib {
            prop_assert!((0.0..=1.0).contains(c), "contrib out of bounds: {}", c);
        }
    }

    #[test]
    fn degenerate_all_zero_inputs_yield_zero(
        dims in 1usize..6,
        rule in arb_rule(),
    ) {
        let weights = vec![0.0; dims];
        let model = uniform_model(dims, &weights, rule);
        let scores = model.evaluate(ProtocolId(1), &HashMap::new());
        prop_assert_eq!(scores.ppf.value(), 0.0);
        prop_assert!(scores.contrib.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn evaluation_is_deterministic(
        weights in prop::collection::vec(0.0f64..=1.0, 1..5),
        values in prop::collection::vec(0.0f64..=1.0, 1..5),
    ) {
        let dims = weights.len().min(values.len());
        let model = uniform_model(dims, &weights[..dims], AggregationRule::Sum);
        let assessments: HashMap<String, UnitValue> = (0..dims)
            .map(|i| (format!("scale_dim{i}"), UnitValue::new(values[i])))
            .collect();

        let a = model.evaluate(ProtocolId(1), &assessments);
        let b = model.evaluate(ProtocolId(1), &assessments);
        prop_assert_eq!(a.ppf.value().to_bits(), b.ppf.value().to_bits());
        for (x, y) in a.contrib.iter().zip(&b.contrib) {
            prop_assert_eq!(x.to_bits(), y.to_bits());
        }
    }
}
