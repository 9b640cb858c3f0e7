use jsonfixture::{diff, equal, DiffOptions, JsonDiffEngine};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1000i32..1000).prop_map(|n| Value::from(f64::from(n) / 8.0)),
        "[a-z0-9~/]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-d~/]{0,2}", inner, 0..6)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

/// Same document with every object's keys in reverse order.
fn reverse_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let reversed: Map<String, Value> = map
                .iter()
                .rev()
                .map(|(key, value)| (key.clone(), reverse_keys(value)))
                .collect();
            Value::Object(reversed)
        }
        Value::Array(items) => Value::Array(items.iter().map(reverse_keys).collect()),
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn equality_is_symmetric(a in arb_json(), b in arb_json()) {
        let a = a.to_string();
        let b = b.to_string();
        prop_assert_eq!(equal(&a, &b).unwrap(), equal(&b, &a).unwrap());
    }

    #[test]
    fn document_equals_itself(a in arb_json()) {
        let text = a.to_string();
        prop_assert!(diff(&text, &text).unwrap().is_empty());
    }

    #[test]
    fn key_order_is_irrelevant(a in arb_json()) {
        let reordered = reverse_keys(&a).to_string();
        prop_assert!(equal(a.to_string(), reordered).unwrap());
    }

    #[test]
    fn pretty_printing_is_irrelevant(a in arb_json()) {
        let pretty = serde_json::to_string_pretty(&a).unwrap();
        prop_assert!(equal(a.to_string(), pretty).unwrap());
    }

    #[test]
    fn strict_diff_matches_value_equality(a in arb_json(), b in arb_json()) {
        let engine = JsonDiffEngine::new(DiffOptions::strict());
        let empty = engine.diff(a.to_string(), b.to_string()).unwrap().is_empty();
        prop_assert_eq!(empty, a == b);
    }
}
