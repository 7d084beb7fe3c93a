//! Property-based coverage of the merge laws.
//!
//! Values are generated without floats so structural equality and
//! `PartialEq` agree.

use layer_merge::{
    MergeOptions, MergeStrategy, MergeValue, coerce_text, merge_json, strategy::combine,
    structurally_equal,
};
use proptest::prelude::*;
use serde_json::{Map, Value};

const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_992;

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-z0-9 ]{0,8}".prop_map(Value::String),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Object whose keys all start with `prefix`.
fn prefixed_object(prefix: &'static str) -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z]{1,4}", value_strategy(), 0..6).prop_map(move |m| {
        m.into_iter()
            .map(|(key, value)| (format!("{prefix}{key}"), value))
            .collect()
    })
}

proptest! {
    /// Objects with disjoint keys merge to their union.
    #[test]
    fn disjoint_objects_merge_to_union(
        left in prefixed_object("l_"),
        right in prefixed_object("r_"),
    ) {
        let mut union = left.clone();
        union.extend(right.clone());
        let merged = merge_json(
            vec![Value::Object(left), Value::Object(right)],
            &MergeOptions::default(),
        );
        prop_assert_eq!(merged, Value::Object(union));
    }

    /// Merging an object with itself yields a copy.
    #[test]
    fn self_merge_is_a_copy(object in prefixed_object("k_")) {
        let value = Value::Object(object);
        let merged = merge_json(vec![value.clone(), value.clone()], &MergeOptions::default());
        prop_assert_eq!(merged, value);
    }

    /// An empty first object contributes nothing.
    #[test]
    fn empty_object_is_a_left_identity(object in prefixed_object("k_")) {
        let value = Value::Object(object);
        let merged = merge_json(vec![Value::Object(Map::new()), value.clone()], &MergeOptions::default());
        prop_assert_eq!(merged, value);
    }

    /// Combined arrays hold each truthy member exactly once.
    #[test]
    fn combine_keeps_each_truthy_member_once(
        existing in prop::collection::vec(-3_i64..4, 0..8),
        incoming in prop::collection::vec(-3_i64..4, 0..8),
    ) {
        let to_members = |items: &[i64]| items.iter().copied().map(MergeValue::from).collect::<Vec<_>>();
        let combined = combine(&to_members(existing.as_slice()), &to_members(incoming.as_slice()));

        for (i, member) in combined.iter().enumerate() {
            prop_assert!(member.is_truthy());
            prop_assert!(combined.iter().skip(i + 1).all(|other| !structurally_equal(member, other)));
        }
        for n in existing.iter().chain(&incoming).filter(|n| **n != 0) {
            prop_assert!(combined.contains(&MergeValue::from(*n)));
        }
    }

    /// Under `combine`, the first layer's members keep their leading order.
    #[test]
    fn combine_preserves_first_occurrence_order(
        first in prop::collection::btree_set(1_i64..50, 0..8),
        second in prop::collection::btree_set(1_i64..50, 0..8),
    ) {
        let options = MergeOptions::default().with_strategy("a", MergeStrategy::Combine);
        let merged = merge_json(
            vec![
                serde_json::json!({"a": first.iter().collect::<Vec<_>>()}),
                serde_json::json!({"a": second.iter().collect::<Vec<_>>()}),
            ],
            &options,
        );
        let mut expected: Vec<i64> = first.iter().copied().collect();
        expected.extend(second.iter().copied().filter(|n| !first.contains(n)));
        prop_assert_eq!(merged, serde_json::json!({"a": expected}));
    }

    /// Integers within the exactly representable range coerce to themselves.
    #[test]
    fn integer_text_coerces_to_integer(n in -MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER) {
        prop_assert_eq!(coerce_text(&n.to_string()), Some(MergeValue::from(n)));
    }

    /// Text that is not a literal never coerces.
    #[test]
    fn words_stay_text(word in "[a-z]{2,8}") {
        prop_assume!(!matches!(word.as_str(), "true" | "false" | "null"));
        prop_assert_eq!(coerce_text(&word), None);
    }
}
