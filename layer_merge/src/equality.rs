//! Deep structural equality used to deduplicate combined arrays.

use std::num::FpCategory;

use serde_json::Number;

use crate::MergeValue;

/// Compare two values structurally.
///
/// Leaves compare by strict value equality, numbers by numeric value so `1`
/// and `1.0` are the same number. Arrays compare element by element; objects
/// compare by key set and per-key recursion, ignoring key order; sets
/// compare by size and membership. Values of different kinds are never
/// equal.
///
/// # Examples
///
/// ```rust
/// use layer_merge::{MergeValue, structurally_equal};
/// use serde_json::json;
///
/// let left = MergeValue::from(json!({"a": 1, "b": [true]}));
/// let right = MergeValue::from(json!({"b": [true], "a": 1}));
/// assert!(structurally_equal(&left, &right));
/// assert!(!structurally_equal(&left, &MergeValue::from(json!({"a": 1}))));
/// ```
#[must_use]
pub fn structurally_equal(x: &MergeValue, y: &MergeValue) -> bool {
    match (x, y) {
        (MergeValue::Null, MergeValue::Null) => true,
        (MergeValue::Bool(a), MergeValue::Bool(b)) => a == b,
        (MergeValue::Number(a), MergeValue::Number(b)) => numbers_equal(a, b),
        (MergeValue::String(a), MergeValue::String(b)) => a == b,
        (MergeValue::Array(a), MergeValue::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(l, r)| structurally_equal(l, r))
        }
        (MergeValue::Set(a), MergeValue::Set(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|member| b.iter().any(|other| structurally_equal(member, other)))
        }
        (MergeValue::Object(a), MergeValue::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, value)| {
                    b.get(key)
                        .is_some_and(|other| structurally_equal(value, other))
                })
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(l), Some(r)) = (a.as_i64(), b.as_i64()) {
        return l == r;
    }
    if let (Some(l), Some(r)) = (a.as_u64(), b.as_u64()) {
        return l == r;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(l), Some(r)) => {
            l.total_cmp(&r).is_eq()
                || (l.classify() == FpCategory::Zero && r.classify() == FpCategory::Zero)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::structurally_equal;
    use crate::MergeValue;

    fn eq(left: Value, right: Value) -> bool {
        structurally_equal(&MergeValue::from(left), &MergeValue::from(right))
    }

    #[rstest]
    #[case(json!(null), json!(null))]
    #[case(json!("a"), json!("a"))]
    #[case(json!(3), json!(3.0))]
    #[case(json!(0.0), json!(-0.0))]
    #[case(json!([1, [2]]), json!([1, [2]]))]
    #[case(json!({"x": {"y": 1}, "z": 2}), json!({"z": 2, "x": {"y": 1}}))]
    fn equal_pairs(#[case] left: Value, #[case] right: Value) {
        assert!(eq(left, right));
    }

    #[rstest]
    #[case::type_mismatch(json!(1), json!("1"))]
    #[case::category_mismatch(json!(1), json!([1]))]
    #[case::array_vs_object(json!([]), json!({}))]
    #[case::array_length(json!([1]), json!([1, 1]))]
    #[case::array_order(json!([1, 2]), json!([2, 1]))]
    #[case::extra_key(json!({"a": 1}), json!({"a": 1, "b": 2}))]
    #[case::different_key(json!({"a": 1}), json!({"b": 1}))]
    #[case::null_vs_false(json!(null), json!(false))]
    #[case::large_integers(json!(9_007_199_254_740_993_u64), json!(9_007_199_254_740_992_u64))]
    fn unequal_pairs(#[case] left: Value, #[case] right: Value) {
        assert!(!eq(left, right));
    }

    #[test]
    fn sets_ignore_member_order() {
        let left = MergeValue::set(["a", "b"].map(MergeValue::from));
        let right = MergeValue::set(["b", "a"].map(MergeValue::from));
        assert!(structurally_equal(&left, &right));
    }

    #[test]
    fn set_is_not_an_array() {
        let set = MergeValue::set(["a"].map(MergeValue::from));
        let array = MergeValue::from(json!(["a"]));
        assert!(!structurally_equal(&set, &array));
    }
}
