//! Deep structural equality
//!
//! A type-sensitive equivalence test over value trees: reflexive,
//! symmetric, and transitive. Kind mismatches are not errors, they simply
//! compare unequal.

use serde_json::Value;

/// Deep, type-sensitive equality over two value trees
///
/// Two values are equal iff they have the same kind and, recursively, the
/// same content:
///
/// * the same reference is equal to itself without any traversal;
/// * arrays are equal iff they have the same length and every positional
///   pair is equal;
/// * objects are equal iff they have the same key set (order irrelevant)
///   and every key's value is equal;
/// * scalars compare by primitive value (`1` and `1.0` carry different
///   number representations and compare unequal, matching `serde_json`'s
///   own notion of number equality);
/// * any kind mismatch, including array vs object, is `false`.
///
/// # Example
///
/// ```rust
/// use trade_toolkit::structural::deep_equal;
/// use serde_json::json;
///
/// let a = json!({"x": [1, 2], "y": {"z": null}});
/// let b = json!({"y": {"z": null}, "x": [1, 2]});
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &json!({"x": [1, 2]})));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    // Same node, no need to walk it.
    if std::ptr::eq(a, b) {
        return true;
    }

    match (a, b) {
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right.iter())
                    .all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, value)| {
                    right.get(key).is_some_and(|other| deep_equal(value, other))
                })
        }
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_shortcut() {
        let value = json!({"deep": {"tree": [1, 2, 3]}});
        assert!(deep_equal(&value, &value));
    }

    #[test]
    fn test_scalar_equality() {
        assert!(deep_equal(&json!(null), &json!(null)));
        assert!(deep_equal(&json!(true), &json!(true)));
        assert!(deep_equal(&json!(17500), &json!(17500)));
        assert!(deep_equal(&json!("TXF"), &json!("TXF")));

        assert!(!deep_equal(&json!(true), &json!(false)));
        assert!(!deep_equal(&json!(1), &json!(2)));
        assert!(!deep_equal(&json!("a"), &json!("b")));
    }

    #[test]
    fn test_kind_mismatch_is_false() {
        assert!(!deep_equal(&json!(null), &json!(0)));
        assert!(!deep_equal(&json!([1]), &json!({"0": 1})));
        assert!(!deep_equal(&json!("1"), &json!(1)));
        assert!(!deep_equal(&json!({}), &json!(null)));
    }

    #[test]
    fn test_array_equality() {
        assert!(deep_equal(&json!([1, [2, 3]]), &json!([1, [2, 3]])));
        assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!deep_equal(&json!([1, 2]), &json!([1, 2, 3])));
        assert!(deep_equal(&json!([]), &json!([])));
    }

    #[test]
    fn test_object_equality_ignores_key_order() {
        let a = json!({"alpha": 1, "beta": {"gamma": [true]}});
        let b = json!({"beta": {"gamma": [true]}, "alpha": 1});
        assert!(deep_equal(&a, &b));
    }

    #[test]
    fn test_object_key_set_must_match() {
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"b": 1})));
    }

    #[test]
    fn test_symmetry_and_transitivity() {
        let a = json!({"k": [1, {"n": null}]});
        let b = json!({"k": [1, {"n": null}]});
        let c = json!({"k": [1, {"n": null}]});

        assert_eq!(deep_equal(&a, &b), deep_equal(&b, &a));
        assert!(deep_equal(&a, &b) && deep_equal(&b, &c) && deep_equal(&a, &c));
    }
}
