//! Deep structural copy
//!
//! Produces a new value tree that is structurally identical to the source
//! while sharing no containers with it. Because `serde_json::Value` owns its
//! children outright, a tree can never contain a cycle, so the traversal
//! needs no visited-set bookkeeping.

use serde_json::{Map, Value};

use crate::mixing::{Capable, ITERATOR};

/// Deep copy a value tree
///
/// Recursively clones the source depth-first. The container kind of every
/// node (array vs object) is re-inspected from the node itself, never
/// assumed from the parent. Scalars are copied by value.
///
/// The result satisfies `deep_equal(&deep_copy(x), x)` for every input, and
/// mutating any container inside the copy leaves the source untouched.
///
/// # Arguments
///
/// * `source` - The value tree to copy
///
/// # Returns
///
/// A structurally identical tree sharing no containers with `source`
///
/// # Example
///
/// ```rust
/// use trade_toolkit::structural::deep_copy;
/// use serde_json::json;
///
/// let original = json!({"signal": {"sn": "pattern01", "prices": [101.5, 99.0]}});
/// let copied = deep_copy(&original);
/// assert_eq!(copied, original);
/// ```
pub fn deep_copy(source: &Value) -> Value {
    match source {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(items) => {
            let mut copied = Vec::with_capacity(items.len());
            for item in items {
                copied.push(deep_copy(item));
            }
            Value::Array(copied)
        }
        Value::Object(entries) => {
            let mut copied = Map::new();
            for (key, value) in entries {
                copied.insert(key.clone(), deep_copy(value));
            }
            Value::Object(copied)
        }
    }
}

/// Deep copy a capable value, optionally carrying its iteration capability
///
/// The value tree is deep-copied as in [`deep_copy`]. When `copy_iterator`
/// is set and the source's behavior table holds the well-known
/// [`ITERATOR`] capability, that capability is copied into the
/// destination's fresh table by reference (an `Arc` clone). Iteration
/// behavior is not itself a value, so it is never deep-cloned.
///
/// # Arguments
///
/// * `source` - The capable value to copy
/// * `copy_iterator` - Whether to carry the iteration capability across
///
/// # Returns
///
/// A new [`Capable`] with an independent value tree and its own behavior
/// table
pub fn deep_copy_capable(source: &Capable, copy_iterator: bool) -> Capable {
    let copied = Capable::new(deep_copy(&source.value));
    if copy_iterator {
        if let Some(iterator) = source.capability(ITERATOR) {
            copied.behaviors().write_table(|table| {
                table.insert(ITERATOR, iterator.clone());
            });
        }
    }
    copied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::CapabilityBundle;
    use crate::structural::deep_equal;
    use serde_json::json;

    #[test]
    fn test_deep_copy_scalars() {
        assert_eq!(deep_copy(&json!(null)), json!(null));
        assert_eq!(deep_copy(&json!(true)), json!(true));
        assert_eq!(deep_copy(&json!(42)), json!(42));
        assert_eq!(deep_copy(&json!(1.5)), json!(1.5));
        assert_eq!(deep_copy(&json!("TXF")), json!("TXF"));
    }

    #[test]
    fn test_deep_copy_nested() {
        let original = json!({
            "commodity": "TXF",
            "signals": [
                {"sn": "a1", "price": 17500.0},
                {"sn": "a2", "price": 17620.5}
            ],
            "meta": {"window": [845, 1345]}
        });
        let copied = deep_copy(&original);
        assert_eq!(copied, original);
        assert!(deep_equal(&copied, &original));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = json!({"orders": [{"qty": 1}]});
        let mut copied = deep_copy(&original);

        copied["orders"][0]["qty"] = json!(99);
        copied["orders"]
            .as_array_mut()
            .unwrap()
            .push(json!({"qty": 2}));

        assert_eq!(original["orders"][0]["qty"], json!(1));
        assert_eq!(original["orders"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_container_kind_preserved() {
        let array_of_objects = json!([{"a": 1}, {"b": [2, 3]}]);
        let copied = deep_copy(&array_of_objects);
        assert!(copied.is_array());
        assert!(copied[0].is_object());
        assert!(copied[1]["b"].is_array());
    }

    #[test]
    fn test_copy_capable_without_iterator_flag() {
        let source = Capable::new(json!([1, 2, 3]));
        crate::mixing::extend(
            source.behaviors(),
            &[CapabilityBundle::new("iterable")
                .with(ITERATOR, |value| json!(value.as_array().map_or(0, Vec::len)))],
        );

        let copied = deep_copy_capable(&source, false);
        assert_eq!(copied.value, source.value);
        assert!(copied.capability(ITERATOR).is_none());
    }

    #[test]
    fn test_copy_capable_with_iterator_flag() {
        let source = Capable::new(json!([1, 2, 3]));
        crate::mixing::extend(
            source.behaviors(),
            &[CapabilityBundle::new("iterable")
                .with(ITERATOR, |value| json!(value.as_array().map_or(0, Vec::len)))],
        );

        let copied = deep_copy_capable(&source, true);
        let iterator = copied.capability(ITERATOR);
        assert!(iterator.is_some());
        assert_eq!(iterator.unwrap()(&copied.value), json!(3));
    }
}
