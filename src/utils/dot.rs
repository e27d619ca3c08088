//! Dotted-path access into nested values
//!
//! Resolves hierarchical names like `"signal.sn"` against a value tree.
//! Object segments look up by key; array segments accept a numeric index.

use serde_json::Value;

/// Resolve a dotted path against a value tree
///
/// Returns `None` as soon as a segment fails to resolve; there is no
/// partial result.
///
/// # Arguments
///
/// * `doc` - The value to search
/// * `path` - Dot-separated segments, e.g. `"signal.sn"` or `"fills.0.price"`
///
/// # Example
///
/// ```rust
/// use trade_toolkit::utils::nested_value;
/// use serde_json::json;
///
/// let doc = json!({"signal": {"sn": "txf_pattern01"}});
/// assert_eq!(nested_value(&doc, "signal.sn"), Some(&json!("txf_pattern01")));
/// assert_eq!(nested_value(&doc, "signal.missing"), None);
/// ```
pub fn nested_value<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(doc, |node, segment| match node {
        Value::Object(entries) => entries.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Resolve a dotted path to a string slice
pub fn nested_str<'a>(doc: &'a Value, path: &str) -> Option<&'a str> {
    nested_value(doc, path)?.as_str()
}

/// Resolve a dotted path to a float
pub fn nested_f64(doc: &Value, path: &str) -> Option<f64> {
    nested_value(doc, path)?.as_f64()
}
