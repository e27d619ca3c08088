//! Array utility functions

/// Remove duplicates from a slice, preserving first-occurrence order
///
/// Uses `PartialEq` rather than hashing so it works for float and
/// `serde_json::Value` elements alike; quadratic, intended for short
/// sequences.
///
/// # Example
///
/// ```rust
/// use trade_toolkit::utils::unique;
///
/// assert_eq!(unique(&[1, 2, 2, 3, 1, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn unique<T: PartialEq + Clone>(arr: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::new();
    for item in arr {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}

/// Shallow positional equality of two slices
///
/// Equal iff the lengths match and every positional pair compares equal.
/// Unlike [`crate::structural::deep_equal`] this does not recurse into
/// containers beyond what the element type's own `PartialEq` does.
pub fn is_equal_array<T: PartialEq>(arr1: &[T], arr2: &[T]) -> bool {
    arr1.len() == arr2.len() && arr1.iter().zip(arr2.iter()).all(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique() {
        assert_eq!(unique(&[1, 2, 2, 3, 1, 4]), vec![1, 2, 3, 4]);
        assert_eq!(unique(&["a", "b", "a"]), vec!["a", "b"]);
        assert_eq!(unique::<i32>(&[]), Vec::<i32>::new());
        // Works for floats, which have no Eq/Hash
        assert_eq!(unique(&[1.5, 1.5, 2.5]), vec![1.5, 2.5]);
    }

    #[test]
    fn test_is_equal_array() {
        assert!(is_equal_array(&[1, 2, 3], &[1, 2, 3]));
        assert!(!is_equal_array(&[1, 2, 3], &[3, 2, 1]));
        assert!(!is_equal_array(&[1, 2], &[1, 2, 3]));
        assert!(is_equal_array::<i32>(&[], &[]));
    }
}
