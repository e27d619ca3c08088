//! Fixed-size combination enumeration
//!
//! Enumerates every strictly increasing index combination of an input
//! sequence, cloning the selected elements. Output size grows as C(n, k),
//! so inputs are capped at [`MAX_COMBINATION_INPUT`] elements and longer
//! sequences are rejected up front.

use tracing::warn;

use crate::error::{Result, ToolkitError};

/// Longest input sequence the generator will enumerate
pub const MAX_COMBINATION_INPUT: usize = 13;

/// Enumerate all `group_size`-element combinations of a sequence
///
/// Combinations are emitted in lexicographic index order (first index
/// outermost, ascending), each one an independent clone of the selected
/// elements. For `serde_json::Value` elements `Clone` is structural, so
/// every emitted group is a deep copy.
///
/// # Arguments
///
/// * `arr` - The input sequence; never mutated
/// * `group_size` - Number of elements per combination, at least 1
///
/// # Returns
///
/// Exactly C(n, k) groups for an n-element input, an empty vector when
/// `group_size` exceeds the input length, or an error:
///
/// * [`ToolkitError::CombinationOverflow`] when the input is longer than
///   [`MAX_COMBINATION_INPUT`] (distinct from a legitimately empty result)
/// * [`ToolkitError::EmptyGroup`] when `group_size` is zero
///
/// # Example
///
/// ```rust
/// use trade_toolkit::structural::combinations;
///
/// let pairs = combinations(&['a', 'b', 'c'], 2).unwrap();
/// assert_eq!(pairs, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
/// ```
pub fn combinations<T: Clone>(arr: &[T], group_size: usize) -> Result<Vec<Vec<T>>> {
    if group_size == 0 {
        return Err(ToolkitError::EmptyGroup);
    }
    if arr.len() > MAX_COMBINATION_INPUT {
        warn!(
            length = arr.len(),
            limit = MAX_COMBINATION_INPUT,
            "combinations | inefficient input length, refusing to enumerate"
        );
        return Err(ToolkitError::CombinationOverflow(
            arr.len(),
            MAX_COMBINATION_INPUT,
        ));
    }

    let mut output = Vec::new();
    let mut current = Vec::with_capacity(group_size);
    collect(arr, group_size, 0, &mut current, &mut output);
    Ok(output)
}

/// Enumerate all 3-element combinations of a sequence
///
/// The historical fixed-size surface. Identical to
/// [`combinations`]`(arr, 3)` but with each group returned as an array, in
/// the same `i` outer / `j` middle / `k` inner ascending order.
///
/// # Example
///
/// ```rust
/// use trade_toolkit::structural::combinations3;
///
/// let triples = combinations3(&[1, 2, 3, 4]).unwrap();
/// assert_eq!(triples.len(), 4); // C(4, 3)
/// assert_eq!(triples[0], [1, 2, 3]);
/// ```
pub fn combinations3<T: Clone>(arr: &[T]) -> Result<Vec<[T; 3]>> {
    let groups = combinations(arr, 3)?;
    Ok(groups
        .into_iter()
        .filter_map(|group| <[T; 3]>::try_from(group).ok())
        .collect())
}

fn collect<T: Clone>(
    arr: &[T],
    remaining: usize,
    start: usize,
    current: &mut Vec<T>,
    output: &mut Vec<Vec<T>>,
) {
    if remaining == 0 {
        output.push(current.clone());
        return;
    }
    // Leave room for the elements still to be picked.
    let Some(end) = (arr.len() + 1).checked_sub(remaining) else {
        return;
    };
    for index in start..end {
        current.push(arr[index].clone());
        collect(arr, remaining - 1, index + 1, current, output);
        current.pop();
    }
}
