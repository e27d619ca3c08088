//! Sorting and rank statistics
//!
//! A small non-mutating sort plus the order-number translation built on top
//! of it. Both operate on copies; inputs are never touched.

/// Sort a sequence ascending, returning a new vector
///
/// Bubble sort: repeated adjacent-swap passes until a pass performs no
/// swap. O(n²) worst and average case, which is acceptable for the short
/// sequences this toolkit ranks; it is not a general-purpose sorting
/// primitive.
///
/// # Example
///
/// ```rust
/// use trade_toolkit::ranking::bubble_sort;
///
/// assert_eq!(bubble_sort(&[3, 1, 2]), vec![1, 2, 3]);
/// ```
pub fn bubble_sort<T: PartialOrd + Clone>(list: &[T]) -> Vec<T> {
    let mut sorted = list.to_vec();
    if sorted.len() < 2 {
        return sorted;
    }

    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 0..sorted.len() - 1 {
            if sorted[i] > sorted[i + 1] {
                sorted.swap(i, i + 1);
                swapped = true;
            }
        }
    }
    sorted
}

/// Translate each number to its 1-based position in ascending order
///
/// A sorted copy of the input assigns rank `i + 1` to the value at sorted
/// position `i`, building a value-to-rank dictionary in which a later
/// assignment for an equal value overwrites the earlier one. Duplicates
/// therefore all receive the rank of the last sorted index of their run:
/// `rank_order(&[5.0, 5.0, 1.0])` is `[3, 3, 1]`, not `[2, 2, 1]`. The
/// original order of the input is preserved in the output.
///
/// NaN values are outside the contract and map to rank 0.
///
/// # Example
///
/// ```rust
/// use trade_toolkit::ranking::rank_order;
///
/// assert_eq!(rank_order(&[34.0, 56.0, 12.0]), vec![2, 3, 1]);
/// ```
pub fn rank_order(values: &[f64]) -> Vec<usize> {
    let sorted = bubble_sort(values);

    // Value -> rank dictionary; later assignments overwrite earlier ones.
    let mut dictionary: Vec<(f64, usize)> = Vec::with_capacity(sorted.len());
    for (index, value) in sorted.iter().enumerate() {
        match dictionary.iter_mut().find(|(known, _)| known == value) {
            Some(entry) => entry.1 = index + 1,
            None => dictionary.push((*value, index + 1)),
        }
    }

    values
        .iter()
        .map(|value| {
            dictionary
                .iter()
                .find(|(known, _)| known == value)
                .map_or(0, |(_, rank)| *rank)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_correctness() {
        assert_eq!(bubble_sort(&[3, 1, 2]), vec![1, 2, 3]);
        assert_eq!(bubble_sort(&[5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
        assert_eq!(bubble_sort(&[2.5, -1.0, 0.0]), vec![-1.0, 0.0, 2.5]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = bubble_sort(&[9, 2, 7, 2, 5]);
        let twice = bubble_sort(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let input = vec![3, 1, 2];
        let _ = bubble_sort(&input);
        assert_eq!(input, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_trivial_inputs() {
        assert_eq!(bubble_sort::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(bubble_sort(&[7]), vec![7]);
    }

    #[test]
    fn test_rank_order_example() {
        assert_eq!(rank_order(&[34.0, 56.0, 12.0]), vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_is_a_permutation_for_distinct_values() {
        let values = [7.5, -2.0, 100.0, 0.0, 3.25];
        let mut ranks = rank_order(&values);
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_duplicate_values_share_the_last_assigned_rank() {
        // Sorted [1, 5, 5] assigns 5 -> 2 then 5 -> 3; the overwrite wins.
        assert_eq!(rank_order(&[5.0, 5.0, 1.0]), vec![3, 3, 1]);
        assert_eq!(rank_order(&[2.0, 2.0, 2.0]), vec![3, 3, 3]);
    }

    #[test]
    fn test_rank_preserves_input_order() {
        assert_eq!(rank_order(&[10.0, 30.0, 20.0]), vec![1, 3, 2]);
        assert_eq!(rank_order(&[30.0, 20.0, 10.0]), vec![3, 2, 1]);
    }

    #[test]
    fn test_rank_empty_input() {
        assert_eq!(rank_order(&[]), Vec::<usize>::new());
    }
}
