//! Numeric utility functions
//!
//! Rounding, averaging, and month-range helpers for backtest bookkeeping.

use serde_json::Value;

use crate::utils::dot::nested_f64;

/// Round a float to a number of decimal places
///
/// # Example
///
/// ```rust
/// use trade_toolkit::utils::round_to;
///
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
pub fn round_to(value: f64, precision: u32) -> f64 {
    let multiplier = 10_f64.powi(precision as i32);
    (value * multiplier).round() / multiplier
}

/// Arithmetic mean of a numeric sequence
///
/// When `digits` is given the result is rounded with [`round_to`]. An
/// empty input divides zero by zero and yields NaN, which callers guard
/// against at the call site.
pub fn mean(data_set: &[f64], digits: Option<u32>) -> f64 {
    let sum: f64 = data_set.iter().sum();
    let average = sum / data_set.len() as f64;
    match digits {
        Some(precision) => round_to(average, precision),
        None => average,
    }
}

/// Arithmetic mean of a (possibly dotted) field across object elements
///
/// Every element must carry a numeric value at `field`; otherwise, or for
/// an empty input, the result is `None`.
///
/// # Example
///
/// ```rust
/// use trade_toolkit::utils::mean_of_field;
/// use serde_json::json;
///
/// let fills = vec![json!({"fill": {"price": 100.0}}), json!({"fill": {"price": 101.0}})];
/// assert_eq!(mean_of_field(&fills, "fill.price", None), Some(100.5));
/// ```
pub fn mean_of_field(data_set: &[Value], field: &str, digits: Option<u32>) -> Option<f64> {
    if data_set.is_empty() {
        return None;
    }
    let mut values = Vec::with_capacity(data_set.len());
    for element in data_set {
        values.push(nested_f64(element, field)?);
    }
    Some(mean(&values, digits))
}

/// Build the inclusive sequence of YYYYMM months between two bounds
///
/// Month 13 rolls over into January of the following year.
///
/// # Example
///
/// ```rust
/// use trade_toolkit::utils::month_sequence;
///
/// assert_eq!(
///     month_sequence(200311, 200402),
///     vec![200311, 200312, 200401, 200402]
/// );
/// ```
pub fn month_sequence(start_month: u32, end_month: u32) -> Vec<u32> {
    let mut table = Vec::new();
    let mut month = start_month;

    while month <= end_month {
        if month % 100 == 13 {
            month = month + 100 - 12;
        }
        table.push(month);
        month += 1;
    }

    table
}
