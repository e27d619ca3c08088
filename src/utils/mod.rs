//! Utility modules for the trade toolkit
//!
//! Small string, number, array, and nested-access helpers consumed by the
//! trading applications built on this crate.

pub mod array;
pub mod dot;
pub mod numbers;
pub mod strings;

// Re-export commonly used utilities
pub use array::{is_equal_array, unique};
pub use dot::{nested_f64, nested_str, nested_value};
pub use numbers::{mean, mean_of_field, month_sequence, round_to};
pub use strings::{
    ensure_string_length,
    file_extension,
    integer_digits,
    to_finance_chinese,
    uppercase_first_letters,
};
