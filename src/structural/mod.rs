//! Structural primitives over arbitrary JSON-like values
//!
//! This module family operates on `serde_json::Value` trees: deep copy,
//! deep equality, and combination enumeration. All operations are pure and
//! synchronous; none of them mutate their inputs.

pub mod combinations;
pub mod copy;
pub mod equality;

pub use combinations::{combinations, combinations3, MAX_COMBINATION_INPUT};
pub use copy::{deep_copy, deep_copy_capable};
pub use equality::deep_equal;
