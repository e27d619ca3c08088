//! Error types for the trade toolkit
//!
//! Every fallible operation in the toolkit returns [`ToolkitError`] through
//! the crate-wide [`Result`] alias. Most primitives are total functions;
//! the error surface is deliberately small.

use thiserror::Error;

/// Main error type for the trade toolkit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    // Combination errors

    /// Input sequence exceeds the combination size limit
    ///
    /// Enumerating combinations over long inputs blows up as O(n^k); inputs
    /// longer than the guard limit are rejected instead of enumerated. This
    /// is distinct from a legitimately empty result.
    #[error("Combination input too long: {0} elements exceeds the limit of {1}")]
    CombinationOverflow(usize, usize),

    /// Requested combination group size is zero
    #[error("Combination group size must be at least 1")]
    EmptyGroup,

    // Parse errors

    /// Cron expression does not carry the required six fields
    #[error("Malformed cron expression: {0:?}")]
    MalformedCron(String),

    /// Custom error with message
    #[error("{0}")]
    Custom(String),
}

/// Type alias for Results using ToolkitError
pub type Result<T> = std::result::Result<T, ToolkitError>;

impl ToolkitError {
    /// Create a custom error with a message
    pub fn custom<S: Into<String>>(msg: S) -> Self {
        ToolkitError::Custom(msg.into())
    }

    /// Check if this error is the combination size-limit guard
    ///
    /// Callers must distinguish "guarded input" from "zero combinations";
    /// this predicate is the supported way to do that without matching on
    /// the variant payload.
    pub fn is_size_limit(&self) -> bool {
        matches!(self, ToolkitError::CombinationOverflow(_, _))
    }

    /// Check if this error is a parse error
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ToolkitError::MalformedCron(_))
    }
}
