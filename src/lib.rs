//! Trade toolkit
//!
//! Stateless data-manipulation primitives for trading applications:
//! structural deep copy and deep equality over `serde_json::Value` trees,
//! capability mixing for interface-style composition, fixed-size
//! combination enumeration, and rank/order statistics, plus the
//! string/date/trading-session helpers the bots consume.
//!
//! Every operation is a pure, synchronous function of its inputs; the one
//! exception is [`mixing::extend`], which mutates the caller-supplied
//! behavior table as its documented effect.
//!
//! # Quick Start
//!
//! ```rust
//! use trade_toolkit::ranking::rank_order;
//! use trade_toolkit::structural::{deep_copy, deep_equal};
//! use serde_json::json;
//!
//! let signal = json!({"sn": "txf_pattern01", "prices": [17500.0, 17620.5]});
//! let copied = deep_copy(&signal);
//! assert!(deep_equal(&copied, &signal));
//!
//! assert_eq!(rank_order(&[34.0, 56.0, 12.0]), vec![2, 3, 1]);
//! ```

/// Toolkit version constant
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod error;
pub mod mixing;
pub mod ranking;
pub mod structural;

// Collaborator modules
pub mod context;
pub mod cron;
pub mod messages;
pub mod session;
pub mod utils;

// Re-exports for convenience
pub use context::RuntimeContext;
pub use cron::CronFields;
pub use error::{Result, ToolkitError};
pub use mixing::{extend, BehaviorTable, Capability, CapabilityBundle, Capable, SharedBehaviors};
pub use ranking::{bubble_sort, rank_order};
pub use structural::{
    combinations, combinations3, deep_copy, deep_copy_capable, deep_equal, MAX_COMBINATION_INPUT,
};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_toolkit_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_basic_workflow() {
        let candidates = vec![json!("a"), json!("b"), json!("c"), json!("d")];
        let triples = combinations3(&candidates).unwrap();
        assert_eq!(triples.len(), 4);

        for triple in &triples {
            for value in triple {
                assert!(candidates.iter().any(|c| deep_equal(c, value)));
            }
        }
    }
}
