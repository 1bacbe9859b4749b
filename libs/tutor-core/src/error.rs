//! Error types for tutor-core.

use crate::types::Operation;
use thiserror::Error;

/// Result type alias using TableError.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised while building a pattern table.
///
/// These are configuration errors in programmer-supplied rule sets, caught
/// by tests before deployment. Runtime question/answer data never produces
/// an error, only an indeterminate outcome.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid pattern for {operation}: {source}")]
    InvalidPattern {
        operation: Operation,
        #[source]
        source: regex::Error,
    },

    #[error("rule for {operation} requires {arity} operands but its pattern has only {captures} capture groups")]
    ArityExceedsCaptures {
        operation: Operation,
        arity: usize,
        captures: usize,
    },
}
