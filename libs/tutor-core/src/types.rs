//! Core types for arithmetic answer validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arithmetic operation recognized in question text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Fixed priority order used to resolve questions that structurally
    /// match more than one operation's patterns.
    pub const PRIORITY: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Get the operation name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of checking a free-text answer against a question.
///
/// `Indeterminate` means the question/answer pair could not be confidently
/// classified; it is distinct from a computed-and-wrong answer and carries
/// no expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Correct { expected: i64 },
    Incorrect { expected: i64 },
    Indeterminate,
}

impl Outcome {
    /// Whether the answer was checked and found correct.
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    /// The computed expected value, if the question was classified.
    ///
    /// Present for both `Correct` and `Incorrect` so a caller can show the
    /// right answer after a wrong one.
    pub fn expected(&self) -> Option<i64> {
        match self {
            Self::Correct { expected } | Self::Incorrect { expected } => Some(*expected),
            Self::Indeterminate => None,
        }
    }
}
