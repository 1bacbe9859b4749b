//! Pattern tables for recognizing arithmetic questions.
//!
//! Each operation owns an ordered list of rules. A rule pairs a
//! case-insensitive regex with an explicit operand arity and a combining
//! function; the first rule whose pattern matches the question wins, even
//! when a later rule would also match. Patterns are deliberately loose
//! (they key on the arithmetic symbol or a small verb vocabulary) because
//! the question text comes from an external language model and its exact
//! phrasing is not controlled here.

use crate::error::{Result, TableError};
use crate::types::Operation;
use regex::RegexBuilder;
use std::sync::LazyLock;
use tracing::debug;

/// Combines captured operands, in capture order, into an expected result.
///
/// Returns `None` when the result is undefined (division by zero) or does
/// not fit in `i64`.
pub type Combine = fn(&[i64]) -> Option<i64>;

/// One textual-structure test paired with an operand-combining function.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: regex::Regex,
    arity: usize,
    combine: Combine,
}

/// Ordered rule list for one operation. Rule order encodes priority.
#[derive(Debug, Clone)]
pub struct PatternTable {
    operation: Operation,
    rules: Vec<PatternRule>,
}

impl PatternTable {
    /// Compile a rule set into a table.
    ///
    /// Fails when a pattern does not compile or when a rule's arity exceeds
    /// the number of capture groups its pattern can produce.
    pub fn build(operation: Operation, specs: &[(&str, usize, Combine)]) -> Result<Self> {
        let mut rules = Vec::with_capacity(specs.len());
        for &(pattern, arity, combine) in specs {
            let pattern = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| TableError::InvalidPattern { operation, source })?;

            let captures = pattern.captures_len() - 1;
            if arity > captures {
                return Err(TableError::ArityExceedsCaptures {
                    operation,
                    arity,
                    captures,
                });
            }

            rules.push(PatternRule {
                pattern,
                arity,
                combine,
            });
        }

        Ok(Self { operation, rules })
    }

    /// The operation this table classifies.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Evaluate a question against this table.
    ///
    /// Returns the expected result computed by the first matching rule, or
    /// `None` when no rule matches. Captures that are not signed-integer
    /// literals (an intervening verb, say) are skipped rather than failing
    /// the rule; a rule only fires once it has at least `arity` numeric
    /// captures, and the combiner sees exactly the first `arity` of them.
    /// An undefined combiner result (division by zero) also counts as no
    /// match, never as a numeric value.
    pub fn evaluate(&self, question: &str) -> Option<i64> {
        for rule in &self.rules {
            let Some(caps) = rule.pattern.captures(question) else {
                continue;
            };

            let operands: Vec<i64> = caps
                .iter()
                .skip(1)
                .flatten()
                .filter_map(|m| m.as_str().parse().ok())
                .collect();

            if operands.len() < rule.arity {
                continue;
            }

            match (rule.combine)(&operands[..rule.arity]) {
                Some(expected) => {
                    debug!(
                        operation = %self.operation,
                        pattern = rule.pattern.as_str(),
                        expected,
                        "question matched"
                    );
                    return Some(expected);
                }
                None => {
                    debug!(
                        operation = %self.operation,
                        pattern = rule.pattern.as_str(),
                        "matched rule produced an undefined result"
                    );
                    continue;
                }
            }
        }

        None
    }
}

/// Floor division (toward negative infinity), undefined for divisor zero.
///
/// The original behavior floors rather than truncating toward zero; kept
/// deliberately even though Rust's `/` truncates.
fn checked_floor_div(a: i64, b: i64) -> Option<i64> {
    if b == 0 {
        return None;
    }
    let q = a.checked_div(b)?;
    let r = a.checked_rem(b)?;
    if r != 0 && (r < 0) != (b < 0) {
        Some(q - 1)
    } else {
        Some(q)
    }
}

/// Built-in tables, in the fixed Add → Subtract → Multiply → Divide
/// priority order. Built once at first use; a malformed built-in rule set
/// is a programmer error caught by tests, hence the expect.
static TABLES: LazyLock<Vec<PatternTable>> = LazyLock::new(|| {
    vec![
        PatternTable::build(
            Operation::Add,
            &[
                (r"(\d+)\s*\+\s*(\d+)", 2, |n| n[0].checked_add(n[1])),
                (r"have (\d+).*?(add|bake|make|get|receive).*?(\d+)", 2, |n| {
                    n[0].checked_add(n[1])
                }),
            ],
        )
        .expect("built-in addition table"),
        PatternTable::build(
            Operation::Subtract,
            &[
                (r"(\d+)\s*\-\s*(\d+)", 2, |n| n[0].checked_sub(n[1])),
                (r"if .*?have (\d+).*?(eat|give).*?(\d+)", 2, |n| {
                    n[0].checked_sub(n[1])
                }),
            ],
        )
        .expect("built-in subtraction table"),
        PatternTable::build(
            Operation::Multiply,
            &[
                (r"(\d+)\s*\*\s*(\d+)", 2, |n| n[0].checked_mul(n[1])),
                (r"(\d+) times (\d+)", 2, |n| n[0].checked_mul(n[1])),
            ],
        )
        .expect("built-in multiplication table"),
        PatternTable::build(
            Operation::Divide,
            &[
                (r"(\d+)\s*/\s*(\d+)", 2, |n| checked_floor_div(n[0], n[1])),
                (r"(\d+) divided by (\d+)", 2, |n| {
                    checked_floor_div(n[0], n[1])
                }),
            ],
        )
        .expect("built-in division table"),
    ]
});

/// The built-in tables in priority order.
pub fn tables() -> &'static [PatternTable] {
    &TABLES
}
