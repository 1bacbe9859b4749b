//! Arithmetic answer validation.

use crate::extract::extract_integer;
use crate::patterns::tables;
use crate::types::Outcome;
use tracing::debug;

/// Check a free-text answer against a natural-language arithmetic question.
///
/// The raw answer is reduced to an integer first; if that fails there is
/// nothing to compare against and the result is `Indeterminate` without
/// consulting any pattern table. Otherwise each operation's table is tried
/// in the fixed Add → Subtract → Multiply → Divide priority order and the
/// first match decides. A question matching no table is `Indeterminate`.
///
/// Total over arbitrary string pairs: always returns exactly one of the
/// three outcome states and never panics on runtime data.
pub fn validate_arithmetic(question: &str, raw_answer: &str) -> Outcome {
    let Some(answer) = extract_integer(raw_answer) else {
        return Outcome::Indeterminate;
    };

    for table in tables() {
        if let Some(expected) = table.evaluate(question) {
            return if answer == expected {
                Outcome::Correct { expected }
            } else {
                Outcome::Incorrect { expected }
            };
        }
    }

    debug!(question, "question matched no pattern table");
    Outcome::Indeterminate
}
