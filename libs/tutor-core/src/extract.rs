//! Numeric extraction from free-text answers.

use tracing::debug;

/// Extract a signed integer from a free-text answer.
///
/// Strips every character that is not an ASCII digit or a minus sign, then
/// parses the remainder as base-10. The filter is literal: it keeps every
/// `-` present, so an answer like `"1-2"` yields `"1-2"` and fails the
/// parse rather than guessing a sign placement.
///
/// Returns `None` when no valid integer remains (no digits at all, a bare
/// minus sign, a misplaced sign, or a literal too large for `i64`).
pub fn extract_integer(raw: &str) -> Option<i64> {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    match filtered.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(raw, filtered = %filtered, "answer text did not contain a usable integer");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integer() {
        assert_eq!(extract_integer("12"), Some(12));
        assert_eq!(extract_integer("-7"), Some(-7));
        assert_eq!(extract_integer("0"), Some(0));
    }

    #[test]
    fn digits_embedded_in_noise() {
        assert_eq!(extract_integer("the answer is 42!"), Some(42));
        assert_eq!(extract_integer("  12 apples "), Some(12));
        assert_eq!(extract_integer("it's -3 degrees"), Some(-3));
    }

    #[test]
    fn no_digits_fails() {
        assert_eq!(extract_integer("I don't know"), None);
        assert_eq!(extract_integer(""), None);
        assert_eq!(extract_integer("hello"), None);
    }

    #[test]
    fn bare_or_misplaced_sign_fails() {
        assert_eq!(extract_integer("-"), None);
        assert_eq!(extract_integer("--5"), None);
        assert_eq!(extract_integer("5-"), None);
        assert_eq!(extract_integer("1-2"), None);
    }

    #[test]
    fn sign_joined_across_noise() {
        // The filter keeps literal characters only, so noise between the
        // sign and the digits collapses away.
        assert_eq!(extract_integer("minus -  5"), Some(-5));
    }

    #[test]
    fn too_large_for_i64_fails() {
        assert_eq!(extract_integer("99999999999999999999999"), None);
    }
}
