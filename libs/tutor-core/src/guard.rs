//! Self-answer guard for tutor-generated messages.
//!
//! The tutor prompt forbids answering its own question, but the model
//! sometimes does it anyway. When the message repeats the most recently
//! posed question verbatim, everything after that occurrence is cut and
//! replaced with a fixed prompt-back suffix, handing the turn to the
//! student.

/// Suffix appended after a truncated message.
pub const PROMPT_BACK_SUFFIX: &str = "🤖 Now it's your turn!";

/// Cut a tutor message short if it goes on past its own question.
///
/// Purely textual: no numeric reasoning, no partial or fuzzy matching.
/// An empty question never triggers truncation, and a message that does
/// not contain the question verbatim is returned unchanged.
pub fn truncate_if_answers_own_question(message: &str, question: &str) -> String {
    if question.is_empty() {
        return message.to_string();
    }

    match message.find(question) {
        Some(start) => {
            let end = start + question.len();
            format!("{} {}", message[..end].trim(), PROMPT_BACK_SUFFIX)
        }
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncates_after_the_question() {
        let message = "Great job! What is 2+2? The answer is 4.";
        assert_eq!(
            truncate_if_answers_own_question(message, "What is 2+2?"),
            "Great job! What is 2+2? 🤖 Now it's your turn!"
        );
    }

    #[test]
    fn message_without_question_is_unchanged() {
        let message = "Well done! Let's try something harder.";
        assert_eq!(
            truncate_if_answers_own_question(message, "What is 2+2?"),
            message
        );
    }

    #[test]
    fn question_at_end_only_gains_suffix() {
        let message = "Nice work. What is 3+3?";
        assert_eq!(
            truncate_if_answers_own_question(message, "What is 3+3?"),
            "Nice work. What is 3+3? 🤖 Now it's your turn!"
        );
    }

    #[test]
    fn trailing_whitespace_before_answer_is_trimmed() {
        let message = "What is 3+3?   \n6!";
        assert_eq!(
            truncate_if_answers_own_question(message, "What is 3+3?"),
            "What is 3+3? 🤖 Now it's your turn!"
        );
    }

    #[test]
    fn first_occurrence_wins() {
        let message = "What is 2+2? I repeat: What is 2+2? It's 4.";
        assert_eq!(
            truncate_if_answers_own_question(message, "What is 2+2?"),
            "What is 2+2? 🤖 Now it's your turn!"
        );
    }

    #[test]
    fn empty_question_is_a_no_op() {
        let message = "Anything at all.";
        assert_eq!(truncate_if_answers_own_question(message, ""), message);
    }

    #[test]
    fn match_is_case_sensitive() {
        let message = "what is 2+2? The answer is 4.";
        assert_eq!(
            truncate_if_answers_own_question(message, "What is 2+2?"),
            message
        );
    }
}
