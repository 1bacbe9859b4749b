//! Core arithmetic tutoring library shared by the web backend.
//!
//! Provides:
//! - Numeric extraction from free-text student answers
//! - Pattern tables recognizing arithmetic questions (regex-based)
//! - Tri-state answer validation (correct / incorrect / indeterminate)
//! - Addition question generation and the self-answer guard

pub mod error;
pub mod extract;
pub mod generator;
pub mod guard;
pub mod patterns;
pub mod types;
pub mod validator;

pub use error::{Result, TableError};
pub use extract::extract_integer;
pub use generator::{generate_addition_question, generate_next_addition_question};
pub use guard::{truncate_if_answers_own_question, PROMPT_BACK_SUFFIX};
pub use patterns::{tables, Combine, PatternRule, PatternTable};
pub use types::{Operation, Outcome};
pub use validator::validate_arithmetic;
