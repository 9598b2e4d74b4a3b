//! Answer validation errors.
//!
//! Raised when a recorded value does not match the declared shape of its
//! question. The session reducer drops such records with a warning; the
//! scoring engine never raises these — it degrades to defaults instead.

use thiserror::Error;

use crate::model::QuestionKind;

/// Errors from validating an answer against the question bank.
#[derive(Debug, Error)]
pub enum AnswerError {
    /// No question with this id exists in the bank.
    #[error("unknown question id: {0}")]
    UnknownQuestion(String),

    /// A Likert value outside the 1–5 scale.
    #[error("scale value {value} for '{id}' is outside 1-5")]
    ScaleOutOfRange { id: String, value: u8 },

    /// A choice that is not among the question's options.
    #[error("'{option}' is not an option of '{id}'")]
    UnknownOption { id: String, option: String },

    /// The value's shape does not match the question kind.
    #[error("answer for '{id}' does not match a {kind} question")]
    WrongShape { id: String, kind: QuestionKind },
}
