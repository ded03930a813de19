//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid question id: {0}")]
    InvalidQuestionId(String),
}

impl DomainError {
    /// Check if this error was caused by rejected question text
    pub fn is_invalid_question(&self) -> bool {
        matches!(self, DomainError::InvalidQuestion(_))
    }
}
