use crate::{DefinitionIssue, QuestionId};

/// Error type for quiz operations.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// The question id is not part of the quiz.
    #[error("Unknown question: {0}")]
    UnknownQuestion(QuestionId),

    /// The answer's shape does not fit the question kind.
    #[error("Question '{id}' expects a {expected} answer")]
    AnswerMismatch {
        id: QuestionId,
        expected: &'static str,
    },

    /// The response was already submitted and can no longer change.
    #[error("Quiz already submitted")]
    AlreadySubmitted,

    /// Required visible questions are still unanswered.
    #[error("Please answer all required questions. {} remaining.", .0.len())]
    Incomplete(Vec<QuestionId>),

    /// The quiz definition failed the strict load-time check.
    #[error("Invalid quiz definition: {} issue(s)", .0.len())]
    InvalidDefinition(Vec<DefinitionIssue>),

    /// Respondent cancelled the quiz (Ctrl+C, closed window, etc.)
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// Backend or frontend failure (network, persistence, terminal I/O).
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl QuizError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_message_counts_missing() {
        let err = QuizError::Incomplete(vec!["q2".into(), "q5".into()]);
        assert_eq!(
            err.to_string(),
            "Please answer all required questions. 2 remaining."
        );
    }

    #[test]
    fn backend_wraps_any_error() {
        let err = QuizError::backend(std::io::Error::other("offline"));
        assert!(matches!(err, QuizError::Backend(_)));
        assert!(!err.is_cancelled());
    }
}
