//! In-memory quiz backend for tests and offline use.
//!
//! `InMemoryBackend` stores quizzes by slug and the respondent's response by
//! quiz id. It mirrors the persistence rules the real service enforces: a
//! response can be replaced any number of times until it is completed, after
//! which it is frozen.
//!
//! # Example
//!
//! ```rust
//! use quiz_engine::{InMemoryBackend, Question, QuizDefinition, QuizSession};
//!
//! let quiz = QuizDefinition::new(vec![Question::text("q1", "How are you?").required()])
//!     .with_id("quiz-1")
//!     .with_slug("check-in");
//!
//! let backend = InMemoryBackend::new().with_quiz(quiz);
//! let session = QuizSession::load(&backend, "check-in").unwrap();
//! assert_eq!(session.visible().len(), 1);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::{QuizBackend, QuizDefinition, QuizResponse};

/// Error type for InMemoryBackend.
#[derive(Debug, thiserror::Error)]
pub enum InMemoryBackendError {
    #[error("Quiz not found: {0}")]
    QuizNotFound(String),

    #[error("Response for quiz '{0}' is already completed")]
    ResponseLocked(String),
}

/// A backend that keeps everything in memory.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    quizzes: HashMap<String, QuizDefinition>,
    responses: RefCell<HashMap<String, QuizResponse>>,
    submissions: RefCell<Vec<QuizResponse>>,
}

impl InMemoryBackend {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quiz, addressable by its slug.
    pub fn with_quiz(mut self, quiz: QuizDefinition) -> Self {
        self.quizzes.insert(quiz.slug.clone(), quiz);
        self
    }

    /// Seed a previously saved response.
    pub fn with_response(self, response: QuizResponse) -> Self {
        self.responses
            .borrow_mut()
            .insert(response.quiz_id.clone(), response);
        self
    }

    /// The stored response for a quiz, if any.
    pub fn response(&self, quiz_id: &str) -> Option<QuizResponse> {
        self.responses.borrow().get(quiz_id).cloned()
    }

    /// Every accepted save or submission, oldest first.
    pub fn submissions(&self) -> Vec<QuizResponse> {
        self.submissions.borrow().clone()
    }
}

impl QuizBackend for InMemoryBackend {
    type Error = InMemoryBackendError;

    fn fetch_quiz(&self, slug: &str) -> Result<QuizDefinition, Self::Error> {
        self.quizzes
            .get(slug)
            .cloned()
            .ok_or_else(|| InMemoryBackendError::QuizNotFound(slug.to_string()))
    }

    fn fetch_response(&self, quiz_id: &str) -> Result<Option<QuizResponse>, Self::Error> {
        Ok(self.response(quiz_id))
    }

    fn submit_response(&self, response: &QuizResponse) -> Result<(), Self::Error> {
        if !self.quizzes.values().any(|q| q.id == response.quiz_id) {
            return Err(InMemoryBackendError::QuizNotFound(response.quiz_id.clone()));
        }

        let mut responses = self.responses.borrow_mut();
        if responses
            .get(&response.quiz_id)
            .is_some_and(|stored| stored.completed)
        {
            return Err(InMemoryBackendError::ResponseLocked(
                response.quiz_id.clone(),
            ));
        }

        responses.insert(response.quiz_id.clone(), response.clone());
        self.submissions.borrow_mut().push(response.clone());
        Ok(())
    }
}
