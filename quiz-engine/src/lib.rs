//! # quiz-engine
//!
//! Conditional quizzes for patient triage. Backend-agnostic.
//!
//! A quiz is an ordered list of questions. Any question may be gated on an
//! earlier answer: it is only shown when that answer is (or, for a
//! multi-select question, contains) a given option. The engine works out
//! which questions are visible for the answers given so far, and whether
//! every visible required question is answered before final submission.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_engine::{Answers, Question, ValidationResult, validate_for_submission, visible_questions};
//!
//! let questions = vec![
//!     Question::single("q1", "Are you in therapy right now?")
//!         .with_order(0)
//!         .with_option("yes", "Yes")
//!         .with_option("no", "No")
//!         .required(),
//!     Question::text("q2", "What is working for you?")
//!         .with_order(1)
//!         .shown_when("q1", "yes")
//!         .required(),
//! ];
//!
//! let answers = Answers::new().with("q1", "yes");
//! let visible = visible_questions(&questions, &answers);
//! assert_eq!(visible.len(), 2);
//!
//! let result = validate_for_submission(&visible, &answers);
//! assert_eq!(result, ValidationResult::Invalid(vec!["q2".into()]));
//! ```
//!
//! ## Engine
//!
//! - [`visible_questions`] - The ordered visible subset for the current answers
//! - [`validate_for_submission`] - Required-question completeness check
//! - [`check_definition`] - Opt-in structural check (dangling, cyclic, forward conditions)
//!
//! Both core functions are pure; call them again after every answer edit.
//!
//! ## Sessions
//!
//! [`QuizSession`] drives the take-quiz lifecycle over a [`QuizBackend`]:
//! load and resume, answer, navigate, save progress, submit.
//!
//! ## Frontends
//!
//! Frontends are separate crates that implement `QuizFrontend`:
//! - `quiz-dialoguer-wizard` - CLI prompts via dialoguer
//!
//! [`TestFrontend`] and [`InMemoryBackend`] run quizzes without I/O.

// Re-export all types from quiz-engine-types
pub use quiz_engine_types::*;

mod visibility;
pub use visibility::{QuizDefinitionExt, visible_questions};

mod validation;
pub use validation::{ValidationResult, validate_for_submission};

mod check;
pub use check::{check_definition, ensure_valid_definition};

mod progress;
pub use progress::QuizProgress;

mod session;
pub use session::QuizSession;

// In-memory backend for tests and offline runs
mod memory_backend;
pub use memory_backend::{InMemoryBackend, InMemoryBackendError};

// Test frontend for running quizzes without user interaction
mod test_frontend;
pub use test_frontend::{TestFrontend, TestFrontendError};
