//! Core types for the quiz-engine crate.
//!
//! This crate provides the foundational types for defining conditional quizzes:
//! - `QuizDefinition` - The top-level quiz structure
//! - `Question`, `QuestionKind` and `Condition` - Individual questions and their display rules
//! - `Answer` and `Answers` - The respondent's answers, keyed by `QuestionId`
//! - `QuizResponse` - The saved/submitted payload exchanged with the backend
//! - `QuizBackend` and `QuizFrontend` traits - For persistence and presentation

mod question_id;
pub use question_id::QuestionId;

mod answer;
pub use answer::Answer;

mod answers;
pub use answers::{AnswerError, Answers};

mod question;
pub use question::{Condition, Question, QuestionKind, QuizOption};

mod quiz_definition;
pub use quiz_definition::QuizDefinition;

mod quiz_response;
pub use quiz_response::{AnswerEntry, QuizResponse};

mod definition_issue;
pub use definition_issue::DefinitionIssue;

mod error;
pub use error::QuizError;

mod traits;
pub use traits::{QuizBackend, QuizFrontend};
