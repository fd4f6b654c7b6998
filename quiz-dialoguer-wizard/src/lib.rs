//! # quiz-dialoguer-wizard
//!
//! Dialoguer wizard frontend for quiz-engine.
//!
//! This crate provides a command-line wizard for taking a conditional quiz
//! using the `dialoguer` library. Questions are presented step-by-step; a
//! follow-up question appears as soon as the answer that unlocks it is given.
//!
//! ## Example
//!
//! ```rust,ignore
//! use quiz_dialoguer_wizard::DialoguerFrontend;
//! use quiz_engine::{InMemoryBackend, QuizSession};
//!
//! fn main() -> anyhow::Result<()> {
//!     let backend = InMemoryBackend::new().with_quiz(example_quizzes::anxiety_triage());
//!     let mut session = QuizSession::load(&backend, "anxiety-triage")?;
//!     session.run(&DialoguerFrontend::new())?;
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerError, DialoguerFrontend};
