//! Test frontend for running quizzes without user interaction.
//!
//! `TestFrontend` answers questions from a script of pre-defined answers.
//! Like an interactive frontend, it only answers questions that are visible
//! for the answers given so far, re-evaluating visibility after each one.
//!
//! # Example
//!
//! ```rust
//! use quiz_engine::{Answers, Question, QuizDefinition, QuizFrontend, TestFrontend};
//!
//! let quiz = QuizDefinition::new(vec![
//!     Question::single("q1", "Any trouble sleeping?")
//!         .with_option("yes", "Yes")
//!         .with_option("no", "No")
//!         .required(),
//!     Question::text("q2", "Tell us more")
//!         .with_order(1)
//!         .shown_when("q1", "yes"),
//! ]);
//!
//! let answers = TestFrontend::new()
//!     .with_choice("q1", "no")
//!     .with_text("q2", "never asked")
//!     .collect(&quiz, Answers::new())
//!     .unwrap();
//!
//! assert_eq!(answers.len(), 1);
//! ```

use std::collections::HashMap;

use crate::{Answer, Answers, QuestionId, QuizDefinition, QuizFrontend, visible_questions};

/// A frontend that returns pre-configured answers.
#[derive(Debug, Clone, Default)]
pub struct TestFrontend {
    script: HashMap<QuestionId, Answer>,
}

/// Error type for TestFrontend.
#[derive(Debug, thiserror::Error)]
pub enum TestFrontendError {
    #[error("No scripted answer for required question: {0}")]
    MissingAnswer(QuestionId),

    #[error("Scripted answer for '{0}' does not fit the question kind")]
    WrongShape(QuestionId),
}

impl TestFrontend {
    /// Create a new empty test frontend.
    pub fn new() -> Self {
        Self {
            script: HashMap::new(),
        }
    }

    /// Script an answer for a question.
    pub fn with_answer(mut self, id: impl Into<QuestionId>, answer: impl Into<Answer>) -> Self {
        self.script.insert(id.into(), answer.into());
        self
    }

    /// Script a single-select answer.
    pub fn with_choice(self, id: impl Into<QuestionId>, option_id: impl Into<String>) -> Self {
        self.with_answer(id, Answer::choice(option_id))
    }

    /// Script a multi-select answer.
    pub fn with_choices<I, S>(self, id: impl Into<QuestionId>, option_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_answer(id, Answer::choices(option_ids))
    }

    /// Script a free-text answer.
    pub fn with_text(self, id: impl Into<QuestionId>, text: impl Into<String>) -> Self {
        self.with_answer(id, Answer::text(text))
    }
}

impl QuizFrontend for TestFrontend {
    type Error = TestFrontendError;

    fn collect(
        &self,
        definition: &QuizDefinition,
        mut answers: Answers,
    ) -> Result<Answers, Self::Error> {
        let mut asked: Vec<QuestionId> = Vec::new();

        // Answering can reveal questions anywhere in the list, so restart the
        // walk until a pass asks nothing new.
        loop {
            let visible = visible_questions(definition.questions(), &answers);
            let Some(question) = visible.into_iter().find(|q| !asked.contains(q.id())) else {
                break;
            };
            let id = question.id().clone();

            match self.script.get(&id) {
                Some(answer) if !question.kind().accepts(answer) => {
                    return Err(TestFrontendError::WrongShape(id));
                }
                Some(answer) => answers.insert(id.clone(), answer.clone()),
                None if question.is_required() && !answers.has_value(&id) => {
                    return Err(TestFrontendError::MissingAnswer(id));
                }
                None => {}
            }
            asked.push(id);
        }

        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Question;

    fn branching_quiz() -> QuizDefinition {
        QuizDefinition::new(vec![
            Question::multiple("topics", "What brings you here?")
                .with_order(0)
                .with_option("anxiety", "Anxiety")
                .with_option("sleep", "Sleep")
                .required(),
            Question::text("anxiety_detail", "When do you feel anxious?")
                .with_order(1)
                .shown_when("topics", "anxiety")
                .required(),
            Question::text("sleep_detail", "How many hours do you sleep?")
                .with_order(2)
                .shown_when("topics", "sleep")
                .required(),
        ])
    }

    #[test]
    fn answers_only_visible_questions() {
        let answers = TestFrontend::new()
            .with_choices("topics", ["sleep"])
            .with_text("anxiety_detail", "mornings")
            .with_text("sleep_detail", "five")
            .collect(&branching_quiz(), Answers::new())
            .unwrap();

        assert_eq!(answers.get_text(&"sleep_detail".into()).unwrap(), "five");
        assert!(!answers.contains(&"anxiety_detail".into()));
    }

    #[test]
    fn missing_required_answer() {
        let result = TestFrontend::new()
            .with_choices("topics", ["anxiety"])
            .collect(&branching_quiz(), Answers::new());

        assert!(matches!(
            result,
            Err(TestFrontendError::MissingAnswer(id)) if id.as_str() == "anxiety_detail"
        ));
    }

    #[test]
    fn keeps_restored_answers() {
        let restored = Answers::new()
            .with("topics", vec!["anxiety"])
            .with("anxiety_detail", "evenings");

        let answers = TestFrontend::new()
            .collect(&branching_quiz(), restored.clone())
            .unwrap();
        assert_eq!(answers, restored);
    }

    #[test]
    fn rejects_wrong_shape() {
        let result = TestFrontend::new()
            .with_choice("topics", "sleep")
            .collect(&branching_quiz(), Answers::new());
        assert!(matches!(result, Err(TestFrontendError::WrongShape(_))));
    }
}
