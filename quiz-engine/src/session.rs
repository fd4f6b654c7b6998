//! Quiz-taking lifecycle: load, answer, save progress, submit.

use crate::{
    Answer, Answers, Question, QuestionId, QuestionKind, QuizBackend, QuizDefinition, QuizError,
    QuizFrontend, QuizProgress, QuizResponse, ValidationResult, validate_for_submission,
    visible_questions,
};

/// One respondent working through one quiz.
///
/// The session owns the answer map and the navigation cursor; visibility and
/// validation are recomputed from scratch on every call. Persistence goes
/// through the borrowed [`QuizBackend`].
#[derive(Debug)]
pub struct QuizSession<'b, B> {
    backend: &'b B,
    definition: QuizDefinition,
    answers: Answers,
    progress: QuizProgress,
    submitted: bool,
}

impl<'b, B: QuizBackend> QuizSession<'b, B> {
    /// Start a session over an already fetched quiz with no saved answers.
    pub fn new(backend: &'b B, definition: QuizDefinition) -> Self {
        Self {
            backend,
            definition,
            answers: Answers::new(),
            progress: QuizProgress::new(),
            submitted: false,
        }
    }

    /// Fetch a quiz by slug and resume the respondent's saved response, if any.
    ///
    /// A completed saved response puts the session in the submitted state.
    pub fn load(backend: &'b B, slug: &str) -> Result<Self, QuizError> {
        let definition = backend.fetch_quiz(slug).map_err(|e| {
            let err: anyhow::Error = e.into();
            tracing::warn!(slug, "failed to load quiz: {err:#}");
            QuizError::Backend(err)
        })?;

        let mut session = Self::new(backend, definition);

        match backend.fetch_response(&session.definition.id) {
            Ok(Some(response)) => {
                session.answers = response.answer_map();
                session.submitted = response.completed;
                tracing::info!(
                    slug,
                    answers = session.answers.len(),
                    completed = response.completed,
                    "resumed saved response"
                );
            }
            Ok(None) => tracing::info!(slug, "no saved response"),
            // A missing response must not keep the respondent out of the quiz.
            Err(e) => {
                let err: anyhow::Error = e.into();
                tracing::warn!(slug, "could not fetch saved response: {err:#}");
            }
        }

        Ok(session)
    }

    pub fn definition(&self) -> &QuizDefinition {
        &self.definition
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn progress(&self) -> QuizProgress {
        self.progress
    }

    /// The questions currently visible, in display order.
    pub fn visible(&self) -> Vec<&Question> {
        visible_questions(self.definition.questions(), &self.answers)
    }

    /// The question under the navigation cursor.
    pub fn current_question(&self) -> Option<&Question> {
        self.progress.current(&self.visible())
    }

    /// Move to the next visible question. Returns `false` at the end.
    pub fn next(&mut self) -> bool {
        let len = self.visible().len();
        self.progress.next(len)
    }

    /// Move to the previous visible question. Returns `false` at the start.
    pub fn previous(&mut self) -> bool {
        self.progress.previous()
    }

    /// Record an answer.
    ///
    /// The answer must belong to a question of this quiz and have the shape
    /// its kind expects. Other answers are left untouched even if the edit
    /// hides the questions they belong to.
    pub fn answer(&mut self, id: impl Into<QuestionId>, answer: Answer) -> Result<(), QuizError> {
        let id = id.into();
        let question = self.editable_question(&id)?;

        if !question.kind().accepts(&answer) {
            return Err(QuizError::AnswerMismatch {
                expected: question.kind().as_str(),
                id,
            });
        }

        self.answers.insert(id, answer);
        self.after_edit();
        Ok(())
    }

    /// Check or uncheck an option of a multi-select question.
    pub fn toggle(
        &mut self,
        id: impl Into<QuestionId>,
        option_id: &str,
        checked: bool,
    ) -> Result<(), QuizError> {
        let id = id.into();
        let question = self.editable_question(&id)?;

        if question.kind() != QuestionKind::Multiple {
            return Err(QuizError::AnswerMismatch {
                expected: question.kind().as_str(),
                id,
            });
        }

        self.answers.toggle_choice(id, option_id, checked);
        self.after_edit();
        Ok(())
    }

    /// Check the current answers against the current visible set.
    pub fn validate(&self) -> ValidationResult {
        validate_for_submission(&self.visible(), &self.answers)
    }

    /// Persist the current answers without completing the response.
    pub fn save_progress(&self) -> Result<(), QuizError> {
        if self.submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        let response = QuizResponse::partial(&self.definition.id, &self.answers);
        self.send(&response)?;
        tracing::info!(
            quiz = %self.definition.id,
            answers = self.answers.len(),
            "progress saved"
        );
        Ok(())
    }

    /// Submit the response as complete.
    ///
    /// Unanswered required questions are reported as
    /// [`QuizError::Incomplete`] and nothing is sent to the backend.
    pub fn submit(&mut self) -> Result<(), QuizError> {
        if self.submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        if let ValidationResult::Invalid(missing) = self.validate() {
            tracing::info!(
                quiz = %self.definition.id,
                missing = missing.len(),
                "submission blocked"
            );
            return Err(QuizError::Incomplete(missing));
        }

        let response = QuizResponse::complete(&self.definition.id, &self.answers);
        self.send(&response)?;
        self.submitted = true;
        tracing::info!(quiz = %self.definition.id, "quiz submitted");
        Ok(())
    }

    /// Let a frontend collect answers, then submit them.
    ///
    /// Answers collected before a cancellation are discarded; call
    /// [`save_progress`](Self::save_progress) between runs to keep them.
    pub fn run<F: QuizFrontend>(&mut self, frontend: &F) -> Result<(), QuizError> {
        if self.submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        let collected = frontend
            .collect(&self.definition, self.answers.clone())
            .map_err(|e| {
                if F::is_cancelled(&e) {
                    QuizError::Cancelled
                } else {
                    QuizError::backend(e)
                }
            })?;
        self.answers = collected;
        self.after_edit();
        self.submit()
    }

    fn editable_question(&self, id: &QuestionId) -> Result<&Question, QuizError> {
        if self.submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        self.definition
            .question(id)
            .ok_or_else(|| QuizError::UnknownQuestion(id.clone()))
    }

    fn after_edit(&mut self) {
        let len = self.visible().len();
        self.progress.clamp(len);
    }

    fn send(&self, response: &QuizResponse) -> Result<(), QuizError> {
        self.backend.submit_response(response).map_err(|e| {
            let err: anyhow::Error = e.into();
            tracing::warn!(
                quiz = %response.quiz_id,
                completed = response.completed,
                "failed to store response: {err:#}"
            );
            QuizError::Backend(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryBackend;

    fn scenario() -> QuizDefinition {
        QuizDefinition::new(vec![
            Question::single("q1", "Are you currently in therapy?")
                .with_order(0)
                .with_option("yes", "Yes")
                .with_option("no", "No")
                .required(),
            Question::text("q2", "What is working for you?")
                .with_order(1)
                .shown_when("q1", "yes")
                .required(),
        ])
        .with_id("quiz-1")
        .with_slug("therapy")
    }

    #[test]
    fn load_without_saved_response() {
        let backend = InMemoryBackend::new().with_quiz(scenario());
        let session = QuizSession::load(&backend, "therapy").unwrap();

        assert!(session.answers().is_empty());
        assert!(!session.is_submitted());
        assert_eq!(session.current_question().map(|q| q.id().as_str()), Some("q1"));
    }

    #[test]
    fn load_unknown_quiz_fails() {
        let backend = InMemoryBackend::new();
        let err = QuizSession::load(&backend, "missing").unwrap_err();
        assert!(matches!(err, QuizError::Backend(_)));
    }

    #[test]
    fn rejects_unknown_and_mismatched_answers() {
        let backend = InMemoryBackend::new().with_quiz(scenario());
        let mut session = QuizSession::load(&backend, "therapy").unwrap();

        assert!(matches!(
            session.answer("nope", Answer::text("x")),
            Err(QuizError::UnknownQuestion(_))
        ));
        assert!(matches!(
            session.answer("q1", Answer::choices(["yes"])),
            Err(QuizError::AnswerMismatch { .. })
        ));
        assert!(matches!(
            session.toggle("q1", "yes", true),
            Err(QuizError::AnswerMismatch { .. })
        ));
    }

    #[test]
    fn incomplete_submit_never_reaches_backend() {
        let backend = InMemoryBackend::new().with_quiz(scenario());
        let mut session = QuizSession::load(&backend, "therapy").unwrap();
        session.answer("q1", Answer::choice("yes")).unwrap();

        let err = session.submit().unwrap_err();
        assert!(matches!(err, QuizError::Incomplete(ref ids) if ids == &[QuestionId::from("q2")]));
        assert!(backend.submissions().is_empty());
        assert!(!session.is_submitted());
    }

    #[test]
    fn cursor_follows_shrinking_visible_set() {
        let backend = InMemoryBackend::new().with_quiz(scenario());
        let mut session = QuizSession::load(&backend, "therapy").unwrap();

        session.answer("q1", Answer::choice("yes")).unwrap();
        assert!(session.next());
        assert_eq!(session.current_question().map(|q| q.id().as_str()), Some("q2"));

        session.answer("q1", Answer::choice("no")).unwrap();
        assert_eq!(session.progress().current_index(), 0);
        assert!(!session.next());
    }

    #[test]
    fn submitted_session_is_read_only() {
        let backend = InMemoryBackend::new().with_quiz(scenario());
        let mut session = QuizSession::load(&backend, "therapy").unwrap();
        session.answer("q1", Answer::choice("no")).unwrap();
        session.submit().unwrap();

        assert!(session.is_submitted());
        assert!(matches!(
            session.answer("q1", Answer::choice("yes")),
            Err(QuizError::AlreadySubmitted)
        ));
        assert!(matches!(session.save_progress(), Err(QuizError::AlreadySubmitted)));
        assert!(matches!(session.submit(), Err(QuizError::AlreadySubmitted)));
    }
}
