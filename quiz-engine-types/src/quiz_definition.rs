use serde::{Deserialize, Serialize};

use crate::{Question, QuestionId};

/// The top-level structure containing all questions and metadata for a quiz.
///
/// Questions are kept in arrival order; the engine sorts a borrowed view by
/// each question's `order` when computing visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDefinition {
    /// Backend identifier of the quiz.
    #[serde(default)]
    pub id: String,

    /// URL-friendly name used to fetch the quiz.
    #[serde(default)]
    pub slug: String,

    /// Display title.
    #[serde(default)]
    pub title: String,

    /// Optional description shown before the first question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// All questions in the quiz.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuizDefinition {
    /// Create a new quiz definition with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    /// Create an empty quiz definition.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the backend id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a question.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Check if the quiz has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
