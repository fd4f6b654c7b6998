//! Required-question completeness checks.

use std::fmt;

use crate::{Answers, Question, QuestionId};

/// Outcome of checking whether an answer set can be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every visible required question is answered.
    Valid,

    /// These visible required questions are unanswered, in display order.
    Invalid(Vec<QuestionId>),
}

impl ValidationResult {
    /// Check if the answers are submission-ready.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The unanswered required questions (empty when valid).
    pub fn missing(&self) -> &[QuestionId] {
        match self {
            Self::Valid => &[],
            Self::Invalid(ids) => ids,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "All required questions answered."),
            Self::Invalid(ids) => write!(
                f,
                "Please answer all required questions. {} remaining.",
                ids.len()
            ),
        }
    }
}

/// Check that every required question in `visible` has a non-empty answer.
///
/// `visible` is expected to come from [`visible_questions`](crate::visible_questions):
/// hidden questions are simply not in the list, so they can never block a
/// submission regardless of their own required flag.
pub fn validate_for_submission(visible: &[&Question], answers: &Answers) -> ValidationResult {
    let missing: Vec<QuestionId> = visible
        .iter()
        .filter(|q| q.is_required() && !answers.has_value(q.id()))
        .map(|q| q.id().clone())
        .collect();

    if missing.is_empty() {
        ValidationResult::Valid
    } else {
        tracing::debug!(missing = missing.len(), "required questions unanswered");
        ValidationResult::Invalid(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Answer, visible_questions};

    #[test]
    fn flags_only_required_questions() {
        let q1 = Question::text("q1", "One").required();
        let q2 = Question::text("q2", "Two").required();
        let q3 = Question::text("q3", "Three");
        let visible = vec![&q1, &q2, &q3];

        let answers = Answers::new().with("q1", "x");
        assert_eq!(
            validate_for_submission(&visible, &answers),
            ValidationResult::Invalid(vec!["q2".into()])
        );
    }

    #[test]
    fn empty_answers_count_as_missing() {
        let text = Question::text("t", "Text").required();
        let multi = Question::multiple("m", "Multi").required();
        let visible = vec![&text, &multi];

        let answers = Answers::new()
            .with("t", "")
            .with("m", Answer::Choices(Vec::new()));
        let result = validate_for_submission(&visible, &answers);
        assert_eq!(
            result.missing(),
            [QuestionId::from("t"), QuestionId::from("m")]
        );

        let answers = Answers::new().with("t", "ok").with("m", vec!["a"]);
        assert!(validate_for_submission(&visible, &answers).is_valid());
    }

    #[test]
    fn hidden_required_question_never_blocks() {
        let questions = vec![
            Question::single("q1", "Gate")
                .with_order(0)
                .with_option("yes", "Yes")
                .with_option("no", "No")
                .required(),
            Question::text("q2", "Follow-up")
                .with_order(1)
                .shown_when("q1", "yes")
                .required(),
        ];
        let answers = Answers::new().with("q1", "no");

        let visible = visible_questions(&questions, &answers);
        assert_eq!(
            validate_for_submission(&visible, &answers),
            ValidationResult::Valid
        );
    }

    #[test]
    fn display_message() {
        let result = ValidationResult::Invalid(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(
            result.to_string(),
            "Please answer all required questions. 3 remaining."
        );
    }
}
