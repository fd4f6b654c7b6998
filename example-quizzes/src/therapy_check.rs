use quiz_engine::{Question, QuizDefinition};

/// Smallest branching quiz: a yes/no gate with a required follow-up.
pub fn therapy_check() -> QuizDefinition {
    QuizDefinition::new(vec![
        Question::single("q1", "Are you currently seeing a counselor?")
            .with_order(0)
            .with_option("yes", "Yes")
            .with_option("no", "No")
            .required(),
        Question::text("q2", "What has been helpful so far?")
            .with_order(1)
            .shown_when("q1", "yes")
            .required(),
    ])
    .with_id("quiz-therapy-check")
    .with_slug("therapy-check")
    .with_title("Therapy check")
}
