use quiz_engine::{Question, QuizDefinition};

/// Intake quiz used before booking a first session.
///
/// Demonstrates single- and multi-select gates, a two-level chain
/// (`concern` -> `anxiety_triggers` -> `panic_frequency`) and a required
/// follow-up that only appears for one answer.
pub fn anxiety_triage() -> QuizDefinition {
    QuizDefinition::new(vec![
        Question::single("concern", "What would you like help with?")
            .with_order(0)
            .with_option("anxiety", "Anxiety or stress")
            .with_option("depression", "Low mood")
            .with_option("relationship", "Relationships")
            .with_option("other", "Something else")
            .required(),
        Question::multiple("anxiety_triggers", "When does the anxiety show up?")
            .with_order(10)
            .with_option("work", "At work or school")
            .with_option("social", "In social situations")
            .with_option("panic", "Sudden panic attacks")
            .with_option("night", "At night")
            .shown_when("concern", "anxiety")
            .required(),
        Question::single("panic_frequency", "How often do panic attacks happen?")
            .with_order(20)
            .with_option("rarely", "Less than once a month")
            .with_option("monthly", "A few times a month")
            .with_option("weekly", "Every week or more")
            .shown_when("anxiety_triggers", "panic")
            .required(),
        Question::single("mood_duration", "How long have you been feeling low?")
            .with_order(30)
            .with_option("weeks", "A few weeks")
            .with_option("months", "A few months")
            .with_option("years", "Longer than a year")
            .shown_when("concern", "depression")
            .required(),
        Question::text("other_detail", "Tell us a little about it")
            .with_order(40)
            .shown_when("concern", "other")
            .required(),
        Question::single("safety", "Have you had thoughts of harming yourself recently?")
            .with_order(50)
            .with_option("no", "No")
            .with_option("yes", "Yes")
            .required(),
        Question::text(
            "crisis_contact",
            "Please leave a phone number so a counselor can reach you today",
        )
        .with_order(60)
        .shown_when("safety", "yes")
        .required(),
        Question::single("format", "How would you prefer to meet?")
            .with_order(70)
            .with_option("video", "Video call")
            .with_option("chat", "Chat")
            .with_option("phone", "Phone"),
        Question::text("notes", "Anything else your counselor should know?").with_order(80),
    ])
    .with_id("quiz-anxiety-triage")
    .with_slug("anxiety-triage")
    .with_title("Find the right counselor")
    .with_description("A few questions to match you with the right doctor. Takes about two minutes.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_engine::{
        Answers, InMemoryBackend, QuizDefinitionExt, QuizSession, TestFrontend, check_definition,
        validate_for_submission,
    };

    fn visible_ids(answers: &Answers) -> Vec<String> {
        anxiety_triage()
            .visible_questions(answers)
            .iter()
            .map(|q| q.id().to_string())
            .collect()
    }

    #[test]
    fn definition_is_clean() {
        assert!(check_definition(&anxiety_triage()).is_empty());
    }

    #[test]
    fn starts_with_unconditional_questions() {
        assert_eq!(
            visible_ids(&Answers::new()),
            ["concern", "safety", "format", "notes"]
        );
    }

    #[test]
    fn chain_opens_step_by_step() {
        let answers = Answers::new().with("concern", "anxiety");
        assert!(visible_ids(&answers).contains(&"anxiety_triggers".to_string()));
        assert!(!visible_ids(&answers).contains(&"panic_frequency".to_string()));

        let answers = answers.with("anxiety_triggers", vec!["social", "panic"]);
        assert!(visible_ids(&answers).contains(&"panic_frequency".to_string()));
    }

    #[test]
    fn stale_answer_still_gates_its_dependents() {
        // Switching concern hides the triggers question, but its stored
        // answer stays in the map and still satisfies the next link.
        let answers = Answers::new()
            .with("concern", "depression")
            .with("anxiety_triggers", vec!["panic"]);

        let ids = visible_ids(&answers);
        assert!(!ids.contains(&"anxiety_triggers".to_string()));
        assert!(ids.contains(&"panic_frequency".to_string()));
        assert!(ids.contains(&"mood_duration".to_string()));
    }

    #[test]
    fn safety_follow_up_is_required() {
        let quiz = anxiety_triage();
        let answers = Answers::new()
            .with("concern", "relationship")
            .with("safety", "yes");

        let visible = quiz.visible_questions(&answers);
        assert_eq!(
            validate_for_submission(&visible, &answers).missing(),
            [quiz_engine::QuestionId::from("crisis_contact")]
        );
    }

    #[test]
    fn full_run_through_session() {
        let backend = InMemoryBackend::new().with_quiz(anxiety_triage());
        let mut session = QuizSession::load(&backend, "anxiety-triage").unwrap();

        session
            .run(
                &TestFrontend::new()
                    .with_choice("concern", "anxiety")
                    .with_choices("anxiety_triggers", ["work", "night"])
                    .with_choice("safety", "no")
                    .with_choice("format", "video"),
            )
            .unwrap();

        let stored = backend.response("quiz-anxiety-triage").unwrap();
        assert!(stored.completed);
        assert_eq!(stored.answers.len(), 4);
    }
}
