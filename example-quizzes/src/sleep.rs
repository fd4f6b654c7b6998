use quiz_engine::QuizDefinition;

/// Backend payload for the sleep quiz, as served by the quiz API.
pub const SLEEP_JSON: &str = include_str!("../data/sleep.json");

/// Sleep quiz, parsed from its backend payload.
pub fn sleep() -> anyhow::Result<QuizDefinition> {
    Ok(serde_json::from_str(SLEEP_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_engine::{Answers, QuizDefinitionExt, check_definition, validate_for_submission};

    #[test]
    fn parses_and_checks_clean() {
        let quiz = sleep().unwrap();
        assert_eq!(quiz.len(), 5);
        assert!(check_definition(&quiz).is_empty());
    }

    #[test]
    fn short_sleep_needs_a_reason() {
        let quiz = sleep().unwrap();
        let answers = Answers::new()
            .with("hours", "lt5")
            .with("issues", vec!["nightmares"]);

        let visible = quiz.visible_questions(&answers);
        let ids: Vec<&str> = visible.iter().map(|q| q.id().as_str()).collect();
        assert_eq!(
            ids,
            ["hours", "issues", "nightmare_detail", "short_sleep_reason", "notes"]
        );
        assert_eq!(
            validate_for_submission(&visible, &answers).missing().len(),
            1
        );
    }
}
