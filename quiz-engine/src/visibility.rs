//! Conditional question visibility.

use crate::{Answers, Question, QuizDefinition};

/// Compute the questions currently visible to the respondent, in display order.
///
/// Questions are sorted ascending by `order` and walked once. An unconditional
/// question is always visible. A conditional question is visible only when the
/// answer to the question it depends on exists and is (for a scalar answer) or
/// contains (for a multi-select answer) the expected option id.
///
/// The result depends only on the two inputs. Conditions pointing at a later
/// question read whatever answer exists right now; conditions pointing at a
/// question that does not exist never match.
pub fn visible_questions<'q>(questions: &'q [Question], answers: &Answers) -> Vec<&'q Question> {
    let mut sorted: Vec<&Question> = questions.iter().collect();
    sorted.sort_by_key(|q| q.order());

    let mut visible = Vec::with_capacity(sorted.len());
    for question in sorted {
        let Some(condition) = question.condition() else {
            visible.push(question);
            continue;
        };

        let shown = answers
            .get(&condition.on)
            .is_some_and(|answer| answer.matches(&condition.value));

        if shown {
            visible.push(question);
        } else {
            tracing::trace!(
                question = %question.id(),
                on = %condition.on,
                value = %condition.value,
                "question hidden by unmet condition"
            );
        }
    }

    tracing::debug!(
        total = questions.len(),
        visible = visible.len(),
        "computed visible questions"
    );
    visible
}

/// Engine operations attached to `QuizDefinition`.
pub trait QuizDefinitionExt {
    /// See [`visible_questions`].
    fn visible_questions(&self, answers: &Answers) -> Vec<&Question>;
}

impl QuizDefinitionExt for QuizDefinition {
    fn visible_questions(&self, answers: &Answers) -> Vec<&Question> {
        visible_questions(self.questions(), answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Answer;

    fn ids(visible: &[&Question]) -> Vec<String> {
        visible.iter().map(|q| q.id().to_string()).collect()
    }

    fn gate_quiz() -> Vec<Question> {
        vec![
            Question::single("a", "Pick")
                .with_order(0)
                .with_option("opt1", "One")
                .with_option("opt2", "Two")
                .with_option("opt3", "Three"),
            Question::text("b", "Because one?")
                .with_order(1)
                .shown_when("a", "opt1"),
            Question::text("c", "Because two?")
                .with_order(2)
                .shown_when("a", "opt2"),
        ]
    }

    #[test]
    fn unconditional_questions_sorted_by_order() {
        let questions = vec![
            Question::text("late", "Late").with_order(30),
            Question::text("early", "Early").with_order(-5),
            Question::text("middle", "Middle").with_order(7),
        ];

        let visible = visible_questions(&questions, &Answers::new());
        assert_eq!(ids(&visible), ["early", "middle", "late"]);

        let noisy = Answers::new().with("early", "x").with("unrelated", "y");
        assert_eq!(ids(&visible_questions(&questions, &noisy)), ids(&visible));
    }

    #[test]
    fn single_select_gating() {
        let questions = gate_quiz();

        assert_eq!(ids(&visible_questions(&questions, &Answers::new())), ["a"]);

        let opt1 = Answers::new().with("a", "opt1");
        assert_eq!(ids(&visible_questions(&questions, &opt1)), ["a", "b"]);

        let opt3 = Answers::new().with("a", "opt3");
        assert_eq!(ids(&visible_questions(&questions, &opt3)), ["a"]);
    }

    #[test]
    fn multi_select_gating() {
        let mut questions = gate_quiz();
        questions[0] = Question::multiple("a", "Pick any")
            .with_order(0)
            .with_option("opt1", "One")
            .with_option("opt2", "Two")
            .with_option("opt3", "Three");

        let answers = Answers::new().with("a", vec!["opt1", "opt3"]);
        assert_eq!(ids(&visible_questions(&questions, &answers)), ["a", "b"]);
    }

    #[test]
    fn empty_answers_reveal_nothing() {
        let questions = gate_quiz();

        let empty_scalar = Answers::new().with("a", "");
        assert_eq!(ids(&visible_questions(&questions, &empty_scalar)), ["a"]);

        let empty_list = Answers::new().with("a", Answer::Choices(Vec::new()));
        assert_eq!(ids(&visible_questions(&questions, &empty_list)), ["a"]);
    }

    #[test]
    fn dangling_condition_is_never_visible() {
        let questions = vec![
            Question::text("q1", "Always").with_order(0),
            Question::text("q2", "Never").with_order(1).shown_when("ghost", "x"),
        ];
        let answers = Answers::new().with("q1", "x");
        assert_eq!(ids(&visible_questions(&questions, &answers)), ["q1"]);
    }

    #[test]
    fn forward_condition_reads_current_answer() {
        let questions = vec![
            Question::text("early", "Depends on later")
                .with_order(0)
                .shown_when("later", "yes"),
            Question::single("later", "Later")
                .with_order(1)
                .with_option("yes", "Yes")
                .with_option("no", "No"),
        ];

        assert_eq!(
            ids(&visible_questions(&questions, &Answers::new())),
            ["later"]
        );
        let answers = Answers::new().with("later", "yes");
        assert_eq!(
            ids(&visible_questions(&questions, &answers)),
            ["early", "later"]
        );
    }

    #[test]
    fn cyclic_conditions_do_not_loop() {
        let questions = vec![
            Question::single("x", "X").with_order(0).shown_when("y", "1"),
            Question::single("y", "Y").with_order(1).shown_when("x", "1"),
        ];
        assert!(visible_questions(&questions, &Answers::new()).is_empty());

        let answers = Answers::new().with("x", "1").with("y", "1");
        assert_eq!(ids(&visible_questions(&questions, &answers)), ["x", "y"]);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let questions = gate_quiz();
        let answers = Answers::new().with("a", "opt2");

        let first = visible_questions(&questions, &answers);
        let second = visible_questions(&questions, &answers);
        assert_eq!(first, second);
    }

    #[test]
    fn definition_extension() {
        let quiz = QuizDefinition::new(gate_quiz());
        let answers = Answers::new().with("a", "opt2");
        assert_eq!(ids(&quiz.visible_questions(&answers)), ["a", "c"]);
    }
}
