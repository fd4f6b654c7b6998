use serde::{Deserialize, Serialize};

use crate::{Answer, Answers, QuestionId};

/// One answer on the wire: `{questionId, answer}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEntry {
    pub question_id: QuestionId,
    pub answer: Answer,
}

/// A respondent's saved or submitted answers, as persisted by the backend.
///
/// Created on the first partial save, replaced on every save, and frozen by
/// the backend once `completed` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub quiz_id: String,
    #[serde(default)]
    pub answers: Vec<AnswerEntry>,
    #[serde(default)]
    pub completed: bool,
}

impl QuizResponse {
    /// A progress save that leaves the response open.
    pub fn partial(quiz_id: impl Into<String>, answers: &Answers) -> Self {
        Self {
            quiz_id: quiz_id.into(),
            answers: answers.to_entries(),
            completed: false,
        }
    }

    /// A final submission.
    pub fn complete(quiz_id: impl Into<String>, answers: &Answers) -> Self {
        Self {
            quiz_id: quiz_id.into(),
            answers: answers.to_entries(),
            completed: true,
        }
    }

    /// Rebuild the answer map from the wire list.
    pub fn answer_map(&self) -> Answers {
        self.answers.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_payload_shape() {
        let answers = Answers::new()
            .with("q1", "yes")
            .with("q2", vec!["a", "b"]);
        let response = QuizResponse::complete("quiz-1", &answers);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["quizId"], "quiz-1");
        assert_eq!(value["completed"], true);
        assert_eq!(value["answers"][0]["questionId"], "q1");
        assert_eq!(value["answers"][0]["answer"], "yes");
        assert_eq!(value["answers"][1]["answer"][1], "b");
    }

    #[test]
    fn restores_answer_map() {
        let json = r#"{
            "quizId": "quiz-1",
            "answers": [
                {"questionId": "q1", "answer": "no"},
                {"questionId": "q3", "answer": ["x"]}
            ],
            "completed": false
        }"#;
        let response: QuizResponse = serde_json::from_str(json).unwrap();
        let answers = response.answer_map();

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get_choice(&"q1".into()).unwrap(), "no");
        assert_eq!(answers.get_choices(&"q3".into()).unwrap(), ["x"]);
        assert!(!response.completed);
    }
}
