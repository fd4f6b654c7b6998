use crate::{Answers, QuizDefinition, QuizResponse};

/// Trait for the service that stores quizzes and respondents' answers.
///
/// The quiz engine never performs I/O itself; sessions go through this seam
/// to load a quiz, resume a saved response, and persist progress or a final
/// submission. Retry policy and transport are the implementation's concern.
pub trait QuizBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Fetch a quiz, with its questions, by slug.
    fn fetch_quiz(&self, slug: &str) -> Result<QuizDefinition, Self::Error>;

    /// Fetch the current respondent's saved response for a quiz.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn fetch_response(&self, quiz_id: &str) -> Result<Option<QuizResponse>, Self::Error>;

    /// Persist a partial save (`completed == false`) or a final submission.
    fn submit_response(&self, response: &QuizResponse) -> Result<(), Self::Error>;
}

/// Trait for frontends that present a quiz to a respondent.
///
/// Frontends receive the definition and the answers collected so far and
/// return the updated answers. They decide how to present the quiz (wizard
/// style, form style, scripted) but must only ask questions that are visible
/// for the answers given so far.
pub trait QuizFrontend {
    /// The error type for this frontend.
    type Error: Into<anyhow::Error>;

    /// Collect answers for a quiz.
    ///
    /// # Arguments
    /// * `definition` - The quiz to present
    /// * `answers` - Answers restored from an earlier save (may be empty)
    ///
    /// # Returns
    /// * `Ok(answers)` once the respondent is done
    /// * `Err` on cancellation or frontend failure
    fn collect(
        &self,
        definition: &QuizDefinition,
        answers: Answers,
    ) -> Result<Answers, Self::Error>;

    /// Check if an error means the respondent cancelled the quiz.
    fn is_cancelled(_error: &Self::Error) -> bool {
        false
    }
}
