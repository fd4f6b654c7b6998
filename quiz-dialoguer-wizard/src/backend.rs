//! Dialoguer frontend implementation for the QuizFrontend trait.

use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use quiz_engine::{
    Answer, Answers, Question, QuestionId, QuestionKind, QuizDefinition, QuizFrontend,
    QuizProgress, visible_questions,
};
use thiserror::Error;

/// Error type for the Dialoguer frontend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// Respondent cancelled the quiz (Ctrl+C, or declined the final confirmation).
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// A choice question has nothing to choose from.
    #[error("Question '{0}' has no options")]
    NoOptions(QuestionId),
}

impl DialoguerError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_interrupted(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn lift(err: dialoguer::Error) -> DialoguerError {
    if is_interrupted(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// Dialoguer frontend for interactive CLI quizzes.
///
/// Questions are asked one at a time in display order. After every answer the
/// visible set is recomputed, so follow-up questions appear as soon as the
/// answer that unlocks them is given.
#[derive(Debug, Clone)]
pub struct DialoguerFrontend {
    /// Use colorful theme for prompts.
    colorful: bool,

    /// Ask "Are you sure?" before handing the answers back.
    confirm_submit: bool,
}

impl Default for DialoguerFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerFrontend {
    /// Create a new Dialoguer frontend with default (colorful) theme.
    pub fn new() -> Self {
        Self {
            colorful: true,
            confirm_submit: true,
        }
    }

    /// Create a frontend with plain (no color) theme.
    pub fn plain() -> Self {
        Self {
            colorful: false,
            ..Self::new()
        }
    }

    /// Enable or disable the final submit confirmation.
    pub fn confirm_submit(mut self, confirm: bool) -> Self {
        self.confirm_submit = confirm;
        self
    }

    /// Ask a single question, returning `None` when an optional question is skipped.
    fn ask_question(
        &self,
        question: &Question,
        current: Option<&Answer>,
    ) -> Result<Option<Answer>, DialoguerError> {
        let prompt = if question.is_required() {
            format!("{} *", question.prompt())
        } else {
            question.prompt().to_string()
        };

        match question.kind() {
            QuestionKind::Single => self.ask_single(question, &prompt, current).map(Some),
            QuestionKind::Multiple => self.ask_multiple(question, &prompt, current).map(Some),
            QuestionKind::Text => self.ask_text(question, &prompt, current),
        }
    }

    fn ask_single(
        &self,
        question: &Question,
        prompt: &str,
        current: Option<&Answer>,
    ) -> Result<Answer, DialoguerError> {
        if question.options().is_empty() {
            return Err(DialoguerError::NoOptions(question.id().clone()));
        }
        let items: Vec<&str> = question.options().iter().map(|o| o.text.as_str()).collect();

        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.with_prompt(prompt).items(&items);

        let default_idx = current
            .and_then(Answer::as_str)
            .and_then(|id| question.options().iter().position(|o| o.id == id));
        builder = builder.default(default_idx.unwrap_or(0));

        let selection = builder.interact().map_err(lift)?;
        Ok(Answer::choice(question.options()[selection].id.clone()))
    }

    fn ask_multiple(
        &self,
        question: &Question,
        prompt: &str,
        current: Option<&Answer>,
    ) -> Result<Answer, DialoguerError> {
        if question.options().is_empty() {
            return Err(DialoguerError::NoOptions(question.id().clone()));
        }
        let items: Vec<&str> = question.options().iter().map(|o| o.text.as_str()).collect();
        let checked = current.and_then(Answer::as_choices).unwrap_or_default();
        let defaults: Vec<bool> = question
            .options()
            .iter()
            .map(|o| checked.contains(&o.id))
            .collect();

        loop {
            let mut builder: MultiSelect;
            let _theme;
            if self.colorful {
                _theme = ColorfulTheme::default();
                builder = MultiSelect::with_theme(&_theme);
            } else {
                builder = MultiSelect::new();
            }

            builder = builder
                .with_prompt(prompt)
                .items(&items)
                .defaults(&defaults);

            let selections = builder.interact().map_err(lift)?;

            if question.is_required() && selections.is_empty() {
                println!("Error: please select at least one option");
                continue;
            }

            return Ok(Answer::choices(
                selections
                    .into_iter()
                    .map(|idx| question.options()[idx].id.clone()),
            ));
        }
    }

    fn ask_text(
        &self,
        question: &Question,
        prompt: &str,
        current: Option<&Answer>,
    ) -> Result<Option<Answer>, DialoguerError> {
        let _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        builder = builder
            .with_prompt(prompt)
            .allow_empty(!question.is_required());

        if let Some(text) = current.and_then(Answer::as_str).filter(|s| !s.is_empty()) {
            builder = builder.default(text.to_string());
        }

        let value = builder.interact_text().map_err(lift)?;
        if value.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Answer::text(value)))
        }
    }

    fn confirm(&self) -> Result<bool, DialoguerError> {
        let prompt = "Are you sure you want to submit? You won't be able to change your answers.";
        let mut builder: Confirm;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Confirm::with_theme(&_theme);
        } else {
            builder = Confirm::new();
        }
        builder = builder.with_prompt(prompt).default(true);
        builder.interact().map_err(lift)
    }
}

impl QuizFrontend for DialoguerFrontend {
    type Error = DialoguerError;

    fn collect(
        &self,
        definition: &QuizDefinition,
        mut answers: Answers,
    ) -> Result<Answers, Self::Error> {
        if !definition.title.is_empty() {
            println!("{}", definition.title);
        }
        if let Some(description) = &definition.description {
            println!("{description}");
        }
        println!();

        let mut asked: Vec<QuestionId> = Vec::new();
        loop {
            let visible = visible_questions(definition.questions(), &answers);
            let Some(position) = visible.iter().position(|q| !asked.contains(q.id())) else {
                break;
            };
            let question = visible[position];
            let progress = QuizProgress::at(position);
            println!(
                "{} ({}%)",
                progress.label(visible.len()),
                progress.percent(visible.len())
            );

            let id = question.id().clone();
            match self.ask_question(question, answers.get(&id))? {
                Some(answer) => answers.insert(id.clone(), answer),
                None => {
                    answers.remove(&id);
                }
            }
            tracing::debug!(question = %id, "answered");
            asked.push(id);
        }

        if self.confirm_submit && !self.confirm()? {
            return Err(DialoguerError::Cancelled);
        }

        Ok(answers)
    }

    fn is_cancelled(error: &Self::Error) -> bool {
        error.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_flags() {
        let frontend = DialoguerFrontend::plain().confirm_submit(false);
        assert!(!frontend.colorful);
        assert!(!frontend.confirm_submit);
        assert!(DialoguerFrontend::default().colorful);
    }

    #[test]
    fn interrupted_io_is_cancellation() {
        let err = dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(lift(err).is_cancelled());

        let err = dialoguer::Error::IO(std::io::Error::other("tty gone"));
        assert!(!lift(err).is_cancelled());
        assert!(<DialoguerFrontend as QuizFrontend>::is_cancelled(
            &DialoguerError::Cancelled
        ));
    }
}
