use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Answer, QuestionId};

/// A selectable option of a single- or multi-select question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// Option id, stored in answers and matched by conditions.
    pub id: String,

    /// Display text.
    #[serde(default)]
    pub text: String,
}

impl QuizOption {
    /// Create a new option.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// The kind of question, determining the shape of its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exactly one option; answered with a bare option id.
    Single,

    /// Zero or more options; answered with a collection of option ids.
    Multiple,

    /// Free-form text.
    Text,
}

impl QuestionKind {
    /// Check if this kind offers options to choose from.
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Single | Self::Multiple)
    }

    /// Check if an answer has the shape this kind expects.
    pub fn accepts(&self, answer: &Answer) -> bool {
        match self {
            Self::Multiple => answer.is_collection(),
            Self::Single | Self::Text => !answer.is_collection(),
        }
    }

    /// Lowercase name, as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
            Self::Text => "text",
        }
    }
}

/// A conditional display rule: the question is shown only when the answer
/// to `on` is (or contains) `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// The question whose answer gates visibility.
    pub on: QuestionId,

    /// The option id that must appear in that answer.
    pub value: String,
}

impl Condition {
    /// Create a new condition.
    pub fn new(on: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        Self {
            on: on.into(),
            value: value.into(),
        }
    }
}

/// A single question in a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    kind: QuestionKind,
    options: Vec<QuizOption>,
    order: i64,
    required: bool,
    condition: Option<Condition>,
}

impl Question {
    /// Create a new, optional, unconditional question.
    pub fn new(id: impl Into<QuestionId>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
            options: Vec::new(),
            order: 0,
            required: false,
            condition: None,
        }
    }

    /// Create a single-select question.
    pub fn single(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, QuestionKind::Single)
    }

    /// Create a multi-select question.
    pub fn multiple(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, QuestionKind::Multiple)
    }

    /// Create a free-text question.
    pub fn text(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, QuestionKind::Text)
    }

    /// Set the base ordering.
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Append an option.
    pub fn with_option(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.options.push(QuizOption::new(id, text));
        self
    }

    /// Replace all options.
    pub fn with_options(mut self, options: Vec<QuizOption>) -> Self {
        self.options = options;
        self
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the question as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Only show this question when the answer to `on` is or contains `value`.
    pub fn shown_when(mut self, on: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.condition = Some(Condition::new(on, value));
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the question kind.
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Get the options (empty for text questions).
    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    /// Look up an option by id.
    pub fn option(&self, id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Get the base ordering.
    pub fn order(&self) -> i64 {
        self.order
    }

    /// Check if the question must be answered before submission (when visible).
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the conditional display rule, if any.
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Check if the question is shown regardless of other answers.
    pub fn is_unconditional(&self) -> bool {
        self.condition.is_none()
    }
}

/// Wire representation of a question.
///
/// `conditionalOn` / `conditionalValue` are flat optional strings. Only an
/// absent or empty `conditionalOn` means "no condition"; a missing value
/// keeps the question gated on an empty value that nothing matches.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireQuestion {
    id: QuestionId,
    #[serde(default)]
    prompt: String,
    #[serde(rename = "type")]
    kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<QuizOption>,
    #[serde(default)]
    order: i64,
    #[serde(default)]
    is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    conditional_on: Option<QuestionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    conditional_value: Option<String>,
}

impl From<WireQuestion> for Question {
    fn from(wire: WireQuestion) -> Self {
        let condition = match wire.conditional_on {
            Some(on) if !on.is_empty() => Some(Condition {
                on,
                value: wire.conditional_value.unwrap_or_default(),
            }),
            _ => None,
        };
        Self {
            id: wire.id,
            prompt: wire.prompt,
            kind: wire.kind,
            options: wire.options,
            order: wire.order,
            required: wire.is_required,
            condition,
        }
    }
}

impl From<&Question> for WireQuestion {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.clone(),
            prompt: q.prompt.clone(),
            kind: q.kind,
            options: q.options.clone(),
            order: q.order,
            is_required: q.required,
            conditional_on: q.condition.as_ref().map(|c| c.on.clone()),
            conditional_value: q
                .condition
                .as_ref()
                .map(|c| c.value.clone())
                .filter(|v| !v.is_empty()),
        }
    }
}

impl Serialize for Question {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireQuestion::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Question {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        WireQuestion::deserialize(deserializer).map(Question::from)
    }
}
