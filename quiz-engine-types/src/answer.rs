use serde::{Deserialize, Serialize};

/// A single answer given by the respondent.
///
/// This is the value stored in `Answers` for each answered question.
/// Single-select and free-text answers are bare scalars; multi-select
/// answers are always a collection, even with one or zero options checked.
///
/// On the wire a scalar is a JSON string and a collection a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// An option id (single-select) or free text (text questions).
    Value(String),

    /// The option ids checked in a multi-select question.
    Choices(Vec<String>),
}

impl Answer {
    /// A single-select answer.
    pub fn choice(option_id: impl Into<String>) -> Self {
        Self::Value(option_id.into())
    }

    /// A free-text answer.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Value(text.into())
    }

    /// A multi-select answer.
    pub fn choices<I, S>(option_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choices(option_ids.into_iter().map(Into::into).collect())
    }

    /// Try to get this answer as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(s) => Some(s),
            Self::Choices(_) => None,
        }
    }

    /// Try to get this answer as a list of option ids.
    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            Self::Choices(ids) => Some(ids),
            Self::Value(_) => None,
        }
    }

    /// Check if the answer carries no information (empty text or nothing checked).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Value(s) => s.is_empty(),
            Self::Choices(ids) => ids.is_empty(),
        }
    }

    /// Check if this answer satisfies a conditional value.
    ///
    /// A scalar must equal `value`; a collection must contain it.
    /// Empty answers match nothing, and nothing matches an empty value.
    pub fn matches(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match self {
            Self::Value(s) => !s.is_empty() && s == value,
            Self::Choices(ids) => ids.iter().any(|id| id == value),
        }
    }

    /// Check if this is a collection answer.
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Choices(_))
    }

    /// Get the type name of this answer for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Value(_) => "Value",
            Self::Choices(_) => "Choices",
        }
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Value(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::Value(s.to_string())
    }
}

impl From<Vec<String>> for Answer {
    fn from(ids: Vec<String>) -> Self {
        Self::Choices(ids)
    }
}

impl From<Vec<&str>> for Answer {
    fn from(ids: Vec<&str>) -> Self {
        Self::choices(ids)
    }
}
