use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Answer, AnswerEntry, QuestionId};

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    Missing(QuestionId),

    #[error("Type mismatch for question '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// The respondent's current answers, keyed by question id.
///
/// This value is owned by the caller and handed to the engine on every
/// recomputation. It may be partial or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: HashMap<QuestionId, Answer>,
}

impl Answers {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, id: impl Into<QuestionId>, answer: impl Into<Answer>) -> Self {
        self.insert(id, answer);
        self
    }

    /// Insert or replace the answer for a question.
    pub fn insert(&mut self, id: impl Into<QuestionId>, answer: impl Into<Answer>) {
        self.values.insert(id.into(), answer.into());
    }

    /// Get the answer for a question.
    pub fn get(&self, id: &QuestionId) -> Option<&Answer> {
        self.values.get(id)
    }

    /// Check if an answer exists for a question.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, id: &QuestionId) -> Option<Answer> {
        self.values.remove(id)
    }

    /// Get an iterator over all id-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another answer set into this one, overwriting on conflict.
    pub fn extend(&mut self, other: Answers) {
        self.values.extend(other.values);
    }

    /// Check if a question has a present, non-empty answer.
    pub fn has_value(&self, id: &QuestionId) -> bool {
        self.get(id).is_some_and(|answer| !answer.is_empty())
    }

    /// Check or uncheck an option of a multi-select question.
    ///
    /// The stored answer is always a collection afterwards; a scalar left
    /// over from an earlier edit is discarded.
    pub fn toggle_choice(&mut self, id: impl Into<QuestionId>, option_id: &str, checked: bool) {
        let entry = self
            .values
            .entry(id.into())
            .or_insert_with(|| Answer::Choices(Vec::new()));

        if !entry.is_collection() {
            *entry = Answer::Choices(Vec::new());
        }

        if let Answer::Choices(ids) = entry {
            let present = ids.iter().any(|id| id == option_id);
            if checked && !present {
                ids.push(option_id.to_string());
            } else if !checked {
                ids.retain(|id| id != option_id);
            }
        }
    }

    // === Convenience accessors ===

    /// Get a single-select option id for a question.
    pub fn get_choice(&self, id: &QuestionId) -> Result<&str, AnswerError> {
        self.get_value(id)
    }

    /// Get the free text for a question.
    pub fn get_text(&self, id: &QuestionId) -> Result<&str, AnswerError> {
        self.get_value(id)
    }

    /// Get the checked option ids for a multi-select question.
    pub fn get_choices(&self, id: &QuestionId) -> Result<&[String], AnswerError> {
        match self.get(id) {
            Some(Answer::Choices(ids)) => Ok(ids),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "Choices",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    fn get_value(&self, id: &QuestionId) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(Answer::Value(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "Value",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Convert to the wire list `[{questionId, answer}]`, ordered by question id.
    pub fn to_entries(&self) -> Vec<AnswerEntry> {
        let mut entries: Vec<AnswerEntry> = self
            .values
            .iter()
            .map(|(id, answer)| AnswerEntry {
                question_id: id.clone(),
                answer: answer.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.question_id.cmp(&b.question_id));
        entries
    }
}

impl FromIterator<AnswerEntry> for Answers {
    fn from_iter<T: IntoIterator<Item = AnswerEntry>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|entry| (entry.question_id, entry.answer))
                .collect(),
        }
    }
}

impl FromIterator<(QuestionId, Answer)> for Answers {
    fn from_iter<T: IntoIterator<Item = (QuestionId, Answer)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Answers {
    type Item = (QuestionId, Answer);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a QuestionId, &'a Answer);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
