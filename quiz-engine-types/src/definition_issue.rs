use crate::QuestionId;

/// A structural problem found in a quiz definition.
///
/// The engine itself tolerates every one of these; they are only reported
/// by the opt-in definition check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionIssue {
    #[error("Question id '{0}' is used more than once")]
    DuplicateId(QuestionId),

    #[error("Questions '{first}' and '{second}' share order {order}")]
    DuplicateOrder {
        first: QuestionId,
        second: QuestionId,
        order: i64,
    },

    #[error("Question '{0}' is conditional on itself")]
    SelfReference(QuestionId),

    #[error("Question '{id}' is conditional on unknown question '{on}'")]
    DanglingCondition { id: QuestionId, on: QuestionId },

    #[error("Question '{id}' is conditional on '{on}' but names no value to wait for")]
    MissingConditionValue { id: QuestionId, on: QuestionId },

    #[error("Question '{id}' waits for option '{value}', which '{on}' does not offer")]
    UnknownConditionValue {
        id: QuestionId,
        on: QuestionId,
        value: String,
    },

    #[error("Question '{id}' is conditional on free-text question '{on}'")]
    ConditionOnText { id: QuestionId, on: QuestionId },

    #[error("Question '{id}' is conditional on '{on}', which does not come before it")]
    ForwardCondition { id: QuestionId, on: QuestionId },

    #[error("Conditional cycle: {}", format_cycle(.0))]
    Cycle(Vec<QuestionId>),

    #[error("Question '{id}' offers {count} option(s); at least 2 are needed")]
    TooFewOptions { id: QuestionId, count: usize },

    #[error("Free-text question '{0}' carries options")]
    OptionsOnText(QuestionId),
}

fn format_cycle(ids: &[QuestionId]) -> String {
    let mut parts: Vec<&str> = ids.iter().map(QuestionId::as_str).collect();
    if let Some(first) = ids.first() {
        parts.push(first.as_str());
    }
    parts.join(" -> ")
}
