//! Opt-in structural check of a quiz definition.
//!
//! Visibility never depends on this check: a quiz with dangling or cyclic
//! conditions still evaluates. Load-time tooling can call
//! [`ensure_valid_definition`] to refuse such quizzes instead.

use std::collections::{HashMap, HashSet, hash_map::Entry};

use crate::{DefinitionIssue, Question, QuestionId, QuestionKind, QuizDefinition, QuizError};

/// Report every structural problem in a quiz definition.
///
/// Issues are grouped per question in arrival order, followed by cycles.
pub fn check_definition(definition: &QuizDefinition) -> Vec<DefinitionIssue> {
    let questions = definition.questions();
    let mut issues = Vec::new();

    let mut by_id: HashMap<&QuestionId, &Question> = HashMap::new();
    for question in questions {
        match by_id.entry(question.id()) {
            Entry::Occupied(_) => {
                issues.push(DefinitionIssue::DuplicateId(question.id().clone()));
            }
            Entry::Vacant(slot) => {
                slot.insert(question);
            }
        }
    }

    let mut by_order: HashMap<i64, &QuestionId> = HashMap::new();
    for question in questions {
        if let Some(first) = by_order.insert(question.order(), question.id())
            && first != question.id()
        {
            issues.push(DefinitionIssue::DuplicateOrder {
                first: first.clone(),
                second: question.id().clone(),
                order: question.order(),
            });
        }
    }

    for question in questions {
        check_options(question, &mut issues);
        check_condition(question, &by_id, &mut issues);
    }

    issues.extend(find_cycles(questions, &by_id));
    issues
}

/// Like [`check_definition`], but fails when any issue is found.
pub fn ensure_valid_definition(definition: &QuizDefinition) -> Result<(), QuizError> {
    let issues = check_definition(definition);
    if issues.is_empty() {
        Ok(())
    } else {
        for issue in &issues {
            tracing::warn!(slug = %definition.slug, "{issue}");
        }
        Err(QuizError::InvalidDefinition(issues))
    }
}

fn check_options(question: &Question, issues: &mut Vec<DefinitionIssue>) {
    let count = question.options().len();
    match question.kind() {
        QuestionKind::Single | QuestionKind::Multiple if count < 2 => {
            issues.push(DefinitionIssue::TooFewOptions {
                id: question.id().clone(),
                count,
            });
        }
        QuestionKind::Text if count > 0 => {
            issues.push(DefinitionIssue::OptionsOnText(question.id().clone()));
        }
        _ => {}
    }
}

fn check_condition(
    question: &Question,
    by_id: &HashMap<&QuestionId, &Question>,
    issues: &mut Vec<DefinitionIssue>,
) {
    let Some(condition) = question.condition() else {
        return;
    };
    let id = question.id().clone();

    if &condition.on == question.id() {
        issues.push(DefinitionIssue::SelfReference(id));
        return;
    }

    if condition.value.is_empty() {
        issues.push(DefinitionIssue::MissingConditionValue {
            id: id.clone(),
            on: condition.on.clone(),
        });
    }

    let Some(target) = by_id.get(&condition.on) else {
        issues.push(DefinitionIssue::DanglingCondition {
            id,
            on: condition.on.clone(),
        });
        return;
    };

    if target.order() >= question.order() {
        issues.push(DefinitionIssue::ForwardCondition {
            id: id.clone(),
            on: condition.on.clone(),
        });
    }

    if target.kind() == QuestionKind::Text {
        issues.push(DefinitionIssue::ConditionOnText {
            id,
            on: condition.on.clone(),
        });
    } else if !condition.value.is_empty() && target.option(&condition.value).is_none() {
        issues.push(DefinitionIssue::UnknownConditionValue {
            id,
            on: condition.on.clone(),
            value: condition.value.clone(),
        });
    }
}

/// Each question has at most one outgoing edge (its condition), so the
/// conditional graph is a functional graph: follow edges from every start
/// and report a cycle the first time a walk re-enters its own path.
fn find_cycles(
    questions: &[Question],
    by_id: &HashMap<&QuestionId, &Question>,
) -> Vec<DefinitionIssue> {
    let mut cycles = Vec::new();
    let mut done: HashSet<&QuestionId> = HashSet::new();

    for start in questions {
        let mut path: Vec<&QuestionId> = Vec::new();
        let mut on_path: HashSet<&QuestionId> = HashSet::new();
        let mut current = Some(start.id());

        while let Some(id) = current {
            if done.contains(id) {
                break;
            }
            if on_path.contains(id) {
                // Self references are reported on their own.
                if let Some(pos) = path.iter().position(|p| *p == id) {
                    let cycle: Vec<QuestionId> = path[pos..].iter().map(|p| (*p).clone()).collect();
                    if cycle.len() > 1 {
                        cycles.push(DefinitionIssue::Cycle(cycle));
                    }
                }
                break;
            }
            path.push(id);
            on_path.insert(id);
            current = by_id
                .get(id)
                .and_then(|q| q.condition())
                .map(|c| &c.on)
                .filter(|on| by_id.contains_key(on));
        }

        done.extend(path);
    }

    cycles
}
