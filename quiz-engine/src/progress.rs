//! Step-by-step navigation over the visible question list.

use crate::Question;

/// Cursor into the visible question list.
///
/// The cursor stores only an index; callers pass the freshly computed
/// visible list (or its length) on every call, so a recomputation that
/// shrinks the list is handled by [`QuizProgress::clamp`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizProgress {
    index: usize,
}

impl QuizProgress {
    /// Start at the first question.
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Place the cursor on a given position.
    pub fn at(index: usize) -> Self {
        Self { index }
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The question under the cursor, if the list is non-empty.
    pub fn current<'q>(&self, visible: &[&'q Question]) -> Option<&'q Question> {
        visible.get(self.index).copied()
    }

    pub fn can_go_next(&self, visible_len: usize) -> bool {
        self.index + 1 < visible_len
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    pub fn is_last(&self, visible_len: usize) -> bool {
        visible_len > 0 && self.index == visible_len - 1
    }

    /// Advance one question. Returns `false` at the end of the list.
    pub fn next(&mut self, visible_len: usize) -> bool {
        if self.can_go_next(visible_len) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one question. Returns `false` at the start of the list.
    pub fn previous(&mut self) -> bool {
        if self.can_go_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Keep the cursor inside a list of `visible_len` questions.
    pub fn clamp(&mut self, visible_len: usize) {
        self.index = self.index.min(visible_len.saturating_sub(1));
    }

    /// Completion percentage, `(index + 1) / len`, rounded; 0 for an empty list.
    pub fn percent(&self, visible_len: usize) -> u8 {
        if visible_len == 0 {
            return 0;
        }
        let position = (self.index + 1).min(visible_len);
        ((position * 100 + visible_len / 2) / visible_len) as u8
    }

    /// "Question i of n".
    pub fn label(&self, visible_len: usize) -> String {
        let position = if visible_len == 0 {
            0
        } else {
            (self.index + 1).min(visible_len)
        };
        format!("Question {position} of {visible_len}")
    }
}
