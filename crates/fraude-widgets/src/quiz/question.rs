//! Immutable quiz questions.

use crate::error::{Result, WidgetError};

/// Every question offers exactly this many choices.
pub const CHOICE_COUNT: usize = 4;

/// A multiple-choice question with one correct answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub(super) prompt: String,
    pub(super) choices: [String; CHOICE_COUNT],
    pub(super) correct: usize,
}

impl Question {
    /// Builds a question, rejecting a correct index outside the choices.
    ///
    /// ```rust
    /// use fraude_widgets::Question;
    ///
    /// let q = Question::new("2 + 2?", ["3", "4", "5", "22"], 1).unwrap();
    /// assert!(q.is_correct(1));
    /// assert!(Question::new("2 + 2?", ["3", "4", "5", "22"], 4).is_err());
    /// ```
    pub fn new<S: Into<String>>(
        prompt: impl Into<String>,
        choices: [S; CHOICE_COUNT],
        correct: usize,
    ) -> Result<Self> {
        let prompt = prompt.into();
        if correct >= CHOICE_COUNT {
            return Err(WidgetError::InvalidQuestion {
                prompt,
                index: correct,
                len: CHOICE_COUNT,
            });
        }

        Ok(Self {
            prompt,
            choices: choices.map(Into::into),
            correct,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn choices(&self) -> &[String; CHOICE_COUNT] {
        &self.choices
    }

    pub fn correct_choice(&self) -> usize {
        self.correct
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_answer() {
        let err = Question::new("q", ["a", "b", "c", "d"], 9).unwrap_err();
        assert!(matches!(
            err,
            WidgetError::InvalidQuestion { index: 9, len: 4, .. }
        ));
    }

    #[test]
    fn keeps_choice_order() {
        let q = Question::new("q", ["a", "b", "c", "d"], 3).unwrap();
        assert_eq!(q.choices()[0], "a");
        assert_eq!(q.choices()[3], "d");
        assert!(q.is_correct(3));
        assert!(!q.is_correct(0));
    }
}
