//! Core data model types for quizrun.

use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// The on-disk field names are `question`, `options` and `answer`. A loaded
/// question always satisfies the invariant that `answer` equals exactly one
/// element of `options`; see [`crate::parser::validate_question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt shown to the user.
    #[serde(rename = "question")]
    pub text: String,
    /// Ordered answer options, presented as 1-based choices.
    pub options: Vec<String>,
    /// Text of the correct option.
    pub answer: String,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// Number of selectable options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Zero-based position of the correct option, if present.
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.answer)
    }

    /// Whether the option at `choice` (zero-based) is the correct one.
    ///
    /// Compares option text for exact equality with the answer, so an
    /// out-of-range choice is simply incorrect.
    pub fn is_correct(&self, choice: usize) -> bool {
        self.options
            .get(choice)
            .is_some_and(|chosen| *chosen == self.answer)
    }
}
