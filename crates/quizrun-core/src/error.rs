//! Error types for loading questions and running a session.
//!
//! Rejected answer input is not represented here: the answer reader handles
//! it by re-prompting, so it never reaches a caller.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a question file.
///
/// Every variant is fatal. The loader never returns a partial question set.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or unreadable.
    #[error("failed to read question file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid for their format.
    #[error("failed to parse question file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The file extension does not name a supported format.
    #[error("unsupported question file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The file parsed but holds no questions.
    #[error("question file {} contains no questions", path.display())]
    Empty { path: PathBuf },

    /// A record violates the question invariants. `number` is 1-based.
    #[error("question {number} is invalid: {reason}")]
    InvalidQuestion { number: usize, reason: String },
}

/// Errors that abort a quiz session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Standard input closed before every question was answered.
    #[error("input ended before the quiz was finished")]
    InputExhausted,

    /// Reading input or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Returns `true` if the session ended because input ran out.
    pub fn is_input_exhausted(&self) -> bool {
        matches!(self, QuizError::InputExhausted)
    }
}
