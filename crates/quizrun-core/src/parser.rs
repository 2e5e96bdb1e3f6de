//! Question file loader.
//!
//! Loads an ordered list of questions from a JSON or TOML file and validates
//! every record. Any failure rejects the whole file.

use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::model::Question;

/// Supported question file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionFormat {
    /// A top-level JSON array of question objects.
    Json,
    /// A TOML document with a `[[questions]]` array of tables.
    Toml,
}

impl QuestionFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(QuestionFormat::Json),
            "toml" => Some(QuestionFormat::Toml),
            _ => None,
        }
    }
}

/// Intermediate TOML structure for question files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    #[serde(default)]
    questions: Vec<Question>,
}

/// Load and validate every question in the file at `path`.
pub fn load(path: &Path) -> Result<Vec<Question>, LoadError> {
    let format = QuestionFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = load_str(&content, format, path)?;
    tracing::debug!(
        path = %path.display(),
        count = questions.len(),
        "loaded questions"
    );
    Ok(questions)
}

/// Parse and validate questions from a string (useful for testing).
///
/// `source_path` is only used in error messages.
pub fn load_str(
    content: &str,
    format: QuestionFormat,
    source_path: &Path,
) -> Result<Vec<Question>, LoadError> {
    let parse_error = |message: String| LoadError::Parse {
        path: source_path.to_path_buf(),
        message,
    };

    let questions: Vec<Question> = match format {
        QuestionFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
        QuestionFormat::Toml => {
            let parsed: TomlQuestionFile =
                toml::from_str(content).map_err(|e| parse_error(e.message().to_string()))?;
            parsed.questions
        }
    };

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: source_path.to_path_buf(),
        });
    }

    for (i, question) in questions.iter().enumerate() {
        validate_question(i + 1, question)?;
    }

    Ok(questions)
}

/// Check one record against the question invariants.
///
/// `number` is the 1-based position of the record, used in the error.
pub fn validate_question(number: usize, question: &Question) -> Result<(), LoadError> {
    let invalid = |reason: String| LoadError::InvalidQuestion { number, reason };

    if question.text.trim().is_empty() {
        return Err(invalid("question text is empty".into()));
    }

    if question.options.len() < 2 {
        return Err(invalid(format!(
            "needs at least 2 options, found {}",
            question.options.len()
        )));
    }

    let Some(first) = question.answer_index() else {
        return Err(invalid(format!(
            "answer {:?} is not one of the options",
            question.answer
        )));
    };

    let duplicates = question.options[first + 1..]
        .iter()
        .filter(|o| **o == question.answer)
        .count();
    if duplicates > 0 {
        return Err(invalid(format!(
            "answer {:?} matches {} options",
            question.answer,
            duplicates + 1
        )));
    }

    Ok(())
}
