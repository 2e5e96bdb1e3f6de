//! Bounded answer input.
//!
//! [`InputValidator`] reads answer lines until one names a valid option. It
//! blocks on the underlying reader and has no timeout.

use std::io::{BufRead, Write};

use crate::error::QuizError;
use crate::presenter::Presenter;

/// Outcome of parsing a single answer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerParse {
    /// Zero-based index of the chosen option.
    Accepted(usize),
    /// Not a number in `1..=num_options`.
    Rejected,
}

/// Parse one answer line against `num_options` choices.
///
/// Surrounding whitespace is ignored. Only plain ASCII digits are accepted,
/// so signs, decimals, and empty lines are rejected.
pub fn parse_choice(line: &str, num_options: usize) -> AnswerParse {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return AnswerParse::Rejected;
    }

    match trimmed.parse::<usize>() {
        Ok(n) if (1..=num_options).contains(&n) => AnswerParse::Accepted(n - 1),
        _ => AnswerParse::Rejected,
    }
}

/// Reads answers from a line-oriented source.
pub struct InputValidator<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> InputValidator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }

    /// Prompt until the user picks an option, returning its zero-based index.
    ///
    /// Invalid lines are answered with the presenter's rejection message and
    /// a fresh prompt. End of input yields [`QuizError::InputExhausted`].
    pub fn get_choice<W, P>(
        &mut self,
        num_options: usize,
        out: &mut W,
        presenter: &P,
    ) -> Result<usize, QuizError>
    where
        W: Write + ?Sized,
        P: Presenter + ?Sized,
    {
        loop {
            write!(out, "{}", presenter.render_prompt(num_options))?;
            out.flush()?;

            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Err(QuizError::InputExhausted);
            }

            // Lines that are not UTF-8 are rejected like any other bad answer.
            let parsed = std::str::from_utf8(&self.line)
                .map_or(AnswerParse::Rejected, |line| parse_choice(line, num_options));

            match parsed {
                AnswerParse::Accepted(index) => {
                    tracing::debug!(choice = index + 1, "answer accepted");
                    return Ok(index);
                }
                AnswerParse::Rejected => {
                    tracing::debug!(
                        input = %String::from_utf8_lossy(&self.line).trim_end(),
                        "answer rejected"
                    );
                    writeln!(out, "{}", presenter.render_rejection(num_options))?;
                }
            }
        }
    }
}
