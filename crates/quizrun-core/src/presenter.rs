//! The presentation seam between the session loop and the terminal.
//!
//! A [`Presenter`] turns session state into text. It never writes anything
//! itself; the session writes what it returns. Implemented by
//! `quizrun-render`'s `TerminalRenderer`.

use std::time::Duration;

use crate::model::Question;
use crate::session::SessionSummary;

/// Formats every piece of text a quiz session shows.
pub trait Presenter {
    /// Progress bar: current question (1-based), score so far, and elapsed time.
    fn render_header(&self, score: usize, current: usize, total: usize, elapsed: Duration)
        -> String;

    /// Header followed by the question text and its numbered options.
    /// `index` is zero-based.
    fn render_question(
        &self,
        question: &Question,
        index: usize,
        total: usize,
        score: usize,
        elapsed: Duration,
    ) -> String;

    /// The answer prompt. Written without a trailing newline.
    fn render_prompt(&self, num_options: usize) -> String;

    /// Shown after a line that is not a number in `1..=num_options`.
    fn render_rejection(&self, num_options: usize) -> String;

    /// Correct/incorrect verdict, the correct answer, and the response time.
    fn render_feedback(&self, is_correct: bool, correct_answer: &str, time_taken: Duration)
        -> String;

    /// Final score, percentage, total time, and tier message.
    fn render_summary(&self, summary: &SessionSummary) -> String;
}
