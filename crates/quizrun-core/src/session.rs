//! The quiz session state machine.
//!
//! A session walks every question in order:
//!
//! ```text
//! NotStarted -> Presenting(i) -> AwaitingAnswer(i) -> Scored(i) -> Presenting(i + 1)
//!                                                              \-> Complete
//! ```
//!
//! All text goes through the session's [`Presenter`]; the session only
//! writes what the presenter returns.

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::QuizError;
use crate::input::InputValidator;
use crate::model::Question;
use crate::parser;
use crate::presenter::Presenter;
use crate::scoring::{self, Tier};

/// Configuration for a quiz session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Pause after each feedback message before moving on.
    pub pause_after_feedback: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pause_after_feedback: Duration::from_secs(1),
        }
    }
}

impl SessionConfig {
    /// A config with no pause between questions.
    pub fn without_pause() -> Self {
        Self {
            pause_after_feedback: Duration::ZERO,
        }
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    /// About to show question `i`.
    Presenting(usize),
    /// Question `i` is on screen; the next step reads an answer.
    AwaitingAnswer(usize),
    /// An answer was read for question `index`; the next step scores it.
    Scored {
        index: usize,
        choice: usize,
        started: Instant,
    },
    Complete,
}

/// The result of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    /// Zero-based option the user picked.
    pub choice: usize,
    /// Whether the picked option's text equals the answer.
    pub correct: bool,
    /// Time from showing the prompt to accepting an answer.
    pub elapsed: Duration,
}

/// Mutable progress of a running session.
#[derive(Debug, Clone)]
pub struct QuizState {
    /// Correct answers so far.
    pub score: usize,
    /// Index of the question currently being asked.
    pub question_index: usize,
    /// When the session started.
    pub started: Instant,
    /// One entry per answered question, in order.
    pub outcomes: Vec<QuestionOutcome>,
}

impl QuizState {
    fn new() -> Self {
        Self {
            score: 0,
            question_index: 0,
            started: Instant::now(),
            outcomes: Vec::new(),
        }
    }

    /// Time since the session started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Response time of each answered question.
    pub fn per_question_elapsed(&self) -> Vec<Duration> {
        self.outcomes.iter().map(|o| o.elapsed).collect()
    }
}

/// Final results of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Number of correct answers, in `0..=total`.
    pub score: usize,
    /// Number of questions asked.
    pub total: usize,
    /// Per-question results, in order.
    pub outcomes: Vec<QuestionOutcome>,
    /// Wall-clock time of the whole session.
    pub total_elapsed: Duration,
}

impl SessionSummary {
    /// Percentage correct, or `None` for an empty session.
    pub fn percentage(&self) -> Option<f64> {
        scoring::percentage(self.score, self.total)
    }

    /// Tier for the final percentage, or `None` for an empty session.
    pub fn tier(&self) -> Option<Tier> {
        self.percentage().map(Tier::from_percentage)
    }
}

/// Runs one pass over a question list.
pub struct QuizSession<'q, P, R, W> {
    questions: &'q [Question],
    presenter: P,
    input: InputValidator<R>,
    out: W,
    config: SessionConfig,
    phase: Phase,
    state: QuizState,
}

impl<'q, P, R, W> QuizSession<'q, P, R, W>
where
    P: Presenter,
    R: BufRead,
    W: Write,
{
    pub fn new(
        questions: &'q [Question],
        presenter: P,
        input: R,
        out: W,
        config: SessionConfig,
    ) -> Self {
        Self {
            questions,
            presenter,
            input: InputValidator::new(input),
            out,
            config,
            phase: Phase::NotStarted,
            state: QuizState::new(),
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current progress.
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Run every remaining step and return the summary.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InputExhausted`] if input closes mid-session and
    /// [`QuizError::Io`] if reading or writing fails. Both end the session.
    pub fn run(mut self) -> Result<SessionSummary, QuizError> {
        loop {
            if let Some(summary) = self.step()? {
                return Ok(summary);
            }
        }
    }

    /// Perform the work of the current phase and advance to the next one.
    ///
    /// Returns the summary on the step that completes the session and
    /// `None` otherwise, including for every step after completion.
    pub fn step(&mut self) -> Result<Option<SessionSummary>, QuizError> {
        let next = match self.phase {
            Phase::Complete => return Ok(None),
            Phase::NotStarted => {
                self.state = QuizState::new();
                self.after(None)
            }
            Phase::Presenting(index) => {
                self.state.question_index = index;
                let elapsed = self.state.elapsed();
                let text = self.presenter.render_question(
                    &self.questions[index],
                    index,
                    self.questions.len(),
                    self.state.score,
                    elapsed,
                );
                writeln!(self.out, "{text}")?;
                Phase::AwaitingAnswer(index)
            }
            Phase::AwaitingAnswer(index) => {
                let started = Instant::now();
                let choice = self.input.get_choice(
                    self.questions[index].option_count(),
                    &mut self.out,
                    &self.presenter,
                )?;
                Phase::Scored {
                    index,
                    choice,
                    started,
                }
            }
            Phase::Scored {
                index,
                choice,
                started,
            } => {
                let elapsed = started.elapsed();
                self.score(index, choice, elapsed)?;
                self.after(Some(index))
            }
        };

        self.phase = next;
        if next == Phase::Complete {
            return self.complete().map(Some);
        }
        Ok(None)
    }

    fn after(&self, index: Option<usize>) -> Phase {
        let next = index.map_or(0, |i| i + 1);
        if next < self.questions.len() {
            Phase::Presenting(next)
        } else {
            Phase::Complete
        }
    }

    fn score(&mut self, index: usize, choice: usize, elapsed: Duration) -> Result<(), QuizError> {
        let question = &self.questions[index];
        let correct = question.is_correct(choice);
        if correct {
            self.state.score += 1;
        }
        tracing::debug!(
            question = index + 1,
            choice = choice + 1,
            correct,
            elapsed_ms = elapsed.as_millis() as u64,
            "question scored"
        );

        let text = self
            .presenter
            .render_feedback(correct, &question.answer, elapsed);
        writeln!(self.out, "{text}")?;
        self.out.flush()?;

        self.state.outcomes.push(QuestionOutcome {
            choice,
            correct,
            elapsed,
        });

        if !self.config.pause_after_feedback.is_zero() {
            std::thread::sleep(self.config.pause_after_feedback);
        }
        Ok(())
    }

    fn complete(&mut self) -> Result<SessionSummary, QuizError> {
        let summary = SessionSummary {
            score: self.state.score,
            total: self.questions.len(),
            outcomes: self.state.outcomes.clone(),
            total_elapsed: self.state.elapsed(),
        };
        tracing::info!(
            score = summary.score,
            total = summary.total,
            elapsed_ms = summary.total_elapsed.as_millis() as u64,
            "quiz complete"
        );

        let text = self.presenter.render_summary(&summary);
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(summary)
    }
}

/// Load the question file at `path` and run one full session over it.
///
/// # Errors
///
/// Returns [`QuizError::Load`] if the file cannot be loaded, before anything
/// is written to `out`. Session failures are as for [`QuizSession::run`].
pub fn run_quiz<P, R, W>(
    path: &Path,
    presenter: P,
    input: R,
    out: W,
    config: SessionConfig,
) -> Result<SessionSummary, QuizError>
where
    P: Presenter,
    R: BufRead,
    W: Write,
{
    let questions = parser::load(path)?;
    QuizSession::new(&questions, presenter, input, out, config).run()
}
