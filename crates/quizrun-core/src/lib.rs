//! quizrun-core — question loading, answer validation, and the quiz loop.
//!
//! This crate defines the question data model, the loader that turns a
//! question file into validated records, the bounded answer reader, the
//! scoring rules, and the session state machine that ties them together.
//! Presentation lives behind the [`presenter::Presenter`] trait so the
//! session itself never decides how anything looks.

pub mod error;
pub mod input;
pub mod model;
pub mod parser;
pub mod presenter;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod testing;

pub use error::{LoadError, QuizError};
pub use model::Question;
pub use presenter::Presenter;
pub use scoring::Tier;
pub use session::{run_quiz, QuizSession, SessionConfig, SessionSummary};
