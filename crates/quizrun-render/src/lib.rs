//! quizrun-render — terminal rendering for quiz sessions.
//!
//! [`TerminalRenderer`] implements [`quizrun_core::Presenter`]. Whether it
//! decorates output with ANSI colors and emoji is decided once, up front, by
//! a [`RenderConfig`].

pub mod config;
pub mod terminal;

pub use config::RenderConfig;
pub use terminal::TerminalRenderer;
