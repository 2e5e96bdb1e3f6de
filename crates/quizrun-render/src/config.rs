//! Output decoration settings.

use std::io::IsTerminal;

/// Which decorations the renderer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Wrap text in ANSI color codes.
    pub color: bool,
    /// Add emoji markers to headers, questions, and feedback.
    pub emoji: bool,
}

impl RenderConfig {
    /// Decorate only when stdout is an interactive terminal.
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            Self::decorated()
        } else {
            Self::plain()
        }
    }

    /// Colors and emoji on.
    pub fn decorated() -> Self {
        Self {
            color: true,
            emoji: true,
        }
    }

    /// No decoration at all.
    pub fn plain() -> Self {
        Self {
            color: false,
            emoji: false,
        }
    }

    /// Returns `true` if any decoration is enabled.
    pub fn is_decorated(&self) -> bool {
        self.color || self.emoji
    }
}
