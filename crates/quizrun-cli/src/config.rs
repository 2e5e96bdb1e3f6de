//! Startup configuration.
//!
//! Everything here is computed once before the quiz starts and handed to the
//! session and renderer explicitly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quizrun_core::SessionConfig;
use quizrun_render::RenderConfig;

/// File name of the question set shipped next to the binary.
pub const QUESTIONS_FILE: &str = "questions.json";

/// Resolved settings for one run of the program.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Question file to load.
    pub questions_path: PathBuf,
    /// Output decoration.
    pub render: RenderConfig,
    /// Session pacing.
    pub session: SessionConfig,
}

impl AppConfig {
    /// Locate the bundled questions and probe the terminal.
    ///
    /// Decoration and the pause between questions are enabled only when
    /// stdout is interactive.
    pub fn detect() -> Result<Self> {
        let exe = std::env::current_exe().context("failed to locate the quizrun executable")?;
        let dir = exe
            .parent()
            .with_context(|| format!("executable has no parent directory: {}", exe.display()))?;

        Ok(Self::new(questions_path_in(dir), RenderConfig::detect()))
    }

    /// Build a config for an explicit question path and decoration.
    pub fn new(questions_path: PathBuf, render: RenderConfig) -> Self {
        let session = if render.is_decorated() {
            SessionConfig::default()
        } else {
            SessionConfig::without_pause()
        };
        Self {
            questions_path,
            render,
            session,
        }
    }
}

/// Path of the bundled question file inside `dir`.
pub fn questions_path_in(dir: &Path) -> PathBuf {
    dir.join(QUESTIONS_FILE)
}
