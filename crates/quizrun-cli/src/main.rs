//! quizrun CLI — runs the bundled multiple-choice quiz in the terminal.

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use quizrun_core::run_quiz;
use quizrun_render::TerminalRenderer;

use crate::config::AppConfig;

mod config;

#[derive(Parser)]
#[command(
    name = "quizrun",
    version,
    about = "Terminal multiple-choice quiz runner",
    long_about = "Terminal multiple-choice quiz runner.\n\n\
                  Loads questions.json from the directory containing the executable \
                  and asks each question in order, reading answers from stdin."
)]
struct Cli {}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AppConfig::detect()?;
    tracing::debug!(?config, "starting quiz");

    let result = run_quiz(
        &config.questions_path,
        TerminalRenderer::new(config.render),
        io::stdin().lock(),
        io::stdout().lock(),
        config.session,
    );

    if let Err(e) = &result {
        if e.is_input_exhausted() {
            // Finish the unanswered prompt line before the error goes to stderr.
            println!();
        }
    }
    result?;

    Ok(())
}
