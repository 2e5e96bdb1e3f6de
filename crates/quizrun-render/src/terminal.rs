//! Text renderer for interactive and piped terminals.

use std::time::Duration;

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, Color, Table};

use quizrun_core::{Presenter, Question, SessionSummary, Tier};

use crate::config::RenderConfig;

const CYAN: &str = "\x1b[96m";
const YELLOW: &str = "\x1b[93m";
const GREEN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";
const MAGENTA: &str = "\x1b[95m";
const RESET: &str = "\x1b[0m";

const RULE_WIDTH: usize = 60;

/// Renders quiz text, decorated according to its [`RenderConfig`].
#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer {
    config: RenderConfig,
}

impl TerminalRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.config.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// `emoji` followed by a space, or nothing when emoji are off.
    fn icon(&self, emoji: &str) -> String {
        if self.config.emoji {
            format!("{emoji} ")
        } else {
            String::new()
        }
    }

    /// A space followed by `emoji`, or nothing when emoji are off.
    fn trailing_icon(&self, emoji: &str) -> String {
        if self.config.emoji {
            format!(" {emoji}")
        } else {
            String::new()
        }
    }

    fn tier_line(&self, tier: Tier) -> String {
        let (color, lead, tail) = match tier {
            Tier::Perfect => (MAGENTA, "🎉", "🧠🔥"),
            Tier::Great => (GREEN, "", "🎓👏"),
            Tier::Good => (YELLOW, "", "💪"),
            Tier::Encouragement => (RED, "", "📚"),
        };
        let lead = if lead.is_empty() {
            String::new()
        } else {
            self.icon(lead)
        };
        let text = format!("{lead}{}{}", tier.message(), self.trailing_icon(tail));
        self.paint(color, &text)
    }

    fn breakdown_table(&self, summary: &SessionSummary) -> Table {
        let mut table = Table::new();
        if self.config.is_decorated() {
            table.load_preset(UTF8_FULL);
        } else {
            table.load_preset(ASCII_FULL);
        }
        if self.config.color {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table.set_header(vec!["Question", "Result", "Time"]);

        for (i, outcome) in summary.outcomes.iter().enumerate() {
            let result = if outcome.correct {
                Cell::new("Correct").fg(Color::Green)
            } else {
                Cell::new("Wrong").fg(Color::Red)
            };
            table.add_row(vec![
                Cell::new(format!("Q{}", i + 1)),
                result,
                Cell::new(format!("{:.2}s", outcome.elapsed.as_secs_f64())),
            ]);
        }

        table
    }
}

impl Presenter for TerminalRenderer {
    fn render_header(
        &self,
        score: usize,
        current: usize,
        total: usize,
        elapsed: Duration,
    ) -> String {
        let rule = self.paint(CYAN, &"═".repeat(RULE_WIDTH));
        let progress = format!(
            "{} {} {} {} {} {}",
            self.paint(YELLOW, "Quiz Progress:"),
            self.paint(MAGENTA, &format!("{current}/{total}")),
            self.paint(YELLOW, "| Score:"),
            self.paint(GREEN, &score.to_string()),
            self.paint(YELLOW, "| Time Elapsed:"),
            self.paint(
                CYAN,
                &format!("{:.1}s{}", elapsed.as_secs_f64(), self.trailing_icon("⏰"))
            ),
        );
        format!("{rule}\n{progress}\n{rule}")
    }

    fn render_question(
        &self,
        question: &Question,
        index: usize,
        total: usize,
        score: usize,
        elapsed: Duration,
    ) -> String {
        let mut text = self.render_header(score, index + 1, total, elapsed);
        text.push('\n');
        text.push_str(&self.paint(
            MAGENTA,
            &format!("{}Q{}: {}", self.icon("❓"), index + 1, question.text),
        ));
        for (i, option) in question.options.iter().enumerate() {
            text.push_str(&format!(
                "\n  {} {option}",
                self.paint(YELLOW, &format!("{}.", i + 1))
            ));
        }
        text.push('\n');
        text
    }

    fn render_prompt(&self, num_options: usize) -> String {
        self.paint(GREEN, &format!("Your answer (1-{num_options}): "))
    }

    fn render_rejection(&self, num_options: usize) -> String {
        self.paint(
            RED,
            &format!("Invalid input. Please enter a number between 1 and {num_options}."),
        )
    }

    fn render_feedback(
        &self,
        is_correct: bool,
        correct_answer: &str,
        time_taken: Duration,
    ) -> String {
        let verdict = if is_correct {
            self.paint(
                GREEN,
                &format!("{}Correct! Nice job!{}", self.icon("✅"), self.trailing_icon("🎉")),
            )
        } else {
            format!(
                "{}{}",
                self.paint(RED, &format!("{}Wrong! The correct answer was: ", self.icon("❌"))),
                self.paint(YELLOW, correct_answer)
            )
        };
        let timing = self.paint(
            CYAN,
            &format!(
                "You answered in {:.2} seconds{}",
                time_taken.as_secs_f64(),
                self.trailing_icon("⏰")
            ),
        );
        format!("{verdict}\n{timing}\n")
    }

    fn render_summary(&self, summary: &SessionSummary) -> String {
        let rule = self.paint(CYAN, &"=".repeat(RULE_WIDTH));
        let mut lines = vec![String::new(), rule.clone()];

        match summary.percentage() {
            Some(percent) => {
                lines.push(format!(
                    "{}{}",
                    self.paint(
                        MAGENTA,
                        &format!("{}Quiz Complete! Your Score: ", self.icon("🏆"))
                    ),
                    self.paint(
                        GREEN,
                        &format!(
                            "{}/{} ({percent:.1}%){}",
                            summary.score,
                            summary.total,
                            self.trailing_icon("📊")
                        )
                    ),
                ));
            }
            None => {
                lines.push(self.paint(
                    MAGENTA,
                    &format!("{}Quiz Complete! No questions were asked.", self.icon("🏆")),
                ));
            }
        }

        lines.push(format!(
            "{}{}",
            self.paint(CYAN, "Total Time Taken: "),
            self.paint(
                YELLOW,
                &format!("{:.1} seconds", summary.total_elapsed.as_secs_f64())
            ),
        ));

        if !summary.outcomes.is_empty() {
            lines.push(self.breakdown_table(summary).to_string());
        }
        if let Some(tier) = summary.tier() {
            lines.push(self.tier_line(tier));
        }

        lines.push(rule);
        lines.push(String::new());
        lines.join("\n")
    }
}
