//! Minimal presenter for unit tests.

use std::time::Duration;

use crate::model::Question;
use crate::presenter::Presenter;
use crate::session::SessionSummary;

/// Renders undecorated, timing-free text so tests can compare output exactly.
pub(crate) struct TextPresenter;

impl Presenter for TextPresenter {
    fn render_header(&self, score: usize, current: usize, total: usize, _: Duration) -> String {
        format!("[{current}/{total}] score {score}")
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
        text.push_str(&format!("\nQ{}: {}", index + 1, question.text));
        for (i, option) in question.options.iter().enumerate() {
            text.push_str(&format!("\n  {}. {option}", i + 1));
        }
        text
    }

    fn render_prompt(&self, num_options: usize) -> String {
        format!("answer (1-{num_options}): ")
    }

    fn render_rejection(&self, num_options: usize) -> String {
        format!("REJECTED 1..{num_options}")
    }

    fn render_feedback(&self, is_correct: bool, correct_answer: &str, _: Duration) -> String {
        if is_correct {
            "correct".to_string()
        } else {
            format!("wrong, answer: {correct_answer}")
        }
    }

    fn render_summary(&self, summary: &SessionSummary) -> String {
        match (summary.percentage(), summary.tier()) {
            (Some(percent), Some(tier)) => format!(
                "score {}/{} ({percent:.1}%) tier {tier}",
                summary.score, summary.total
            ),
            _ => "no questions".to_string(),
        }
    }
}
