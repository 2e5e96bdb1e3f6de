//! Score percentage and tier selection.

use std::fmt;

/// Percentage of correct answers, or `None` when there were no questions.
pub fn percentage(score: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(score as f64 / total as f64 * 100.0)
}

/// Motivational message bucket chosen by final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Every answer correct.
    Perfect,
    /// At least 75%.
    Great,
    /// At least 50%.
    Good,
    /// Below 50%.
    Encouragement,
}

impl Tier {
    /// Select the tier for a percentage. Lower bounds are inclusive.
    ///
    /// Takes the unrounded percentage, so 2499/2500 displays as "100.0%"
    /// but lands in [`Tier::Great`]; only a full score is [`Tier::Perfect`].
    pub fn from_percentage(percent: f64) -> Self {
        if percent >= 100.0 {
            Tier::Perfect
        } else if percent >= 75.0 {
            Tier::Great
        } else if percent >= 50.0 {
            Tier::Good
        } else {
            Tier::Encouragement
        }
    }

    /// Short name of the tier.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Perfect => "perfect",
            Tier::Great => "great",
            Tier::Good => "good effort",
            Tier::Encouragement => "keep studying",
        }
    }

    /// The message shown at the end of a session.
    pub fn message(self) -> &'static str {
        match self {
            Tier::Perfect => "Perfect score! You're a true quiz master!",
            Tier::Great => "Great job! You're very knowledgeable!",
            Tier::Good => "Good effort! Keep practicing!",
            Tier::Encouragement => "Keep studying and you'll get better!",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
