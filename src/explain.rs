//! Human-readable reasons behind a score
//!
//! Rules are independent and always evaluated in the same order, so the
//! rendered explanation is stable for a given text and score.
//!
//! Note the word count here is a plain whitespace split, not the detector's
//! letter-run tokenizer. `"well--maybe"` is one word here and two for the
//! detector.

use crate::detector::has_dash;
use serde::{Serialize, Serializer};

/// Answers with more whitespace-separated tokens than this are "very long"
pub const LONG_ANSWER_WORDS: usize = 80;

/// Scores at or above this add the "high AI score" reason
pub const HIGH_SCORE: f64 = 0.75;

/// Rendered in place of an empty reason list
pub const NONE_DETECTED: &str = "None detected";

const SEPARATOR: &str = "; ";

/// A single explanation rule that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    EmDashUsage,
    VeryLongAnswer,
    HighAiScore,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::EmDashUsage => "em-dash usage",
            Reason::VeryLongAnswer => "very long answer",
            Reason::HighAiScore => "high AI score",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered reasons for a response's score
///
/// Displays as the reasons joined with `"; "`, or as [`NONE_DETECTED`] when
/// no rule fired. The sentinel is only a rendering; [`Explanation::reasons`]
/// is empty in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Explanation {
    reasons: Vec<Reason>,
}

impl Explanation {
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn contains(&self, reason: Reason) -> bool {
        self.reasons.contains(&reason)
    }
}

impl std::fmt::Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.reasons.is_empty() {
            return f.write_str(NONE_DETECTED);
        }
        for (i, reason) in self.reasons.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            f.write_str(reason.as_str())?;
        }
        Ok(())
    }
}

// Serialized in its rendered form, matching the `_explanation` export column
impl Serialize for Explanation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Explain a score for the given text
pub fn explain(text: &str, score: f64) -> Explanation {
    let mut reasons = Vec::new();

    if has_dash(text) {
        reasons.push(Reason::EmDashUsage);
    }
    if text.split_whitespace().count() > LONG_ANSWER_WORDS {
        reasons.push(Reason::VeryLongAnswer);
    }
    if score >= HIGH_SCORE {
        reasons.push(Reason::HighAiScore);
    }

    Explanation { reasons }
}
