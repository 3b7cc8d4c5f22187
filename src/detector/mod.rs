//! Heuristic AI-likelihood detector
//!
//! Scores a piece of free text from surface lexical statistics only. No model,
//! no training data, no external state: the same text always produces the
//! same score.
//!
//! # Scoring Formula
//!
//! ```text
//! score = 0.34 × low_diversity + 0.26 × long_word
//!       + 0.20 × low_punctuation + 0.20 × em_dash
//!
//! Where each factor is a logistic squash σ(k·(x − c)):
//!   long_word       = σ((avg_word_len − 5.5) × 0.9)
//!   low_diversity   = σ((0.6 − unique_ratio) × 3.5)
//!   low_punctuation = σ((0.08 − punct_per_word) × 10.0)
//!   em_dash         = σ((emdash_per_word − 0.02) × 40.0)
//! ```
//!
//! Blank input (empty or whitespace-only) short-circuits to 0.5: not enough
//! evidence either way.

mod features;
mod heuristic;

pub use features::{dash_count, has_dash, words, LexicalFeatures};
pub use heuristic::{breakdown, heuristic_score, sigmoid, FactorBreakdown, NEUTRAL_SCORE};

use serde::Serialize;

/// Tag identifying the scoring strategy
pub const METHOD: &str = "heuristic";

/// Fixed note attached to every result
pub const NOTE: &str = "Em-dash enhanced lexical heuristic (demo/MVP use only)";

/// Result of scoring a single text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Heuristic AI-likelihood, always within [0.0, 1.0]
    pub score: f64,
    pub method: &'static str,
    pub note: &'static str,
}

/// Score a text. Never fails, whatever the input.
pub fn detect(text: &str) -> ScoreResult {
    ScoreResult {
        score: heuristic_score(text),
        method: METHOD,
        note: NOTE,
    }
}
