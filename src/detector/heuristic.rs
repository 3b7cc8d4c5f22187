//! Logistic factors and their weighted combination

use super::features::LexicalFeatures;
use serde::Serialize;

/// Score returned for blank input
pub const NEUTRAL_SCORE: f64 = 0.5;

const LONG_WORD_CENTER: f64 = 5.5;
const LONG_WORD_STEEPNESS: f64 = 0.9;
const DIVERSITY_CENTER: f64 = 0.6;
const DIVERSITY_STEEPNESS: f64 = 3.5;
const PUNCT_CENTER: f64 = 0.08;
const PUNCT_STEEPNESS: f64 = 10.0;
const EMDASH_CENTER: f64 = 0.02;
const EMDASH_STEEPNESS: f64 = 40.0;

// Convex weights, sum to 1.0
const W_LOW_DIVERSITY: f64 = 0.34;
const W_LONG_WORD: f64 = 0.26;
const W_LOW_PUNCT: f64 = 0.20;
const W_EMDASH: f64 = 0.20;

/// Standard logistic function
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Per-factor sub-scores, each in (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorBreakdown {
    /// Longer average words push towards AI
    pub long_word: f64,
    /// Repetitive vocabulary pushes towards AI
    pub low_diversity: f64,
    /// Sparse punctuation pushes towards AI
    pub low_punctuation: f64,
    /// Frequent dashes push towards AI
    pub em_dash: f64,
}

impl FactorBreakdown {
    pub fn from_features(f: &LexicalFeatures) -> Self {
        Self {
            long_word: sigmoid((f.avg_word_len - LONG_WORD_CENTER) * LONG_WORD_STEEPNESS),
            low_diversity: sigmoid((DIVERSITY_CENTER - f.unique_ratio) * DIVERSITY_STEEPNESS),
            low_punctuation: sigmoid((PUNCT_CENTER - f.punct_per_word) * PUNCT_STEEPNESS),
            em_dash: sigmoid((f.emdash_per_word - EMDASH_CENTER) * EMDASH_STEEPNESS),
        }
    }

    /// Weighted sum, clamped to [0, 1] against floating-point drift
    pub fn combined(&self) -> f64 {
        let score = W_LOW_DIVERSITY * self.low_diversity
            + W_LONG_WORD * self.long_word
            + W_LOW_PUNCT * self.low_punctuation
            + W_EMDASH * self.em_dash;
        score.clamp(0.0, 1.0)
    }
}

/// Whitespace, plus the ASCII file/group/record/unit separators
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Whether text has nothing but blank characters
fn is_blank(text: &str) -> bool {
    text.chars().all(is_blank_char)
}

/// Features and factors behind a score, or `None` for blank text
pub fn breakdown(text: &str) -> Option<(LexicalFeatures, FactorBreakdown)> {
    if is_blank(text) {
        return None;
    }
    let features = LexicalFeatures::extract(text);
    let factors = FactorBreakdown::from_features(&features);
    Some((features, factors))
}

/// Heuristic AI-likelihood in [0.0, 1.0]
pub fn heuristic_score(text: &str) -> f64 {
    match breakdown(text) {
        Some((_, factors)) => factors.combined(),
        None => NEUTRAL_SCORE,
    }
}
