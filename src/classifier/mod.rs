//! Flag classification
//!
//! Maps a heuristic score to one of three coarse labels. The rule is
//! evaluated top-down:
//!
//! ```text
//! score >= hi  -> Likely AI
//! score <= lo  -> Likely Human
//! otherwise    -> Ambiguous
//! ```

mod thresholds;

pub use thresholds::{Thresholds, DEFAULT_HI, DEFAULT_LO};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Coarse classification of a response
///
/// Variants are ordered from least to most AI-like, so `>=` comparisons
/// express "at this level or above".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Flag {
    #[serde(rename = "Likely Human")]
    LikelyHuman,
    #[serde(rename = "Ambiguous")]
    Ambiguous,
    #[serde(rename = "Likely AI")]
    LikelyAi,
}

impl Flag {
    /// All flags, most AI-like first
    pub const ALL: [Flag; 3] = [Flag::LikelyAi, Flag::Ambiguous, Flag::LikelyHuman];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::LikelyAi => "Likely AI",
            Flag::Ambiguous => "Ambiguous",
            Flag::LikelyHuman => "Likely Human",
        }
    }

    /// Classify with the default thresholds
    pub fn from_score(score: f64) -> Self {
        classify(score, &Thresholds::default())
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "likely-ai" | "ai" => Ok(Flag::LikelyAi),
            "ambiguous" => Ok(Flag::Ambiguous),
            "likely-human" | "human" => Ok(Flag::LikelyHuman),
            _ => Err(anyhow!(
                "Unknown flag '{}'. Valid flags: likely-ai, ambiguous, likely-human",
                s
            )),
        }
    }
}

/// Classify a score against a threshold pair
pub fn classify(score: f64, thresholds: &Thresholds) -> Flag {
    if score >= thresholds.hi {
        Flag::LikelyAi
    } else if score <= thresholds.lo {
        Flag::LikelyHuman
    } else {
        Flag::Ambiguous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        assert_eq!(Flag::from_score(0.95), Flag::LikelyAi);
        assert_eq!(Flag::from_score(0.55), Flag::Ambiguous);
        assert_eq!(Flag::from_score(0.05), Flag::LikelyHuman);
    }

    #[test]
    fn test_boundaries_resolve_to_outer_band() {
        let t = Thresholds::default();
        assert_eq!(classify(0.70, &t), Flag::LikelyAi);
        assert_eq!(classify(0.40, &t), Flag::LikelyHuman);
        assert_eq!(classify(0.6999999, &t), Flag::Ambiguous);
        assert_eq!(classify(0.4000001, &t), Flag::Ambiguous);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = Thresholds::new(0.9, 0.1);
        assert_eq!(classify(0.85, &t), Flag::Ambiguous);
        assert_eq!(classify(0.9, &t), Flag::LikelyAi);
        assert_eq!(classify(0.1, &t), Flag::LikelyHuman);
    }

    #[test]
    fn test_inverted_thresholds_apply_hi_first() {
        let t = Thresholds::new(0.3, 0.6);
        assert_eq!(classify(0.5, &t), Flag::LikelyAi);
        assert_eq!(classify(0.2, &t), Flag::LikelyHuman);
    }

    #[test]
    fn test_flag_ordering() {
        assert!(Flag::LikelyAi > Flag::Ambiguous);
        assert!(Flag::Ambiguous > Flag::LikelyHuman);
    }

    #[test]
    fn test_flag_parsing() {
        assert_eq!("likely-ai".parse::<Flag>().unwrap(), Flag::LikelyAi);
        assert_eq!("Likely AI".parse::<Flag>().unwrap(), Flag::LikelyAi);
        assert_eq!("AMBIGUOUS".parse::<Flag>().unwrap(), Flag::Ambiguous);
        assert_eq!("likely_human".parse::<Flag>().unwrap(), Flag::LikelyHuman);
        assert!("maybe".parse::<Flag>().is_err());
    }

    #[test]
    fn test_flag_serde_labels() {
        assert_eq!(serde_json::to_string(&Flag::LikelyAi).unwrap(), "\"Likely AI\"");
        let f: Flag = serde_json::from_str("\"Likely Human\"").unwrap();
        assert_eq!(f, Flag::LikelyHuman);
        assert_eq!(Flag::Ambiguous.to_string(), "Ambiguous");
    }
}
