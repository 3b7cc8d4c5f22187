//! ai-detect - heuristic AI-likelihood scoring for Google Forms responses
//!
//! Reads a tabular export of form responses, scores each free-text answer
//! with a lexical heuristic, and annotates the table with a score, a
//! three-way flag and a short explanation.
//!
//! ```
//! use ai_detect::{classify, detect, explain, Flag, Thresholds};
//!
//! let result = detect("The quick brown fox jumps over the lazy dog.");
//! assert_eq!(classify(result.score, &Thresholds::default()), Flag::LikelyHuman);
//! assert_eq!(explain("plain text", result.score).to_string(), "None detected");
//! ```

pub mod classifier;
pub mod config;
pub mod detector;
pub mod explain;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod table;

pub use classifier::{classify, Flag, Thresholds};
pub use detector::{detect, heuristic_score, ScoreResult};
pub use explain::{explain, Explanation};
