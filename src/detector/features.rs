//! Lexical feature extraction

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Characters counted as sentence punctuation
const PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

const EM_DASH: char = '\u{2014}';
const DOUBLE_HYPHEN: &str = "--";

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[A-Za-z']+").expect("valid regex"))
}

/// Words as maximal runs of ASCII letters and apostrophes.
///
/// Digits, punctuation, whitespace and non-Latin scripts all act as
/// separators.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    word_pattern().find_iter(text).map(|m| m.as_str())
}

/// Em-dashes plus non-overlapping `--` occurrences
pub fn dash_count(text: &str) -> usize {
    text.matches(EM_DASH).count() + text.matches(DOUBLE_HYPHEN).count()
}

/// True if the text contains an em-dash or a `--`
pub fn has_dash(text: &str) -> bool {
    text.contains(EM_DASH) || text.contains(DOUBLE_HYPHEN)
}

/// Surface statistics the heuristic is built on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LexicalFeatures {
    /// Raw number of words (may be zero)
    pub word_count: usize,
    pub avg_word_len: f64,
    pub unique_ratio: f64,
    pub punct_per_word: f64,
    pub emdash_per_word: f64,
}

impl LexicalFeatures {
    pub fn extract(text: &str) -> Self {
        let words: Vec<&str> = words(text).collect();
        // Divisor is never zero; texts without words still get finite features
        let n_words = words.len().max(1) as f64;

        let total_len: usize = words.iter().map(|w| w.len()).sum();
        let distinct: HashSet<String> = words.iter().map(|w| w.to_ascii_lowercase()).collect();
        let punct = text.chars().filter(|c| PUNCTUATION.contains(c)).count();

        Self {
            word_count: words.len(),
            avg_word_len: total_len as f64 / n_words,
            unique_ratio: distinct.len() as f64 / n_words,
            punct_per_word: punct as f64 / n_words,
            emdash_per_word: dash_count(text) as f64 / n_words,
        }
    }
}
