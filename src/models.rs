//! Core data models for ai-detect
//!
//! These are the per-row and per-run records shared by the annotation
//! pipeline and the reporters.

use crate::classifier::{Flag, Thresholds};
use crate::explain::Explanation;
use crate::table::Table;
use serde::Serialize;

/// Derived column holding the heuristic score
pub const SCORE_COLUMN: &str = "_ai_score";
/// Derived column holding the flag label
pub const FLAG_COLUMN: &str = "_flag";
/// Derived column holding the rendered explanation
pub const EXPLANATION_COLUMN: &str = "_explanation";

/// Which input columns to read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSelection {
    /// Column with the free-text answer (required)
    pub answer: String,
    /// Column identifying the respondent (optional)
    pub id: Option<String>,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self {
            answer: "answer".to_string(),
            id: Some("student".to_string()),
        }
    }
}

/// One row of input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Zero-based position in the input table
    pub row: usize,
    pub id: Option<String>,
    pub answer: String,
}

impl Response {
    /// Identifier for display, falling back to the row index
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => self.row.to_string(),
        }
    }
}

/// A response with its score, flag and explanation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedResponse {
    #[serde(flatten)]
    pub response: Response,
    pub score: f64,
    pub flag: Flag,
    pub explanation: Explanation,
}

/// Response counts per flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DetectionSummary {
    pub likely_ai: usize,
    pub ambiguous: usize,
    pub likely_human: usize,
    pub total: usize,
}

impl DetectionSummary {
    pub fn from_responses(responses: &[AnnotatedResponse]) -> Self {
        let mut summary = Self::default();
        for r in responses {
            match r.flag {
                Flag::LikelyAi => summary.likely_ai += 1,
                Flag::Ambiguous => summary.ambiguous += 1,
                Flag::LikelyHuman => summary.likely_human += 1,
            }
            summary.total += 1;
        }
        summary
    }

    pub fn count(&self, flag: Flag) -> usize {
        match flag {
            Flag::LikelyAi => self.likely_ai,
            Flag::Ambiguous => self.ambiguous,
            Flag::LikelyHuman => self.likely_human,
        }
    }

    /// Share of responses with this flag, in percent
    pub fn percent(&self, flag: Flag) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(flag) as f64 * 100.0 / self.total as f64
    }

    /// Whether any response is flagged at `flag` or above
    pub fn any_at_or_above(&self, flag: Flag) -> bool {
        Flag::ALL
            .iter()
            .filter(|f| **f >= flag)
            .any(|f| self.count(*f) > 0)
    }
}

/// Result of annotating a whole table
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub answer_column: String,
    /// Identifier column actually used; `None` when rows are keyed by index
    pub id_column: Option<String>,
    pub thresholds: Thresholds,
    pub summary: DetectionSummary,
    pub responses: Vec<AnnotatedResponse>,
    /// Input table with the derived columns set
    #[serde(skip)]
    pub table: Table,
}

impl AnalysisReport {
    /// Display columns: id, answer and the derived ones, those that exist
    pub fn display_columns(&self) -> Vec<&str> {
        let mut columns = Vec::with_capacity(5);
        // An id column that is also the answer column is listed once
        if let Some(id) = self.id_column.as_deref().filter(|id| *id != self.answer_column) {
            columns.push(id);
        }
        columns.push(self.answer_column.as_str());
        columns.extend([SCORE_COLUMN, FLAG_COLUMN, EXPLANATION_COLUMN]);
        columns
    }

    /// Axis label for per-respondent charts
    pub fn id_label(&self) -> &str {
        self.id_column.as_deref().unwrap_or("row")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::explain;

    fn annotated(row: usize, flag: Flag) -> AnnotatedResponse {
        AnnotatedResponse {
            response: Response {
                row,
                id: None,
                answer: "x".into(),
            },
            score: 0.5,
            flag,
            explanation: explain("x", 0.5),
        }
    }

    #[test]
    fn test_summary_counts() {
        let responses = vec![
            annotated(0, Flag::LikelyAi),
            annotated(1, Flag::LikelyHuman),
            annotated(2, Flag::LikelyHuman),
            annotated(3, Flag::Ambiguous),
        ];
        let s = DetectionSummary::from_responses(&responses);
        assert_eq!((s.likely_ai, s.ambiguous, s.likely_human, s.total), (1, 1, 2, 4));
        assert_eq!(s.percent(Flag::LikelyHuman), 50.0);
    }

    #[test]
    fn test_summary_empty_percent() {
        assert_eq!(DetectionSummary::default().percent(Flag::LikelyAi), 0.0);
    }

    #[test]
    fn test_any_at_or_above() {
        let s = DetectionSummary::from_responses(&[annotated(0, Flag::Ambiguous)]);
        assert!(s.any_at_or_above(Flag::Ambiguous));
        assert!(s.any_at_or_above(Flag::LikelyHuman));
        assert!(!s.any_at_or_above(Flag::LikelyAi));
    }

    fn report(answer: &str, id: Option<&str>) -> AnalysisReport {
        AnalysisReport {
            answer_column: answer.into(),
            id_column: id.map(Into::into),
            thresholds: Thresholds::default(),
            summary: DetectionSummary::default(),
            responses: Vec::new(),
            table: Table::default(),
        }
    }

    #[test]
    fn test_display_columns() {
        assert_eq!(
            report("answer", Some("student")).display_columns(),
            ["student", "answer", SCORE_COLUMN, FLAG_COLUMN, EXPLANATION_COLUMN]
        );
        assert_eq!(
            report("answer", None).display_columns(),
            ["answer", SCORE_COLUMN, FLAG_COLUMN, EXPLANATION_COLUMN]
        );
    }

    #[test]
    fn test_display_columns_id_same_as_answer() {
        assert_eq!(
            report("answer", Some("answer")).display_columns(),
            ["answer", SCORE_COLUMN, FLAG_COLUMN, EXPLANATION_COLUMN]
        );
    }

    #[test]
    fn test_response_label_fallback() {
        let mut r = annotated(7, Flag::Ambiguous).response;
        assert_eq!(r.label(), "7");
        r.id = Some("alice".into());
        assert_eq!(r.label(), "alice");
    }

    #[test]
    fn test_annotated_response_json_shape() {
        let value = serde_json::to_value(annotated(3, Flag::LikelyAi)).unwrap();
        assert_eq!(value["row"], 3);
        assert_eq!(value["flag"], "Likely AI");
        assert_eq!(value["explanation"], "None detected");
    }
}
