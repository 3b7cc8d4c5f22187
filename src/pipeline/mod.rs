//! Annotation pipeline
//!
//! Runs detect, classify and explain over every row of a table:
//!
//! ```text
//! Table ──resolve columns──▶ Vec<Response> ──par map──▶ Vec<AnnotatedResponse>
//!                                                         │
//!                      Table + _ai_score/_flag/_explanation ◀┘ + DetectionSummary
//! ```
//!
//! Rows are independent, so scoring is a rayon parallel map. `collect` keeps
//! input order, so the result matches a sequential run exactly.

use crate::classifier::{classify, Thresholds};
use crate::detector::detect;
use crate::explain::explain;
use crate::models::{
    AnalysisReport, AnnotatedResponse, ColumnSelection, DetectionSummary, Response,
    EXPLANATION_COLUMN, FLAG_COLUMN, SCORE_COLUMN,
};
use crate::table::{Table, TableError};
use rayon::prelude::*;
use tracing::{debug, info};

/// Extract responses using the selected columns
///
/// Fails if the answer column is missing. A missing id column is not an
/// error: rows fall back to their index.
pub fn responses(table: &Table, columns: &ColumnSelection) -> Result<Vec<Response>, TableError> {
    let answer_idx = table.require_column(&columns.answer)?;
    let id_idx = resolve_id_column(table, columns);

    Ok(table
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| Response {
            row,
            id: id_idx.map(|i| cells[i].clone()),
            answer: cells[answer_idx].clone(),
        })
        .collect())
}

fn resolve_id_column(table: &Table, columns: &ColumnSelection) -> Option<usize> {
    let name = columns.id.as_deref()?;
    let idx = table.column_index(name);
    if idx.is_none() {
        debug!("Id column '{}' not present, keying rows by index", name);
    }
    idx
}

/// Score, classify and explain one response
pub fn annotate_response(response: Response, thresholds: &Thresholds) -> AnnotatedResponse {
    let score = detect(&response.answer).score;
    let flag = classify(score, thresholds);
    let explanation = explain(&response.answer, score);
    AnnotatedResponse {
        response,
        score,
        flag,
        explanation,
    }
}

/// Annotate every row of `table`
pub fn annotate(
    mut table: Table,
    columns: &ColumnSelection,
    thresholds: &Thresholds,
) -> Result<AnalysisReport, TableError> {
    let rows = responses(&table, columns)?;
    let id_column = columns
        .id
        .clone()
        .filter(|name| table.has_column(name));

    debug!("Annotating {} responses", rows.len());
    let annotated: Vec<AnnotatedResponse> = rows
        .into_par_iter()
        .map(|r| annotate_response(r, thresholds))
        .collect();

    table.set_column(
        SCORE_COLUMN,
        annotated.iter().map(|a| a.score.to_string()).collect(),
    );
    table.set_column(
        FLAG_COLUMN,
        annotated.iter().map(|a| a.flag.to_string()).collect(),
    );
    table.set_column(
        EXPLANATION_COLUMN,
        annotated.iter().map(|a| a.explanation.to_string()).collect(),
    );

    let summary = DetectionSummary::from_responses(&annotated);
    info!(
        "Annotated {} responses: {} likely AI, {} ambiguous, {} likely human",
        summary.total, summary.likely_ai, summary.ambiguous, summary.likely_human
    );

    Ok(AnalysisReport {
        answer_column: columns.answer.clone(),
        id_column,
        thresholds: *thresholds,
        summary,
        responses: annotated,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Flag;

    const CSV: &str = "student,answer\n\
        alice,The quick brown fox jumps over the lazy dog.\n\
        bob,\n\
        carol,\"Moreover — it is comprehensive — and robust — overall\"\n";

    fn columns() -> ColumnSelection {
        ColumnSelection::default()
    }

    #[test]
    fn test_annotate_appends_derived_columns() {
        let table = Table::from_csv_str(CSV).unwrap();
        let report = annotate(table, &columns(), &Thresholds::default()).unwrap();
        assert_eq!(
            report.table.headers(),
            &["student", "answer", "_ai_score", "_flag", "_explanation"]
        );
        assert_eq!(report.responses.len(), 3);
        assert_eq!(report.id_column.as_deref(), Some("student"));
    }

    #[test]
    fn test_annotate_row_values() {
        let table = Table::from_csv_str(CSV).unwrap();
        let report = annotate(table, &columns(), &Thresholds::default()).unwrap();

        let alice = &report.responses[0];
        assert_eq!(alice.response.id.as_deref(), Some("alice"));
        assert!((alice.score - 0.2866734581111626).abs() < 1e-12);
        assert_eq!(alice.flag, Flag::LikelyHuman);
        assert_eq!(report.table.cell(0, 4), Some("None detected"));

        // Blank answer scores neutral
        let bob = &report.responses[1];
        assert_eq!(bob.score, 0.5);
        assert_eq!(bob.flag, Flag::Ambiguous);
        assert_eq!(report.table.cell(1, 2), Some("0.5"));

        let carol = &report.responses[2];
        assert_eq!(carol.explanation.to_string().split("; ").next(), Some("em-dash usage"));
    }

    #[test]
    fn test_annotate_preserves_order_and_summary() {
        let table = Table::from_csv_str(CSV).unwrap();
        let report = annotate(table, &columns(), &Thresholds::default()).unwrap();
        let rows: Vec<usize> = report.responses.iter().map(|r| r.response.row).collect();
        assert_eq!(rows, vec![0, 1, 2]);
        assert_eq!(report.summary.total, 3);
        assert_eq!(
            report.summary.likely_ai + report.summary.ambiguous + report.summary.likely_human,
            3
        );
    }

    #[test]
    fn test_missing_answer_column() {
        let table = Table::from_csv_str(CSV).unwrap();
        let selection = ColumnSelection {
            answer: "response".into(),
            id: None,
        };
        let err = annotate(table, &selection, &Thresholds::default()).unwrap_err();
        assert!(matches!(err, TableError::MissingColumn { ref column, .. } if column == "response"));
    }

    #[test]
    fn test_quoted_empty_answer_is_scored() {
        let table = Table::from_csv_str("answer\n\"\"\nhello there\n").unwrap();
        let report = annotate(table, &columns(), &Thresholds::default()).unwrap();
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.responses[0].score, 0.5);
        assert_eq!(report.responses[1].response.label(), "1");
    }

    #[test]
    fn test_missing_id_column_falls_back_to_index() {
        let table = Table::from_csv_str("answer\nhello there\n").unwrap();
        let report = annotate(table, &columns(), &Thresholds::default()).unwrap();
        assert_eq!(report.id_column, None);
        assert_eq!(report.responses[0].response.label(), "0");
        assert_eq!(report.id_label(), "row");
    }

    #[test]
    fn test_existing_derived_column_is_replaced() {
        let table = Table::from_csv_str("answer,_flag\nhi,stale\n").unwrap();
        let report = annotate(table, &columns(), &Thresholds::default()).unwrap();
        assert_eq!(
            report.table.headers(),
            &["answer", "_flag", "_ai_score", "_explanation"]
        );
        assert_ne!(report.table.cell(0, 1), Some("stale"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let body: String = (0..200)
            .map(|i| format!("s{i},\"answer number {i} -- with {} words\"\n", i % 7))
            .collect();
        let table = Table::from_csv_str(&format!("student,answer\n{body}")).unwrap();
        let sequential: Vec<AnnotatedResponse> = responses(&table, &columns())
            .unwrap()
            .into_iter()
            .map(|r| annotate_response(r, &Thresholds::default()))
            .collect();
        let report = annotate(table, &columns(), &Thresholds::default()).unwrap();
        assert_eq!(report.responses, sequential);
    }

    #[test]
    fn test_custom_thresholds_change_flags() {
        let table = Table::from_csv_str(CSV).unwrap();
        let report = annotate(table, &columns(), &Thresholds::new(0.1, 0.05)).unwrap();
        assert!(report.responses.iter().all(|r| r.flag == Flag::LikelyAi));
        assert_eq!(report.summary.likely_ai, 3);
    }
}
