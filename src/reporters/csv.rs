//! CSV reporter
//!
//! Writes the annotated table: every input column in its original order,
//! followed by `_ai_score`, `_flag` and `_explanation`. Re-reading the output
//! with any CSV reader gives back the input rows unchanged.

use crate::models::AnalysisReport;
use anyhow::Result;

/// Render the annotated table as CSV
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(report.table.to_csv_string())
}
