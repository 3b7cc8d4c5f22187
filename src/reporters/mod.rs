//! Output reporters for ai-detect results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors and ASCII charts
//! - `json` - Machine-readable JSON
//! - `csv` - The input table plus `_ai_score`, `_flag`, `_explanation`
//! - `html` - Standalone HTML report with SVG charts
//! - `markdown` - GitHub-flavored Markdown

pub mod charts;
mod csv;
mod html;
mod json;
mod markdown;
mod text;

use crate::models::AnalysisReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// File name used when the annotated CSV is written to a directory
pub const ANNOTATED_CSV_NAME: &str = "annotated_responses.csv";

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
    Html,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, csv, html, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render a report in the specified format
pub fn report(report: &AnalysisReport, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(report, fmt)
}

/// Render a report using an OutputFormat enum
pub fn report_with_format(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Csv => csv::render(report),
        OutputFormat::Html => html::render(report),
        OutputFormat::Markdown => markdown::render(report),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Html => "html",
        OutputFormat::Markdown => "md",
    }
}

/// Default file name for a format when the output path is a directory
pub fn default_file_name(format: OutputFormat) -> String {
    match format {
        OutputFormat::Csv => ANNOTATED_CSV_NAME.to_string(),
        other => format!("ai_detect_report.{}", file_extension(other)),
    }
}

/// Shorten to `max` characters, adding an ellipsis. Counts chars, not bytes.
pub fn truncate_chars(s: &str, max: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max {
        return flat;
    }
    let kept: String = flat.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::classifier::Thresholds;
    use crate::models::ColumnSelection;
    use crate::pipeline::annotate;
    use crate::table::Table;

    /// Four annotated responses: one likely AI, one ambiguous, two likely human
    pub(crate) fn test_report() -> AnalysisReport {
        let repetitive = vec!["comprehensive"; 90].join(" ");
        let csv = format!(
            "Timestamp,student,answer\n\
             2024/03/01 09:00,alice,The quick brown fox jumps over the lazy dog.\n\
             2024/03/01 09:05,bob,{repetitive}\n\
             2024/03/01 09:10,carol,text with — dash\n\
             2024/03/01 09:15,<dave>,plain short text\n"
        );
        let table = Table::from_csv_str(&csv).expect("valid CSV");
        annotate(table, &ColumnSelection::default(), &Thresholds::default())
            .expect("answer column present")
    }

    #[test]
    fn test_fixture_flags() {
        let report = test_report();
        assert_eq!(report.summary.likely_ai, 1);
        assert_eq!(report.summary.ambiguous, 1);
        assert_eq!(report.summary.likely_human, 2);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("html").unwrap(), OutputFormat::Html);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("xlsx").is_err());
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(default_file_name(OutputFormat::Csv), "annotated_responses.csv");
        assert_eq!(default_file_name(OutputFormat::Html), "ai_detect_report.html");
    }

    #[test]
    fn test_truncate_chars_is_utf8_safe() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("ééééééééé", 6), "ééé...");
        assert_eq!(truncate_chars("line\nbreak", 20), "line break");
    }
}
