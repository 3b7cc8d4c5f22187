//! Markdown reporter
//!
//! GitHub-flavored Markdown, suitable for pasting into an issue or a
//! course wiki page.

use super::charts::{flag_breakdown, percent_label, score_bars};
use crate::classifier::Flag;
use crate::models::AnalysisReport;
use anyhow::Result;
use chrono::Local;

/// Width of a full-score bar in the score chart
const BAR_WIDTH: usize = 20;

/// Render report as Markdown
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut md = String::new();

    md.push_str("# AI-detect Report\n\n");
    md.push_str(&format!(
        "*Generated: {}*\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    md.push_str(&format!(
        "Answer column: `{}` · Thresholds: hi {:.2} / lo {:.2}\n\n",
        report.answer_column, report.thresholds.hi, report.thresholds.lo
    ));

    // Summary
    md.push_str("## Summary\n\n");
    md.push_str("| Flag | Count | Share |\n");
    md.push_str("|------|------:|------:|\n");
    for flag in Flag::ALL {
        md.push_str(&format!(
            "| {} {} | {} | {} |\n",
            flag_emoji(flag),
            flag.as_str(),
            report.summary.count(flag),
            percent_label(report.summary.percent(flag))
        ));
    }
    md.push_str(&format!("| **Total** | **{}** | |\n\n", report.summary.total));

    if report.responses.is_empty() {
        md.push_str("*No responses to analyze.*\n");
        return Ok(md);
    }

    // Breakdown
    md.push_str("## Detection summary\n\n");
    for slice in flag_breakdown(report) {
        md.push_str(&format!(
            "- {} **{}**: {} ({})\n",
            flag_emoji(slice.flag),
            slice.flag.as_str(),
            slice.count,
            percent_label(slice.percent)
        ));
    }
    md.push('\n');

    // Scores chart
    md.push_str(&format!(
        "## AI-likelihood by respondent\n\n| {} | Score | |\n|---|------:|---|\n",
        escape_cell(report.id_label())
    ));
    for bar in score_bars(report) {
        let filled = (bar.score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
        md.push_str(&format!(
            "| {} | {:.3} | `{}{}` |\n",
            escape_cell(&bar.label),
            bar.score,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled)
        ));
    }
    md.push('\n');

    // Annotated table
    md.push_str("## Annotated responses\n\n");
    let columns = report.display_columns();
    let indices: Vec<usize> = columns
        .iter()
        .filter_map(|c| report.table.column_index(c))
        .collect();

    let header: Vec<String> = indices
        .iter()
        .map(|&i| escape_cell(&report.table.headers()[i]))
        .collect();
    md.push_str(&format!("| {} |\n", header.join(" | ")));
    md.push_str(&format!("|{}\n", "---|".repeat(indices.len())));
    for row in report.table.rows() {
        let cells: Vec<String> = indices.iter().map(|&i| escape_cell(&row[i])).collect();
        md.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    md.push_str("\n---\n\n");
    md.push_str("*Heuristic score from surface lexical features. Not proof of authorship.*\n");

    Ok(md)
}

fn flag_emoji(flag: Flag) -> &'static str {
    match flag {
        Flag::LikelyAi => "🔴",
        Flag::Ambiguous => "🟡",
        Flag::LikelyHuman => "🟢",
    }
}

/// Keep a value inside one table cell
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}
