//! Text (terminal) reporter with colors and ASCII charts

use super::charts::{flag_breakdown, percent_label, score_bars};
use super::truncate_chars;
use crate::classifier::Flag;
use crate::models::AnalysisReport;
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Width of a full-score bar, in cells
const BAR_WIDTH: usize = 30;
/// Rows shown in the annotated table and bar chart
const MAX_ROWS: usize = 25;
const ANSWER_WIDTH: usize = 40;
const ID_WIDTH: usize = 16;

/// Flag colors
fn flag_color(flag: Flag) -> &'static str {
    match flag {
        Flag::LikelyAi => "\x1b[31m",    // Red
        Flag::Ambiguous => "\x1b[33m",   // Yellow
        Flag::LikelyHuman => "\x1b[32m", // Green
    }
}

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{BOLD}AI-detect Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Responses: {BOLD}{}{RESET}  Answer column: {}  Thresholds: hi {:.2} / lo {:.2}\n\n",
        report.summary.total, report.answer_column, report.thresholds.hi, report.thresholds.lo
    ));

    // Summary
    out.push_str(&format!("{BOLD}SUMMARY{RESET}\n"));
    for flag in Flag::ALL {
        out.push_str(&format!(
            "  {}{:<13}{RESET} {:>4}  {DIM}({}){RESET}\n",
            flag_color(flag),
            flag.as_str(),
            report.summary.count(flag),
            percent_label(report.summary.percent(flag))
        ));
    }
    out.push('\n');

    if report.responses.is_empty() {
        out.push_str(&format!("{DIM}No responses to analyze.{RESET}\n"));
        return Ok(out);
    }

    render_table(report, &mut out);
    render_bars(report, &mut out);
    render_breakdown(report, &mut out);

    Ok(out)
}

fn render_table(report: &AnalysisReport, out: &mut String) {
    out.push_str(&format!("{BOLD}ANNOTATED RESPONSES{RESET}\n"));
    out.push_str(&format!(
        "{DIM}  {:<idw$}  {:<aw$}  SCORE  {:<13} EXPLANATION{RESET}\n",
        truncate_chars(report.id_label(), ID_WIDTH).to_uppercase(),
        truncate_chars(&report.answer_column, ANSWER_WIDTH).to_uppercase(),
        "FLAG",
        idw = ID_WIDTH,
        aw = ANSWER_WIDTH,
    ));
    out.push_str(&format!(
        "{DIM}  ─────────────────────────────────────────────────────────────────────────────{RESET}\n"
    ));

    for r in report.responses.iter().take(MAX_ROWS) {
        out.push_str(&format!(
            "  {:<idw$}  {:<aw$}  {:.3}  {}{:<13}{RESET} {DIM}{}{RESET}\n",
            truncate_chars(&r.response.label(), ID_WIDTH),
            truncate_chars(&r.response.answer, ANSWER_WIDTH),
            r.score,
            flag_color(r.flag),
            r.flag.as_str(),
            r.explanation,
            idw = ID_WIDTH,
            aw = ANSWER_WIDTH,
        ));
    }

    let remaining = report.responses.len().saturating_sub(MAX_ROWS);
    if remaining > 0 {
        out.push_str(&format!(
            "\n  {DIM}...and {} more (use --format csv for the full table){RESET}\n",
            remaining
        ));
    }
    out.push('\n');
}

fn render_bars(report: &AnalysisReport, out: &mut String) {
    out.push_str(&format!(
        "{BOLD}AI-LIKELIHOOD BY RESPONDENT{RESET} {DIM}({}){RESET}\n",
        report.id_label()
    ));
    for bar in score_bars(report).iter().take(MAX_ROWS) {
        out.push_str(&format!(
            "  {:<w$}  {}{}{RESET}  {:.2}\n",
            truncate_chars(&bar.label, ID_WIDTH),
            flag_color(bar.flag),
            bar_cells(bar.score),
            bar.score,
            w = ID_WIDTH,
        ));
    }
    out.push('\n');
}

fn render_breakdown(report: &AnalysisReport, out: &mut String) {
    out.push_str(&format!("{BOLD}DETECTION SUMMARY{RESET}\n"));
    let parts: Vec<String> = flag_breakdown(report)
        .iter()
        .map(|s| {
            format!(
                "{}{} {}{RESET}",
                flag_color(s.flag),
                s.flag.as_str(),
                percent_label(s.percent)
            )
        })
        .collect();
    out.push_str(&format!("  {}\n", parts.join(" | ")));
}

/// Filled and empty cells for a score in [0, 1]
fn bar_cells(score: f64) -> String {
    let filled = (score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
