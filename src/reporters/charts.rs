//! Chart data shared by the text, HTML and Markdown reporters
//!
//! Two views of a report:
//! - a per-respondent bar series, highest score first
//! - the flag breakdown, largest share first

use crate::classifier::Flag;
use crate::models::AnalysisReport;

/// One bar: respondent label and score
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub score: f64,
    pub flag: Flag,
}

/// Bars sorted by score, descending
///
/// The sort is stable, so equal scores keep input order.
pub fn score_bars(report: &AnalysisReport) -> Vec<Bar> {
    let mut bars: Vec<Bar> = report
        .responses
        .iter()
        .map(|r| Bar {
            label: r.response.label(),
            score: r.score,
            flag: r.flag,
        })
        .collect();
    bars.sort_by(|a, b| b.score.total_cmp(&a.score));
    bars
}

/// One slice of the flag breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub flag: Flag,
    pub count: usize,
    pub percent: f64,
}

/// Non-empty flag shares, largest first; ties in `Flag::ALL` order
pub fn flag_breakdown(report: &AnalysisReport) -> Vec<Slice> {
    let summary = &report.summary;
    let mut slices: Vec<Slice> = Flag::ALL
        .iter()
        .map(|&flag| Slice {
            flag,
            count: summary.count(flag),
            percent: summary.percent(flag),
        })
        .filter(|s| s.count > 0)
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count));
    slices
}

/// `12.5%` style label
pub fn percent_label(percent: f64) -> String {
    format!("{:.1}%", percent)
}
