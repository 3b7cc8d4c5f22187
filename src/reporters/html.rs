//! HTML reporter with embedded styles and charts
//!
//! Generates a standalone HTML report that can be viewed in any browser.
//! Includes:
//! - Flag counts
//! - Annotated responses table
//! - Inline SVG bar chart of scores by respondent
//! - Inline SVG pie chart of the flag breakdown

use super::charts::{flag_breakdown, percent_label, score_bars, Bar, Slice};
use crate::classifier::Flag;
use crate::models::AnalysisReport;
use anyhow::Result;
use chrono::Local;
use std::f64::consts::PI;

// Bar chart geometry
const BAR_SLOT: f64 = 36.0;
const BAR_MIN_WIDTH: f64 = 600.0;
const BAR_HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_TOP: f64 = 32.0;
const MARGIN_BOTTOM: f64 = 96.0;

// Pie chart geometry
const PIE_SIZE: f64 = 320.0;
const PIE_RADIUS: f64 = 120.0;

/// Render report as standalone HTML
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut html = String::new();

    html.push_str(&render_head());
    html.push_str("<body>\n<div class=\"container\">\n");
    html.push_str(&render_header(report));
    html.push_str("<div class=\"content\">\n");
    html.push_str(&render_summary(report));

    if !report.responses.is_empty() {
        html.push_str(&render_charts(report));
    }
    html.push_str(&render_table(report));

    html.push_str("</div>\n"); // content
    html.push_str(&render_footer());
    html.push_str("</div>\n</body>\n</html>");

    Ok(html)
}

fn render_head() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AI-detect Report</title>
    <style>
{CSS}
    </style>
</head>
"#
    )
}

fn render_header(report: &AnalysisReport) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<div class="header">
    <h1>AI-detect: Google Forms responses</h1>
    <p class="subtitle">Answer column <code>{}</code> · thresholds hi {:.2} / lo {:.2}</p>
    <p class="timestamp">Generated {}</p>
</div>
"#,
        html_escape(&report.answer_column),
        report.thresholds.hi,
        report.thresholds.lo,
        timestamp
    )
}

fn render_summary(report: &AnalysisReport) -> String {
    let mut items = String::new();
    for flag in Flag::ALL {
        items.push_str(&format!(
            r#"        <div class="flag-item {}">
            <span class="flag-label">{}</span>
            <span class="flag-count">{}</span>
        </div>
"#,
            flag_class(flag),
            flag.as_str(),
            report.summary.count(flag)
        ));
    }
    format!(
        r#"<div class="section">
    <h2 class="section-title">Summary ({} responses)</h2>
    <div class="flag-summary">
{}    </div>
</div>
"#,
        report.summary.total, items
    )
}

fn render_charts(report: &AnalysisReport) -> String {
    format!(
        r#"<div class="section">
    <h2 class="section-title">Visualizations</h2>
    <div class="charts">
        <div class="chart">{}</div>
        <div class="chart">{}</div>
    </div>
</div>
"#,
        bar_chart_svg(&score_bars(report), report.id_label()),
        pie_chart_svg(&flag_breakdown(report))
    )
}

/// Scores by respondent, highest first, y axis fixed to 0..1
fn bar_chart_svg(bars: &[Bar], x_label: &str) -> String {
    let width = (MARGIN_LEFT + BAR_SLOT * bars.len() as f64 + 16.0).max(BAR_MIN_WIDTH);
    let plot_h = BAR_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let base_y = MARGIN_TOP + plot_h;

    let mut svg = format!(
        r#"<svg class="bar-chart" xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{BAR_HEIGHT:.0}" viewBox="0 0 {width:.0} {BAR_HEIGHT:.0}">
<text x="{:.1}" y="18" class="chart-title" text-anchor="middle">AI-likelihood by respondent</text>
"#,
        width / 2.0
    );

    // Gridlines and y ticks
    for i in 0..=4 {
        let v = i as f64 * 0.25;
        let y = base_y - v * plot_h;
        svg.push_str(&format!(
            r#"<line x1="{MARGIN_LEFT:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" class="grid"/>
<text x="{:.1}" y="{:.1}" class="tick" text-anchor="end">{v:.2}</text>
"#,
            width - 8.0,
            MARGIN_LEFT - 6.0,
            y + 4.0
        ));
    }

    for (i, bar) in bars.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * BAR_SLOT + BAR_SLOT * 0.1;
        let w = BAR_SLOT * 0.8;
        let h = bar.score.clamp(0.0, 1.0) * plot_h;
        let label_x = x + w / 2.0;
        let label_y = base_y + 12.0;
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{:.1}" width="{w:.1}" height="{h:.1}" class="{}"><title>{}: {:.3}</title></rect>
<text x="{label_x:.1}" y="{label_y:.1}" class="tick" text-anchor="end" transform="rotate(-30 {label_x:.1} {label_y:.1})">{}</text>
"#,
            base_y - h,
            flag_class(bar.flag),
            html_escape(&bar.label),
            bar.score,
            html_escape(&super::truncate_chars(&bar.label, 18))
        ));
    }

    svg.push_str(&format!(
        r#"<text x="14" y="{:.1}" class="axis-label" text-anchor="middle" transform="rotate(-90 14 {:.1})">AI score (0→1)</text>
<text x="{:.1}" y="{:.1}" class="axis-label" text-anchor="middle">{}</text>
</svg>"#,
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0,
        width / 2.0,
        BAR_HEIGHT - 8.0,
        html_escape(x_label)
    ));
    svg
}

/// Flag shares as a pie with percentage labels
fn pie_chart_svg(slices: &[Slice]) -> String {
    let c = PIE_SIZE / 2.0;
    let cy = c + 16.0;
    let mut svg = format!(
        r#"<svg class="pie-chart" xmlns="http://www.w3.org/2000/svg" width="{PIE_SIZE:.0}" height="{:.0}" viewBox="0 0 {PIE_SIZE:.0} {:.0}">
<text x="{c:.1}" y="18" class="chart-title" text-anchor="middle">Detection summary</text>
"#,
        PIE_SIZE + 48.0,
        PIE_SIZE + 48.0
    );

    // Angles start at 12 o'clock and run clockwise
    let mut start = -PI / 2.0;
    for slice in slices {
        let sweep = slice.percent / 100.0 * 2.0 * PI;
        let end = start + sweep;
        let class = flag_class(slice.flag);

        if slices.len() == 1 {
            svg.push_str(&format!(
                r#"<circle cx="{c:.1}" cy="{cy:.1}" r="{PIE_RADIUS:.1}" class="{class}"/>
"#
            ));
        } else {
            let (x1, y1) = (c + PIE_RADIUS * start.cos(), cy + PIE_RADIUS * start.sin());
            let (x2, y2) = (c + PIE_RADIUS * end.cos(), cy + PIE_RADIUS * end.sin());
            let large_arc = if sweep > PI { 1 } else { 0 };
            svg.push_str(&format!(
                r#"<path d="M {c:.2} {cy:.2} L {x1:.2} {y1:.2} A {PIE_RADIUS:.2} {PIE_RADIUS:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z" class="{class}"/>
"#
            ));
        }

        let mid = start + sweep / 2.0;
        let (lx, ly) = (
            c + PIE_RADIUS * 0.6 * mid.cos(),
            cy + PIE_RADIUS * 0.6 * mid.sin(),
        );
        svg.push_str(&format!(
            r#"<text x="{lx:.1}" y="{ly:.1}" class="pie-label" text-anchor="middle">{}</text>
"#,
            percent_label(slice.percent)
        ));
        start = end;
    }

    // Legend
    let mut legend_y = cy + PIE_RADIUS + 22.0;
    for slice in slices {
        svg.push_str(&format!(
            r#"<rect x="16" y="{:.1}" width="10" height="10" class="{}"/><text x="32" y="{legend_y:.1}" class="tick">{} ({})</text>
"#,
            legend_y - 9.0,
            flag_class(slice.flag),
            slice.flag.as_str(),
            slice.count
        ));
        legend_y += 14.0;
    }

    svg.push_str("</svg>");
    svg
}

fn render_table(report: &AnalysisReport) -> String {
    let columns = report.display_columns();
    let indices: Vec<usize> = columns
        .iter()
        .filter_map(|c| report.table.column_index(c))
        .collect();

    let mut html = String::from(
        r#"<div class="section">
    <h2 class="section-title">Annotated responses</h2>
    <table class="responses">
        <thead><tr>"#,
    );
    for &idx in &indices {
        html.push_str(&format!("<th>{}</th>", html_escape(&report.table.headers()[idx])));
    }
    html.push_str("</tr></thead>\n        <tbody>\n");

    for (row, r) in report.table.rows().iter().zip(&report.responses) {
        html.push_str(&format!("        <tr class=\"{}\">", flag_class(r.flag)));
        for &idx in &indices {
            html.push_str(&format!("<td>{}</td>", html_escape(&row[idx])));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("        </tbody>\n    </table>\n</div>\n");
    html
}

fn render_footer() -> String {
    r#"<div class="footer">
    <p>Heuristic score from surface lexical features. Not proof of authorship; review flagged answers by hand.</p>
</div>
"#
    .to_string()
}

fn flag_class(flag: Flag) -> &'static str {
    match flag {
        Flag::LikelyAi => "flag-ai",
        Flag::Ambiguous => "flag-ambiguous",
        Flag::LikelyHuman => "flag-human",
    }
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Embedded CSS
const CSS: &str = r#"
:root {
    --primary-color: #6366f1;
    --background-color: #f8fafc;
    --text-color: #1e293b;
    --card-background: white;
    --border-color: #e2e8f0;
    --ai-color: #ef4444;
    --ambiguous-color: #f59e0b;
    --human-color: #22c55e;
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: var(--text-color);
    background: var(--background-color);
    padding: 2rem;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    background: var(--card-background);
    border-radius: 12px;
    box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1);
    overflow: hidden;
}

.header {
    background: linear-gradient(135deg, #6366f1 0%, #8b5cf6 100%);
    color: white;
    padding: 2.5rem 2rem;
    text-align: center;
}

.header h1 { font-size: 2rem; margin-bottom: 0.5rem; }
.header .subtitle, .header .timestamp { opacity: 0.9; font-size: 0.95rem; }

.content { padding: 2rem; }
.section { margin-bottom: 2rem; }
.section-title {
    font-size: 1.25rem;
    border-bottom: 2px solid var(--border-color);
    padding-bottom: 0.5rem;
    margin-bottom: 1rem;
}

.flag-summary { display: flex; gap: 1rem; flex-wrap: wrap; }
.flag-item {
    flex: 1;
    min-width: 160px;
    padding: 1rem;
    border-radius: 8px;
    color: white;
    display: flex;
    justify-content: space-between;
    font-weight: 600;
}
.flag-item.flag-ai { background: var(--ai-color); }
.flag-item.flag-ambiguous { background: var(--ambiguous-color); }
.flag-item.flag-human { background: var(--human-color); }

.charts { display: flex; gap: 2rem; flex-wrap: wrap; align-items: flex-start; }
.chart { overflow-x: auto; }
svg .grid { stroke: var(--border-color); stroke-width: 1; }
svg .tick { font-size: 11px; fill: #475569; }
svg .axis-label { font-size: 12px; fill: var(--text-color); }
svg .chart-title { font-size: 14px; font-weight: 600; fill: var(--text-color); }
svg .pie-label { font-size: 12px; font-weight: 600; fill: white; }
svg .flag-ai { fill: var(--ai-color); }
svg .flag-ambiguous { fill: var(--ambiguous-color); }
svg .flag-human { fill: var(--human-color); }

table.responses { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
table.responses th, table.responses td {
    border: 1px solid var(--border-color);
    padding: 0.5rem;
    text-align: left;
    vertical-align: top;
}
table.responses th { background: #f1f5f9; }
table.responses tr.flag-ai td:last-child { color: var(--ai-color); }

.footer {
    padding: 1.5rem 2rem;
    background: #f1f5f9;
    color: #64748b;
    font-size: 0.85rem;
    text-align: center;
}
"#;
